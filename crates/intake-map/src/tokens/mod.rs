//! Per-field-type token vocabulary generation.
//!
//! Builders plug into a [`TokenRegistry`]; the engine asks the registry for
//! the token set of every field and column it compares.

mod address;
mod builder;
mod datetime;
mod email;
mod generic;
mod id;
mod name;
mod numeric;
mod phone;
mod registry;
mod url;

pub use address::AddressTokenBuilder;
pub use builder::{NamingContext, TokenBuilder, TokenMetadata, TokenResult, TokenSet};
pub use datetime::DateTimeTokenBuilder;
pub use email::EmailTokenBuilder;
pub use generic::GenericTokenBuilder;
pub use id::IdTokenBuilder;
pub use name::NameTokenBuilder;
pub use numeric::NumericTokenBuilder;
pub use phone::PhoneTokenBuilder;
pub use registry::TokenRegistry;
pub use url::UrlTokenBuilder;
