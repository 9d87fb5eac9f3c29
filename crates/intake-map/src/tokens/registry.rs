//! Builder registry consulted by the mapping engine.

use std::cmp::Reverse;

use super::builder::{NamingContext, TokenBuilder, TokenResult};
use super::{
    AddressTokenBuilder, DateTimeTokenBuilder, EmailTokenBuilder, GenericTokenBuilder,
    IdTokenBuilder, NameTokenBuilder, NumericTokenBuilder, PhoneTokenBuilder, UrlTokenBuilder,
};

/// Ordered collection of token builders.
///
/// Each engine owns its registry; embedders and tests can register their
/// own builders without affecting any other engine instance.
pub struct TokenRegistry {
    builders: Vec<Box<dyn TokenBuilder>>,
}

impl TokenRegistry {
    /// Empty registry with no builders.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builders: Vec::new(),
        }
    }

    /// Registry preloaded with the built-in vocabulary builders.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(EmailTokenBuilder));
        registry.register(Box::new(PhoneTokenBuilder));
        registry.register(Box::new(UrlTokenBuilder));
        registry.register(Box::new(IdTokenBuilder));
        registry.register(Box::new(NameTokenBuilder));
        registry.register(Box::new(DateTimeTokenBuilder));
        registry.register(Box::new(AddressTokenBuilder));
        registry.register(Box::new(NumericTokenBuilder));
        registry.register(Box::new(GenericTokenBuilder));
        registry
    }

    /// Adds a builder, keeping the collection ordered by descending
    /// priority. Builders with equal priority keep registration order.
    pub fn register(&mut self, builder: Box<dyn TokenBuilder>) {
        self.builders.push(builder);
        self.builders
            .sort_by_key(|builder| Reverse(builder.priority()));
    }

    /// Removes every registered builder.
    pub fn clear(&mut self) {
        self.builders.clear();
    }

    /// Registered builders in consultation order.
    pub fn builders(&self) -> &[Box<dyn TokenBuilder>] {
        &self.builders
    }

    /// Number of registered builders.
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// True when no builders are registered.
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Collects tokens from every builder that applies to the context.
    ///
    /// Token sets are unioned; metadata lists are concatenated in
    /// consultation order.
    #[must_use]
    pub fn generate_tokens(&self, ctx: &NamingContext<'_>) -> TokenResult {
        let mut result = TokenResult::default();
        for builder in &self.builders {
            if builder.can_handle(ctx) {
                result.merge(builder.generate_tokens(ctx));
            }
        }
        result
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
