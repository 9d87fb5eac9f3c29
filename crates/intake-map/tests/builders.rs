use intake_map::{
    EmailTokenBuilder, NamingContext, NumericTokenBuilder, PhoneTokenBuilder, TokenBuilder,
    TokenRegistry, TokenResult, TokenSet,
};
use intake_model::FieldType;

struct StubBuilder {
    tag: &'static str,
    priority: u8,
}

impl TokenBuilder for StubBuilder {
    fn priority(&self) -> u8 {
        self.priority
    }

    fn can_handle(&self, _ctx: &NamingContext<'_>) -> bool {
        true
    }

    fn generate_tokens(&self, _ctx: &NamingContext<'_>) -> TokenResult {
        let mut result = TokenResult::default();
        result.tokens.insert(self.tag.to_string());
        result.metadata.record_primary(&[self.tag]);
        result
    }
}

#[test]
fn email_vocabulary_covers_common_forms() {
    let ctx = NamingContext::for_field("Email", "email", FieldType::Email);
    let result = EmailTokenBuilder.generate_tokens(&ctx);

    for token in [
        "email",
        "mail",
        "e_mail",
        "eMail",
        "email_address",
        "emailAddress",
    ] {
        assert!(result.tokens.contains(token), "missing token {token}");
    }
    assert_eq!(result.metadata.primary_tokens, ["email"]);
    assert_eq!(result.metadata.abbreviations, ["e_mail"]);
}

#[test]
fn builders_apply_by_type_or_keyword() {
    let phone = PhoneTokenBuilder;

    let typed = NamingContext::for_field("Contact", "contact", FieldType::Phone);
    assert!(phone.can_handle(&typed));

    let keyworded = NamingContext::for_field("Mobile Number", "mobile_number", FieldType::Text);
    assert!(phone.can_handle(&keyworded));

    let unrelated = NamingContext::for_field("Email", "email", FieldType::Email);
    assert!(!phone.can_handle(&unrelated));
}

#[test]
fn source_columns_skip_field_vocabularies() {
    let ctx = NamingContext::for_column("email");
    assert!(!EmailTokenBuilder.can_handle(&ctx));

    // Only the generic builder runs, so the column exposes exactly its
    // own case variations.
    let registry = TokenRegistry::with_builtins();
    let tokens = registry.generate_tokens(&ctx).tokens;
    let expected: TokenSet = ["email".to_string()].into_iter().collect();
    assert_eq!(tokens, expected);
}

#[test]
fn context_keyword_scan_covers_name_and_id() {
    let ctx = NamingContext::for_field("Primary Contact", "contact_tel", FieldType::Text);
    assert!(ctx.matches_keywords(&["tel"]));
    assert!(ctx.matches_keywords(&["primary"]));
    assert!(!ctx.matches_keywords(&["email"]));
}

#[test]
fn numeric_bundles_follow_keywords() {
    let plain = NamingContext::for_field("Score", "score", FieldType::Number);
    let result = NumericTokenBuilder.generate_tokens(&plain);
    assert!(result.tokens.contains("number"));
    assert!(!result.tokens.contains("qty"));

    let quantity = NamingContext::for_field("Total Items", "item_count", FieldType::Number);
    let result = NumericTokenBuilder.generate_tokens(&quantity);
    assert!(result.tokens.contains("qty"));
    assert!(result.tokens.contains("quantity"));
}

#[test]
fn field_tokens_union_across_builders() {
    let registry = TokenRegistry::with_builtins();
    let ctx = NamingContext::for_field("Email", "field_email", FieldType::Email);
    let result = registry.generate_tokens(&ctx);

    // Email vocabulary plus generic variations of both raw names, with
    // the affix-cleaned id contributing its own forms.
    assert!(result.tokens.contains("email_address"));
    assert!(result.tokens.contains("field_email"));
    assert!(result.tokens.contains("fieldEmail"));
    assert!(result.tokens.contains("email"));
}

#[test]
fn registration_order_breaks_priority_ties() {
    let mut registry = TokenRegistry::new();
    registry.register(Box::new(StubBuilder {
        tag: "second",
        priority: 50,
    }));
    registry.register(Box::new(StubBuilder {
        tag: "high",
        priority: 90,
    }));
    registry.register(Box::new(StubBuilder {
        tag: "third",
        priority: 50,
    }));

    let ctx = NamingContext::for_column("anything");
    let result = registry.generate_tokens(&ctx);
    assert_eq!(result.metadata.primary_tokens, ["high", "second", "third"]);
}

#[test]
fn late_registration_resorts_builtins() {
    let mut registry = TokenRegistry::with_builtins();
    registry.register(Box::new(StubBuilder {
        tag: "custom",
        priority: 72,
    }));

    let priorities: Vec<u8> = registry
        .builders()
        .iter()
        .map(|builder| builder.priority())
        .collect();
    let position = priorities
        .iter()
        .position(|&priority| priority == 72)
        .expect("custom builder present");
    assert!(priorities[..position].iter().all(|&priority| priority >= 72));
    assert!(priorities[position + 1..].iter().all(|&priority| priority <= 72));
}

#[test]
fn metadata_concatenates_without_dedup() {
    let mut registry = TokenRegistry::new();
    registry.register(Box::new(StubBuilder {
        tag: "dup",
        priority: 10,
    }));
    registry.register(Box::new(StubBuilder {
        tag: "dup",
        priority: 20,
    }));

    let ctx = NamingContext::for_column("anything");
    let result = registry.generate_tokens(&ctx);

    // Token sets deduplicate; metadata lists keep every entry.
    assert_eq!(result.tokens.len(), 1);
    assert_eq!(result.metadata.primary_tokens, ["dup", "dup"]);
}

#[test]
fn token_result_serializes() {
    let registry = TokenRegistry::with_builtins();
    let ctx = NamingContext::for_column("user_id");
    let result = registry.generate_tokens(&ctx);

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["tokens"].as_array().is_some());
    assert!(json["metadata"]["case_variations"].as_array().is_some());
}
