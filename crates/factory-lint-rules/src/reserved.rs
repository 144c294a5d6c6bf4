//! Method names that never declare an attribute.

/// Object-protocol methods that the factory DSL does not proxy.
pub const UNPROXIED_METHODS: &[&str] = &[
    "__send__",
    "__id__",
    "nil?",
    "send",
    "object_id",
    "extend",
    "instance_eval",
    "initialize",
    "block_given?",
    "raise",
    "caller",
    "method",
];

/// DSL methods with their own semantics inside a definition block.
pub const PROXY_METHODS: &[&str] = &[
    "add_attribute",
    "association",
    "callback",
    "sequence",
    "skip_create",
    "to_create",
    "initialize_with",
    "ignore",
    "after",
    "before",
];

/// Methods whose block opens an attribute definition scope.
pub const ATTRIBUTE_DEFINING_METHODS: &[&str] = &["factory", "trait", "transient", "ignore"];

/// Returns true if `method` opens an attribute definition scope.
#[must_use]
pub fn is_attribute_defining(method: &str) -> bool {
    ATTRIBUTE_DEFINING_METHODS.contains(&method)
}

/// Returns true if `method` is in any reserved set.
#[must_use]
pub fn is_reserved(method: &str) -> bool {
    UNPROXIED_METHODS.contains(&method)
        || PROXY_METHODS.contains(&method)
        || is_attribute_defining(method)
}
