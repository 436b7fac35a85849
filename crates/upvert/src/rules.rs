/// Static tables for one schema version transition.
///
/// Each migrator owns a `const` instance, so several transitions can coexist
/// in the registry and be tested independently.
#[derive(Debug, Clone, Copy)]
pub struct TransitionRules {
    /// Version string stamped onto converted documents.
    pub target_version: &'static str,
    /// Document `type` values that mark a recursable top-level document.
    pub top_level_types: &'static [&'static str],
    /// Fields whose values hold nested documents and must be converted.
    pub recursion_keys: &'static [&'static str],
    /// Tag fields specified by the target schema; everything else overflows.
    pub tag_fields: &'static [&'static str],
}

impl TransitionRules {
    pub fn is_top_level_type(&self, ty: &str) -> bool {
        self.top_level_types.iter().any(|&t| t == ty)
    }

    pub fn is_recursion_key(&self, key: &str) -> bool {
        self.recursion_keys.iter().any(|&k| k == key)
    }

    pub fn is_tag_field(&self, key: &str) -> bool {
        self.tag_fields.iter().any(|&k| k == key)
    }
}
