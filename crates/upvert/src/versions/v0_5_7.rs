//! 0.5.7 → 0.5.8.
//!
//! Tags in 0.5.7 were mostly free-form objects. 0.5.8 specifies their fields:
//! matching fields are kept, the rest move into `additional_properties`.

use serde_json::Value;

use upvert_contracts::{ANS_VERSION_0_5_8, RECURSION_KEYS, TAG_FIELDS_0_5_8, TOP_LEVEL_TYPES};

use crate::convert::convert_document;
use crate::rules::TransitionRules;
use crate::stamp::stamp_version;

pub const RULES: TransitionRules = TransitionRules {
    target_version: ANS_VERSION_0_5_8,
    top_level_types: TOP_LEVEL_TYPES,
    recursion_keys: RECURSION_KEYS,
    tag_fields: TAG_FIELDS_0_5_8,
};

/// Convert one 0.5.7 document to 0.5.8. Pure; the input is never mutated.
pub fn upvert(doc: &Value) -> Value {
    let stamped = stamp_version(doc, RULES.target_version);
    match stamped {
        Value::Object(map) => convert_document(&RULES, &map),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::upvert;

    #[test]
    fn stamps_target_version_and_reshapes_tags() {
        let doc = json!({
            "type": "story",
            "version": "0.5.7",
            "taxonomy": {"tags": [{"tag": "news", "extra": true}]},
            "junk": 1
        });
        let out = upvert(&doc);
        assert_eq!(
            out,
            json!({
                "type": "story",
                "version": "0.5.8",
                "taxonomy": {"tags": [
                    {"text": "news", "additional_properties": {"tag": "news", "extra": true}}
                ]}
            })
        );
        // caller's tree untouched
        assert_eq!(doc["version"], json!("0.5.7"));
        assert_eq!(doc["junk"], json!(1));
    }

    #[test]
    fn document_without_taxonomy_still_converts() {
        let out = upvert(&json!({"type": "story", "headline": "gone"}));
        assert_eq!(out, json!({"type": "story", "version": "0.5.8"}));
    }

    #[test]
    fn recursion_keys_route_nested_documents_through_the_walker() {
        let doc = json!({
            "type": "story",
            "content_elements": [
                {"type": "image", "taxonomy": {"tags": [{"tag": "photo"}]}, "caption": "x"},
                {"type": "text", "content": "plain paragraph"}
            ]
        });
        let out = upvert(&doc);
        assert_eq!(
            out,
            json!({
                "type": "story",
                "content_elements": [
                    {"type": "image", "taxonomy": {"tags": [
                        {"text": "photo", "additional_properties": {"tag": "photo"}}
                    ]}},
                    {"type": "text", "content": "plain paragraph"}
                ],
                "version": "0.5.8"
            })
        );
    }
}
