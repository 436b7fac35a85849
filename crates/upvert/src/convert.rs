//! Generic recursive conversion engine.
//!
//! One pass over the document tree, driven by a [`TransitionRules`] value:
//! scalars pass through, sequences recurse element-wise, mappings whose
//! `type` marks them as top-level documents re-enter schema-aware handling,
//! and every other mapping recurses key-wise. Tag objects under
//! `taxonomy.tags` are reshaped into the target schema with an
//! `additional_properties` overflow bucket. Every step builds fresh
//! containers; the input is never mutated.

use serde_json::{Map, Value};

use upvert_contracts::RAW_PASSTHROUGH_KEYS;

use crate::rules::TransitionRules;

const TAXONOMY_KEY: &str = "taxonomy";
const TAGS_KEY: &str = "tags";
const OVERFLOW_KEY: &str = "additional_properties";

/// Fields copied verbatim at the document level regardless of the transition.
const DOCUMENT_IDENTITY_KEYS: &[&str] = &["type", "version"];

/// Closed classification of document node kinds. Dispatch goes through this
/// instead of ad-hoc shape probing so the match in [`convert_value`] stays
/// exhaustive.
enum NodeKind<'a> {
    Scalar(&'a Value),
    Sequence(&'a Vec<Value>),
    Document(&'a Map<String, Value>),
    Mapping(&'a Map<String, Value>),
}

fn classify<'a>(rules: &TransitionRules, value: &'a Value) -> NodeKind<'a> {
    match value {
        Value::Array(items) => NodeKind::Sequence(items),
        Value::Object(map) => match map.get("type").and_then(Value::as_str) {
            Some(ty) if rules.is_top_level_type(ty) => NodeKind::Document(map),
            _ => NodeKind::Mapping(map),
        },
        other => NodeKind::Scalar(other),
    }
}

fn is_raw_passthrough_key(key: &str) -> bool {
    RAW_PASSTHROUGH_KEYS.iter().any(|&k| k == key)
}

/// Reshape one tag object into the target schema: allowlisted fields are kept
/// verbatim, everything else moves under `additional_properties`.
///
/// A pre-existing `additional_properties` mapping seeds the overflow bucket
/// and is extended, not replaced; a freshly overflowed field of the same name
/// wins. If `additional_properties` was a non-mapping regular field it cannot
/// seed the bucket, so it overflows like any other key and ends up nested at
/// `additional_properties.additional_properties`. Degenerate, but documents
/// shaped that way exist and must keep converting the same way.
pub fn convert_tag(rules: &TransitionRules, old_tag: &Value) -> Value {
    let Value::Object(old) = old_tag else {
        // tags are mappings by contract; anything else passes through
        return old_tag.clone();
    };

    let seeded = matches!(old.get(OVERFLOW_KEY), Some(Value::Object(_)));
    let mut overflow: Map<String, Value> = match old.get(OVERFLOW_KEY) {
        Some(Value::Object(m)) => m.clone(),
        _ => Map::new(),
    };

    let mut tag = Map::new();
    for (key, value) in old {
        if seeded && key == OVERFLOW_KEY {
            continue;
        }
        if rules.is_tag_field(key) {
            tag.insert(key.clone(), value.clone());
        } else {
            overflow.insert(key.clone(), value.clone());
            // 'tag' was in use in some historical data in lieu of 'text'
            if key == "tag" && !old.contains_key("text") {
                tag.insert("text".to_string(), value.clone());
            }
        }
    }

    if !overflow.is_empty() {
        tag.insert(OVERFLOW_KEY.to_string(), Value::Object(overflow));
    }

    Value::Object(tag)
}

fn convert_taxonomy(rules: &TransitionRules, taxonomy: &Value) -> Value {
    let Value::Object(map) = taxonomy else {
        return taxonomy.clone();
    };
    let mut out = map.clone();
    let tags = match map.get(TAGS_KEY) {
        Some(Value::Array(tags)) => tags.iter().map(|t| convert_tag(rules, t)).collect(),
        // the converted taxonomy always carries a tags array
        _ => Vec::new(),
    };
    out.insert(TAGS_KEY.to_string(), Value::Array(tags));
    Value::Object(out)
}

/// Convert one top-level document object and recurse at known points.
///
/// Only recognized slots survive: `taxonomy` (tags reshaped), the recursion
/// keys (converted), the identity fields `type` and `version`, and the raw
/// passthrough fields. Everything else is pruned from the document level;
/// this trims the document to the target schema and is distinct from the
/// lossless default inside [`convert_value`].
pub fn convert_document(rules: &TransitionRules, doc: &Map<String, Value>) -> Value {
    let mut out = Map::new();
    for (key, value) in doc {
        if key == TAXONOMY_KEY {
            out.insert(key.clone(), convert_taxonomy(rules, value));
        } else if rules.is_recursion_key(key) {
            out.insert(key.clone(), convert_value(rules, value));
        } else if DOCUMENT_IDENTITY_KEYS.contains(&key.as_str()) || is_raw_passthrough_key(key) {
            out.insert(key.clone(), value.clone());
        }
    }
    Value::Object(out)
}

/// Generic recur-and-convert down the tree.
pub fn convert_value(rules: &TransitionRules, value: &Value) -> Value {
    match classify(rules, value) {
        NodeKind::Scalar(v) => v.clone(),
        NodeKind::Sequence(items) => {
            Value::Array(items.iter().map(|v| convert_value(rules, v)).collect())
        }
        NodeKind::Document(map) => convert_document(rules, map),
        NodeKind::Mapping(map) => {
            let mut out = Map::new();
            for (key, v) in map {
                if is_raw_passthrough_key(key) {
                    out.insert(key.clone(), v.clone());
                } else {
                    out.insert(key.clone(), convert_value(rules, v));
                }
            }
            Value::Object(out)
        }
    }
}
