use serde_json::Value;

use upvert_contracts::ANS_VERSION_FIELD;

/// Shallow copy of `doc` with its version field set to `version`. Document
/// structure is untouched; non-object input comes back cloned as-is.
pub fn stamp_version(doc: &Value, version: &str) -> Value {
    match doc {
        Value::Object(map) => {
            let mut out = map.clone();
            out.insert(
                ANS_VERSION_FIELD.to_string(),
                Value::String(version.to_string()),
            );
            Value::Object(out)
        }
        other => other.clone(),
    }
}

/// Read the document's schema version, if present and a string.
pub fn document_version(doc: &Value) -> Option<&str> {
    doc.get(ANS_VERSION_FIELD)?.as_str()
}
