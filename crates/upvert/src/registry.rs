//! Version dispatch: maps a document's schema version to the migrator that
//! produces the next version, and chains migrators up to the current version.

use serde_json::Value;

use upvert_contracts::ANS_CURRENT_VERSION;

use crate::stamp::document_version;
use crate::versions;

/// One migration step. Pure; takes the source document and returns the
/// converted copy stamped with the next version.
pub type Migration = fn(&Value) -> Value;

/// Source version → migrator to the next version.
const MIGRATIONS: &[(&str, Migration)] = &[("0.5.7", versions::v0_5_7::upvert)];

#[derive(Debug, Clone)]
pub struct UpvertError {
    pub message: String,
}

impl std::fmt::Display for UpvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for UpvertError {}

/// Look up the migrator that converts away from `version`, if one exists.
pub fn migration_from(version: &str) -> Option<Migration> {
    MIGRATIONS
        .iter()
        .find(|(from, _)| *from == version)
        .map(|&(_, migration)| migration)
}

fn supported_versions() -> String {
    MIGRATIONS
        .iter()
        .map(|(from, _)| *from)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convert `doc` one schema version forward.
pub fn upvert_once(doc: &Value) -> Result<Value, UpvertError> {
    let version = document_version(doc).ok_or_else(|| UpvertError {
        message: "document has no string version field".to_string(),
    })?;
    let Some(migration) = migration_from(version) else {
        return Err(UpvertError {
            message: format!(
                "no migration from version {version:?} (migratable: {}; current: {ANS_CURRENT_VERSION}) (hint: documents already at the current version need no migration)",
                supported_versions()
            ),
        });
    };
    Ok(migration(doc))
}

/// Convert `doc` forward until it reaches [`ANS_CURRENT_VERSION`].
pub fn upvert_to_current(doc: &Value) -> Result<Value, UpvertError> {
    let mut converted = doc.clone();
    loop {
        let version = document_version(&converted)
            .ok_or_else(|| UpvertError {
                message: "document has no string version field".to_string(),
            })?
            .to_string();
        if version == ANS_CURRENT_VERSION {
            return Ok(converted);
        }
        converted = upvert_once(&converted)?;
        if document_version(&converted) == Some(version.as_str()) {
            // a migration that does not advance the version would loop forever
            return Err(UpvertError {
                message: format!("migration from version {version:?} did not advance the version"),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{migration_from, upvert_once, upvert_to_current};
    use upvert_contracts::ANS_CURRENT_VERSION;

    #[test]
    fn dispatches_by_document_version() {
        let out = upvert_once(&json!({"version": "0.5.7", "type": "story"}))
            .expect("0.5.7 migration is registered");
        assert_eq!(out["version"], json!("0.5.8"));
    }

    #[test]
    fn unknown_version_reports_migratable_versions() {
        let err = upvert_once(&json!({"version": "0.0.1", "type": "story"}))
            .expect_err("no migration from 0.0.1");
        assert!(
            err.message.contains("0.5.7") && err.message.contains("hint:"),
            "unexpected error message: {:?}",
            err.message
        );
    }

    #[test]
    fn missing_version_is_an_error() {
        let err = upvert_once(&json!({"type": "story"})).expect_err("version field is required");
        assert!(err.message.contains("version"), "got: {:?}", err.message);
    }

    #[test]
    fn to_current_is_a_no_op_at_current_version() {
        let doc = json!({"version": ANS_CURRENT_VERSION, "type": "story", "junk": 1});
        let out = upvert_to_current(&doc).expect("already current");
        assert_eq!(out, doc);
    }

    #[test]
    fn to_current_chains_from_oldest_registered_version() {
        let doc = json!({"version": "0.5.7", "type": "story", "taxonomy": {"tags": []}});
        let out = upvert_to_current(&doc).expect("chain to current");
        assert_eq!(out["version"], json!(ANS_CURRENT_VERSION));
    }

    #[test]
    fn lookup_is_a_pure_table_scan() {
        assert!(migration_from("0.5.7").is_some());
        assert!(migration_from("0.5.8").is_none());
    }
}
