//! Shared, version-pinned ANS schema identifiers and tables.
//!
//! These constants are the single source of truth for the version strings and
//! structural tables the migrators dispatch on. Per-transition data (such as a
//! node kind's field allowlist) lives next to its migrator instead.

/// Field that carries a document's schema version.
pub const ANS_VERSION_FIELD: &str = "version";

pub const ANS_VERSION_0_5_7: &str = "0.5.7";
pub const ANS_VERSION_0_5_8: &str = "0.5.8";

/// Newest schema version the registry can produce.
pub const ANS_CURRENT_VERSION: &str = ANS_VERSION_0_5_8;

/// Document `type` values that mark a node as a recursable top-level document.
pub const TOP_LEVEL_TYPES: &[&str] = &[
    "story", "video", "gallery", "image", "audio", "results", "redirect",
];

/// Field names whose values hold nested documents and must be recursively
/// converted.
pub const RECURSION_KEYS: &[&str] = &["content_elements", "promo_items", "related_content"];

/// Reserved overflow fields holding already-finalized payloads. Copied
/// verbatim at every level, never descended into.
pub const RAW_PASSTHROUGH_KEYS: &[&str] = &["additional_properties", "referent_properties"];

/// Tag fields specified by the 0.5.8 schema.
pub const TAG_FIELDS_0_5_8: &[&str] = &["_id", "text", "description", "slug"];
