//! Versioned ANS document migrator.
//!
//! Given a document tree tagged with a schema version, produce an equivalent
//! tree conforming to the next schema version: version-specific reshaping is
//! applied only where the two schemas diverge, and the rest of the tree passes
//! through structurally intact. Conversion never mutates the caller's input;
//! every step builds fresh containers.

pub mod convert;
pub mod registry;
pub mod rules;
pub mod stamp;
pub mod versions;

pub use registry::{upvert_once, upvert_to_current, UpvertError};
