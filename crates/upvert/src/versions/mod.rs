//! Per-transition migrators. One module per source schema version.

pub mod v0_5_7;
