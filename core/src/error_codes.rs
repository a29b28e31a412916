//! Stable error codes referenced in error messages and exposed via `code()`
//! methods, so downstream tooling can match on codes instead of message text.

pub const SNAPSHOT_INVALID_JSON: &str = "GJDIFF_SNAP_001";
pub const SNAPSHOT_NOT_A_COLLECTION: &str = "GJDIFF_SNAP_002";

pub const CONFIG_EMPTY_TRACKED_FIELD: &str = "GJDIFF_CFG_001";
pub const CONFIG_DUPLICATE_TRACKED_FIELD: &str = "GJDIFF_CFG_002";
