//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "Quo".into()
    }

    pub fn root() -> String {
        "/".into()
    }

    pub fn homepage() -> String {
        "index.html".into()
    }

    pub fn searchpage() -> String {
        "search.html".into()
    }

    pub fn timestamp_format() -> String {
        "%A %d %B, %Y".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use crate::site::IndexMode;
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn source() -> PathBuf {
        "markdown".into()
    }

    pub fn output() -> PathBuf {
        ".".into()
    }

    pub fn media() -> String {
        "media".into()
    }

    pub fn index_mode() -> IndexMode {
        IndexMode::default()
    }

    pub fn ignore_threshold_percentage() -> u32 {
        40
    }

    pub fn entries_to_show() -> usize {
        10
    }

    pub fn cloud_size() -> usize {
        30
    }
}
