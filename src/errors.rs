//! Error Types
//!
//! Interaction handling never fails: missing handles, unregistered parts and
//! an absent camera are skipped and logged. The only fallible surface is
//! building an [`ExplorerConfig`](crate::config::ExplorerConfig), which
//! returns [`Result<T>`].
//!
//! ```rust,ignore
//! use chitbox::config::ExplorerConfig;
//!
//! let config = ExplorerConfig::from_json_str(&text)?;
//! ```

use thiserror::Error;

/// The error type for configuration loading and validation.
#[derive(Error, Debug)]
pub enum ChitboxError {
    // ========================================================================
    // Loading
    // ========================================================================
    /// Failed to read a configuration file.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The configuration is not valid JSON or does not match the schema.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ========================================================================
    // Validation
    // ========================================================================
    /// A part name appears twice in the part list.
    #[error("Duplicate part definition: {0}")]
    DuplicatePart(String),

    /// A group name appears twice in the group list.
    #[error("Duplicate group definition: {0}")]
    DuplicateGroup(String),

    /// A group was declared without members.
    #[error("Group has no members: {0}")]
    EmptyGroup(String),

    /// A behavior entry points at a group that was never declared.
    #[error("Part '{part}' references unknown group '{group}'")]
    UnknownGroup {
        /// The part whose behavior holds the reference
        part: String,
        /// The missing group
        group: String,
    },

    /// A part is declared as an external link but no slug maps it.
    #[error("External link part has no content slug: {0}")]
    MissingSlug(String),

    /// A timing entry would never advance.
    #[error("Duration must be non-zero: {0}")]
    ZeroDuration(&'static str),
}

/// Alias for `Result<T, ChitboxError>`.
pub type Result<T> = std::result::Result<T, ChitboxError>;
