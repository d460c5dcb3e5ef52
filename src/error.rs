// Centralized error handling using thiserror for type-safe error management
//
// Design Decision: Unified error type with context
//
// Rationale: The mock reports whatever failures the test author configured
// in advance. Those failures need concrete, match-able variants so tests can
// assert on them, which rules out Box<dyn Error> and anyhow. thiserror
// auto-derives Display and Error with minimal boilerplate.
//
// Extension Points: Add new error variants as the real settings service
// grows failure modes worth simulating.

use thiserror::Error;

/// Error type for the settings service capability set
///
/// These are the failure shapes a real settings service can report and that
/// test authors queue on the mock to simulate. The mock itself never
/// constructs errors on its own: a misconfigured test (an operation invoked
/// without a queued return value) panics instead of returning an error,
/// because that is a broken test rather than a simulated fault.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Generic service-level failure with context
    ///
    /// Covers failures that don't map to a more specific variant,
    /// e.g. the real service being unreachable.
    #[error("Settings service error: {0}")]
    ServiceError(String),

    /// Storage/persistence error
    ///
    /// The real service persists EULA acceptance and the installation
    /// identifier; tests queue this variant to simulate read/write failures.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// IO operation failed (file, network, etc.)
    ///
    /// Wraps std::io::Error with automatic conversion via #[from].
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for Result with SettingsError
///
/// Use this instead of std::result::Result<T, SettingsError> for convenience.
pub type Result<T> = std::result::Result<T, SettingsError>;
