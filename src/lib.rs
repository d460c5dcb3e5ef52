// Library interface for the settings-service test double
// This exposes the capability trait and its mock so they can be:
// - Injected into code under test via Arc<dyn SettingsService>
// - Configured and inspected from unit and integration tests

pub mod error;
pub mod services; // Service layer: capability trait + recording mock

// Re-export commonly used types for convenience
pub use error::{Result, SettingsError};
pub use services::{MockSettingsService, SettingsCall, SettingsService};
