// Service layer for dependency injection and testability
//
// Design Decision: Trait-based capability set with a shipped test double
//
// Rationale: Code that gates features on EULA acceptance or needs the
// installation identifier should depend on the SettingsService trait, not on
// a concrete settings backend. That keeps unit tests free of real
// persistence: inject MockSettingsService, queue canned results, run the
// code under test, then assert on the recorded invocations.
//
// Architecture Pattern: Ports and Adapters
// - The trait defines the "port" (the settings capability set)
// - MockSettingsService is the test-side adapter
// - Real adapters (file-backed, remote) live with the applications that
//   own the actual settings backend, not in this crate
//
// Usage Example:
//     let settings = Arc::new(MockSettingsService::new());
//     settings.expect_is_eula_accepted(Ok(true));
//     let accepted = settings.is_eula_accepted().await?;
//     assert_eq!(settings.calls(), vec![SettingsCall::IsEulaAccepted]);

pub mod mock;
#[cfg(test)]
pub mod mocks;
pub mod traits;

// Re-export commonly used types
pub use mock::{MockSettingsService, SettingsCall};
pub use traits::SettingsService;
