// Core trait definition for the settings capability set
//
// Design Decision: Trait-based abstraction for settings access
//
// Rationale: Traits provide compile-time polymorphism in Rust, enabling:
// 1. Constructor injection of settings access into consumers
// 2. Type-safe substitution in tests (Arc<dyn SettingsService>)
// 3. Send + Sync bounds for async/concurrent safety
//
// The trait is marked Send + Sync to work with tokio's async runtime,
// which requires thread-safe types for spawning tasks across threads.

use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Settings access capability set
///
/// The three operations a settings backend exposes to the rest of the
/// application: accept the end-user license agreement, provision the
/// installation-scoped identifier, and check EULA acceptance status.
///
/// Consumers depend only on this trait. Production code injects a real
/// backend; tests inject [`MockSettingsService`](crate::MockSettingsService)
/// with canned results queued up front.
///
/// Usage:
///     let settings: Arc<dyn SettingsService> = Arc::new(backend);
///     if !settings.is_eula_accepted().await? {
///         settings.accept_eula().await?;
///     }
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Record the user's acceptance of the end-user license agreement
    ///
    /// # Errors
    /// - Persistence failures in the backing store
    async fn accept_eula(&self) -> Result<()>;

    /// Provision the installation-scoped unique identifier
    ///
    /// Returns the identifier, generating and persisting it on first call.
    /// An absent identifier is represented as `Uuid::nil()`.
    ///
    /// # Errors
    /// - Persistence failures in the backing store
    async fn initialize_identifier(&self) -> Result<Uuid>;

    /// Check whether the end-user license agreement has been accepted
    ///
    /// # Errors
    /// - Persistence failures in the backing store
    async fn is_eula_accepted(&self) -> Result<bool>;
}
