// Mock test helpers and common mock patterns
//
// Design Decision: Centralized mock constructors for consistent testing
//
// Rationale: Provides reusable mock setups with sensible defaults.
// Tests can queue additional results on top of the baseline setup.
//
// Usage:
//     use crate::services::mocks::test_helpers::*;
//     let settings = create_accepted_settings();
//     settings.expect_initialize_identifier(Ok(my_id));

#[cfg(test)]
pub mod test_helpers {
    use crate::error::SettingsError;
    use crate::services::mock::MockSettingsService;
    use uuid::Uuid;

    /// Create a mock for an installation that already accepted the EULA
    ///
    /// Default behavior:
    /// - is_eula_accepted() returns Ok(true)
    pub fn create_accepted_settings() -> MockSettingsService {
        let mock = MockSettingsService::new();

        mock.expect_is_eula_accepted(Ok(true));

        mock
    }

    /// Create a mock for a first-run installation
    ///
    /// Default behavior:
    /// - is_eula_accepted() returns Ok(false)
    /// - accept_eula() succeeds
    /// - initialize_identifier() returns the given identifier
    pub fn create_first_run_settings(identifier: Uuid) -> MockSettingsService {
        let mock = MockSettingsService::new();

        mock.expect_is_eula_accepted(Ok(false));
        mock.expect_accept_eula(Ok(()));
        mock.expect_initialize_identifier(Ok(identifier));

        mock
    }

    /// Create a mock whose backing store is unavailable
    ///
    /// Default behavior: all three operations fail with a StorageError.
    /// Use this when testing error paths in consumers.
    pub fn create_unavailable_settings() -> MockSettingsService {
        let mock = MockSettingsService::new();

        mock.expect_is_eula_accepted(Err(storage_unavailable()));
        mock.expect_accept_eula(Err(storage_unavailable()));
        mock.expect_initialize_identifier(Err(storage_unavailable()));

        mock
    }

    fn storage_unavailable() -> SettingsError {
        SettingsError::StorageError("settings store unavailable".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use crate::services::traits::SettingsService;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_create_accepted_settings() {
        let mock = create_accepted_settings();
        assert!(mock.is_eula_accepted().await.unwrap());
    }

    #[tokio::test]
    async fn test_create_first_run_settings() {
        let id = Uuid::new_v4();
        let mock = create_first_run_settings(id);

        assert!(!mock.is_eula_accepted().await.unwrap());
        mock.accept_eula().await.unwrap();
        assert_eq!(mock.initialize_identifier().await.unwrap(), id);
        mock.assert_exhausted();
    }

    #[tokio::test]
    async fn test_create_unavailable_settings() {
        let mock = create_unavailable_settings();
        assert!(mock.is_eula_accepted().await.is_err());
        assert!(mock.accept_eula().await.is_err());
        assert!(mock.initialize_identifier().await.is_err());
    }
}
