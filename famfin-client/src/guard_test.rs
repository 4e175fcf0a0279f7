//! Tests for the auth guard

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use shared::{
        config::client::DEFAULT_STORAGE_KEY,
        models::{ApiEnvelope, User},
    };

    use crate::{
        api::ProfileSource,
        error::ClientResult,
        guard::{AuthGuard, GuardOutcome, GuardPhase, Liveness},
        session::SessionStore,
        storage::MemoryStorage,
        testing::{Navigation, ProfileReply, RecordingNavigator, ScriptedProfile, sample_user},
    };

    fn store() -> SessionStore {
        SessionStore::open(MemoryStorage::shared(), DEFAULT_STORAGE_KEY)
    }

    /// Profile source whose consumer disappears while the request is in flight.
    struct TeardownDuringFetch {
        liveness: Liveness,
        inner: ScriptedProfile,
    }

    #[async_trait]
    impl ProfileSource for TeardownDuringFetch {
        async fn fetch_profile(&self) -> ClientResult<ApiEnvelope<User>> {
            self.liveness.teardown();
            self.inner.fetch_profile().await
        }
    }

    /// Tests which paths are protected
    #[test]
    fn test_is_protected() {
        let guard = AuthGuard::default();

        assert!(guard.is_protected("/dashboard"));
        assert!(guard.is_protected("/dashboard/members"));
        assert!(guard.is_protected("/dashboard?tab=reports"));
        assert!(!guard.is_protected("/"));
        assert!(!guard.is_protected("/auth/login"));
        assert!(!guard.is_protected("/dashboards"));
    }

    /// Tests the phase rendered before verification resolves
    #[test]
    fn test_initial_phase() {
        let guard = AuthGuard::default();
        let store = store();

        assert_eq!(guard.initial_phase("/dashboard", &store), GuardPhase::Checking);
        assert_eq!(guard.initial_phase("/", &store), GuardPhase::Ready);

        store.set_user(Some(sample_user()));
        assert_eq!(guard.initial_phase("/dashboard", &store), GuardPhase::Ready);
    }

    /// Tests that an anonymous visit to a protected path is verified once and redirected
    #[tokio::test]
    async fn test_protected_without_user_redirects() {
        let guard = AuthGuard::default();
        let store = store();
        let api = ScriptedProfile::new(ProfileReply::Rejected);
        let navigator = RecordingNavigator::default();

        let outcome = guard
            .run("/dashboard", &store, &api, &navigator, &Liveness::new())
            .await;

        assert_eq!(outcome, GuardOutcome::Redirected);
        assert_eq!(api.calls(), 1);
        assert_eq!(
            navigator.visits(),
            vec![Navigation::Soft("/auth/login".to_string())]
        );
        assert!(!store.is_loading());
    }

    /// Tests that a confirmed session renders children without navigation
    #[tokio::test]
    async fn test_protected_verified_renders() {
        let guard = AuthGuard::default();
        let store = store();
        let api = ScriptedProfile::new(ProfileReply::Success(sample_user()));
        let navigator = RecordingNavigator::default();

        let outcome = guard
            .run("/dashboard/reports", &store, &api, &navigator, &Liveness::new())
            .await;

        assert_eq!(outcome, GuardOutcome::Render);
        assert_eq!(api.calls(), 1);
        assert!(navigator.visits().is_empty());
        assert_eq!(store.user(), Some(sample_user()));
    }

    /// Tests that a loaded identity is trusted without a network call
    #[tokio::test]
    async fn test_loaded_user_skips_verification() {
        let guard = AuthGuard::default();
        let store = store();
        store.set_user(Some(sample_user()));
        let api = ScriptedProfile::new(ProfileReply::Rejected);
        let navigator = RecordingNavigator::default();

        let outcome = guard
            .run("/dashboard", &store, &api, &navigator, &Liveness::new())
            .await;

        assert_eq!(outcome, GuardOutcome::Render);
        assert_eq!(api.calls(), 0);
        assert!(navigator.visits().is_empty());
    }

    /// Tests that public paths are never verified
    #[tokio::test]
    async fn test_public_path_skips_verification() {
        let guard = AuthGuard::default();
        let store = store();
        let api = ScriptedProfile::new(ProfileReply::Rejected);
        let navigator = RecordingNavigator::default();

        for path in ["/", "/auth/login", "/auth/callback"] {
            let outcome = guard
                .run(path, &store, &api, &navigator, &Liveness::new())
                .await;
            assert_eq!(outcome, GuardOutcome::Render);
        }

        assert_eq!(api.calls(), 0);
        assert!(navigator.visits().is_empty());
    }

    /// Tests that network failures are treated as unauthenticated
    #[tokio::test]
    async fn test_failed_check_redirects() {
        let guard = AuthGuard::default();
        let store = store();
        let api = ScriptedProfile::new(ProfileReply::Status(503));
        let navigator = RecordingNavigator::default();

        let outcome = guard
            .run("/dashboard", &store, &api, &navigator, &Liveness::new())
            .await;

        assert_eq!(outcome, GuardOutcome::Redirected);
        assert_eq!(
            navigator.visits(),
            vec![Navigation::Soft("/auth/login".to_string())]
        );
    }

    /// Tests that a torn-down consumer neither renders nor navigates
    #[tokio::test]
    async fn test_teardown_discards_result() {
        let guard = AuthGuard::default();
        let store = store();
        let liveness = Liveness::new();
        let api = TeardownDuringFetch {
            liveness: liveness.clone(),
            inner: ScriptedProfile::new(ProfileReply::Rejected),
        };
        let navigator = RecordingNavigator::default();

        let outcome = guard
            .run("/dashboard", &store, &api, &navigator, &liveness)
            .await;

        assert_eq!(outcome, GuardOutcome::Discarded);
        assert!(navigator.visits().is_empty());
        assert!(!liveness.is_alive());
    }

    /// Tests custom prefixes and login paths
    #[tokio::test]
    async fn test_custom_paths() {
        let guard = AuthGuard::new("/admin", "/signin");
        let store = store();
        let api = ScriptedProfile::new(ProfileReply::Rejected);
        let navigator = RecordingNavigator::default();

        assert!(!guard.is_protected("/dashboard"));
        let outcome = guard
            .run("/admin/users", &store, &api, &navigator, &Liveness::new())
            .await;

        assert_eq!(outcome, GuardOutcome::Redirected);
        assert_eq!(navigator.visits(), vec![Navigation::Soft("/signin".to_string())]);
    }
}
