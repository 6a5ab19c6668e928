use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::backend_client::{BackendError, LinkedInAuth, ResumeBackend};
use crate::errors::AppError;
use crate::store::SharedStore;

#[derive(Debug, Default)]
struct LinkedInCache {
    access_token: Option<String>,
    profile: Option<Value>,
    oauth_state: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkedInStatus {
    pub authenticated: bool,
    pub has_profile: bool,
    pub configured: bool,
}

/// Client side of the LinkedIn OAuth helper. The backend keeps the real
/// session in its cookies; this only caches the token and last profile.
#[derive(Clone, Default)]
pub struct LinkedInSession(Arc<Mutex<LinkedInCache>>);

impl LinkedInSession {
    fn cache(&self) -> MutexGuard<'_, LinkedInCache> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_authenticated(&self) -> bool {
        self.cache().access_token.is_some()
    }

    pub fn cached_profile(&self) -> Option<Value> {
        self.cache().profile.clone()
    }

    /// Starts the OAuth flow and returns the URL the browser must visit.
    pub async fn initiate_auth(
        &self,
        store: &SharedStore,
        backend: &dyn ResumeBackend,
    ) -> Result<LinkedInAuth, AppError> {
        match backend.linkedin_auth().await {
            Ok(auth) => {
                self.cache().oauth_state = Some(auth.state.clone());
                Ok(auth)
            }
            Err(e) => {
                warn!("LinkedIn auth could not start: {e}");
                store
                    .lock()
                    .show_error("Unable to connect to LinkedIn. Check your configuration.");
                Err(e.into())
            }
        }
    }

    /// Reads the `linkedin_auth` query value the backend redirects back with.
    /// When the redirect also carries the OAuth `state`, it must match the one
    /// handed out by [`initiate_auth`](Self::initiate_auth).
    pub fn check_auth_callback(
        &self,
        store: &SharedStore,
        auth_status: Option<&str>,
        state: Option<&str>,
    ) -> bool {
        if auth_status != Some("success") {
            return false;
        }
        if let Some(state) = state {
            if self.cache().oauth_state.as_deref() != Some(state) {
                warn!("LinkedIn callback state does not match the pending sign-in");
                store.lock().show_error("LinkedIn sign-in could not be verified");
                return false;
            }
        }
        self.cache().oauth_state = None;
        store.lock().show_success("LinkedIn sign-in successful!", true);
        true
    }

    /// Fetches the profile, with `access_token` or the cached one if any.
    pub async fn get_profile(
        &self,
        store: &SharedStore,
        backend: &dyn ResumeBackend,
        access_token: Option<String>,
    ) -> Result<Value, AppError> {
        let token = access_token.or_else(|| self.cache().access_token.clone());

        match backend.linkedin_profile(token.as_deref()).await {
            Ok(profile) => {
                let mut cache = self.cache();
                cache.profile = Some(profile.clone());
                if token.is_some() {
                    cache.access_token = token;
                }
                Ok(profile)
            }
            Err(e) => {
                let message = match &e {
                    BackendError::Unauthenticated => {
                        "Not authenticated. Please sign in with LinkedIn."
                    }
                    _ => "Unable to fetch the profile data",
                };
                store.lock().show_error(message);
                Err(e.into())
            }
        }
    }

    pub async fn logout(
        &self,
        store: &SharedStore,
        backend: &dyn ResumeBackend,
    ) -> Result<(), AppError> {
        match backend.linkedin_logout().await {
            Ok(()) => {
                *self.cache() = LinkedInCache::default();
                info!("Signed out of LinkedIn");
                store.lock().show_success("Signed out", true);
                Ok(())
            }
            Err(e) => {
                store.lock().show_error("Error while signing out");
                Err(e.into())
            }
        }
    }

    /// Whether the backend has LinkedIn credentials: the auth endpoint answers.
    pub async fn check_configuration(&self, backend: &dyn ResumeBackend) -> bool {
        match backend.linkedin_auth().await {
            Ok(_) => true,
            Err(e) => {
                warn!("LinkedIn API not configured: {e}");
                false
            }
        }
    }

    pub async fn status(&self, backend: &dyn ResumeBackend) -> LinkedInStatus {
        LinkedInStatus {
            configured: self.check_configuration(backend).await,
            authenticated: self.is_authenticated(),
            has_profile: self.cached_profile().is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeBackend;

    #[tokio::test]
    async fn test_initiate_auth_remembers_state() {
        let store = SharedStore::new();
        let session = LinkedInSession::default();
        let auth = session
            .initiate_auth(&store, &FakeBackend::default())
            .await
            .unwrap();
        assert!(auth.auth_url.starts_with("https://www.linkedin.com/"));

        assert!(!session.check_auth_callback(&store, Some("success"), Some("forged")));
        assert!(session.check_auth_callback(&store, Some("success"), Some("abc")));
    }

    #[tokio::test]
    async fn test_profile_caches_token() {
        let store = SharedStore::new();
        let session = LinkedInSession::default();
        let backend = FakeBackend {
            authenticated: true,
            ..FakeBackend::default()
        };

        let profile = session
            .get_profile(&store, &backend, Some("token-1".into()))
            .await
            .unwrap();

        assert_eq!(profile["first_name"], "Ada");
        assert!(session.is_authenticated());
        assert_eq!(session.cached_profile(), Some(profile));

        session.logout(&store, &backend).await.unwrap();
        assert!(!session.is_authenticated());
        assert!(session.cached_profile().is_none());
    }

    #[tokio::test]
    async fn test_unauthenticated_profile_shows_banner() {
        let store = SharedStore::new();
        let session = LinkedInSession::default();

        let err = session
            .get_profile(&store, &FakeBackend::default(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Backend(BackendError::Unauthenticated)));
        let banner = store.lock().current_notification().cloned().unwrap();
        assert!(banner.message.starts_with("Not authenticated"));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_auth_callback() {
        let store = SharedStore::new();
        let session = LinkedInSession::default();
        assert!(!session.check_auth_callback(&store, None, None));
        assert!(!session.check_auth_callback(&store, Some("error"), None));
        assert!(session.check_auth_callback(&store, Some("success"), None));
        assert!(store.lock().current_notification().is_some());
    }
}
