//! Authentication state kept on the client.
//!
//! Only the signed-in flag and the profile returned by the login call are
//! kept here; credentials and tokens never pass through this module.

use serde::{Deserialize, Serialize};
use shopfront_cache::{Cache, KvStore};
use shopfront_cart::cart::PersistOutcome;
use shopfront_cart::notify::{Notification, Notifier};
use tracing::{debug, warn};

/// Storage key of the signed-in flag (`"true"` / `"false"`).
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";
/// Storage key of the signed-in user's profile (JSON, or empty when signed out).
pub const USER_KEY: &str = "user";

/// Profile of the signed-in user, as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Any other fields the backend returned, kept verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    /// Profile with a username.
    pub fn named(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }

    /// Set the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Name to show in navigation chrome.
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Account")
    }
}

/// Persisted signed-in state.
pub struct AuthState<S, N> {
    cache: Cache<S>,
    notifier: N,
    authenticated: bool,
    user: Option<UserProfile>,
    last_persist: PersistOutcome,
}

impl<S: KvStore, N: Notifier> AuthState<S, N> {
    /// Restore the signed-in state. Unreadable values read as signed out.
    pub fn open(store: S, notifier: N) -> Self {
        let cache = Cache::new(store);

        let authenticated = match cache.store().get_raw(AUTH_FLAG_KEY) {
            Ok(raw) => raw.as_deref().map(str::trim) == Some("true"),
            Err(e) => {
                warn!(error = %e, "auth flag unavailable");
                false
            }
        };

        let user = match cache.get::<UserProfile>(USER_KEY) {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "discarding unreadable user profile");
                None
            }
        };

        Self {
            cache,
            notifier,
            authenticated,
            user,
            last_persist: PersistOutcome::NotAttempted,
        }
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// The signed-in user's profile.
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Record a successful login.
    pub fn login(&mut self, user: UserProfile) {
        debug!(user = %user.display_name(), "logged in");
        self.authenticated = true;
        self.user = Some(user);
        self.persist();
        self.notifier
            .notify(Notification::success("Successfully logged in!"));
    }

    /// Forget the signed-in user.
    pub fn logout(&mut self) {
        debug!("logged out");
        self.authenticated = false;
        self.user = None;
        self.persist();
        self.notifier.notify(Notification::info("Logged out"));
    }

    /// How the last change was persisted.
    pub fn last_persist(&self) -> &PersistOutcome {
        &self.last_persist
    }

    fn persist(&mut self) {
        let flag = if self.authenticated { "true" } else { "false" };
        let result = self
            .cache
            .store()
            .set_raw(AUTH_FLAG_KEY, flag)
            .and_then(|()| match &self.user {
                Some(user) => self.cache.set(USER_KEY, user),
                None => self.cache.store().set_raw(USER_KEY, ""),
            });

        self.last_persist = match result {
            Ok(()) => PersistOutcome::Saved,
            Err(e) => {
                warn!(error = %e, "failed to persist auth state");
                PersistOutcome::Failed(e.to_string())
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_cache::MemoryStore;
    use shopfront_cart::notify::RecordingNotifier;

    fn open(store: &MemoryStore) -> AuthState<MemoryStore, RecordingNotifier> {
        AuthState::open(store.clone(), RecordingNotifier::new())
    }

    #[test]
    fn test_starts_signed_out() {
        let auth = open(&MemoryStore::new());
        assert!(!auth.is_authenticated());
        assert!(auth.user().is_none());
    }

    #[test]
    fn test_login_persists_and_restores() {
        let store = MemoryStore::new();
        let mut auth = open(&store);
        auth.login(UserProfile::named("ada").with_email("ada@example.com"));

        assert_eq!(store.get_raw(AUTH_FLAG_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(auth.last_persist(), &PersistOutcome::Saved);
        assert_eq!(
            auth.notifier.last(),
            Some(Notification::success("Successfully logged in!"))
        );

        let restored = open(&store);
        assert!(restored.is_authenticated());
        assert_eq!(restored.user().map(UserProfile::display_name), Some("ada"));
    }

    #[test]
    fn test_logout_clears_user() {
        let store = MemoryStore::new();
        let mut auth = open(&store);
        auth.login(UserProfile::named("ada"));
        auth.logout();

        assert_eq!(store.get_raw(AUTH_FLAG_KEY).unwrap().as_deref(), Some("false"));
        assert_eq!(store.get_raw(USER_KEY).unwrap().as_deref(), Some(""));
        assert_eq!(auth.notifier.last(), Some(Notification::info("Logged out")));

        let restored = open(&store);
        assert!(!restored.is_authenticated());
        assert!(restored.user().is_none());
    }

    #[test]
    fn test_corrupt_values_read_as_signed_out() {
        let store = MemoryStore::new();
        store.set_raw(AUTH_FLAG_KEY, "yes").unwrap();
        store.set_raw(USER_KEY, "{broken").unwrap();

        let auth = open(&store);
        assert!(!auth.is_authenticated());
        assert!(auth.user().is_none());
    }

    #[test]
    fn test_profile_keeps_unknown_fields() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"email": "bo@example.com", "roles": ["admin"]}"#).unwrap();
        assert_eq!(profile.display_name(), "bo@example.com");
        assert_eq!(profile.extra["roles"], serde_json::json!(["admin"]));

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["roles"], serde_json::json!(["admin"]));
    }
}
