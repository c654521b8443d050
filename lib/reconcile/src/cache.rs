//! Session cache for the last resolved login.
//!
//! The cache is a read convenience for the embedding application (showing
//! the signed-in name without a network round-trip) and the holder of the
//! provider session for logout-time revocation. It is never
//! authorization-equivalent to a fresh identity fetch: the engine refetches
//! the identity on every authentication and clears the cache whenever a
//! fresh fetch shows the account inactive.

use rosterkit_credential::ProviderSession;
use rosterkit_directory::Identity;
use tokio::sync::RwLock;

/// The cached result of the last successful login.
#[derive(Debug)]
struct CachedLogin {
    identity: Identity,
    session: ProviderSession,
}

/// Holds the last resolved identity and its provider session.
#[derive(Debug, Default)]
pub struct SessionCache {
    inner: RwLock<Option<CachedLogin>>,
}

impl SessionCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a resolved identity together with its provider session,
    /// replacing any previous entry.
    pub async fn save(&self, identity: Identity, session: ProviderSession) {
        *self.inner.write().await = Some(CachedLogin { identity, session });
    }

    /// Returns a copy of the last resolved identity, if a login is cached.
    pub async fn load(&self) -> Option<Identity> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(|cached| cached.identity.clone())
    }

    /// Empties the cache and hands back the evicted provider session so the
    /// caller can revoke it.
    pub async fn clear(&self) -> Option<ProviderSession> {
        self.inner.write().await.take().map(|cached| cached.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rosterkit_core::{Email, EmployeeId};
    use rosterkit_directory::EmployeeRole;

    fn test_identity() -> Identity {
        Identity {
            email: Email::new("cached@example.com").expect("valid address"),
            display_name: "Cached Person".to_string(),
            employee_id: EmployeeId::new("E-100"),
            role: EmployeeRole::Worker,
            organizational_unit: "Unit".to_string(),
            position: "Staff".to_string(),
            supervisor_email: None,
            is_active: true,
            requires_password_change: false,
            created_at: Utc::now(),
        }
    }

    fn test_session() -> ProviderSession {
        ProviderSession::new(
            "uid_cached",
            Email::new("cached@example.com").expect("valid address"),
        )
    }

    #[tokio::test]
    async fn empty_cache_loads_none() {
        let cache = SessionCache::new();
        assert!(cache.load().await.is_none());
        assert!(cache.clear().await.is_none());
    }

    #[tokio::test]
    async fn save_then_load_returns_identity() {
        let cache = SessionCache::new();
        cache.save(test_identity(), test_session()).await;

        let loaded = cache.load().await.expect("cached identity");
        assert_eq!(loaded.email.as_str(), "cached@example.com");
    }

    #[tokio::test]
    async fn clear_returns_session_and_empties() {
        let cache = SessionCache::new();
        cache.save(test_identity(), test_session()).await;

        let session = cache.clear().await.expect("evicted session");
        assert_eq!(session.uid(), "uid_cached");
        assert!(cache.load().await.is_none());
    }

    #[tokio::test]
    async fn save_replaces_previous_entry() {
        let cache = SessionCache::new();
        cache.save(test_identity(), test_session()).await;

        let mut second = test_identity();
        second.display_name = "Replacement".to_string();
        cache
            .save(
                second,
                ProviderSession::new(
                    "uid_second",
                    Email::new("cached@example.com").expect("valid address"),
                ),
            )
            .await;

        let loaded = cache.load().await.expect("cached identity");
        assert_eq!(loaded.display_name, "Replacement");
        let session = cache.clear().await.expect("evicted session");
        assert_eq!(session.uid(), "uid_second");
    }
}
