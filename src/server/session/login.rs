//! Web login sessions for the dashboard.
//!
//! The browser only ever holds an opaque token (inside the tower-sessions cookie). This
//! store maps that token to a Discord ID and enforces a single live token per account:
//! logging in again revokes the previous token, so a stolen or stale cookie stops
//! working as soon as the owner logs in elsewhere.

use rand::Rng;
use std::{collections::HashMap, sync::Arc, time::Duration};
use tokio::{sync::RwLock, time::Instant};

use super::store::Expiring;

/// Length of generated login tokens.
const TOKEN_LENGTH: usize = 32;

/// Token and identity maps kept consistent under one lock.
///
/// Invariant: every token in `by_token` maps to an identity whose `by_identity` entry is
/// that same token, and vice versa.
#[derive(Default)]
struct LoginSessions {
    by_token: HashMap<String, Expiring<u64>>,
    by_identity: HashMap<u64, String>,
}

impl LoginSessions {
    /// Removes `token` and its identity index entry.
    fn remove_token(&mut self, token: &str) {
        if let Some(entry) = self.by_token.remove(token) {
            if self.by_identity.get(&entry.value).map(String::as_str) == Some(token) {
                self.by_identity.remove(&entry.value);
            }
        }
    }
}

/// Store of opaque dashboard login tokens.
#[derive(Clone)]
pub struct LoginSessionStore {
    sessions: Arc<RwLock<LoginSessions>>,
    ttl: Duration,
}

impl LoginSessionStore {
    /// Creates an empty store whose tokens live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(LoginSessions::default())),
            ttl,
        }
    }

    /// Issues a new token for `discord_id`.
    ///
    /// Any token previously issued to the same account is revoked.
    ///
    /// # Returns
    /// - `String` - The new 32-character token
    pub async fn create(&self, discord_id: u64) -> String {
        let token = Self::generate_token();
        let mut sessions = self.sessions.write().await;

        if let Some(previous) = sessions.by_identity.insert(discord_id, token.clone()) {
            sessions.by_token.remove(&previous);
        }
        sessions
            .by_token
            .insert(token.clone(), Expiring::new(discord_id, self.ttl));

        token
    }

    /// Resolves a token to the Discord ID it was issued to.
    ///
    /// Expired tokens are removed and reported as absent.
    ///
    /// # Returns
    /// - `Some(u64)` - Token is live
    /// - `None` - Unknown, revoked, superseded, or expired token
    pub async fn resolve(&self, token: &str) -> Option<u64> {
        let mut sessions = self.sessions.write().await;

        let (expired, discord_id) = match sessions.by_token.get(token) {
            Some(entry) => (entry.is_expired(), entry.value),
            None => return None,
        };

        if expired {
            sessions.remove_token(token);
            return None;
        }

        Some(discord_id)
    }

    /// Revokes a token. Unknown tokens are ignored.
    pub async fn revoke(&self, token: &str) {
        self.sessions.write().await.remove_token(token);
    }

    /// Removes every expired token.
    ///
    /// # Returns
    /// - `usize` - Number of tokens removed
    pub async fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let expired: Vec<String> = sessions
            .by_token
            .iter()
            .filter(|(_, entry)| entry.expires_at <= now)
            .map(|(token, _)| token.clone())
            .collect();

        for token in &expired {
            sessions.remove_token(token);
        }

        expired.len()
    }

    /// Number of live tokens.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.sessions
            .read()
            .await
            .by_token
            .values()
            .filter(|entry| entry.expires_at > now)
            .count()
    }

    /// Generates a random alphanumeric token.
    fn generate_token() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    const TTL: Duration = Duration::from_secs(3600);

    /// Tests issuing and resolving a token.
    ///
    /// Expected: 32-character token resolving to the account
    #[tokio::test]
    async fn create_and_resolve() {
        let store = LoginSessionStore::new(TTL);

        let token = store.create(42).await;

        assert_eq!(token.len(), TOKEN_LENGTH);
        assert_eq!(store.resolve(&token).await, Some(42));
    }

    /// Tests that logging in again revokes the previous token.
    ///
    /// Expected: old token unknown, new token live, one session for the account
    #[tokio::test]
    async fn new_login_revokes_previous_token() {
        let store = LoginSessionStore::new(TTL);

        let first = store.create(42).await;
        let second = store.create(42).await;

        assert_ne!(first, second);
        assert_eq!(store.resolve(&first).await, None);
        assert_eq!(store.resolve(&second).await, Some(42));
        assert_eq!(store.len().await, 1);
    }

    /// Tests that sessions of different accounts are independent.
    ///
    /// Expected: both tokens live
    #[tokio::test]
    async fn accounts_do_not_interfere() {
        let store = LoginSessionStore::new(TTL);

        let alice = store.create(1).await;
        let bob = store.create(2).await;

        assert_eq!(store.resolve(&alice).await, Some(1));
        assert_eq!(store.resolve(&bob).await, Some(2));
    }

    /// Tests that expired tokens no longer resolve.
    ///
    /// Expected: None after the TTL
    #[tokio::test(start_paused = true)]
    async fn expired_token_does_not_resolve() {
        let store = LoginSessionStore::new(TTL);
        let token = store.create(42).await;

        advance(TTL).await;

        assert_eq!(store.resolve(&token).await, None);
    }

    /// Tests that revoking keeps both maps consistent and is idempotent.
    ///
    /// Expected: token gone, a new login for the account works
    #[tokio::test]
    async fn revoke_clears_identity_index() {
        let store = LoginSessionStore::new(TTL);
        let token = store.create(42).await;

        store.revoke(&token).await;
        store.revoke(&token).await;

        assert_eq!(store.resolve(&token).await, None);
        {
            let sessions = store.sessions.read().await;
            assert!(sessions.by_token.is_empty());
            assert!(sessions.by_identity.is_empty());
        }

        let token = store.create(42).await;
        assert_eq!(store.resolve(&token).await, Some(42));
    }

    /// Tests that revoking a superseded token does not log out the newer one.
    ///
    /// Expected: newer token still resolves
    #[tokio::test]
    async fn revoking_stale_token_keeps_current_session() {
        let store = LoginSessionStore::new(TTL);
        let stale = store.create(42).await;
        let current = store.create(42).await;

        store.revoke(&stale).await;

        assert_eq!(store.resolve(&current).await, Some(42));
    }

    /// Tests that the sweep removes expired tokens from both maps.
    ///
    /// Expected: one removal, maps empty
    #[tokio::test(start_paused = true)]
    async fn sweep_removes_expired_tokens() {
        let store = LoginSessionStore::new(TTL);
        store.create(42).await;

        advance(TTL + Duration::from_secs(1)).await;

        assert_eq!(store.sweep().await, 1);
        let sessions = store.sessions.read().await;
        assert!(sessions.by_token.is_empty());
        assert!(sessions.by_identity.is_empty());
    }
}
