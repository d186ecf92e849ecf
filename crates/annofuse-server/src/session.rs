//! Upload sessions
//!
//! Each upload creates a session: the parsed gene list stored under a fresh
//! UUID token with a fixed time-to-live. Query requests present the token to
//! read the list back. Keying by token keeps concurrent callers fully
//! isolated from each other, and the TTL bounds memory held for abandoned
//! uploads. Expired entries are dropped lazily, on lookup and on insert.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// One uploaded gene list awaiting queries
#[derive(Debug, Clone)]
pub struct Session {
    pub genes: Vec<String>,
    created_at: DateTime<Utc>,
}

/// In-process store of upload sessions, keyed by token
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<Uuid, Session>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Store a gene list and return its session token
    pub fn create(&self, genes: Vec<String>) -> Uuid {
        self.purge_expired();

        let token = Uuid::new_v4();
        self.sessions.insert(
            token,
            Session {
                genes,
                created_at: Utc::now(),
            },
        );

        debug!(session = %token, total = self.sessions.len(), "Session created");

        token
    }

    /// Look up the gene list for a token
    ///
    /// Returns `None` for unknown tokens and for expired sessions; an
    /// expired session is removed on the spot. The session itself is left in
    /// place otherwise, so queries can be repeated until expiry.
    pub fn genes(&self, token: &Uuid) -> Option<Vec<String>> {
        let expired = {
            let session = self.sessions.get(token)?;
            if self.is_expired(&session) {
                true
            } else {
                return Some(session.genes.clone());
            }
        };

        // The map reference must be released before removal.
        if expired {
            self.sessions.remove(token);
            debug!(session = %token, "Expired session dropped on lookup");
        }

        None
    }

    /// Drop every expired session, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !self.is_expired(session));
        before - self.sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn is_expired(&self, session: &Session) -> bool {
        session.created_at + self.ttl <= Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_read_back() {
        let store = SessionStore::new(60);
        let token = store.create(vec!["BRCA1".to_string(), "TP53".to_string()]);

        let genes = store.genes(&token).unwrap();
        assert_eq!(genes, vec!["BRCA1", "TP53"]);
    }

    #[test]
    fn test_lookup_does_not_consume_the_session() {
        let store = SessionStore::new(60);
        let token = store.create(vec!["BRCA1".to_string()]);

        assert!(store.genes(&token).is_some());
        assert!(store.genes(&token).is_some());
    }

    #[test]
    fn test_unknown_token_is_none() {
        let store = SessionStore::new(60);
        assert!(store.genes(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_expired_session_is_dropped_on_lookup() {
        let store = SessionStore::new(0);
        let token = store.create(vec!["BRCA1".to_string()]);

        assert!(store.genes(&token).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_purge_expired_counts_removals() {
        let store = SessionStore::new(0);
        store.create(vec!["BRCA1".to_string()]);
        store.create(vec!["TP53".to_string()]);

        // Both sessions are already past their TTL; the second create
        // purged the first, leaving one entry to remove here.
        assert_eq!(store.purge_expired(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_sessions_are_independent() {
        let store = SessionStore::new(60);
        let first = store.create(vec!["BRCA1".to_string()]);
        let second = store.create(vec!["TP53".to_string()]);

        assert_ne!(first, second);
        assert_eq!(store.genes(&first).unwrap(), vec!["BRCA1"]);
        assert_eq!(store.genes(&second).unwrap(), vec!["TP53"]);
    }
}
