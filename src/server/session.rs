// Session management for concurrent HTTP clients

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time;
use uuid::Uuid;

use crate::conversation::ConversationHistory;
use crate::response::Tone;

/// Per-session state
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Unique session identifier
    pub id: String,
    /// Conversation history for this session
    pub conversation: ConversationHistory,
    /// Tone currently applied to this session's replies
    pub tone: Tone,
    /// Last activity timestamp
    pub last_activity: DateTime<Utc>,
    /// Session creation time
    pub created_at: DateTime<Utc>,
}

impl SessionState {
    pub fn new(tone: Tone) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            conversation: ConversationHistory::new(),
            tone,
            last_activity: Utc::now(),
            created_at: Utc::now(),
        }
    }

    /// Update last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Check if session has expired
    pub fn is_expired(&self, timeout_minutes: u64) -> bool {
        let elapsed = Utc::now().signed_duration_since(self.last_activity);
        elapsed.num_minutes() >= timeout_minutes as i64
    }
}

/// Concurrent session manager using DashMap
pub struct SessionManager {
    sessions: Arc<DashMap<String, SessionState>>,
    max_sessions: usize,
    timeout_minutes: u64,
}

impl SessionManager {
    pub fn new(max_sessions: usize, timeout_minutes: u64) -> Self {
        let manager = Self {
            sessions: Arc::new(DashMap::new()),
            max_sessions,
            timeout_minutes,
        };

        manager.start_cleanup_task();
        manager
    }

    /// Get or create a session. A new session opens with the given tone.
    pub fn get_or_create(
        &self,
        session_id: Option<&str>,
        tone: Tone,
    ) -> anyhow::Result<SessionState> {
        if let Some(id) = session_id {
            if let Some(mut session) = self.sessions.get_mut(id) {
                session.touch();
                return Ok(session.clone());
            }
        }

        if self.sessions.len() >= self.max_sessions {
            anyhow::bail!(
                "Maximum session limit reached ({}/{})",
                self.sessions.len(),
                self.max_sessions
            );
        }

        let session = SessionState::new(tone);
        let id = session.id.clone();
        self.sessions.insert(id.clone(), session.clone());

        tracing::info!(session_id = %id, tone = %tone, "Created new session");
        Ok(session)
    }

    /// Update session state
    pub fn update(&self, session_id: &str, session: SessionState) -> anyhow::Result<()> {
        if let Some(mut entry) = self.sessions.get_mut(session_id) {
            *entry = session;
            Ok(())
        } else {
            anyhow::bail!("Session not found: {}", session_id)
        }
    }

    /// Delete a session
    pub fn delete(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    /// Get active session count
    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }

    fn start_cleanup_task(&self) {
        let sessions = Arc::clone(&self.sessions);
        let timeout_minutes = self.timeout_minutes;

        tokio::spawn(async move {
            let mut interval = time::interval(Duration::from_secs(60));

            loop {
                interval.tick().await;

                let expired: Vec<String> = sessions
                    .iter()
                    .filter(|entry| entry.value().is_expired(timeout_minutes))
                    .map(|entry| entry.key().clone())
                    .collect();

                let mut removed = 0;
                for session_id in expired {
                    if sessions.remove(&session_id).is_some() {
                        removed += 1;
                        tracing::debug!(session_id = %session_id, "Removed expired session");
                    }
                }

                if removed > 0 {
                    tracing::info!(
                        removed,
                        active = sessions.len(),
                        "Cleaned up expired sessions"
                    );
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_creation() {
        let manager = SessionManager::new(10, 30);

        let session1 = manager.get_or_create(None, Tone::Supportive).unwrap();
        assert_eq!(manager.active_count(), 1);

        let session2 = manager.get_or_create(None, Tone::Casual).unwrap();
        assert_eq!(manager.active_count(), 2);

        assert_ne!(session1.id, session2.id);
        assert_eq!(session2.tone, Tone::Casual);
    }

    #[tokio::test]
    async fn test_session_retrieval_keeps_tone() {
        let manager = SessionManager::new(10, 30);

        let session1 = manager.get_or_create(None, Tone::Mature).unwrap();
        let session2 = manager
            .get_or_create(Some(&session1.id), Tone::Supportive)
            .unwrap();

        assert_eq!(session1.id, session2.id);
        // Existing session keeps its own tone
        assert_eq!(session2.tone, Tone::Mature);
        assert_eq!(manager.active_count(), 1);
    }

    #[tokio::test]
    async fn test_session_limit() {
        let manager = SessionManager::new(2, 30);

        manager.get_or_create(None, Tone::Supportive).unwrap();
        manager.get_or_create(None, Tone::Supportive).unwrap();

        let result = manager.get_or_create(None, Tone::Supportive);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Maximum session limit"));
    }

    #[tokio::test]
    async fn test_session_deletion() {
        let manager = SessionManager::new(10, 30);

        let session = manager.get_or_create(None, Tone::Supportive).unwrap();
        assert!(manager.delete(&session.id));
        assert_eq!(manager.active_count(), 0);
        assert!(!manager.delete(&session.id));
    }
}
