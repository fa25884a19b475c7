// Integration tests for the HTTP server components

use liam::companion::Companion;
use liam::config::ServerSettings;
use liam::engine::{ReplySource, TurnEngine};
use liam::response::Tone;
use liam::server::{CompanionServer, SessionManager};

#[tokio::test]
async fn test_server_creation_without_backend() {
    let engine = TurnEngine::new(Companion::default(), None);
    let settings = ServerSettings {
        bind_address: "127.0.0.1:0".to_string(),
        max_sessions: 10,
        session_timeout_minutes: 30,
    };

    let server = CompanionServer::new(engine, settings, Tone::Supportive);
    assert!(!server.engine().has_backend());
    assert_eq!(server.sessions().active_count(), 0);
    assert_eq!(server.default_tone(), Tone::Supportive);
}

#[tokio::test]
async fn test_session_manager_lifecycle() {
    let manager = SessionManager::new(10, 30);

    let session1 = manager.get_or_create(None, Tone::Casual).unwrap();
    assert_eq!(manager.active_count(), 1);

    let session2 = manager
        .get_or_create(Some(&session1.id), Tone::Supportive)
        .unwrap();
    assert_eq!(session1.id, session2.id);
    assert_eq!(session2.tone, Tone::Casual);
    assert_eq!(manager.active_count(), 1);

    assert!(manager.delete(&session1.id));
    assert_eq!(manager.active_count(), 0);
}

#[tokio::test]
async fn test_turn_pipeline_through_engine() {
    let engine = TurnEngine::new(Companion::default(), None);
    let mut history = liam::conversation::ConversationHistory::new();

    let message = "I feel anxious and overwhelmed";
    history.add_user_message(message);

    let outcome = engine.run_turn(&history, message, Tone::Professional).await;

    assert!(outcome.classification.has_anxiety);
    assert!(!outcome.classification.is_crisis);
    assert_eq!(outcome.reply_source, ReplySource::Canned);
    assert_eq!(outcome.actions.len(), 2);
    assert!(outcome.plan.summary.contains("anxiety"));
}
