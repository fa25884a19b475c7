// HTTP daemon mode for the companion service

mod handlers;
mod session;

pub use handlers::{create_router, health_check};
pub use session::{SessionManager, SessionState};

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerSettings;
use crate::engine::TurnEngine;
use crate::response::Tone;

/// Main companion server structure
pub struct CompanionServer {
    /// Turn engine (triage core plus optional backend)
    engine: Arc<TurnEngine>,
    /// Session manager
    sessions: Arc<SessionManager>,
    /// Tone applied when a request doesn't name one
    default_tone: Tone,
    /// Server settings
    settings: ServerSettings,
}

impl CompanionServer {
    pub fn new(engine: TurnEngine, settings: ServerSettings, default_tone: Tone) -> Self {
        let sessions = SessionManager::new(settings.max_sessions, settings.session_timeout_minutes);

        Self {
            engine: Arc::new(engine),
            sessions: Arc::new(sessions),
            default_tone,
            settings,
        }
    }

    /// Start the HTTP server
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = self.settings.bind_address.parse()?;

        let app_state = Arc::new(self);
        let app = create_router(app_state).layer(TraceLayer::new_for_http());

        tracing::info!("Starting Liam companion server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    pub fn engine(&self) -> &Arc<TurnEngine> {
        &self.engine
    }

    pub fn sessions(&self) -> &Arc<SessionManager> {
        &self.sessions
    }

    pub fn default_tone(&self) -> Tone {
        self.default_tone
    }
}
