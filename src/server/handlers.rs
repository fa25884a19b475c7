// HTTP request handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::CompanionServer;
use crate::engine::{ReplySource, TurnOutcome};
use crate::response::{ResourcePlan, SuggestedAction, Tone};
use crate::triage::Classification;

/// Create the main application router
pub fn create_router(server: Arc<CompanionServer>) -> Router {
    Router::new()
        .route("/v1/chat", post(handle_chat))
        .route("/v1/classify", post(handle_classify))
        .route("/v1/plan", post(handle_plan))
        .route("/v1/welcome", get(handle_welcome))
        .route("/v1/session/:id", get(get_session).delete(delete_session))
        .route("/health", get(health_check))
        .with_state(server)
}

/// Request body for /v1/chat
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User message for this turn
    pub message: String,
    /// Tone identifier; unrecognized values fall back to supportive
    #[serde(default)]
    pub tone: Option<String>,
    /// Session ID for conversation continuity
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Response body for /v1/chat
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub tone: Tone,
    pub classification: Classification,
    pub reply: String,
    pub reply_source: ReplySource,
    pub actions: Vec<SuggestedAction>,
    pub plan: ResourcePlan,
}

/// Handle POST /v1/chat - run one conversational turn
async fn handle_chat(
    State(server): State<Arc<CompanionServer>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let requested_tone = request.tone.as_deref().map(Tone::resolve);

    let mut session = server
        .sessions()
        .get_or_create(
            request.session_id.as_deref(),
            requested_tone.unwrap_or(server.default_tone()),
        )?;

    // An explicit tone on the request changes the session's tone for this
    // and later turns
    if let Some(tone) = requested_tone {
        session.tone = tone;
    }
    let tone = session.tone;

    session.conversation.add_user_message(request.message.as_str());

    let TurnOutcome {
        classification,
        reply,
        reply_source,
        actions,
        plan,
    } = server
        .engine()
        .run_turn(&session.conversation, &request.message, tone)
        .await;

    tracing::info!(
        session_id = %session.id,
        is_crisis = classification.is_crisis,
        has_anxiety = classification.has_anxiety,
        has_depression = classification.has_depression,
        source = ?reply_source,
        "Completed chat turn"
    );

    session.conversation.add_assistant_message(reply.as_str());
    session.touch();
    server.sessions().update(&session.id, session.clone())?;

    Ok(Json(ChatResponse {
        session_id: session.id,
        tone,
        classification,
        reply,
        reply_source,
        actions,
        plan,
    }))
}

/// Request body for /v1/classify and /v1/plan
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Response body for /v1/classify
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub classification: Classification,
    pub actions: Vec<SuggestedAction>,
}

/// Handle POST /v1/classify - classification and actions only
async fn handle_classify(
    State(server): State<Arc<CompanionServer>>,
    Json(body): Json<MessageBody>,
) -> Json<ClassifyResponse> {
    let companion = server.engine().companion();

    Json(ClassifyResponse {
        classification: companion.classify(&body.message),
        actions: companion.suggested_actions(&body.message),
    })
}

/// Handle POST /v1/plan - resource plan only
async fn handle_plan(
    State(server): State<Arc<CompanionServer>>,
    Json(body): Json<MessageBody>,
) -> Json<ResourcePlan> {
    Json(server.engine().companion().resource_plan(&body.message))
}

#[derive(Debug, Deserialize)]
pub struct WelcomeParams {
    #[serde(default)]
    pub tone: Option<String>,
}

/// Welcome message payload
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub tone: Tone,
    pub message: String,
}

/// Handle GET /v1/welcome - tone-specific opening message
async fn handle_welcome(
    State(server): State<Arc<CompanionServer>>,
    Query(params): Query<WelcomeParams>,
) -> Json<WelcomeResponse> {
    let tone = params
        .tone
        .as_deref()
        .map(Tone::resolve)
        .unwrap_or(server.default_tone());

    Json(WelcomeResponse {
        tone,
        message: server.engine().companion().welcome(tone).to_string(),
    })
}

/// Session information
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub id: String,
    pub tone: Tone,
    pub created_at: String,
    pub last_activity: String,
    pub message_count: usize,
}

/// Handle GET /v1/session/:id - retrieve session state
async fn get_session(
    State(server): State<Arc<CompanionServer>>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionInfo>, AppError> {
    let session = server
        .sessions()
        .get_or_create(Some(&session_id), server.default_tone())?;

    Ok(Json(SessionInfo {
        id: session.id,
        tone: session.tone,
        created_at: session.created_at.to_rfc3339(),
        last_activity: session.last_activity.to_rfc3339(),
        message_count: session.conversation.message_count(),
    }))
}

/// Handle DELETE /v1/session/:id
async fn delete_session(
    State(server): State<Arc<CompanionServer>>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, AppError> {
    if server.sessions().delete(&session_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError(anyhow::anyhow!("Session not found")))
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub backend_configured: bool,
    pub active_sessions: usize,
}

/// Handle GET /health
pub async fn health_check(State(server): State<Arc<CompanionServer>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        backend_configured: server.engine().has_backend(),
        active_sessions: server.sessions().active_count(),
    })
}

/// Application error wrapper for proper HTTP error responses
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Request failed");

        let body = serde_json::json!({
            "error": {
                "message": self.0.to_string(),
                "type": "api_error"
            }
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
