//! HTTP + WebSocket API for ConvoCoach
//!
//! Endpoints:
//! - GET /health - Health check
//! - POST /analyze - Score a single reply
//! - POST /session/new - Start a practice session
//! - GET /session/{id} - Session status and summary
//! - POST /session/{id}/reply - Answer the current prompt
//! - POST /session/{id}/restart - Back to the first prompt
//! - POST /session/{id}/save - Append the log to the sessions file
//! - WS /ws/{id} - Live turn updates

use axum::{
    extract::{Path, State, WebSocketUpgrade, ws::{Message, WebSocket}},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use futures_util::{SinkExt, StreamExt};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::core::{Coach, PracticeSession, SessionStore};
use crate::error::SessionError;
use crate::types::{Feedback, Scenario, SessionSummary, TurnRecord};

static SESSION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Live session
#[derive(Debug)]
pub struct SessionEntry {
    pub practice: PracticeSession,
    pub update_tx: broadcast::Sender<TurnRecord>,
}

/// App state
pub struct AppState {
    pub sessions: RwLock<HashMap<String, SessionEntry>>,
    pub coach: Coach,
    /// Scenario used when a request does not bring its own
    pub scenario: Scenario,
    pub store: SessionStore,
}

impl AppState {
    pub fn new(coach: Coach, scenario: Scenario, store: SessionStore) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            coach,
            scenario,
            store,
        }
    }
}

/// Analyze request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Create new session request
#[derive(Debug, Default, Deserialize)]
pub struct NewSessionRequest {
    pub scenario: Option<Scenario>,
}

/// Create new session response
#[derive(Debug, Serialize)]
pub struct NewSessionResponse {
    pub session_id: String,
    pub scenario: String,
    pub prompt: Option<String>,
    pub websocket_url: String,
}

/// Session status response
#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub session_id: String,
    pub scenario: String,
    pub turn: usize,
    pub total_prompts: usize,
    pub prompt: Option<String>,
    pub finished: bool,
    pub end_note: Option<String>,
    pub summary: Option<SessionSummary>,
    pub log: Vec<TurnRecord>,
}

/// Reply request
#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    pub text: String,
}

/// Reply response
#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub turn: TurnRecord,
    pub feedback: Feedback,
    pub next_prompt: Option<String>,
    pub finished: bool,
}

/// Save response
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub path: String,
    pub turns: usize,
    pub sessions_saved: usize,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions_active: usize,
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/session/new", post(create_session))
        .route("/session/:id", get(get_session))
        .route("/session/:id/reply", post(reply))
        .route("/session/:id/restart", post(restart))
        .route("/session/:id/save", post(save))
        .route("/ws/:id", get(websocket_handler))
        .with_state(Arc::new(state))
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let sessions = state.sessions.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        sessions_active: sessions.len(),
    })
}

/// Score one reply without a session
async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<Feedback> {
    Json(state.coach.evaluate(&req.text))
}

/// Create new session
async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewSessionRequest>,
) -> Json<NewSessionResponse> {
    let session_id = generate_session_id();
    let scenario = req.scenario.unwrap_or_else(|| state.scenario.clone());
    let practice = PracticeSession::new(scenario);
    let (tx, _) = broadcast::channel(100);

    let response = NewSessionResponse {
        session_id: session_id.clone(),
        scenario: practice.scenario().scenario.clone(),
        prompt: practice.current_prompt().map(str::to_string),
        websocket_url: format!("/ws/{}", session_id),
    };

    let mut sessions = state.sessions.write().await;
    sessions.insert(session_id.clone(), SessionEntry { practice, update_tx: tx });
    info!("session {} started", session_id);

    Json(response)
}

/// Get session status
async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionStatusResponse>, StatusCode> {
    let sessions = state.sessions.read().await;
    let entry = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(status_response(id, &entry.practice)))
}

/// Answer the current prompt
async fn reply(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ReplyRequest>,
) -> Result<Json<ReplyResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let entry = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    let feedback = entry
        .practice
        .submit(&req.text, &state.coach)
        .map_err(|e| match e {
            SessionError::Finished => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        })?;
    let turn = entry
        .practice
        .last_turn()
        .cloned()
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

    // No subscribers is fine
    let _ = entry.update_tx.send(turn.clone());

    Ok(Json(ReplyResponse {
        turn,
        feedback,
        next_prompt: entry.practice.current_prompt().map(str::to_string),
        finished: entry.practice.is_finished(),
    }))
}

/// Restart session
async fn restart(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionStatusResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let entry = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    entry.practice.restart();
    Ok(Json(status_response(id, &entry.practice)))
}

/// Save session log
async fn save(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SaveResponse>, StatusCode> {
    let log = {
        let sessions = state.sessions.read().await;
        let entry = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;
        entry.practice.log().to_vec()
    };
    let turns = log.len();

    // File I/O blocks; keep it off the async workers
    let store = state.store.clone();
    let sessions_saved = tokio::task::spawn_blocking(move || store.append(&log))
        .await
        .map_err(|e| {
            error!("save task for session {} panicked: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|e| {
            error!("saving session {} failed: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(SaveResponse {
        path: state.store.path().display().to_string(),
        turns,
        sessions_saved,
    }))
}

/// WebSocket handler for live updates
async fn websocket_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, StatusCode> {
    let sessions = state.sessions.read().await;
    let entry = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    let rx = entry.update_tx.subscribe();
    drop(sessions);

    Ok(ws.on_upgrade(move |socket| async move {
        handle_websocket(socket, rx).await;
    }))
}

/// Forward turn updates until either side goes away
async fn handle_websocket(socket: WebSocket, mut rx: broadcast::Receiver<TurnRecord>) {
    let (mut sender, mut receiver) = socket.split();

    let mut send_task = tokio::spawn(async move {
        while let Ok(turn) = rx.recv().await {
            let json = serde_json::to_string(&turn).unwrap_or_default();
            if sender.send(Message::Text(json)).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = receiver.next().await {
            if matches!(message, Message::Close(_)) {
                break;
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }
}

fn status_response(session_id: String, practice: &PracticeSession) -> SessionStatusResponse {
    let finished = practice.is_finished();
    SessionStatusResponse {
        session_id,
        scenario: practice.scenario().scenario.clone(),
        turn: practice.turn_index(),
        total_prompts: practice.total_prompts(),
        prompt: practice.current_prompt().map(str::to_string),
        finished,
        end_note: if finished { practice.scenario().end_note.clone() } else { None },
        summary: practice.summary(),
        log: practice.log().to_vec(),
    }
}

/// Generate session ID
fn generate_session_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let seq = SESSION_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("session_{:x}_{}", nanos, seq)
}

/// Run the API server
pub async fn run_server(addr: &str, state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("ConvoCoach API running on {}", addr);
    println!("ConvoCoach API running on {}", addr);
    println!("  POST /analyze             - Score one reply");
    println!("  POST /session/new         - Start session");
    println!("  GET  /session/:id         - Get status");
    println!("  POST /session/:id/reply   - Answer prompt");
    println!("  POST /session/:id/restart - Restart");
    println!("  POST /session/:id/save    - Save log");
    println!("  WS   /ws/:id              - Live updates");
    println!("  GET  /health              - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
