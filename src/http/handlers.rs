//! HTTP handlers for the UI API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::http::error::ApiError;
use crate::http::extract::{ApiJson, ApiPath};
use crate::http::server::AppState;
use crate::reduce::Toggle;
use crate::session::{SessionError, SessionView};

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub sessions: usize,
}

/// Body for creating a session or re-analyzing one.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: String,
}

impl AnalyzeRequest {
    fn url(&self) -> Result<&str, ApiError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ApiError::MissingUrl);
        }
        Ok(url)
    }
}

#[derive(Debug, Serialize)]
pub struct SessionCreated {
    pub id: Uuid,
    pub view: SessionView,
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        sessions: state.sessions.len(),
    })
}

pub async fn create_session(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeRequest>,
) -> Result<(StatusCode, Json<SessionCreated>), ApiError> {
    let analysis = state.analyzer.analyze(request.url()?).await?;
    let (id, view) = state.sessions.create(analysis)?;

    Ok((StatusCode::CREATED, Json(SessionCreated { id, view })))
}

pub async fn get_session(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    Ok(Json(state.sessions.view(id)?))
}

/// Analyze a (possibly different) URL within an existing session.
///
/// When the analyzer fails the session is left exactly as it was.
pub async fn reanalyze(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<AnalyzeRequest>,
) -> Result<Json<SessionView>, ApiError> {
    let url = request.url()?;

    // Fail fast on unknown sessions before calling out.
    state.sessions.view(id)?;

    let analysis = state.analyzer.analyze(url).await?;
    Ok(Json(state.sessions.replace_analysis(id, analysis)?))
}

pub async fn toggle(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(toggle): ApiJson<Toggle>,
) -> Result<Json<SessionView>, ApiError> {
    Ok(Json(state.sessions.toggle(id, toggle)?))
}

pub async fn delete_session(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.sessions.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(SessionError::NotFound(id).into())
    }
}
