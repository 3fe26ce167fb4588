//! Calendar event endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::Response,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use dashify_core::event::EventType;

use crate::model::{EventUpdate, StoredEvent, default_color};
use crate::routes::{AppError, send_message, send_success};
use crate::state::{AppState, EventFilter};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/calendar", get(list_events).post(create_event))
        .route(
            "/api/calendar/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}

/// Bearer identity from the Authorization header, if any.
///
/// The token is opaque here: verifying it is the auth layer's job, scoping
/// by it is ours.
fn bearer_identity(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    kind: Option<EventType>,
}

/// GET /api/calendar — events, optionally filtered by date range and type
async fn list_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> Result<Response, AppError> {
    let filter = EventFilter {
        owner: bearer_identity(&headers),
        start: query.start,
        end: query.end,
        kind: query.kind,
    };

    let events = state.query(&filter).await;

    Ok(send_success(
        json!({ "events": events }),
        "Events retrieved",
        StatusCode::OK,
    ))
}

#[derive(Debug, Deserialize)]
pub struct CreateEventBody {
    title: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(rename = "startDate")]
    start_date: Option<DateTime<Utc>>,
    #[serde(rename = "endDate")]
    end_date: Option<DateTime<Utc>>,
    #[serde(rename = "allDay", default)]
    all_day: bool,
    color: Option<String>,
    #[serde(rename = "type", default)]
    kind: EventType,
    #[serde(default)]
    time: String,
}

/// POST /api/calendar
async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateEventBody>,
) -> Result<Response, AppError> {
    let title = match body.title {
        Some(title) if !title.trim().is_empty() => title,
        _ => return Err(AppError::bad_request("title is required")),
    };
    let Some(start_date) = body.start_date else {
        return Err(AppError::bad_request("startDate is required"));
    };

    let now = Utc::now();
    let event = StoredEvent {
        id: StoredEvent::new_id(),
        title,
        description: body.description,
        start_date,
        end_date: body.end_date,
        all_day: body.all_day,
        color: body.color.unwrap_or_else(default_color),
        kind: body.kind,
        time: body.time,
        owner: bearer_identity(&headers),
        created_at: now,
        updated_at: now,
    };

    let event = state.insert(event).await;

    Ok(send_success(
        json!({ "event": event }),
        "Event created",
        StatusCode::CREATED,
    ))
}

/// GET /api/calendar/:id
async fn get_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let owner = bearer_identity(&headers);

    match state.get(&id, owner.as_deref()).await {
        Some(event) => Ok(send_success(
            json!({ "event": event }),
            "Event retrieved",
            StatusCode::OK,
        )),
        None => Err(AppError::not_found("Event not found")),
    }
}

/// PUT /api/calendar/:id
async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(changes): Json<EventUpdate>,
) -> Result<Response, AppError> {
    let owner = bearer_identity(&headers);

    match state.update(&id, owner.as_deref(), &changes).await {
        Some(event) => Ok(send_success(
            json!({ "event": event }),
            "Event updated",
            StatusCode::OK,
        )),
        None => Err(AppError::not_found("Event not found")),
    }
}

/// DELETE /api/calendar/:id
async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let owner = bearer_identity(&headers);

    if state.delete(&id, owner.as_deref()).await {
        Ok(send_message("Event deleted"))
    } else {
        Err(AppError::not_found("Event not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_identity_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_identity(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok-1"));
        assert_eq!(bearer_identity(&headers), Some("tok-1".to_string()));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic xyz"));
        assert_eq!(bearer_identity(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_identity(&headers), None);
    }
}
