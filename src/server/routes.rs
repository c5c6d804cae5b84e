//! Axum router construction and request handlers.

use super::{ApiError, AppState, ServerConfig};
use crate::access::{SECRET_HEADER, Session};
use crate::message::domain::{
    Message, MessageFields, MessageFilter, MessageId, MessageQuery, ProjectedMessage, SortOrder,
};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the complete router for the guestbook API.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/messages", get(list_messages).post(create_message))
        .route("/messages/{id}", get(get_message).put(update_message))
        .layer(cors_layer(config.cors_allowed_origins.as_deref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .unwrap_or_default()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let layer = CorsLayer::new().allow_headers(Any).allow_methods(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}

fn session_from(headers: &HeaderMap) -> Session {
    let secret = headers
        .get(SECRET_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    Session::from_optional(secret)
}

fn parse_id(raw: &str) -> Result<MessageId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::UnknownId(raw.to_owned()))
}

fn parse_fields(raw: Option<&str>) -> Result<MessageFields, ApiError> {
    raw.map_or(Ok(MessageFields::all()), |list| {
        MessageFields::parse_list(list).map_err(|err| ApiError::BadRequest(err.to_string()))
    })
}

/// Query parameters accepted by `GET /messages`.
#[derive(Debug, Default, Deserialize)]
struct ListParams {
    fields: Option<String>,
    order: Option<String>,
    limit: Option<usize>,
    contains: Option<String>,
    before: Option<DateTime<Utc>>,
}

impl ListParams {
    fn into_query(self) -> Result<(MessageQuery, MessageFields), ApiError> {
        let fields = parse_fields(self.fields.as_deref())?;

        let mut filter = MessageFilter::all();
        if let Some(needle) = self.contains.filter(|needle| !needle.is_empty()) {
            filter = filter.with_text_containing(needle);
        }
        if let Some(cutoff) = self.before {
            filter = filter.with_created_before(cutoff);
        }

        let order = self
            .order
            .as_deref()
            .map_or(Ok(SortOrder::Descending), |raw| raw.parse::<SortOrder>())
            .map_err(|err| ApiError::BadRequest(err.to_string()))?;

        let mut query = MessageQuery::new().with_filter(filter).with_order(order);
        if let Some(limit) = self.limit {
            query = query.with_limit(limit);
        }
        Ok((query, fields))
    }
}

#[derive(Debug, Default, Deserialize)]
struct GetParams {
    fields: Option<String>,
}

/// Body of create and edit requests.
#[derive(Debug, Deserialize)]
struct MessageBody {
    text: String,
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn list_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<ProjectedMessage>>, ApiError> {
    let Query(params) = params?;
    let (query, fields) = params.into_query()?;
    let messages = state
        .service
        .find(&query, fields, &session_from(&headers))
        .await?;
    Ok(Json(messages))
}

async fn get_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
    params: Result<Query<GetParams>, QueryRejection>,
) -> Result<Json<ProjectedMessage>, ApiError> {
    let id = parse_id(&raw_id)?;
    let Query(params) = params?;
    let fields = parse_fields(params.fields.as_deref())?;
    let message = state
        .service
        .get(id, fields, &session_from(&headers))
        .await?;
    Ok(Json(message))
}

async fn create_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<MessageBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let Json(body) = body?;
    let candidate = Message::new(body.text);
    let saved = state
        .service
        .save(&candidate, &session_from(&headers))
        .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

async fn update_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
    body: Result<Json<MessageBody>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let id = parse_id(&raw_id)?;
    let Json(body) = body?;
    let candidate = Message::existing(id, body.text);
    let saved = state
        .service
        .save(&candidate, &session_from(&headers))
        .await?;
    Ok(Json(saved))
}
