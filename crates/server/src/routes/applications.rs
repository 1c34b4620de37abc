//! Catalog endpoints: `PUT /create` and `POST /search`.
//!
//! Both take a YAML body shaped like an application record. Create validates
//! it and stores it; search treats every empty field as a wildcard and returns
//! the matches as a YAML sequence in insertion order.

use crate::error::{ServerError, ServerResult, YAML_CONTENT_TYPE};
use crate::state::ServerState;
use appmeta::{decode_record, encode_records, validate};
use axum::extract::rejection::StringRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use std::sync::Arc;

/// Turn a body-extraction failure into our error type so the client gets the
/// same YAML error envelope as for every other failure.
fn read_body(
    state: &ServerState,
    body: Result<String, StringRejection>,
) -> ServerResult<String> {
    body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge(state.config.max_body_size_mb)
        } else {
            ServerError::BadRequest(rejection.body_text())
        }
    })
}

/// Store a new application record.
///
/// Responds `201 Created` with an empty body, `400` when the payload cannot be
/// parsed or fails validation (every failing field is listed), and `409` when
/// the title is already taken.
pub async fn create_application(
    State(state): State<Arc<ServerState>>,
    body: Result<String, StringRejection>,
) -> ServerResult<impl IntoResponse> {
    let outcome = read_body(&state, body)
        .and_then(|body| Ok(decode_record(&body)?))
        .and_then(|record| {
            validate(record).map_err(|errors| {
                tracing::warn!(failures = errors.len(), "rejected invalid input");
                ServerError::from(errors)
            })
        });

    let record = match outcome {
        Ok(record) => record,
        Err(err) => {
            state.record_rejected_create();
            return Err(err);
        }
    };

    let title = record.title.clone();
    state.insert(record)?;
    tracing::info!(name = %title, "Object added");

    Ok(StatusCode::CREATED)
}

/// Find stored records matching a partial record.
///
/// No validation is applied: any field may be left out, and an empty body
/// matches everything.
pub async fn search_applications(
    State(state): State<Arc<ServerState>>,
    body: Result<String, StringRejection>,
) -> ServerResult<impl IntoResponse> {
    let body = read_body(&state, body)?;
    let query = decode_record(&body)?;
    tracing::debug!(?query, "received search query");

    let encoded = {
        let store = state.read_store()?;
        let matches = store.search(&query);
        tracing::info!(matches = matches.len(), "search completed");
        encode_records(&matches)?
    };
    state.record_search();

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, YAML_CONTENT_TYPE)],
        encoded,
    ))
}

/// `/create` with any method other than PUT.
pub async fn create_wrong_method() -> ServerError {
    ServerError::BadRequest("Please use a PUT request to create an application.".into())
}

/// `/search` with any method other than POST.
pub async fn search_wrong_method() -> ServerError {
    ServerError::BadRequest("Please use a POST request to search for an application.".into())
}
