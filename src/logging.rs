//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = match read_body(body).await {
        Ok(bytes) => bytes,
        Err(response) => return response,
    };
    log_request(&parts, &String::from_utf8_lossy(&body_bytes));

    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match read_body(body).await {
        Ok(bytes) => bytes,
        Err(response) => return response,
    };
    log_response(&parts, &String::from_utf8_lossy(&body_bytes));

    Response::from_parts(parts, Body::from(body_bytes))
}

async fn read_body(body: Body) -> Result<Bytes, Response> {
    axum::body::to_bytes(body, usize::MAX).await.map_err(|error| {
        tracing::error!("could not read body: {error}");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    })
}

/// The number of bytes of a body that is logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Cut `body` down to at most [LOG_BODY_LENGTH_LIMIT] bytes without splitting a character.
fn truncate_body(body: &str) -> Option<&str> {
    if body.len() <= LOG_BODY_LENGTH_LIMIT {
        return None;
    }

    let mut end = LOG_BODY_LENGTH_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    Some(&body[..end])
}

fn log_request(parts: &axum::http::request::Parts, body: &str) {
    match truncate_body(body) {
        Some(truncated) => {
            tracing::info!("Received request: {parts:#?}\nbody: {truncated}...");
            tracing::debug!("Full request body: {body:?}");
        }
        None => tracing::info!("Received request: {parts:#?}\nbody: {body:?}"),
    }
}

fn log_response(parts: &axum::http::response::Parts, body: &str) {
    match truncate_body(body) {
        Some(truncated) => {
            tracing::info!("Sending response: {parts:#?}\nbody: {truncated}...");
            tracing::debug!("Full response body: {body:?}");
        }
        None => tracing::info!("Sending response: {parts:#?}\nbody: {body:?}"),
    }
}
