use axum::http::StatusCode;

pub mod health;
pub mod sections;

// Common error mappers
pub fn internal_error<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    tracing::error!(error = %e, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, format!("internal error: {e}"))
}

pub fn bad_request<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, e.to_string())
}

pub fn not_found<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, e.to_string())
}
