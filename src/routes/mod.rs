// Route exports
pub mod groups;
pub mod health;
pub mod profiles;

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use std::sync::Arc;
use crate::core::ProfileMatcher;
use crate::models::ErrorResponse;
use crate::services::{PostgresClient, PostgresError, SessionError, SessionUser, SessionVerifier};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub sessions: Arc<SessionVerifier>,
    pub matcher: ProfileMatcher,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure)
            .configure(profiles::configure)
            .configure(groups::configure),
    );
}

/// Build a JSON error body with the given status
pub(crate) fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        status_code: status.as_u16(),
    })
}

/// Resolve the signed-in user or produce a 401 response
pub(crate) fn current_user(state: &AppState, req: &HttpRequest) -> Result<SessionUser, HttpResponse> {
    let header = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    state.sessions.verify_header(header).map_err(|e| {
        match &e {
            SessionError::MissingToken => tracing::debug!("Rejected request to {}: {}", req.path(), e),
            _ => tracing::info!("Rejected session on {}: {}", req.path(), e),
        }
        error_response(StatusCode::UNAUTHORIZED, "Unauthorized", e.to_string())
    })
}

pub(crate) fn postgres_status(err: &PostgresError) -> StatusCode {
    match err {
        PostgresError::NotFound(_) => StatusCode::NOT_FOUND,
        PostgresError::Conflict(_) => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_status_mapping() {
        assert_eq!(postgres_status(&PostgresError::NotFound("x".into())), StatusCode::NOT_FOUND);
        assert_eq!(postgres_status(&PostgresError::Conflict("x".into())), StatusCode::CONFLICT);
        assert_eq!(
            postgres_status(&PostgresError::SqlxError(sqlx::Error::RowNotFound)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response_status() {
        let response = error_response(StatusCode::FORBIDDEN, "Forbidden", "nope");
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
