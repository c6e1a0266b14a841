use std::fmt::Display;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use portal_database::database::lookups::LookupError;
use portal_database::sea_orm::DbErr;

/**
 * The user-facing error taxonomy. Every request either fully succeeds
 * or comes back as one of these with the data state unchanged; nothing
 * here is fatal to the process. Duplicate lookup adds are a benign
 * expected outcome, not an error, so they are not represented here.
 */
#[derive(Debug)]
pub enum PortalError {
    Validation(String),
    NotFound(String),
    Authorization(String),
    Transient(String),
}

impl Display for PortalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortalError::Validation(e) => write!(f, "{}", e),
            PortalError::NotFound(e) => write!(f, "{}", e),
            PortalError::Authorization(e) => write!(f, "{}", e),
            PortalError::Transient(e) => write!(f, "{}", e),
        }
    }
}

impl From<DbErr> for PortalError {
    fn from(e: DbErr) -> Self {
        PortalError::Transient(e.to_string())
    }
}

impl From<LookupError> for PortalError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::Validation(msg) => PortalError::Validation(msg),
            LookupError::NotFound(msg) => PortalError::NotFound(msg),
            LookupError::Db(db_err) => PortalError::Transient(db_err.to_string()),
        }
    }
}

impl ResponseError for PortalError {
    fn status_code(&self) -> StatusCode {
        match self {
            PortalError::Validation(_) => StatusCode::BAD_REQUEST,
            PortalError::NotFound(_) => StatusCode::NOT_FOUND,
            PortalError::Authorization(_) => StatusCode::FORBIDDEN,
            PortalError::Transient(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let PortalError::Transient(e) = self {
            log::error!("Transient failure: {}", e);
        }
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}
