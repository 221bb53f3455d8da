use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::game::GameFieldError;
use crate::protocol::actions::ActionError;
use crate::protocol::{ACTION_VERSION, HEADER_ACTION_VERSION};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{detail}")]
    Validation { detail: String },
    #[error("Invalid account provided: not a valid public key")]
    InvalidAccount,
    #[error("Unknown signature status")]
    UnknownSignature,
    #[error("Unable to confirm the transaction")]
    Unconfirmed,
    #[error("No game found for id `{id}`")]
    GameNotFound { id: String },
    #[error("Record store error: {detail}")]
    Store { detail: String },
    #[error("Ledger RPC error: {detail}")]
    Rpc { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. }
            | AppError::InvalidAccount
            | AppError::UnknownSignature
            | AppError::Unconfirmed => StatusCode::BAD_REQUEST,
            AppError::GameNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Store { .. }
            | AppError::Rpc { .. }
            | AppError::Config { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation {
            detail: detail.into(),
        }
    }

    pub fn game_not_found(id: impl Into<String>) -> Self {
        Self::GameNotFound { id: id.into() }
    }

    pub fn store(detail: String) -> Self {
        Self::Store { detail }
    }

    pub fn rpc(detail: String) -> Self {
        Self::Rpc { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }
}

impl From<GameFieldError> for AppError {
    fn from(e: GameFieldError) -> Self {
        AppError::validation(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::store(format!("redis error: {e}"))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::rpc(format!("request failed: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        HttpResponse::build(status)
            .insert_header((HEADER_ACTION_VERSION, ACTION_VERSION))
            .json(ActionError {
                message: self.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_failures_map_to_400() {
        assert_eq!(
            AppError::validation("missing field").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::InvalidAccount.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::UnknownSignature.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Unconfirmed.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_game_maps_to_404() {
        assert_eq!(
            AppError::game_not_found("abc").status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn collaborator_faults_map_to_500() {
        assert_eq!(
            AppError::store("down".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::rpc("down".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_messages_match_the_wire_contract() {
        assert_eq!(
            AppError::InvalidAccount.to_string(),
            "Invalid account provided: not a valid public key"
        );
        assert_eq!(
            AppError::UnknownSignature.to_string(),
            "Unknown signature status"
        );
        assert_eq!(
            AppError::Unconfirmed.to_string(),
            "Unable to confirm the transaction"
        );
    }
}
