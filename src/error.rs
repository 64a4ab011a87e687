// region:    --- Imports
use crate::store::StoreError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

// endregion: --- Imports

// region:    --- App Error
/// 클라이언트에 `{"error": "..."}` 형태로 내려가는 오류
///
/// `Display` 결과가 그대로 응답 메시지가 된다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Access denied")]
    AccessDenied,

    #[error("Invalid token")]
    InvalidToken,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    MalformedPayload(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Error creating auction")]
    AuctionCreation,

    #[error("Auction not found")]
    AuctionNotFound,

    #[error("Auction is closed")]
    AuctionClosed,

    #[error("Bid must be higher than current bid")]
    BidTooLow,

    #[error("Invalid bid amount")]
    InvalidBidAmount,

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::AccessDenied => StatusCode::UNAUTHORIZED,
            // 저장소 장애도 400. 상세 내용은 로그에만 남긴다.
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Duplicate(message) => AppError::Validation(message),
            StoreError::Backend(message) => AppError::Internal(message),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedPayload(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(detail) = &self {
            error!("{:<12} --> 내부 오류: {}", "Error", detail);
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}

// endregion: --- App Error
