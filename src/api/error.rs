use crate::application::booking::BookingProcessError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(BookingProcessError);

impl From<BookingProcessError> for ApiError {
    fn from(err: BookingProcessError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self.0 {
            // 400 Bad Request - 必須引数の欠落
            BookingProcessError::InvalidArgument(param) => (
                StatusCode::BAD_REQUEST,
                "INVALID_ARGUMENT",
                format!("Invalid argument: {} is required", param),
            ),

            // 500 Internal Server Error - コラボレータ障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            BookingProcessError::AvailabilityError(ref e) => {
                tracing::error!("Desk availability source error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "AVAILABILITY_ERROR",
                    "Failed to query desk availability".to_string(),
                )
            }
            BookingProcessError::BookingStoreError(ref e) => {
                tracing::error!("Booking store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "BOOKING_STORE_ERROR",
                    "Failed to save booking".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
