use crate::application::booking::{ServiceDependencies, book_desk as execute_book_desk};
use crate::domain::booking::BookingResultCode;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{AvailableDesksQuery, BookDeskRequest, BookDeskResponse, DeskResponse},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /bookings - デスクを予約
///
/// リクエストの日付に空きデスクがあれば先頭のデスクを割り当てて保存する。
///
/// レスポンス:
/// - 201 Created: デスクが割り当てられ予約が保存された（code=success）
/// - 409 Conflict: 指定日に空きデスクがない（code=no_desk_available）
///
/// どちらの場合もボディはリクエストの識別フィールドと結果コードを返す。
pub async fn book_desk(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookDeskRequest>,
) -> Result<(StatusCode, Json<BookDeskResponse>), ApiError> {
    let request = req.to_booking_request();

    let result = execute_book_desk(&state.service_deps, Some(request)).await?;

    let status = match result.code {
        BookingResultCode::Success => StatusCode::CREATED,
        BookingResultCode::NoDeskAvailable => StatusCode::CONFLICT,
    };

    Ok((status, Json(BookDeskResponse::from(result))))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /desks - 指定日の空きデスク一覧を取得
///
/// クエリパラメータ:
/// - date: 照会する日付（YYYY-MM-DD）（必須）
///
/// 空き状況ソースが返した順序をそのまま返す。
pub async fn list_available_desks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AvailableDesksQuery>,
) -> Result<Json<Vec<DeskResponse>>, QueryError> {
    let desks = state
        .service_deps
        .availability_source
        .get_available_desks(query.date)
        .await
        .map_err(|e| QueryError::InternalError(e.to_string()))?;

    Ok(Json(desks.into_iter().map(DeskResponse::from).collect()))
}

// ============================================================================
// Error types
// ============================================================================

/// クエリハンドラー用のエラー型
#[derive(Debug)]
pub enum QueryError {
    BadRequest(String),
    InternalError(String),
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            QueryError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            QueryError::InternalError(msg) => {
                // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
                tracing::error!("Internal error in query handler: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(super::types::ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
