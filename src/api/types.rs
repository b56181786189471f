use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::booking::{BookingRequest, BookingResult, Desk};

/// デスク予約リクエストボディ（POST /bookings）
#[derive(Debug, Deserialize)]
pub struct BookDeskRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
}

impl BookDeskRequest {
    /// ドメインのBookingRequestに変換する
    pub fn to_booking_request(self) -> BookingRequest {
        BookingRequest {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            date: self.date,
        }
    }
}

/// 予約処理レスポンス
///
/// 結果コードに関わらず、リクエストの識別フィールドをそのまま返す。
#[derive(Debug, Serialize, Deserialize)]
pub struct BookDeskResponse {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub code: String,
}

impl From<BookingResult> for BookDeskResponse {
    fn from(result: BookingResult) -> Self {
        Self {
            first_name: result.first_name,
            last_name: result.last_name,
            email: result.email,
            date: result.date,
            code: result.code.as_str().to_string(),
        }
    }
}

/// 空きデスク一覧のクエリパラメータ（GET /desks）
#[derive(Debug, Deserialize)]
pub struct AvailableDesksQuery {
    /// 照会する日付（YYYY-MM-DD）
    pub date: NaiveDate,
}

/// 空きデスクレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct DeskResponse {
    pub desk_id: i32,
}

impl From<Desk> for DeskResponse {
    fn from(desk: Desk) -> Self {
        Self {
            desk_id: desk.id.value(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
