#![allow(dead_code)]

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BookingId, DeskId};

/// デスク予約リクエスト
///
/// 呼び出し側が構築する不変の入力。日付に時刻成分は持たない
/// （同日のデスク割り当てのみを扱うため`NaiveDate`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
}

/// 指定日に空いているデスク
///
/// 空き状況ソースから提供される。並び順の契約はなく、
/// プロセッサは先頭の要素をそのまま採用する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Desk {
    pub id: DeskId,
}

/// 予約レコード
///
/// デスクが空いていた場合にのみ作成され、ストアへ渡されて
/// 永続化される。作成後に変更されることはない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: BookingId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub desk_id: DeskId,
}

impl Booking {
    /// リクエストの識別フィールドをコピーして予約を作成する
    ///
    /// `desk_id`には空き状況ソースが返した先頭のデスクIDを設定する。
    pub fn from_request(request: &BookingRequest, desk_id: DeskId) -> Self {
        Self {
            booking_id: BookingId::new(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            date: request.date,
            desk_id,
        }
    }
}

/// 予約処理の業務結果コード
///
/// 業務上の結果のみを表す。技術的な失敗（ストア障害など）は
/// エラーとして伝播され、このコードには現れない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingResultCode {
    /// デスクが見つかり予約が保存された
    Success,
    /// 指定日に空きデスクがない
    NoDeskAvailable,
}

impl BookingResultCode {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingResultCode::Success => "success",
            BookingResultCode::NoDeskAvailable => "no_desk_available",
        }
    }
}

impl std::str::FromStr for BookingResultCode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "success" => Ok(BookingResultCode::Success),
            "no_desk_available" => Ok(BookingResultCode::NoDeskAvailable),
            _ => Err(format!("Invalid booking result code: {}", s)),
        }
    }
}

/// 予約処理の結果
///
/// 不変条件：識別フィールド（氏名・メール・日付）は、どのコード
/// パスでも入力リクエストの対応フィールドと常に一致する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingResult {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub code: BookingResultCode,
}

impl BookingResult {
    /// リクエストの識別フィールドをコピーして結果を作成する
    pub fn from_request(request: &BookingRequest, code: BookingResultCode) -> Self {
        Self {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            date: request.date,
            code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn request() -> BookingRequest {
        BookingRequest {
            first_name: "Edward".to_string(),
            last_name: "Aleonope".to_string(),
            email: "eddytonia@cardiff.co.uk".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 28).unwrap(),
        }
    }

    #[test]
    fn test_booking_copies_request_fields() {
        let req = request();
        let booking = Booking::from_request(&req, DeskId::new(7));

        assert_eq!(booking.first_name, req.first_name);
        assert_eq!(booking.last_name, req.last_name);
        assert_eq!(booking.email, req.email);
        assert_eq!(booking.date, req.date);
        assert_eq!(booking.desk_id, DeskId::new(7));
    }

    #[test]
    fn test_bookings_get_distinct_ids() {
        let req = request();
        let a = Booking::from_request(&req, DeskId::new(1));
        let b = Booking::from_request(&req, DeskId::new(1));
        assert_ne!(a.booking_id, b.booking_id);
    }

    #[test]
    fn test_result_copies_request_fields() {
        let req = request();
        let result = BookingResult::from_request(&req, BookingResultCode::NoDeskAvailable);

        assert_eq!(result.first_name, req.first_name);
        assert_eq!(result.last_name, req.last_name);
        assert_eq!(result.email, req.email);
        assert_eq!(result.date, req.date);
        assert_eq!(result.code, BookingResultCode::NoDeskAvailable);
    }

    #[test]
    fn test_result_code_as_str() {
        assert_eq!(BookingResultCode::Success.as_str(), "success");
        assert_eq!(
            BookingResultCode::NoDeskAvailable.as_str(),
            "no_desk_available"
        );
    }

    #[test]
    fn test_result_code_from_str() {
        assert_eq!(
            BookingResultCode::from_str("success").unwrap(),
            BookingResultCode::Success
        );
        assert_eq!(
            BookingResultCode::from_str("no_desk_available").unwrap(),
            BookingResultCode::NoDeskAvailable
        );
        assert!(BookingResultCode::from_str("pending").is_err());
    }
}
