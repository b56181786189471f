use crate::domain::booking::{Booking, BookingRequest, BookingResult, BookingResultCode};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{BookingProcessError, Result};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub availability_source: Arc<dyn DeskAvailabilitySource>,
    pub booking_store: Arc<dyn BookingStore>,
}

/// デスクを予約する（純粋な関数）
///
/// ビジネスルール：
/// - リクエストの日付に空きデスクがあれば、ソースが返した先頭の
///   デスクを採用して予約を保存する
/// - 空きがなければ何も保存しない
/// - どちらの場合も、リクエストの識別フィールドをコピーした
///   `BookingResult`を返す（コードで業務結果を区別する）
///
/// 空き確認と保存の間に原子性の保証はない。同時リクエスト間の
/// 二重予約防止はコラボレータ側の責務（例：条件付きINSERT）。
///
/// # 引数
/// * `deps` - サービスの依存関係
/// * `request` - 予約リクエスト（`None`は引数エラー）
///
/// # エラー
/// - InvalidArgument: リクエストが`None`（コラボレータは呼ばれない）
/// - AvailabilityError / BookingStoreError: コラボレータ障害をそのまま伝播
pub async fn book_desk(
    deps: &ServiceDependencies,
    request: Option<BookingRequest>,
) -> Result<BookingResult> {
    // 1. 引数ガード
    let request = request.ok_or(BookingProcessError::InvalidArgument("request"))?;

    // 2. 空き状況の照会（呼び出しはちょうど1回）
    let available_desks = deps
        .availability_source
        .get_available_desks(request.date)
        .await
        .map_err(BookingProcessError::AvailabilityError)?;

    // 3. 先頭のデスクを採用して保存（並び替えや絞り込みはしない）
    let code = match available_desks.first() {
        Some(desk) => {
            let booking = Booking::from_request(&request, desk.id);
            deps.booking_store
                .save(booking)
                .await
                .map_err(BookingProcessError::BookingStoreError)?;
            BookingResultCode::Success
        }
        None => BookingResultCode::NoDeskAvailable,
    };

    // 4. 結果は常にリクエストの識別フィールドを反映する
    Ok(BookingResult::from_request(&request, code))
}
