use crate::domain::booking::Desk;
use async_trait::async_trait;
use chrono::NaiveDate;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// デスク空き状況ソースポート
///
/// 予約コンテキストとデスク在庫コンテキストの境界を維持する。
/// 予約コンテキストは空いているデスクのIDのみを知る。
#[allow(dead_code)]
#[async_trait]
pub trait DeskAvailabilitySource: Send + Sync {
    /// 指定日に空いているすべてのデスクを取得する
    ///
    /// 空のベクタは空きなしを意味する。並び順の契約はなく、
    /// 「先頭の要素が選ばれる」以上の前提を置いてはならない。
    async fn get_available_desks(&self, date: NaiveDate) -> Result<Vec<Desk>>;
}
