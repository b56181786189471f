use crate::domain::booking::Booking;
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 予約ストアポート
///
/// 予約レコードの永続化を抽象化する。保存に成功するか
/// エラーを返すかのいずれかで、部分的な状態は残さない。
#[allow(dead_code)]
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// 予約を永続化する
    ///
    /// 成功した予約ごとにちょうど1回だけ呼び出される。
    /// 戻り値は成功/失敗のみで、呼び出し側は保存結果の内容を参照しない。
    async fn save(&self, booking: Booking) -> Result<()>;
}
