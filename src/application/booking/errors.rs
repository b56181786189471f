use thiserror::Error;

/// 予約処理アプリケーション層のエラー
///
/// `BookingResult`には技術的な失敗を一切エンコードしない。
/// コラボレータ由来のエラーは変換せず、そのままソースとして保持する。
#[derive(Debug, Error)]
pub enum BookingProcessError {
    /// 必須引数が欠けている（コラボレータ呼び出し前に検出される）
    #[error("Invalid argument: {0} is required")]
    InvalidArgument(&'static str),

    /// 空き状況ソースのエラー
    #[error("Desk availability source error")]
    AvailabilityError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 予約ストアのエラー
    #[error("Booking store error")]
    BookingStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookingProcessError>;
