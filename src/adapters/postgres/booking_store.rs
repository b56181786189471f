use crate::domain::booking::Booking;
use crate::ports::booking_store::{BookingStore as BookingStoreTrait, Result};
use async_trait::async_trait;
use sqlx::PgPool;

/// BookingStoreのPostgreSQL実装
///
/// 予約1件につき1行をINSERTする。コミットに失敗した場合は
/// エラーを返し、部分的な状態は残らない。
#[allow(dead_code)]
pub struct BookingStore {
    pool: PgPool,
}

#[allow(dead_code)]
impl BookingStore {
    /// PostgreSQLコネクションプールから新しいBookingStoreを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStoreTrait for BookingStore {
    /// 予約を1行として保存
    async fn save(&self, booking: Booking) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO bookings (
                booking_id,
                first_name,
                last_name,
                email,
                booking_date,
                desk_id
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(booking.booking_id.value())
        .bind(&booking.first_name)
        .bind(&booking.last_name)
        .bind(&booking.email)
        .bind(booking.date)
        .bind(booking.desk_id.value())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
