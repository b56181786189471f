use crate::domain::booking::Desk;
use crate::domain::value_objects::DeskId;
use crate::ports::desk_availability::{DeskAvailabilitySource, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをDeskに変換する
fn map_row_to_desk(row: &PgRow) -> Desk {
    Desk {
        id: DeskId::new(row.get("desk_id")),
    }
}

/// DeskAvailabilitySourceのPostgreSQL実装
///
/// 指定日に予約行が存在しないデスクを空きとして返す。
/// 並び順はdesk_id昇順（安定した順序を提供するためで、
/// プロセッサ側に順序の前提はない）。
#[allow(dead_code)]
pub struct DeskAvailability {
    pool: PgPool,
}

#[allow(dead_code)]
impl DeskAvailability {
    /// PostgreSQLコネクションプールから新しいDeskAvailabilityを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeskAvailabilitySource for DeskAvailability {
    /// 指定日に空いているデスクを取得
    ///
    /// desksのうち、同日の予約がbookingsに存在しないものを返す。
    async fn get_available_desks(&self, date: NaiveDate) -> Result<Vec<Desk>> {
        let rows = sqlx::query(
            r#"
            SELECT d.desk_id
            FROM desks d
            WHERE NOT EXISTS (
                SELECT 1
                FROM bookings b
                WHERE b.desk_id = d.desk_id AND b.booking_date = $1
            )
            ORDER BY d.desk_id ASC
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_desk).collect())
    }
}
