use crate::domain::booking::Desk;
use crate::ports::desk_availability::{DeskAvailabilitySource, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;

/// DeskAvailabilitySourceのモック実装
///
/// 日付ごとの空きデスクを登録することで状態を持ったテストをサポート。
/// デスクは登録された順でそのまま返される。
#[allow(dead_code)]
pub struct DeskAvailability {
    desks: Mutex<HashMap<NaiveDate, Vec<Desk>>>,
}

#[allow(dead_code)]
impl DeskAvailability {
    pub fn new() -> Self {
        Self {
            desks: Mutex::new(HashMap::new()),
        }
    }

    /// テスト用に指定日の空きデスクを登録
    pub fn add_available_desk(&self, date: NaiveDate, desk: Desk) {
        self.desks.lock().unwrap().entry(date).or_default().push(desk);
    }
}

impl Default for DeskAvailability {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeskAvailabilitySource for DeskAvailability {
    /// 登録済みのデスクを登録順で返す
    async fn get_available_desks(&self, date: NaiveDate) -> Result<Vec<Desk>> {
        Ok(self
            .desks
            .lock()
            .unwrap()
            .get(&date)
            .cloned()
            .unwrap_or_default())
    }
}
