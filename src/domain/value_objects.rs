#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// デスクID - デスク在庫コンテキストへの参照
///
/// 在庫側が採番する整数ID。予約コンテキストはIDのみを知り、
/// デスクの設置場所などの詳細は知らない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeskId(i32);

impl DeskId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// 予約ID - 予約レコードの識別子
///
/// 永続化ストアの主キーとして予約作成時に採番される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(Uuid);

impl BookingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}
