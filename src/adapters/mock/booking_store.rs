use crate::domain::booking::Booking;
use crate::ports::booking_store::{BookingStore as BookingStoreTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock implementation of BookingStore
///
/// Records every saved booking in memory so tests can inspect
/// what was persisted and how many save calls occurred.
#[allow(dead_code)]
pub struct BookingStore {
    bookings: Mutex<Vec<Booking>>,
}

#[allow(dead_code)]
impl BookingStore {
    pub fn new() -> Self {
        Self {
            bookings: Mutex::new(Vec::new()),
        }
    }

    /// All bookings saved so far, in save order
    pub fn saved_bookings(&self) -> Vec<Booking> {
        self.bookings.lock().unwrap().clone()
    }

    /// Number of save calls that occurred
    pub fn save_count(&self) -> usize {
        self.bookings.lock().unwrap().len()
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingStoreTrait for BookingStore {
    /// Append the booking to the in-memory record
    async fn save(&self, booking: Booking) -> Result<()> {
        self.bookings.lock().unwrap().push(booking);
        Ok(())
    }
}
