pub mod booking_store;
pub mod desk_availability;

// パブリックに型を再エクスポート
pub use booking_store::BookingStore as PostgresBookingStore;
pub use desk_availability::DeskAvailability as PostgresDeskAvailability;
