pub mod booking_store;
pub mod desk_availability;

#[allow(unused_imports)]
pub use booking_store::BookingStore;
#[allow(unused_imports)]
pub use desk_availability::DeskAvailability;
