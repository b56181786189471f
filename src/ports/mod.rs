#[allow(unused_imports)]
pub mod booking_store;
#[allow(unused_imports)]
pub mod desk_availability;

#[allow(unused_imports)]
pub use booking_store::*;
#[allow(unused_imports)]
pub use desk_availability::*;
