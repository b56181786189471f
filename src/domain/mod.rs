pub mod booking;
pub mod value_objects;

pub use booking::*;
pub use value_objects::*;
