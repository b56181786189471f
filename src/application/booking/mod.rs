mod errors;
mod processor;

#[allow(unused_imports)]
pub use errors::{BookingProcessError, Result};
#[allow(unused_imports)]
pub use processor::{ServiceDependencies, book_desk};
