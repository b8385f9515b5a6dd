pub mod admin;
pub mod booking;
pub mod event;

pub use admin::{AdminAccount, LoginRequest};
pub use booking::{Booking, BookingRequest};
pub use event::{Event, EventFields};
