pub mod bookings;
pub mod events;

pub use bookings::BookingStore;
pub use events::EventStore;
