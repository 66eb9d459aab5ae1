pub mod datetime;
pub mod slug;
