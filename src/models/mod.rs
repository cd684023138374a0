pub mod booking;
pub mod favorite;
pub mod filter;
pub mod inquiry;
pub mod property;
