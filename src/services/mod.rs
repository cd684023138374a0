pub mod bookings;
pub mod favorites;
pub mod inquiries;
pub mod properties;
