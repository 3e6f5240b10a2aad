pub mod booking_service;
pub mod guest_service;
pub mod hotel_service;
