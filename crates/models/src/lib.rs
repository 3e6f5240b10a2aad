pub mod booking;
pub mod db;
pub mod errors;
pub mod guest;
pub mod hotel;
pub mod user;
