pub mod health;
pub mod round_trip;
