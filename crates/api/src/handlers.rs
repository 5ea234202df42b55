pub mod booking;
pub mod webhook;
