pub mod driver;
pub mod error;
pub mod meeting;
pub mod race_control;
pub mod session;
pub mod weather;
