pub mod drivers;
pub mod meetings;
pub mod race_control;
pub mod sessions;
pub mod weather;
