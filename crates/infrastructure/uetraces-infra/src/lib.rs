pub mod instance;
pub mod launcher;
pub mod platform;
