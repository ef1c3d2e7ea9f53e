pub mod app;
pub mod app_core;
pub mod domain;
pub mod error;
pub mod launcher;
pub mod persistence;
pub mod ports;
pub mod viewmodel;

pub use app::TracesRecorderApplication;
pub use app_core::*;
pub use domain::{AppState, Phase, Status};
pub use error::LaunchRejection;
pub use ports::*;
pub use viewmodel::*;
