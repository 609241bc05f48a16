mod app;
pub mod dashboard;
pub mod snapshot;
pub mod splash;

pub use app::{App, UIConfig, run};
