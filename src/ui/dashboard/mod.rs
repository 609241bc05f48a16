//! Sentiment dashboard
//!
//! Split into state, key handling, layout and per-panel components

pub mod components;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

pub use renderer::render_dashboard;
pub use state::DashboardState;
