//! Page components.

mod dashboard;
mod predict;

pub use dashboard::DashboardPage;
pub use predict::PredictPage;
