//! Summaries computed over the fixture collections for the dashboard views.
//!
//! - [`heatmap`]: failure counts grouped by category and weekday
//! - [`trend`]: per-period failure series scaled for bar rendering
//! - [`compliance`]: certification status totals and the headline percentage
//! - [`stats`]: stat-card figures and the leaderboard cut

pub mod compliance;
pub mod heatmap;
pub mod stats;
pub mod trend;

pub use compliance::{ComplianceHealth, ComplianceSummary};
pub use heatmap::{HeatLevel, Heatmap};
pub use stats::{DashboardStats, RankedEntry, top_entries};
pub use trend::TrendChart;
