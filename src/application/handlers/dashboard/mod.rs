//! Dashboard query handlers.

mod get_dashboard;
mod get_global_view;

pub use get_dashboard::{DashboardRow, DashboardView, GetDashboardHandler, GetDashboardQuery};
pub use get_global_view::{GetGlobalViewHandler, GetGlobalViewQuery, GlobalView};
