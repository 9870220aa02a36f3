// Club dashboard: summary counts over the club's own listings, application
// review, and the talent-side apply action that feeds it.

pub mod apply;
pub mod review;
pub mod stats;

pub use apply::submit_application;
pub use review::review_application;
pub use stats::{
    compute_dashboard, compute_stats, load_dashboard, ClubDashboard, DashboardStats,
    RecentApplication,
};
