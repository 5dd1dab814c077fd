mod dashboard;

pub use dashboard::SalesSummaryDashboard;
