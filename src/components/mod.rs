pub mod analysis_report;
pub mod drop_zone;
pub mod sidebar;
pub mod status_badge;
