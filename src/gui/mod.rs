//! GUI module - User interface components

mod app;
mod report_view;

pub use app::GenderGapApp;
pub use report_view::ReportView;
