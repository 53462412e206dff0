//! Per-operation services.

pub mod analytics_service;
pub mod paste_service;
pub mod shorten_service;

pub use analytics_service::AnalyticsService;
pub use paste_service::PasteService;
pub use shorten_service::ShortenService;
