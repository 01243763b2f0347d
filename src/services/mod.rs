pub mod chart_service;
pub mod comparison_service;
pub mod resolver_service;
pub mod series_service;
pub mod summary_service;
