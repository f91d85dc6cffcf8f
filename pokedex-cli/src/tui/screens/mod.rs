//! Screen renderers
pub mod browse;
pub mod detail;
