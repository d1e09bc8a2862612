//! End-to-end run: fixed configuration, driver and the printed report.

pub(crate) mod config;
pub(crate) mod driver;
pub(crate) mod report;
