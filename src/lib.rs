//! A terminal dessert clicker: sell the dessert on screen, watch revenue
//! grow, and unlock pricier desserts as sales pass fixed thresholds.

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod session;
pub mod share;
pub mod ui;
