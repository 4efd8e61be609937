//! Personal task manager: tasks grouped into categories, dashboard filters and
//! stats, and a profile completion rate, all over an injectable [`client::DataClient`].

pub mod cli;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod output;
pub mod sort;
pub mod stats;
pub mod views;
