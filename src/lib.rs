pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod notification;
pub mod store;
pub mod ui;
pub mod worker;
