pub mod app;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ui;
pub mod utils;
pub mod ytdlp;
