pub mod commands;
pub mod config;
pub mod menu;
pub mod models;
pub mod render;
pub mod store;
