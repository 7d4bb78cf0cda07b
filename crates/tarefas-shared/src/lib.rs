pub mod api;
pub mod config;
pub mod confirm;
pub mod datetime;
pub mod task;
pub mod view;
