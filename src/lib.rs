//! A todo list HTTP API layered as endpoints, service and repository over SQLite.

pub mod application;
pub mod config;
pub mod domain;
pub mod http;
pub mod infrastructure;
