pub mod api;
pub mod client;
pub mod domain;
pub mod infra;
pub mod service;
