//! State management

pub mod app;
pub mod connection;
