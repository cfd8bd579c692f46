//! HTTP API: stock item search and catalog lifecycle ingestion.

pub mod app;
pub mod config;
