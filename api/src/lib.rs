//! Study tracker HTTP API.
//!
//! Serves a health check and five read-only `/api` endpoints (users, study
//! sessions, syllabus, calendar, analytics) that answer with mock payloads.

pub mod config;
pub mod dto;
pub mod errors;
pub mod routes;
pub mod server;
