//! Authentication module: admin login, token issuance and bearer-token checks.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
