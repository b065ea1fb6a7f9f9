//! ATS scoring engine and the HTTP service around it.

pub mod ats;
pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
