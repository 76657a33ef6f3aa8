//! Client integration tests
//!
//! Drives `ApiClient` end to end against a wiremock server standing in for
//! the job board backend: auth, jobs, error mapping, health.

#![allow(dead_code)]

mod auth;
mod common;
mod errors;
mod health;
mod jobs;
