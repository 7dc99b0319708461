//! API endpoint integration tests
//!
//! Drives the full posts service router with in-memory collaborators.

#![allow(dead_code)]

mod auth;
mod common;
mod likes;
mod probes;
