//! Core types and page controllers for the COE analytics dashboard.
//!
//! This crate provides:
//! - `domain`: filter enums (vehicle class, aggregation, x-axis mode, view)
//! - `pages`: per-page filters, defaults, query derivation and validation
//! - `controller`: the generic page controller with request sequencing
//! - `models`: serde payloads for the three `/api/*` endpoints
//! - `nav`: tab table used by the router and navigation bar
//! - `api` (feature `api`): reqwest client shared by the web app and CLI

pub mod controller;
pub mod domain;
pub mod error;
pub mod models;
pub mod nav;
pub mod pages;
pub mod query;
pub mod status;

#[cfg(feature = "api")]
pub mod api;

pub use controller::{Completion, Controller, PendingRequest};
pub use error::{FetchError, ValidationError};
pub use status::FetchStatus;
