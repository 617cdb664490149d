//! vitalscreen-app: the library behind the VitalScreen screening page.
//!
//! This crate provides the per-disease form schemas, the categorical
//! encoder, classifier artifact loading with a path-keyed cache, the
//! single-row prediction flow, and the maud-rendered page the hosting
//! binary serves.
//!
//! The design favors small, testable modules: every component can be
//! exercised without a running server or a real artifact on disk.
pub mod app;
pub mod config;
pub mod encode;
pub mod error;
pub mod models;
pub mod predictor;
pub mod render;
pub mod schema;
