//! Car Insurance Premium API Library
//!
//! This library computes automobile insurance premium quotes from car and
//! policy attributes and exposes the computation over HTTP.
//!
//! # Modules
//!
//! - `api`: Route table and OpenAPI document.
//! - `core`: Domain-layer namespace (car, calculator, services).
//! - `calculator`: Premium calculation pipeline.
//! - `car`: Car entity.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Request and response models.
//! - `services`: Quote orchestration.

pub mod api;
pub mod core;

pub mod calculator;
pub mod car;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
