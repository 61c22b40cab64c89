//! fintrack - terminal personal-finance tracker
//!
//! This library provides the core of the `fintrack` application: recording
//! expenses, keeping a calendar of custom events, and deriving spending
//! totals by payment type, category and month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, events, money, months)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `reports`: Spending aggregation
//! - `calendar`: Month grid construction
//! - `state`: Form state machines and month navigation
//! - `display`, `cli`, `tui`: Presentation
//! - `export`: CSV, JSON and YAML export
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::config::{paths::TrackerPaths, settings::Settings};
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod state;
pub mod storage;
pub mod tui;

pub use error::TrackerError;
