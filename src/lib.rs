//! Shift pay and personal budget ledger.
//!
//! This crate records work shifts and personal transactions, calculates
//! shift pay with a night differential for hours worked between 22:00 and
//! 05:00, aggregates pay by calendar month, and projects each month's pay
//! onto the following month's pay day alongside the user's budget.
//!
//! - [`calculation`] holds the pure pay, summary and projection functions
//! - [`models`] holds the persisted document types
//! - [`store`] loads, migrates and persists the document
//! - [`config`] loads storage settings and defaults from YAML

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
