//! # risk-core
//!
//! Core record types, ID helpers, and error types for Riskline.
//!
//! This crate provides the foundational types shared across all Riskline crates:
//! - Record structs produced by the parsers (risks, controls, matrices)
//! - Routing enums for the risk and control sub-routers
//! - The keyword vocabulary driving heuristic classification
//! - ID formatting helpers
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod vocabulary;
