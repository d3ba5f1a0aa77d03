//! nba-live-total: live NBA game total projection and hedge calculator
//!
//! This library provides the core components for:
//! - Game clock conversion to elapsed minutes
//! - Blended pace/pregame final-total projection with lean and risk flags
//! - Payout-equalizing hedge sizing with CLV-based suggestions
//! - Text reports and an append-only CSV snapshot log
//! - Interactive and one-shot CLI

pub mod cli;
pub mod config;
pub mod data;
pub mod hedge;
pub mod model;
pub mod report;
pub mod telemetry;
