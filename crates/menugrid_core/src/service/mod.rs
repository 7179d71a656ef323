//! Core use-case services.
//!
//! # Responsibility
//! - Compose parser, classifier and distributor into caller-facing APIs.
//! - Keep CLI and other front ends decoupled from pipeline internals.

pub mod menu_planner;
