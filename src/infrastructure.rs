//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - HTTP access to the company API
//! - Debounce timers
//! - TUI foundation
//! - CLI argument processing and configuration

pub mod api;
pub mod cli;
pub mod config;
pub mod debounce;
pub mod tui;
