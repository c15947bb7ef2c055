//! API request handlers.
//!
//! This module contains all HTTP request handlers organized by functionality.

/// Health check handler.
pub mod health;
/// Research pipeline handler.
pub mod research;
