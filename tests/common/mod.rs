//! Shared test support.
//!
//! Compiled into each integration test binary; not every binary uses every
//! helper.
#![allow(dead_code)]

pub mod mocks;
