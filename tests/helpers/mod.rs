//! Test helpers module
//!
//! This module provides catalogs, stores and observers shared by the
//! integration tests.

#![allow(dead_code)]

pub mod test_data;

pub use test_data::*;
