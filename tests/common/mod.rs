//! Common test utilities for the launcher configuration core.
//!
//! - `fixtures`: Temporary launcher-config directories and preference stores
#![allow(dead_code)]


pub fn init_test_logging() {
    launchconf::logging::init_for_tests();
}
