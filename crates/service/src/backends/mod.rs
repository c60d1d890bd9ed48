//! Vendor service implementations.
//!
//! | Backend | Description |
//! |---------|-------------|
//! | [`memory`] | Process-local map, for development and tests |

pub mod memory;
