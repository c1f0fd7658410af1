//! Test doubles shared by unit and integration tests.

mod stubs;

pub use stubs::*;
