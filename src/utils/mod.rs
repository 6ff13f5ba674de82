//! Utility functions and modules for the darwin-memwatch crate.
//!
//! - `bindings`: FFI bindings for the Mach and sysctl calls behind the
//!   memory sampler

pub(crate) mod bindings;
