#![allow(missing_docs)]

mod display;
mod memory;
mod monitor;
mod swap;
