//! CLI functionality for the Sahayak binary.

pub mod args;
pub mod commands;
pub mod output;
