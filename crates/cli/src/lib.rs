//! Minibank CLI - rendering boundary
//!
//! This crate provides the `minibank` binary and the command layer that
//! turns structured core results into console text. The core decides,
//! this crate formats.

pub mod commands;
