//! Bytebeat CLI library.
//!
//! This crate provides the command implementations behind the `bytebeat`
//! binary: rendering individual formulas or the whole set to WAV files,
//! and listing the formula inventory.

pub mod commands;
