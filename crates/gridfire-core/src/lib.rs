//! Core types and definitions for the GRIDFIRE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, the projector, enums, events, commands, snapshot views,
//! constants, and the session configuration. It has no dependency on any
//! runtime framework and performs no I/O.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod projector;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
