//! Enemy steering behavior for the GRIDFIRE simulation.
//!
//! Pure functions that compute per-tick movement for enemy entities based
//! on their kind and situation. No pool or engine dependency — plain data
//! in, plain data out, so the sim crate's update sweep stays a thin loop.

pub mod profiles;
pub mod steering;

#[cfg(test)]
mod tests;
