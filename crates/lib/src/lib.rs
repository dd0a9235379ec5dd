//! Shared plumbing for the per-day solvers.

pub mod cli;
pub mod fs;
pub mod input;
pub mod supply;
