//! Choice Collector - Authentication tree step prompting for a single choice
//!
//! This crate implements a two-pass decision step: the first pass renders a
//! prompt from the engine's shared state and asks the engine to collect a
//! choice, the second pass routes to the outcome matching that choice.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
