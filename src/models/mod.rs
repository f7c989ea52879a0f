//! Models loaded from outside the request cycle.

pub mod config;
