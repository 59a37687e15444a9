//! Command-line workflow steps

pub mod orchestration;
