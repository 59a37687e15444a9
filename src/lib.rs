pub mod artifacts;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod gate;
pub mod git;
pub mod template;
pub mod tools;
pub mod ui;

pub use error::{ReleaseError, Result};
pub use gate::{GateConfig, ReleaseGate, UploadPlan};
