//! Shared application service layer for ArchFlow.
//!
//! Frontends drive a [`DesignSession`] for interactive editing and use the
//! free functions here for file handling.

pub mod design_service;
pub mod error;
pub mod options;
pub mod session;

pub use design_service::{
    DesignFormat, default_export_file_name, load_catalog, load_design, save_design,
};
pub use error::{AppError, AppResult};
pub use options::{SessionOptions, load_options};
pub use session::{Created, DesignSession, DesignSummary, MutationOutcome};
