//! Command-line interface for eslint-audit.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`audit`] - The audit command implementation

pub mod args;
pub mod audit;

pub use args::Cli;
pub use audit::AuditCommand;
