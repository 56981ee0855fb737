//! PatchGuard Core
//!
//! Core domain model with stable, versioned types.
//! Never rename diagnostic codes - they are part of the public API.

pub mod diagnostic;
pub mod symbol;
pub mod report;
pub mod config;

pub use diagnostic::{Diagnostic, DiagnosticCode, Severity, Location};
pub use symbol::{AccessorKind, TargetSymbol, AcceptedDigests};
pub use report::{Report, ReportVersion};
pub use config::{Config, VendorConfig};
