//! PatchGuard engine - Core business logic
//!
//! This crate implements the main business logic for PatchGuard:
//! - The fingerprint registry (accepted digests per upstream symbol)
//! - Content digest computation
//! - The drift scan over vendored upstream trees
//! - The protocol-parser set check

pub mod fingerprint;
pub mod registry;
pub mod checker;
pub mod protocols;

pub use fingerprint::sha1_hex;
pub use registry::{Registry, RegistryEntry};
pub use checker::{CheckOutcome, DriftScan, ObservedFingerprint, SymbolCheck, observe, scan_all};
pub use protocols::{ProtocolScan, check_protocol_set, EXPECTED_PROTOCOLS};
