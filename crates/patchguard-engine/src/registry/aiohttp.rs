//! Accepted digests for the vendored aiohttp tree
//!
//! The read-timeout patch reaches into `ClientResponse._body`, so the whole
//! class is fingerprinted. Two upstream releases are currently supported.

use super::{entry, RegistryEntry};
use patchguard_core::TargetSymbol as S;

pub(super) fn entries() -> Vec<RegistryEntry> {
    vec![entry(
        S::class("aiohttp.client_reqrep", "ClientResponse"),
        &[
            "e178726065b609c69a1c02e8bb78f22efce90792",
            "225e8033bfcff8cccbc2e975d7bd0c7993f14366",
        ],
    )]
}
