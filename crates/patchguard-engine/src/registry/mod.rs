//! The fingerprint registry
//!
//! The registry is the compatibility contract with the vendored upstream
//! trees: for every symbol the wrapping project monkeypatches, the set of
//! source digests its patch is known to work against.
//!
//! How to update when the scan starts failing on a new upstream release:
//!
//! 1. Supporting an additional upstream version: confirm the patch still
//!    covers the changed upstream code, then APPEND the new digest to the
//!    symbol's set.
//! 2. Raising the minimum supported upstream version: confirm the patch
//!    against the new code, then REPLACE the symbol's digests with the
//!    current ones.
//!
//! REPLACE means dropping support for older upstream releases; the pinned
//! version floor must be raised in the same change.

mod aiohttp;
mod botocore;

use patchguard_core::{AcceptedDigests, TargetSymbol};

/// One registered symbol with its accepted digest set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    /// The upstream symbol being fingerprinted
    pub symbol: TargetSymbol,

    /// Digests the symbol may hash to
    pub digests: AcceptedDigests,
}

/// Ordered, immutable mapping from target symbols to accepted digests
///
/// Built once from static data; never mutated during a scan.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    /// Registry for the vendored botocore tree
    pub fn botocore() -> Self {
        Self {
            entries: botocore::entries(),
        }
    }

    /// Registry for the vendored aiohttp tree
    pub fn aiohttp() -> Self {
        Self {
            entries: aiohttp::entries(),
        }
    }

    /// Build a registry from explicit entries
    pub fn from_entries(entries: Vec<RegistryEntry>) -> Self {
        Self { entries }
    }

    /// Entries in registration order
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Accepted digests for a symbol, or `None` when it is not tracked
    pub fn lookup(&self, symbol: &TargetSymbol) -> Option<&AcceptedDigests> {
        self.entries
            .iter()
            .find(|entry| &entry.symbol == symbol)
            .map(|entry| &entry.digests)
    }

    /// Find an entry by its fully-qualified display name
    pub fn find_qualname(&self, qualname: &str) -> Option<&RegistryEntry> {
        self.entries
            .iter()
            .find(|entry| entry.symbol.qualname() == qualname)
    }

    /// Number of registered symbols
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no symbol is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shorthand used by the data modules
fn entry(symbol: TargetSymbol, digests: &[&str]) -> RegistryEntry {
    RegistryEntry {
        symbol,
        digests: AcceptedDigests::new(digests.iter().copied()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn botocore_registry_is_populated() {
        let registry = Registry::botocore();
        assert!(registry.len() > 150);
        assert!(!registry.is_empty());
    }

    #[test]
    fn lookup_by_symbol() {
        let registry = Registry::botocore();
        let digests = registry
            .lookup(&TargetSymbol::method("botocore.config", "Config", "merge"))
            .unwrap();
        assert!(digests.accepts("c3dd8c3ffe0da86953ceba4a35267dfb79c6a2c8"));
    }

    #[test]
    fn untracked_symbol_is_none() {
        let registry = Registry::botocore();
        assert!(registry
            .lookup(&TargetSymbol::function("botocore.config", "not_a_symbol"))
            .is_none());
    }

    #[test]
    fn find_by_qualname() {
        let registry = Registry::botocore();
        let entry = registry
            .find_qualname("botocore.client.BaseClient._make_api_call")
            .unwrap();
        assert!(entry.digests.accepts("ba323d78c89c292efe7fec6b74fe6c258b63d565"));
    }

    #[test]
    fn property_accessors_are_separate_entries() {
        let registry = Registry::botocore();
        let getter = registry
            .find_qualname("botocore.credentials.RefreshableCredentials.access_key.fget")
            .unwrap();
        let setter = registry
            .find_qualname("botocore.credentials.RefreshableCredentials.access_key.fset")
            .unwrap();
        assert_ne!(getter.symbol, setter.symbol);
    }

    #[test]
    fn aiohttp_registry_tracks_client_response() {
        let registry = Registry::aiohttp();
        assert_eq!(registry.len(), 1);
        let digests = registry
            .lookup(&TargetSymbol::class("aiohttp.client_reqrep", "ClientResponse"))
            .unwrap();
        assert_eq!(digests.len(), 2);
    }
}
