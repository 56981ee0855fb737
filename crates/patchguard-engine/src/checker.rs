//! Drift scan over vendored upstream trees
//!
//! For every registered symbol: resolve it in the vendored source, extract
//! its source text, hash it, and test membership in the accepted digest
//! set. All failures are collected over a full pass; the scan never stops
//! at the first drifted symbol, so a single run shows the maintainer every
//! symbol that needs review.

use patchguard_core::{
    Config, Diagnostic, DiagnosticCode, Location, Severity, TargetSymbol,
};
use patchguard_python::{resolve_in_module, ParsedModule, PythonParser, ResolveError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::fingerprint::sha1_hex;
use crate::registry::{Registry, RegistryEntry};

/// Outcome of checking one registered symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Observed digest is in the accepted set
    Passed,

    /// Symbol resolved but its digest is not accepted
    Mismatch {
        /// The digest the vendored source currently hashes to
        observed: String,
    },

    /// Symbol could not be resolved to source text
    Unresolved {
        /// Why resolution failed
        reason: String,
    },
}

/// Per-symbol check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCheck {
    /// Fully-qualified display name
    pub qualname: String,

    /// What happened
    pub outcome: CheckOutcome,
}

/// Result of scanning one or more registries against vendored trees
#[derive(Debug, Clone, Default)]
pub struct DriftScan {
    /// Per-symbol results, in registry order
    pub results: Vec<SymbolCheck>,

    /// Diagnostics for every failure
    pub diagnostics: Vec<Diagnostic>,
}

impl DriftScan {
    /// Scan a registry against a vendored tree root
    pub fn run(registry: &Registry, vendor_root: &Path) -> Self {
        let mut cache = ModuleCache::new();
        let mut scan = DriftScan::default();

        for entry in registry.entries() {
            let (check, diagnostic) = check_symbol(&mut cache, entry, vendor_root);
            if let Some(diagnostic) = diagnostic {
                scan.diagnostics.push(diagnostic);
            }
            scan.results.push(check);
        }

        scan
    }

    /// True only when every symbol passed
    pub fn passed(&self) -> bool {
        self.results
            .iter()
            .all(|check| check.outcome == CheckOutcome::Passed)
    }

    /// Number of registered symbols checked
    pub fn symbols_checked(&self) -> usize {
        self.results.len()
    }

    /// Number of symbols whose digest was accepted
    pub fn symbols_passed(&self) -> usize {
        self.results
            .iter()
            .filter(|check| check.outcome == CheckOutcome::Passed)
            .count()
    }

    /// Count error diagnostics
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Fold another scan into this one, preserving order
    pub fn merge(mut self, other: DriftScan) -> Self {
        self.results.extend(other.results);
        self.diagnostics.extend(other.diagnostics);
        self
    }
}

/// Scan every registry against its configured vendored tree
///
/// The HTTP client registry runs first, then the SDK registry; one merged
/// scan comes back so a single report covers both trees.
pub fn scan_all(config: &Config) -> DriftScan {
    let http = DriftScan::run(&Registry::aiohttp(), &config.http_root());
    let sdk = DriftScan::run(&Registry::botocore(), &config.sdk_root());
    let scan = http.merge(sdk);

    tracing::info!(
        checked = scan.symbols_checked(),
        passed = scan.symbols_passed(),
        "drift scan finished"
    );
    scan
}

/// A symbol resolved and hashed against a vendored tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedFingerprint {
    /// Fully-qualified display name
    pub qualname: String,

    /// Current digest of the vendored source text
    pub digest: String,

    /// Vendored module file the symbol was found in
    pub file: PathBuf,

    /// 1-indexed line the definition starts on
    pub line: usize,
}

/// Resolve and hash a single symbol
///
/// Used by the drift scan per entry and by the `fingerprint` maintainer
/// command to print the digest a new upstream release should be recorded
/// under.
pub fn observe(symbol: &TargetSymbol, vendor_root: &Path) -> Result<ObservedFingerprint, Diagnostic> {
    let mut cache = ModuleCache::new();
    observe_cached(&mut cache, symbol, vendor_root)
}

fn observe_cached(
    cache: &mut ModuleCache,
    symbol: &TargetSymbol,
    vendor_root: &Path,
) -> Result<ObservedFingerprint, Diagnostic> {
    let path = vendor_root.join(symbol.module_rel_path());

    let module = match cache.get(&path) {
        Ok(module) => module,
        Err(diagnostic) => {
            let mut diagnostic = diagnostic.clone();
            diagnostic.message = format!("cannot fingerprint {}: {}", symbol.qualname(), diagnostic.message);
            return Err(diagnostic);
        }
    };

    // Both resolve failures (class gone, member gone) are lookup errors,
    // reported distinctly from a digest mismatch.
    let resolved = resolve_in_module(module, symbol).map_err(|e: ResolveError| {
        Diagnostic::new(DiagnosticCode::SymbolNotFound, Severity::Error, e.to_string())
            .with_location(Location::new(path.display().to_string()))
    })?;

    Ok(ObservedFingerprint {
        qualname: resolved.qualname,
        digest: sha1_hex(&resolved.source),
        file: path,
        line: resolved.line,
    })
}

fn check_symbol(
    cache: &mut ModuleCache,
    entry: &RegistryEntry,
    vendor_root: &Path,
) -> (SymbolCheck, Option<Diagnostic>) {
    let qualname = entry.symbol.qualname();

    let observed = match observe_cached(cache, &entry.symbol, vendor_root) {
        Ok(observed) => observed,
        Err(diagnostic) => {
            let check = SymbolCheck {
                qualname,
                outcome: CheckOutcome::Unresolved {
                    reason: diagnostic.message.clone(),
                },
            };
            return (check, Some(diagnostic));
        }
    };

    if entry.digests.accepts(&observed.digest) {
        tracing::debug!(symbol = %qualname, digest = %observed.digest, "fingerprint accepted");
        return (
            SymbolCheck {
                qualname,
                outcome: CheckOutcome::Passed,
            },
            None,
        );
    }

    let diagnostic = Diagnostic::new(
        DiagnosticCode::FingerprintMismatch,
        Severity::Error,
        format!(
            "digest of {} not found in accepted set: observed {}, accepted {}",
            qualname, observed.digest, entry.digests
        ),
    )
    .with_location(Location::with_line(
        observed.file.display().to_string(),
        observed.line,
    ))
    .with_comparison(entry.digests.to_string(), observed.digest.clone());

    (
        SymbolCheck {
            qualname,
            outcome: CheckOutcome::Mismatch {
                observed: observed.digest,
            },
        },
        Some(diagnostic),
    )
}

/// Per-scan cache of parsed modules
///
/// Many registered symbols share a defining module; each file is read and
/// parsed once per scan. Parse failures are cached too, so a broken module
/// is reported once per symbol without re-reading the file.
struct ModuleCache {
    parser: PythonParser,
    modules: HashMap<PathBuf, Result<ParsedModule, Diagnostic>>,
}

impl ModuleCache {
    fn new() -> Self {
        Self {
            parser: PythonParser::new(),
            modules: HashMap::new(),
        }
    }

    fn get(&mut self, path: &Path) -> &Result<ParsedModule, Diagnostic> {
        if !self.modules.contains_key(path) {
            let parsed = self.load(path);
            self.modules.insert(path.to_path_buf(), parsed);
        }
        &self.modules[path]
    }

    fn load(&self, path: &Path) -> Result<ParsedModule, Diagnostic> {
        if !path.is_file() {
            // A missing module file usually means the vendored tree is not
            // a source checkout; distinct from a symbol rename inside it.
            return Err(Diagnostic::new(
                DiagnosticCode::SourceUnavailable,
                Severity::Error,
                format!("module file not found: {}", path.display()),
            )
            .with_location(Location::new(path.display().to_string())));
        }

        self.parser.parse_file(path).map_err(|e| e.to_diagnostic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Registry, RegistryEntry};
    use patchguard_core::AcceptedDigests;
    use pretty_assertions::assert_eq;
    use std::fs;

    const CONFIG_PY: &str = "\
class Config:
    OPTION_DEFAULTS = {}

    def merge(self, other_config):
        config_options = copy.copy(self._user_provided_options)
        config_options.update(other_config._user_provided_options)
        return Config(**config_options)
";

    const MERGE_SOURCE: &str = "\
    def merge(self, other_config):
        config_options = copy.copy(self._user_provided_options)
        config_options.update(other_config._user_provided_options)
        return Config(**config_options)
";

    fn vendor_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let pkg = dir.path().join("botocore");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("config.py"), CONFIG_PY).unwrap();
        dir
    }

    fn merge_symbol() -> TargetSymbol {
        TargetSymbol::method("botocore.config", "Config", "merge")
    }

    fn registry_accepting(digest: &str) -> Registry {
        Registry::from_entries(vec![RegistryEntry {
            symbol: merge_symbol(),
            digests: AcceptedDigests::new([digest]),
        }])
    }

    #[test]
    fn known_good_tree_passes() {
        let vendor = vendor_tree();
        let registry = registry_accepting(&sha1_hex(MERGE_SOURCE));

        let scan = DriftScan::run(&registry, vendor.path());

        assert!(scan.passed());
        assert_eq!(scan.symbols_checked(), 1);
        assert_eq!(scan.symbols_passed(), 1);
        assert!(scan.diagnostics.is_empty());
    }

    #[test]
    fn removed_digest_fails_and_names_the_symbol() {
        let vendor = vendor_tree();
        let registry = registry_accepting("0000000000000000000000000000000000000000");

        let scan = DriftScan::run(&registry, vendor.path());

        assert!(!scan.passed());
        assert_eq!(scan.error_count(), 1);
        let diagnostic = &scan.diagnostics[0];
        assert_eq!(diagnostic.code, DiagnosticCode::FingerprintMismatch);
        assert!(diagnostic.message.contains("botocore.config.Config.merge"));
        assert_eq!(diagnostic.actual.as_deref(), Some(sha1_hex(MERGE_SOURCE)).as_deref());
    }

    #[test]
    fn renamed_symbol_reports_lookup_error_and_scan_continues() {
        let vendor = vendor_tree();
        let registry = Registry::from_entries(vec![
            RegistryEntry {
                symbol: TargetSymbol::method("botocore.config", "Config", "merge_renamed"),
                digests: AcceptedDigests::new([sha1_hex(MERGE_SOURCE)]),
            },
            RegistryEntry {
                symbol: merge_symbol(),
                digests: AcceptedDigests::new([sha1_hex(MERGE_SOURCE)]),
            },
        ]);

        let scan = DriftScan::run(&registry, vendor.path());

        assert!(!scan.passed());
        assert_eq!(scan.symbols_checked(), 2);
        assert_eq!(scan.symbols_passed(), 1);
        assert_eq!(scan.diagnostics[0].code, DiagnosticCode::SymbolNotFound);
    }

    #[test]
    fn missing_module_is_source_unavailable() {
        let vendor = tempfile::tempdir().unwrap();
        let registry = registry_accepting(&sha1_hex(MERGE_SOURCE));

        let scan = DriftScan::run(&registry, vendor.path());

        assert!(!scan.passed());
        assert_eq!(scan.diagnostics[0].code, DiagnosticCode::SourceUnavailable);
        assert!(scan.diagnostics[0].message.contains("botocore.config.Config.merge"));
    }

    #[test]
    fn broken_module_is_parse_error() {
        let vendor = tempfile::tempdir().unwrap();
        let pkg = vendor.path().join("botocore");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("config.py"), "class Config(:\n").unwrap();

        let registry = registry_accepting(&sha1_hex(MERGE_SOURCE));
        let scan = DriftScan::run(&registry, vendor.path());

        assert!(!scan.passed());
        assert_eq!(scan.diagnostics[0].code, DiagnosticCode::ModuleParseError);
    }

    #[test]
    fn scan_is_deterministic() {
        let vendor = vendor_tree();
        let registry = registry_accepting(&sha1_hex(MERGE_SOURCE));

        let first = DriftScan::run(&registry, vendor.path());
        let second = DriftScan::run(&registry, vendor.path());

        assert_eq!(first.results, second.results);
        assert_eq!(first.diagnostics, second.diagnostics);
    }

    #[test]
    fn observe_reports_digest_and_location() {
        let vendor = vendor_tree();
        let observed = observe(&merge_symbol(), vendor.path()).unwrap();

        assert_eq!(observed.qualname, "botocore.config.Config.merge");
        assert_eq!(observed.digest, sha1_hex(MERGE_SOURCE));
        assert_eq!(observed.line, 4);
    }
}
