//! Protocol-parser set check
//!
//! The wrapper special-cases every wire-protocol parser the SDK registers.
//! An upstream release that adds (or drops) a parser must fail this check
//! until the wrapper grows a matching override, so the live name set is
//! compared for exact equality, no hashing involved.

use patchguard_core::{Diagnostic, DiagnosticCode, Location, Severity};
use patchguard_python::{dict_string_keys, PythonParser};
use std::collections::BTreeSet;
use std::path::Path;

/// Protocol names the wrapper has overrides for
pub const EXPECTED_PROTOCOLS: [&str; 5] = ["ec2", "query", "json", "rest-json", "rest-xml"];

/// Result of comparing the vendored parser table against the supported set
#[derive(Debug, Clone)]
pub struct ProtocolScan {
    /// Names the wrapper supports
    pub expected: BTreeSet<String>,

    /// Names the vendored tree registers (`None` when extraction failed)
    pub actual: Option<BTreeSet<String>>,

    /// Diagnostics produced by the comparison
    pub diagnostics: Vec<Diagnostic>,
}

impl ProtocolScan {
    /// True when the sets are exactly equal
    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Compare the `PROTOCOL_PARSERS` keys in the vendored SDK tree against
/// the supported protocol set
pub fn check_protocol_set(sdk_root: &Path) -> ProtocolScan {
    let expected: BTreeSet<String> = EXPECTED_PROTOCOLS.iter().map(|s| s.to_string()).collect();
    let parsers_path = sdk_root.join("botocore").join("parsers.py");

    let module = match PythonParser::new().parse_file(&parsers_path) {
        Ok(module) => module,
        Err(e) => {
            return ProtocolScan {
                expected,
                actual: None,
                diagnostics: vec![e.to_diagnostic()],
            };
        }
    };

    let Some(keys) = dict_string_keys(&module, "PROTOCOL_PARSERS") else {
        let diagnostic = Diagnostic::new(
            DiagnosticCode::SymbolNotFound,
            Severity::Error,
            "PROTOCOL_PARSERS dict literal not found in botocore/parsers.py",
        )
        .with_location(Location::new(parsers_path.display().to_string()));
        return ProtocolScan {
            expected,
            actual: None,
            diagnostics: vec![diagnostic],
        };
    };

    let actual: BTreeSet<String> = keys.into_iter().collect();
    let mut diagnostics = Vec::new();

    if actual != expected {
        let unexpected: Vec<&str> = actual
            .difference(&expected)
            .map(|s| s.as_str())
            .collect();
        let missing: Vec<&str> = expected
            .difference(&actual)
            .map(|s| s.as_str())
            .collect();

        let mut parts = Vec::new();
        if !unexpected.is_empty() {
            parts.push(format!("unsupported upstream parsers: {}", unexpected.join(", ")));
        }
        if !missing.is_empty() {
            parts.push(format!("parsers gone upstream: {}", missing.join(", ")));
        }

        diagnostics.push(
            Diagnostic::new(
                DiagnosticCode::ProtocolSetMismatch,
                Severity::Error,
                format!("protocol parser set drifted: {}", parts.join("; ")),
            )
            .with_location(Location::new(parsers_path.display().to_string()))
            .with_comparison(
                EXPECTED_PROTOCOLS.join(", "),
                actual.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", "),
            ),
        );
    }

    ProtocolScan {
        expected,
        actual: Some(actual),
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_parsers(keys: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let pkg = dir.path().join("botocore");
        fs::create_dir_all(&pkg).unwrap();

        let mut source = String::from("PROTOCOL_PARSERS = {\n");
        for key in keys {
            source.push_str(&format!("    '{}': object,\n", key));
        }
        source.push_str("}\n");
        fs::write(pkg.join("parsers.py"), source).unwrap();
        dir
    }

    #[test]
    fn exact_set_passes() {
        let vendor = write_parsers(&["ec2", "query", "json", "rest-json", "rest-xml"]);
        let scan = check_protocol_set(vendor.path());
        assert!(scan.passed());
        assert_eq!(scan.actual.unwrap().len(), 5);
    }

    #[test]
    fn added_parser_fails() {
        let vendor = write_parsers(&["ec2", "query", "json", "rest-json", "rest-xml", "smithy-rpc-v2-cbor"]);
        let scan = check_protocol_set(vendor.path());
        assert!(!scan.passed());
        assert_eq!(scan.diagnostics[0].code, DiagnosticCode::ProtocolSetMismatch);
        assert!(scan.diagnostics[0].message.contains("smithy-rpc-v2-cbor"));
    }

    #[test]
    fn removed_parser_fails() {
        let vendor = write_parsers(&["ec2", "query", "json", "rest-json"]);
        let scan = check_protocol_set(vendor.path());
        assert!(!scan.passed());
        assert!(scan.diagnostics[0].message.contains("rest-xml"));
    }

    #[test]
    fn missing_table_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let pkg = dir.path().join("botocore");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("parsers.py"), "PARSERS = {}\n").unwrap();

        let scan = check_protocol_set(dir.path());
        assert!(!scan.passed());
        assert_eq!(scan.diagnostics[0].code, DiagnosticCode::SymbolNotFound);
    }
}
