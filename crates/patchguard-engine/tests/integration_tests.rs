//! Integration tests for the drift scan over miniature vendored trees

use patchguard_core::{AcceptedDigests, Config, DiagnosticCode, Report, TargetSymbol, VendorConfig};
use patchguard_engine::{
    check_protocol_set, observe, scan_all, sha1_hex, CheckOutcome, DriftScan, Registry,
    RegistryEntry,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

const CONFIG_PY: &str = "\
import copy


class Config:
    def __init__(self, *args, **kwargs):
        self._user_provided_options = kwargs

    def merge(self, other_config):
        config_options = copy.copy(self._user_provided_options)
        config_options.update(other_config._user_provided_options)
        return Config(**config_options)
";

// Digest of the merge method as extracted above (whole lines, trailing
// newline included)
const MERGE_DIGEST: &str = "4a98435f22830eb8de707d6e1a528f8b11f287f6";

// The genuine upstream accessor text; its digest is the one recorded in
// the registry data for RefreshableCredentials.access_key.fset
const CREDENTIALS_PY: &str = "\
class RefreshableCredentials:
    @property
    def access_key(self):
        self._refresh()
        return self._access_key

    @access_key.setter
    def access_key(self, value):
        self._access_key = value
";

const UPSTREAM_SETTER_DIGEST: &str = "edc4a25baef877a9662f68cd9ccefcd33a81bab7";

const CLIENT_REQREP_PY: &str = "\
class ClientResponse:
    def __init__(self, method, url):
        self._body = None

    def release(self):
        self._body = None
        return self._released
";

const CLIENT_RESPONSE_DIGEST: &str = "9d0895256ad9f3517feeeb131615f78108f1ffca";

const PARSERS_PY: &str = "\
PROTOCOL_PARSERS = {
    'ec2': object,
    'query': object,
    'json': object,
    'rest-json': object,
    'rest-xml': object,
}
";

fn write_module(root: &Path, rel: &str, source: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, source).unwrap();
}

fn sdk_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_module(dir.path(), "botocore/__init__.py", "__version__ = '1.34.2'\n");
    write_module(dir.path(), "botocore/config.py", CONFIG_PY);
    write_module(dir.path(), "botocore/credentials.py", CREDENTIALS_PY);
    write_module(dir.path(), "botocore/parsers.py", PARSERS_PY);
    dir
}

fn http_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_module(dir.path(), "aiohttp/__init__.py", "__version__ = '3.9.1'\n");
    write_module(dir.path(), "aiohttp/client_reqrep.py", CLIENT_REQREP_PY);
    dir
}

fn entry(symbol: TargetSymbol, digests: &[&str]) -> RegistryEntry {
    RegistryEntry {
        symbol,
        digests: AcceptedDigests::new(digests.iter().copied()),
    }
}

#[test]
fn known_good_trees_pass_end_to_end() {
    let sdk = sdk_tree();
    let http = http_tree();

    let sdk_registry = Registry::from_entries(vec![
        entry(
            TargetSymbol::method("botocore.config", "Config", "merge"),
            &[MERGE_DIGEST],
        ),
        entry(
            TargetSymbol::property_setter("botocore.credentials", "RefreshableCredentials", "access_key"),
            &[UPSTREAM_SETTER_DIGEST],
        ),
    ]);
    let http_registry = Registry::from_entries(vec![entry(
        TargetSymbol::class("aiohttp.client_reqrep", "ClientResponse"),
        &[CLIENT_RESPONSE_DIGEST],
    )]);

    let scan = DriftScan::run(&http_registry, http.path())
        .merge(DriftScan::run(&sdk_registry, sdk.path()));

    assert!(scan.passed());
    assert_eq!(scan.symbols_checked(), 3);
    assert_eq!(scan.symbols_passed(), 3);
    assert!(scan.diagnostics.is_empty());
}

#[test]
fn upstream_accessor_text_matches_recorded_digest() {
    // The vendored accessor source above is the upstream text the registry
    // digest was recorded from; resolving it must reproduce that digest.
    let sdk = sdk_tree();
    let symbol =
        TargetSymbol::property_setter("botocore.credentials", "RefreshableCredentials", "access_key");

    let observed = observe(&symbol, sdk.path()).unwrap();
    assert_eq!(observed.digest, UPSTREAM_SETTER_DIGEST);

    let recorded = Registry::botocore();
    assert!(recorded.lookup(&symbol).unwrap().accepts(&observed.digest));
}

#[test]
fn edited_body_fails_and_reports_the_new_digest() {
    let sdk = sdk_tree();
    // A one-character rename of a local variable
    write_module(
        sdk.path(),
        "botocore/config.py",
        &CONFIG_PY.replace("config_options", "config_optionz"),
    );

    let registry = Registry::from_entries(vec![entry(
        TargetSymbol::method("botocore.config", "Config", "merge"),
        &[MERGE_DIGEST],
    )]);

    let scan = DriftScan::run(&registry, sdk.path());

    assert!(!scan.passed());
    let CheckOutcome::Mismatch { observed } = &scan.results[0].outcome else {
        panic!("expected a digest mismatch");
    };
    assert_ne!(observed, MERGE_DIGEST);

    let diagnostic = &scan.diagnostics[0];
    assert_eq!(diagnostic.code, DiagnosticCode::FingerprintMismatch);
    assert_eq!(diagnostic.actual.as_deref(), Some(observed.as_str()));
    assert!(diagnostic.message.contains("botocore.config.Config.merge"));
    assert!(diagnostic.message.contains(observed.as_str()));
}

#[test]
fn appended_digest_extends_support_to_a_second_release() {
    let sdk = sdk_tree();
    let edited = CONFIG_PY.replace("config_options", "merged_options");
    write_module(sdk.path(), "botocore/config.py", &edited);

    let new_digest = sha1_hex(
        &"    def merge(self, other_config):\n        config_options = copy.copy(self._user_provided_options)\n        config_options.update(other_config._user_provided_options)\n        return Config(**config_options)\n"
            .replace("config_options", "merged_options"),
    );

    let registry = Registry::from_entries(vec![entry(
        TargetSymbol::method("botocore.config", "Config", "merge"),
        &[MERGE_DIGEST, &new_digest],
    )]);

    assert!(DriftScan::run(&registry, sdk.path()).passed());
}

#[test]
fn scan_all_covers_every_registered_symbol() {
    // Empty vendor roots: nothing resolves, but every registered symbol is
    // still visited and reported.
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        vendor: VendorConfig {
            sdk_root: "sdk".into(),
            http_root: "http".into(),
        },
        project_root: dir.path().to_path_buf(),
    };

    let scan = scan_all(&config);

    let registered = Registry::botocore().len() + Registry::aiohttp().len();
    assert_eq!(scan.symbols_checked(), registered);
    assert_eq!(scan.diagnostics.len(), registered);
    assert!(!scan.passed());
}

#[test]
fn report_carries_scan_summary() {
    let sdk = sdk_tree();
    let registry = Registry::from_entries(vec![
        entry(
            TargetSymbol::method("botocore.config", "Config", "merge"),
            &["0000000000000000000000000000000000000000"],
        ),
        entry(
            TargetSymbol::property_setter("botocore.credentials", "RefreshableCredentials", "access_key"),
            &[UPSTREAM_SETTER_DIGEST],
        ),
    ]);

    let scan = DriftScan::run(&registry, sdk.path());
    let mut report = Report::from_diagnostics(scan.diagnostics.clone());
    report.summary.symbols_checked = scan.symbols_checked();
    report.summary.symbols_passed = scan.symbols_passed();

    assert!(report.has_errors());
    assert_eq!(report.summary.symbols_checked, 2);
    assert_eq!(report.summary.symbols_passed, 1);

    let json = report.to_json().unwrap();
    assert!(json.contains("FINGERPRINT_MISMATCH"));
}

#[test]
fn protocol_set_check_passes_on_fixture_tree() {
    let sdk = sdk_tree();
    let scan = check_protocol_set(sdk.path());
    assert!(scan.passed());
    assert_eq!(scan.actual.unwrap().len(), 5);
}
