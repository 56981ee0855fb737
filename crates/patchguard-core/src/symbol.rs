//! Target symbols and accepted digest sets

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What kind of definition a registry entry points at
///
/// Property getters and setters are addressed as separate symbols rather
/// than through the property wrapper, since only the accessor functions
/// have retrievable source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorKind {
    /// Module-level function
    Function,

    /// Method defined inside a class body
    Method,

    /// An entire class block
    Class,

    /// The decorated getter of a property
    PropertyGetter,

    /// The decorated setter of a property
    PropertySetter,
}

impl std::fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Function => write!(f, "function"),
            Self::Method => write!(f, "method"),
            Self::Class => write!(f, "class"),
            Self::PropertyGetter => write!(f, "property getter"),
            Self::PropertySetter => write!(f, "property setter"),
        }
    }
}

/// Identifies one upstream callable or accessor inside a vendored tree
///
/// The module is a dotted Python path (`botocore.retries.standard`); it is
/// resolved against the vendored checkout at scan time, never persisted as
/// a pre-resolved file path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetSymbol {
    /// Dotted module path, e.g. `botocore.credentials`
    pub module: String,

    /// Owning class name, when the member lives inside a class
    pub class_name: Option<String>,

    /// Member name; `None` addresses the class itself
    pub member: Option<String>,

    /// Accessor kind
    pub kind: AccessorKind,
}

impl TargetSymbol {
    /// Module-level function
    pub fn function(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            class_name: None,
            member: Some(name.into()),
            kind: AccessorKind::Function,
        }
    }

    /// Method inside a class
    pub fn method(
        module: impl Into<String>,
        class_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            class_name: Some(class_name.into()),
            member: Some(name.into()),
            kind: AccessorKind::Method,
        }
    }

    /// An entire class
    pub fn class(module: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            class_name: Some(class_name.into()),
            member: None,
            kind: AccessorKind::Class,
        }
    }

    /// Property getter (`@property` / `@<name>.getter`)
    pub fn property_getter(
        module: impl Into<String>,
        class_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            class_name: Some(class_name.into()),
            member: Some(name.into()),
            kind: AccessorKind::PropertyGetter,
        }
    }

    /// Property setter (`@<name>.setter`)
    pub fn property_setter(
        module: impl Into<String>,
        class_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            class_name: Some(class_name.into()),
            member: Some(name.into()),
            kind: AccessorKind::PropertySetter,
        }
    }

    /// Fully-qualified display name
    ///
    /// Property accessors carry a `.fget`/`.fset` suffix so a getter and a
    /// setter of the same property stay distinguishable in reports.
    pub fn qualname(&self) -> String {
        let mut name = self.module.clone();
        if let Some(class_name) = &self.class_name {
            name.push('.');
            name.push_str(class_name);
        }
        if let Some(member) = &self.member {
            name.push('.');
            name.push_str(member);
        }
        match self.kind {
            AccessorKind::PropertyGetter => name.push_str(".fget"),
            AccessorKind::PropertySetter => name.push_str(".fset"),
            _ => {}
        }
        name
    }

    /// Path of the defining module file relative to the vendor root
    ///
    /// `botocore.retries.standard` maps to `botocore/retries/standard.py`.
    pub fn module_rel_path(&self) -> std::path::PathBuf {
        let mut path: std::path::PathBuf = self.module.split('.').collect();
        path.set_extension("py");
        path
    }
}

impl std::fmt::Display for TargetSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.qualname())
    }
}

/// The set of content digests a symbol is allowed to hash to
///
/// One digest per upstream source revision the wrapping project's patch is
/// known to remain compatible with. Digests are appended when supporting an
/// additional upstream release, and replaced wholesale when a breaking
/// upstream change is accommodated on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedDigests(BTreeSet<String>);

impl AcceptedDigests {
    /// Build from hex digest strings
    pub fn new<I, S>(digests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(digests.into_iter().map(|d| d.into()).collect())
    }

    /// Membership test against an observed hex digest
    pub fn accepts(&self, digest: &str) -> bool {
        self.0.contains(digest)
    }

    /// Number of accepted digests
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no digest has been recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate digests in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|d| d.as_str())
    }
}

impl std::fmt::Display for AcceptedDigests {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, digest) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", digest)?;
        }
        write!(f, "}}")
    }
}

impl<'a> FromIterator<&'a str> for AcceptedDigests {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualname_forms() {
        assert_eq!(
            TargetSymbol::function("botocore.signers", "generate_presigned_url").qualname(),
            "botocore.signers.generate_presigned_url"
        );
        assert_eq!(
            TargetSymbol::method("botocore.client", "BaseClient", "_make_api_call").qualname(),
            "botocore.client.BaseClient._make_api_call"
        );
        assert_eq!(
            TargetSymbol::class("botocore.config", "Config").qualname(),
            "botocore.config.Config"
        );
        assert_eq!(
            TargetSymbol::property_getter("botocore.credentials", "RefreshableCredentials", "access_key")
                .qualname(),
            "botocore.credentials.RefreshableCredentials.access_key.fget"
        );
        assert_eq!(
            TargetSymbol::property_setter("botocore.credentials", "RefreshableCredentials", "access_key")
                .qualname(),
            "botocore.credentials.RefreshableCredentials.access_key.fset"
        );
    }

    #[test]
    fn module_path_mapping() {
        let symbol = TargetSymbol::function("botocore.retries.standard", "register_retry_handler");
        assert_eq!(
            symbol.module_rel_path(),
            std::path::PathBuf::from("botocore/retries/standard.py")
        );

        let symbol = TargetSymbol::class("aiohttp.client_reqrep", "ClientResponse");
        assert_eq!(
            symbol.module_rel_path(),
            std::path::PathBuf::from("aiohttp/client_reqrep.py")
        );
    }

    #[test]
    fn digest_membership() {
        let digests = AcceptedDigests::new([
            "c3dd8c3ffe0da86953ceba4a35267dfb79c6a2c8",
            "225e8033bfcff8cccbc2e975d7bd0c7993f14366",
        ]);

        assert_eq!(digests.len(), 2);
        assert!(digests.accepts("c3dd8c3ffe0da86953ceba4a35267dfb79c6a2c8"));
        assert!(!digests.accepts("0000000000000000000000000000000000000000"));
    }

    #[test]
    fn digest_display_is_sorted() {
        let digests = AcceptedDigests::new(["bbb", "aaa"]);
        assert_eq!(digests.to_string(), "{aaa, bbb}");
    }
}
