//! Build-time decorator wiring `security.txt` into a host site configuration.
//!
//! [`with_security_txt`] runs once per configuration load: it enforces the
//! contact precondition, writes the files, and returns a decorator that
//! preserves the host configuration while normalising its rewrite hook. The
//! decorator adds no rewrite rule of its own.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::SecurityTxtConfig;
use crate::emit::{emit_files, EmitError};

/// A single rewrite rule of the host framework.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteRule {
    pub source: String,
    pub destination: String,
}

/// Rewrite rules grouped into the host's three dispatch phases.
///
/// Each phase defaults to empty, so a partially specified value (in code via
/// `..Default::default()`, in data via omitted keys) normalises to a complete
/// shape.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhasedRewrites {
    #[serde(default)]
    pub before_files: Vec<RewriteRule>,
    #[serde(default)]
    pub after_files: Vec<RewriteRule>,
    #[serde(default)]
    pub fallback: Vec<RewriteRule>,
}

/// Result shape of a rewrites hook: a plain ordered list or the three-phase
/// form.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RewriteRules {
    Plain(Vec<RewriteRule>),
    Phased(PhasedRewrites),
}

impl Default for RewriteRules {
    fn default() -> Self {
        RewriteRules::Plain(Vec::new())
    }
}

/// Producer of rewrite rules, supplied by the host configuration.
pub type RewritesFn = Box<dyn Fn() -> RewriteRules + Send + Sync>;

/// Host site configuration: an optional rewrites hook plus an opaque bag of
/// whatever other keys the host carries. The decorator never touches `extra`.
#[derive(Default)]
pub struct SiteConfig {
    pub rewrites: Option<RewritesFn>,
    pub extra: Map<String, Value>,
}

impl fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteConfig")
            .field("rewrites", &self.rewrites.as_ref().map(|_| "<fn>"))
            .field("extra", &self.extra)
            .finish()
    }
}

/// Errors raised while wrapping a host configuration.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("security.txt requires at least one contact field")]
    MissingContact,
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Wraps a host configuration with `security.txt` generation.
///
/// Fails synchronously when `security` has no contact value. Warns (without
/// failing) when `expires` is absent. Writes the files under `public_dir`
/// once, at wrap-time, and prints one confirmation notice per written file.
///
/// The returned decorator keeps every host key and installs a rewrites hook
/// that calls the host's original producer (absence yields an empty plain
/// rule set) and passes its result through unchanged.
pub fn with_security_txt(
    security: SecurityTxtConfig,
    public_dir: impl AsRef<Path>,
) -> Result<impl FnOnce(SiteConfig) -> SiteConfig, SiteError> {
    let has_contact = security
        .contact
        .as_ref()
        .is_some_and(|contact| !contact.values().is_empty());
    if !has_contact {
        return Err(SiteError::MissingContact);
    }

    if security.expires.is_none() {
        eprintln!("⚠️  security.txt should include an expires field (RFC 9116 recommendation)");
    }

    let outcome = emit_files(&security, public_dir.as_ref())?;
    for path in &outcome.written {
        println!("✅ security.txt written to {}", path.display());
    }

    Ok(move |host: SiteConfig| {
        let SiteConfig { rewrites, extra } = host;
        let hook: RewritesFn = Box::new(move || match &rewrites {
            Some(producer) => producer(),
            None => RewriteRules::default(),
        });
        SiteConfig {
            rewrites: Some(hook),
            extra,
        }
    })
}
