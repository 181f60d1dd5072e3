//! Generate and serve RFC 9116 `security.txt` documents.
//!
//! The crate is organised around a single configuration type and a handful of
//! small operations on it:
//!
//! * [`config`] — the [`SecurityTxtConfig`] record and its TOML loader.
//! * [`format`] — the pure formatter turning configuration into the
//!   line-oriented document.
//! * [`emit`] — writes the document to `public/security.txt` and
//!   `public/.well-known/security.txt` under a caller-supplied root.
//! * [`site`] — a build-time decorator that emits the files once and wraps a
//!   host configuration's rewrite hook.
//! * [`response`] — the request adapter, expressed as a pure function from
//!   configuration to a `{status, headers, body}` record.
//! * [`validate`] — opt-in pre-flight checks; never invoked implicitly.

pub mod config;
pub mod emit;
pub mod format;
pub mod response;
pub mod site;
pub mod validate;

pub use config::{ConfigError, CustomFields, FieldValue, SecurityTxtConfig, CONFIG_FILE_NAME};
pub use emit::{emit_files, EmitError, EmitOutcome, SECURITY_TXT_FILE_NAME, WELL_KNOWN_DIR};
pub use format::generate;
pub use response::{handler, respond, SecurityTxtResponse, CACHE_CONTROL, CONTENT_TYPE};
pub use site::{
    with_security_txt, PhasedRewrites, RewriteRule, RewriteRules, SiteConfig, SiteError,
};
pub use validate::{is_valid_contact, is_valid_expires, validate_config, ValidationReport};
