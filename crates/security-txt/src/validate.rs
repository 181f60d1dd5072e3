//! Opt-in pre-flight validation.
//!
//! Nothing in the formatter or the adapters calls into this module; callers
//! who want stricter checking than "absent fields emit nothing" run
//! [`validate_config`] themselves (the CLI `check` subcommand does).

use chrono::{DateTime, FixedOffset, Utc};

use crate::config::SecurityTxtConfig;

const CONTACT_SCHEMES: &[&str] = &["mailto:", "https:", "http:", "tel:"];

/// Accumulated findings. Errors make the configuration invalid; warnings are
/// advisory only. Returned, never thrown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

/// Whether `value` looks like a usable contact URI (mailto, https, http or
/// tel scheme, with something after the scheme).
pub fn is_valid_contact(value: &str) -> bool {
    CONTACT_SCHEMES
        .iter()
        .any(|scheme| value.len() > scheme.len() && value.starts_with(scheme))
}

/// Whether `value` parses as an RFC 3339 timestamp.
pub fn is_valid_expires(value: &str) -> bool {
    parse_expires(value).is_some()
}

fn parse_expires(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok()
}

/// Runs every check against `config` and returns the findings.
pub fn validate_config(config: &SecurityTxtConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    match &config.contact {
        None => report.error("contact is required (RFC 9116 section 2.5.3)"),
        Some(contact) if contact.values().is_empty() => {
            report.error("contact is required (RFC 9116 section 2.5.3)");
        }
        Some(contact) => {
            for value in contact.values() {
                if !is_valid_contact(value) {
                    report.error(format!(
                        "contact '{value}' is not a mailto, https, http or tel URI"
                    ));
                }
            }
        }
    }

    match config.expires.as_deref() {
        None => report.warning("expires is recommended (RFC 9116 section 2.5.5)"),
        Some(value) => match parse_expires(value) {
            None => report.error(format!("expires '{value}' is not an RFC 3339 timestamp")),
            Some(expires) => {
                if expires < Utc::now() {
                    report.warning(format!("expires '{value}' is in the past"));
                }
            }
        },
    }

    if let Some(languages) = &config.preferred_languages {
        if languages.values().is_empty() {
            report.warning("preferred-languages is present but empty");
        }
    }

    report
}
