//! Configuration model and TOML loader.
//!
//! A [`SecurityTxtConfig`] is the sole input to every other module. Fields
//! map one-to-one onto the labels of RFC 9116; all of them are optional from
//! the formatter's point of view. Presence of `contact` is enforced where the
//! document is actually published (the site adapter and the CLI), not here.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::slice;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Default configuration file name looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = "security-txt.toml";

/// A field value: a single string or an ordered sequence of strings.
///
/// Internally every field is treated as a sequence; a scalar is a sequence of
/// length one. [`FieldValue::values`] exposes that uniform view.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldValue {
    One(String),
    Many(Vec<String>),
}

impl FieldValue {
    /// Uniform sequence view over scalar and list values.
    pub fn values(&self) -> &[String] {
        match self {
            FieldValue::One(value) => slice::from_ref(value),
            FieldValue::Many(values) => values,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::One(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::One(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::Many(values)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        FieldValue::Many(values.into_iter().map(str::to_owned).collect())
    }
}

/// Additional `Name: value` fields, preserving insertion order.
///
/// TOML tables are visited in document order, so a `[custom-fields]` block
/// round-trips in the order the user wrote it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomFields {
    entries: Vec<(String, FieldValue)>,
}

impl CustomFields {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<'de> Deserialize<'de> for CustomFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CustomFieldsVisitor;

        impl<'de> Visitor<'de> for CustomFieldsVisitor {
            type Value = CustomFields;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of field names to strings or lists of strings")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, value)) = map.next_entry::<String, FieldValue>()? {
                    entries.push((name, value));
                }
                Ok(CustomFields { entries })
            }
        }

        deserializer.deserialize_map(CustomFieldsVisitor)
    }
}

/// Declarative description of a `security.txt` document.
///
/// Unknown keys in the source TOML are ignored rather than rejected, so a
/// config file can carry host-specific settings alongside these fields.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct SecurityTxtConfig {
    /// Contact URIs for security researchers. Required for a compliant
    /// document; enforced at publication time, not here.
    pub contact: Option<FieldValue>,
    /// Expiration timestamp, RFC 3339 recommended.
    pub expires: Option<String>,
    /// URIs of encryption key material.
    pub encryption: Option<FieldValue>,
    /// URI of a page recognising security researchers.
    pub acknowledgments: Option<String>,
    /// Language tags, serialised as one comma-joined line.
    pub preferred_languages: Option<FieldValue>,
    /// Authoritative URI of this document.
    pub canonical: Option<String>,
    /// URI of the disclosure policy.
    pub policy: Option<String>,
    /// URI of security-related job postings.
    pub hiring: Option<String>,
    /// Skip the web-root copy, keeping only `.well-known/security.txt`.
    #[serde(default)]
    pub disable_root: bool,
    /// Extra fields appended after the named ones, in insertion order.
    #[serde(default)]
    pub custom_fields: CustomFields,
}

impl SecurityTxtConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contact(mut self, contact: impl Into<FieldValue>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    pub fn with_expires(mut self, expires: impl Into<String>) -> Self {
        self.expires = Some(expires.into());
        self
    }

    pub fn with_custom_field(
        mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Self {
        self.custom_fields.insert(name, value);
        self
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse { path: None, source })
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })
    }
}

/// Errors surfaced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse config{}: {source}", display_path(.path))]
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" {}", path.display()),
        None => String::new(),
    }
}
