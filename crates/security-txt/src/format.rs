//! Pure formatter turning a [`SecurityTxtConfig`] into the document text.

use crate::config::{FieldValue, SecurityTxtConfig};

/// Renders the `security.txt` document for `config`.
///
/// Fields are emitted in the fixed order Contact, Expires, Encryption,
/// Acknowledgments, Preferred-Languages, Canonical, Policy, Hiring, followed
/// by custom fields in insertion order. Absent fields emit nothing. The
/// result always ends with exactly one trailing newline; an empty
/// configuration yields `"\n"`.
pub fn generate(config: &SecurityTxtConfig) -> String {
    let mut lines = Vec::new();

    push_lines(&mut lines, "Contact", config.contact.as_ref());
    push_scalar(&mut lines, "Expires", config.expires.as_deref());
    push_lines(&mut lines, "Encryption", config.encryption.as_ref());
    push_scalar(
        &mut lines,
        "Acknowledgments",
        config.acknowledgments.as_deref(),
    );

    // Preferred-Languages is the one sequence field that collapses to a
    // single comma-joined line.
    if let Some(languages) = &config.preferred_languages {
        lines.push(format!(
            "Preferred-Languages: {}",
            languages.values().join(", ")
        ));
    }

    push_scalar(&mut lines, "Canonical", config.canonical.as_deref());
    push_scalar(&mut lines, "Policy", config.policy.as_deref());
    push_scalar(&mut lines, "Hiring", config.hiring.as_deref());

    for (name, value) in config.custom_fields.iter() {
        push_lines(&mut lines, name, Some(value));
    }

    let mut document = lines.join("\n");
    document.push('\n');
    document
}

fn push_lines(lines: &mut Vec<String>, label: &str, value: Option<&FieldValue>) {
    if let Some(value) = value {
        for entry in value.values() {
            lines.push(format!("{label}: {entry}"));
        }
    }
}

fn push_scalar(lines: &mut Vec<String>, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        lines.push(format!("{label}: {value}"));
    }
}
