use std::sync::{Mutex, PoisonError};

use indexmap::IndexMap;
use serde_derive::Serialize;
use tracing::warn;

/// Message logged when a tag group is skipped because it has no commits.
pub const EMPTY_TAG_TEMPLATE: &str = "Tag {tag} did not contain any commits. Skipping";

/// Structured fields attached to a diagnostic, kept in insertion order.
pub type LogFields = IndexMap<String, String>;

/// Logging capability injected into rendering so the renderer doesn't depend on a backend.
pub trait ChangelogLogger {
    /// Emits a warning. `template` may reference fields as `{name}`.
    fn warn(&self, template: &str, fields: &LogFields);
}

impl<L: ChangelogLogger + ?Sized> ChangelogLogger for &L {
    fn warn(&self, template: &str, fields: &LogFields) {
        (**self).warn(template, fields)
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl ChangelogLogger for TracingLogger {
    fn warn(&self, template: &str, fields: &LogFields) {
        warn!(
            template = %template,
            fields = ?fields,
            "{}",
            interpolate(template, fields)
        );
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub template: String,
    pub fields: LogFields,
}

impl LogRecord {
    /// The template with its fields substituted.
    pub fn message(&self) -> String {
        interpolate(&self.template, &self.fields)
    }
}

/// Keeps every warning in memory so hosts can surface them after rendering.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ChangelogLogger for RecordingLogger {
    fn warn(&self, template: &str, fields: &LogFields) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LogRecord {
                template: template.to_string(),
                fields: fields.clone(),
            });
    }
}

/// Replaces each `{name}` placeholder in `template` with the matching field value.
/// Placeholders without a field are left untouched and substituted values are never rescanned.
pub fn interpolate(template: &str, fields: &LogFields) -> String {
    let mut message = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        message.push_str(&rest[..open]);
        let candidate = &rest[open..];
        match candidate.find('}') {
            Some(close) => {
                let placeholder = &candidate[..=close];
                match fields.get(&placeholder[1..close]) {
                    Some(value) => message.push_str(value),
                    None => message.push_str(placeholder),
                }
                rest = &candidate[close + 1..];
            }
            None => {
                rest = candidate;
                break;
            }
        }
    }
    message.push_str(rest);
    message
}
