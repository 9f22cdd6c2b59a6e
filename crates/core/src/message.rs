// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Service-message model: a named event plus ordered attributes.

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use thiserror::Error;

use crate::escape::escape;

/// Format of the leading `timestamp` attribute: minute precision, local
/// time, no offset. Consumers parse exactly this shape.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Errors that can occur when constructing a service message
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageError {
    #[error("service message name must not be empty")]
    EmptyName,
}

/// A single service message: name plus ordered attributes.
///
/// Attribute order is insertion order and is preserved verbatim in the
/// rendered line; golden-file comparisons depend on it. Key uniqueness is
/// not enforced beyond the map semantics (re-inserting a key keeps its
/// original position).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceMessage {
    name: String,
    attributes: IndexMap<String, String>,
}

impl ServiceMessage {
    /// Create a message with the given name and no attributes.
    pub fn new(name: impl Into<String>) -> Result<Self, MessageError> {
        let name = name.into();
        if name.is_empty() {
            return Err(MessageError::EmptyName);
        }
        Ok(Self {
            name,
            attributes: IndexMap::new(),
        })
    }

    /// Append an attribute. Values are taken as already-canonical text;
    /// number and boolean formatting is the caller's concern.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in insertion order, without the clock-derived timestamp.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render the full wire line, framing newlines included:
    /// `\n##teamcity[<name> timestamp='<ts>' k1='v1' ...]\n`.
    ///
    /// The timestamp attribute always renders first. The leading and
    /// trailing newline guarantee the message stands on its own line even
    /// when interleaved with unterminated output from other writers.
    pub fn render(&self, timestamp: NaiveDateTime) -> String {
        let mut line = format!(
            "\n##teamcity[{} timestamp='{}'",
            self.name,
            timestamp.format(TIMESTAMP_FORMAT)
        );
        for (key, value) in &self.attributes {
            line.push(' ');
            line.push_str(key);
            line.push_str("='");
            line.push_str(&escape(value));
            line.push('\'');
        }
        line.push_str("]\n");
        line
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
