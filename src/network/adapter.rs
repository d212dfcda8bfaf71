//! Core network types for adapter representation.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder shown for adapter fields the query left empty.
const MISSING_FIELD: &str = "N/A";

/// A network adapter as reported by the adapter query.
///
/// Field names follow the `Get-NetAdapter` property names so the query's
/// JSON output deserializes directly.
///
/// # Identifier
///
/// `interface_id` is the adapter's interface GUID (e.g.
/// `{4D36E972-E325-11CE-BFC1-08002BE10318}`). It is treated as an opaque
/// string and assumed to be unique per adapter; uniqueness is not verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterRecord {
    /// The friendly name of the adapter (e.g., "Ethernet", "Wi-Fi").
    #[serde(rename = "Name", default)]
    pub name: String,
    /// The driver-provided description of the adapter.
    #[serde(rename = "InterfaceDescription", default)]
    pub description: String,
    /// The interface GUID.
    #[serde(rename = "InterfaceGuid")]
    pub interface_id: String,
}

impl AdapterRecord {
    /// Creates a new adapter record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        interface_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            interface_id: interface_id.into(),
        }
    }

    /// Returns the name for display, or `N/A` when the query left it empty.
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_empty_or_missing(&self.name)
    }

    /// Returns the description for display, or `N/A` when the query left it empty.
    #[must_use]
    pub fn display_description(&self) -> &str {
        non_empty_or_missing(&self.description)
    }
}

impl fmt::Display for AdapterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (GUID: {})",
            self.display_name(),
            self.display_description(),
            non_empty_or_missing(&self.interface_id),
        )
    }
}

fn non_empty_or_missing(value: &str) -> &str {
    if value.is_empty() { MISSING_FIELD } else { value }
}

/// Parses the JSON printed by the adapter query into an ordered list.
///
/// - A JSON array yields its records in order.
/// - A bare JSON object yields a one-element list.
/// - `null` or whitespace-only output yields an empty list
///   (`ConvertTo-Json` prints nothing for an empty pipeline).
///
/// The shape is decided before the records are decoded, so errors name the
/// offending field (e.g. a missing `InterfaceGuid`).
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] if the text is not one of
/// the shapes above.
pub fn parse_adapter_json(raw: &str) -> Result<Vec<AdapterRecord>, serde_json::Error> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Value>(trimmed)? {
        Value::Null => Ok(Vec::new()),
        list @ Value::Array(_) => serde_json::from_value(list),
        record @ Value::Object(_) => Ok(vec![serde_json::from_value(record)?]),
        other => Err(serde_json::Error::custom(format!(
            "expected an adapter object or list, found {other}"
        ))),
    }
}
