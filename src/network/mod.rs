//! Network adapter discovery.
//!
//! This module provides types and traits for:
//! - Representing adapters ([`AdapterRecord`]) and parsing the query output
//! - Listing adapters ([`AdapterSource`], [`PowerShellSource`])
//! - Narrowing the list by name ([`filter`])
//! - Reporting enumeration failures to the operator ([`AdapterEnumerator`])

mod adapter;
mod enumerator;
pub mod filter;
mod powershell;
mod source;


pub use adapter::{AdapterRecord, parse_adapter_json};
pub use enumerator::AdapterEnumerator;
pub use powershell::{ADAPTER_QUERY, PowerShellSource, QueryResult};
pub use source::{AdapterSource, EnumerationError};
