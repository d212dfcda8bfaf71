//! Adapter filtering applied before the adapter list is shown.
//!
//! # Design
//!
//! - **Pure Matchers**: [`NameRegexFilter`] only answers "does this adapter
//!   match?" without include/exclude semantics.
//! - **Filter Chain**: [`FilterChain`] combines matchers:
//!   - Exclude filters: AND logic (must pass ALL excludes)
//!   - Include filters: OR logic (pass ANY include, empty = match all)

use regex::Regex;

use super::AdapterRecord;

/// Trait for deciding which adapters are offered for selection.
pub trait AdapterFilter {
    /// Returns `true` if the adapter matches this filter.
    fn matches(&self, adapter: &AdapterRecord) -> bool;
}

// ============================================================================
// FilterChain - Include OR / Exclude AND semantics
// ============================================================================

/// Filter chain with include/exclude semantics.
///
/// Evaluation order:
/// 1. **Exclude filters (AND)**: Any match → reject.
/// 2. **Include filters (OR)**: Any match → accept. Empty includes = match all.
///
/// # Examples
///
/// ```
/// use netopt_launch::network::filter::{AdapterFilter, FilterChain, NameRegexFilter};
/// use netopt_launch::network::AdapterRecord;
///
/// let chain = FilterChain::new()
///     .exclude(NameRegexFilter::new("^vEthernet").unwrap())
///     .include(NameRegexFilter::new("Ethernet").unwrap());
///
/// let eth = AdapterRecord::new("Ethernet", "Intel", "{A}");
/// let hyperv = AdapterRecord::new("vEthernet (WSL)", "Hyper-V", "{B}");
/// let wifi = AdapterRecord::new("Wi-Fi", "Killer", "{C}");
///
/// assert!(chain.matches(&eth));
/// assert!(!chain.matches(&hyperv));
/// assert!(!chain.matches(&wifi));
/// ```
#[derive(Default)]
pub struct FilterChain {
    includes: Vec<Box<dyn AdapterFilter>>,
    excludes: Vec<Box<dyn AdapterFilter>>,
}

impl FilterChain {
    /// Creates an empty filter chain (matches all adapters).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an include filter (OR semantics).
    #[must_use]
    pub fn include<F: AdapterFilter + 'static>(mut self, filter: F) -> Self {
        self.includes.push(Box::new(filter));
        self
    }

    /// Adds an exclude filter (rejects on ANY match).
    #[must_use]
    pub fn exclude<F: AdapterFilter + 'static>(mut self, filter: F) -> Self {
        self.excludes.push(Box::new(filter));
        self
    }

    /// Returns the number of include filters.
    #[must_use]
    pub fn include_count(&self) -> usize {
        self.includes.len()
    }

    /// Returns the number of exclude filters.
    #[must_use]
    pub fn exclude_count(&self) -> usize {
        self.excludes.len()
    }

    /// Returns true if no filters are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }

    /// Keeps the adapters that pass the chain, preserving order.
    #[must_use]
    pub fn apply(&self, adapters: Vec<AdapterRecord>) -> Vec<AdapterRecord> {
        if self.is_empty() {
            return adapters;
        }
        adapters.into_iter().filter(|a| self.matches(a)).collect()
    }
}

impl AdapterFilter for FilterChain {
    fn matches(&self, adapter: &AdapterRecord) -> bool {
        if self.excludes.iter().any(|f| f.matches(adapter)) {
            return false;
        }

        self.includes.is_empty() || self.includes.iter().any(|f| f.matches(adapter))
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("include_count", &self.includes.len())
            .field("exclude_count", &self.excludes.len())
            .finish()
    }
}

// ============================================================================
// NameRegexFilter - Pure matcher by name pattern
// ============================================================================

/// Matches adapters whose friendly name matches a regex.
#[derive(Debug)]
pub struct NameRegexFilter {
    pattern: Regex,
}

impl NameRegexFilter {
    /// Creates a name filter with the given regex pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the regex pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Returns a reference to the regex pattern.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Regex is not a const type
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl AdapterFilter for NameRegexFilter {
    fn matches(&self, adapter: &AdapterRecord) -> bool {
        self.pattern.is_match(&adapter.name)
    }
}
