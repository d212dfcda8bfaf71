//! Adapter enumeration with operator-facing error reporting.

use crate::notify::{Notifier, title};

use super::filter::FilterChain;
use super::{AdapterRecord, AdapterSource, EnumerationError};

/// Fetches the adapter list and reports failures through a [`Notifier`].
///
/// On error the alert is raised here, once, and the error is returned so
/// the caller can abort the run.
#[derive(Debug)]
pub struct AdapterEnumerator<S, N> {
    source: S,
    notifier: N,
    filter: FilterChain,
}

impl<S: AdapterSource, N: Notifier> AdapterEnumerator<S, N> {
    /// Creates an enumerator with no adapter filter.
    pub fn new(source: S, notifier: N) -> Self {
        Self {
            source,
            notifier,
            filter: FilterChain::new(),
        }
    }

    /// Sets the filter applied to the query results.
    #[must_use]
    pub fn with_filter(mut self, filter: FilterChain) -> Self {
        self.filter = filter;
        self
    }

    /// Lists the adapters available for selection.
    ///
    /// # Errors
    ///
    /// Returns the source's [`EnumerationError`] after alerting the operator
    /// with the "Adapter Enumeration Error" title.
    pub fn fetch_adapters(&self) -> Result<Vec<AdapterRecord>, EnumerationError> {
        println!("Fetching available network adapters...");

        match self.source.fetch() {
            Ok(adapters) => {
                let total = adapters.len();
                let adapters = self.filter.apply(adapters);
                tracing::debug!(total, kept = adapters.len(), "Adapter query finished");
                Ok(adapters)
            }
            Err(e) => {
                tracing::debug!("Adapter enumeration failed: {e}");
                self.notifier.alert(title::ENUMERATION, &e.to_string());
                Err(e)
            }
        }
    }
}
