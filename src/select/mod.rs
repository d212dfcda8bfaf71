//! Interactive adapter selection.
//!
//! - [`SelectionSet`]: ordered, deduplicated interface identifiers
//! - [`Selector`]: the prompt loop, generic over reader and writer
//! - [`select_guids`]: the prompt loop on the process console

mod prompt;
mod selection;


pub use prompt::{Selector, select_guids};
pub use selection::SelectionSet;
