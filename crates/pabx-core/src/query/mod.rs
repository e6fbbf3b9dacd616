//! Generic list-query engine
//!
//! Every data view in the console is the same pipeline:
//! record store → [`QueryState`] → [`ListSpec::apply`] → [`paginate`] → page slice.
//! The CDR view additionally tracks a [`SelectionTracker`].

pub mod filter;
pub mod paginator;
pub mod selection;

pub use filter::{FieldAccessor, ListSpec, QueryState, FILTER_ALL};
pub use paginator::{page_links, paginate, Page, PageLink};
pub use selection::SelectionTracker;
