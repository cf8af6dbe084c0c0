pub mod catalog;
pub mod executor;

use crate::core::ComponentId;

pub use catalog::{Catalog, CatalogEntry, SearchOutcome};
pub use executor::{SearchCompletion, SearchExecutor};

/// Collaborator that runs lookups. Results come back to the widget as swap
/// events once the host has rendered them.
pub trait SearchProvider {
    fn trigger(&mut self, component: &ComponentId, query: &str);
    fn abort(&mut self, component: &ComponentId);
}
