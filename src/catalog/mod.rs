mod loader;
mod store;

pub use loader::{load_catalog, read_catalog, REQUIRED_COLUMNS};
pub use store::{distinct_names, first_named, Catalog, SUGGESTION_THRESHOLD};
