//! Domain model and filtering logic for the folio portfolio browser.
//!
//! This crate is pure: the project catalog, the ephemeral filter state,
//! and the predicate deciding which projects are visible. The only I/O is
//! optional catalog loading from a TOML file. UI crates stay thin on top.

mod catalog;
mod errors;
mod filter;
mod project;

pub use catalog::Catalog;
pub use catalog::Profile;
pub use errors::CatalogError;
pub use filter::FilterState;
pub use filter::project_matches;
pub use project::Project;
