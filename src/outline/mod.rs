//! Read-only presentation helpers: pseudo-source outlines and list filters.

mod filter;
mod options;
mod pseudo_al;

pub use filter::{IdFilter, ObjectFilter, TextFilter};
pub use options::OutlineOptions;
pub use pseudo_al::{generate_pseudo_al, generate_pseudo_al_with};
