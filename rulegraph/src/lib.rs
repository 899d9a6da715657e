//! An in-memory engine for dependency and conflict rules between options

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

pub mod error;
pub mod rules;
pub mod selection;
pub mod util;

pub use error::Error;
pub use rules::RuleGraph;
pub use selection::Selection;
