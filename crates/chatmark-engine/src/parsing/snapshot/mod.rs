//! Test support: `normalize` turns a `ParsedDoc` into a plain `Snap` value for
//! `insta`, and `invariants` panics when spans, ordering, or code block
//! references are inconsistent.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
