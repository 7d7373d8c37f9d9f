//! Domain models for the magic bag.
//!
//! The bag holds a flat, ordered list of [`Item`]s. Ids are only ever
//! assigned by the store; callers describe new items with [`CreateItemInput`].

mod item;

pub use item::*;
