//! Optional token icon lookup.
//!
//! A missing icon is never an error; rendering just skips it.

pub mod icons;

pub use icons::IconResolver;
