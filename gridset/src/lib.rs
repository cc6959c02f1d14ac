//! Exact volume accounting for sequences of fill and clear operations on
//! axis-aligned integer boxes.
//!
//! A [`RegionSet`] keeps the filled region as a list of pairwise disjoint
//! [`GridBox`]es. Filling a box resolves every overlap it creates by slicing the
//! overlapping boxes apart along their faces; clearing a box cuts it out of every
//! box it touches. Neither operation ever looks at individual cells, so the
//! volume stays exact even when a single box covers ~10¹⁸ of them.
//!
//! ```
//! use gridset::RegionSet;
//! use gridset::math::GridBox;
//!
//! let mut set = RegionSet::new();
//! set.fill(GridBox::from_extents([(10, 12), (10, 12), (10, 12)]));
//! set.fill(GridBox::from_extents([(11, 13), (11, 13), (11, 13)]));
//! assert_eq!(set.volume(), Some(27 + 27 - 8));
//!
//! set.clear(GridBox::from_extents([(9, 11), (9, 11), (9, 11)]));
//! set.fill(GridBox::from_extents([(10, 10), (10, 10), (10, 10)]));
//! assert_eq!(set.volume(), Some(39));
//! ```
//!
//! The [`op`] module reads the textual operation lists this is usually driven by.
//!
//! # Package features
//!
//! * `std` (default): enables test helpers which need `std`.
//!   Without it, the library is `no_std` but requires `alloc`.
//! * `auto-threads`: uses [`rayon`](https://docs.rs/rayon) to search for
//!   conflicting boxes in parallel. Results are identical with or without it.

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(test),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;
#[macro_use]
extern crate alloc;

pub mod math;

pub mod op;

mod region;
pub use region::RegionSet;

pub mod util;
