//! # flocate - offline filename index and instant substring search
//!
//! flocate splits filename search into two phases, in the spirit of the
//! classic `updatedb`/`locate` pair:
//!
//! 1. `updatedb` walks a directory tree once and persists a compressed
//!    suffix index of every filename it finds.
//! 2. `locate` answers "which indexed files have NEEDLE in their name?"
//!    with two binary searches over that index, no filesystem scan.
//!
//! ## Architecture
//!
//! - [`index`] - Index building (suffix generation, parallel sort,
//!   compression) and the on-disk codec
//! - [`query`] - Prefix-range search over the sorted suffix collection
//! - [`utils`] - Path byte helpers and varint encoding
//!
//! ## How it works
//!
//! Every suffix of every filename is collected as a `(text, owner)` pair,
//! sorted with a fork-join parallel merge sort, and adjacent entries with
//! identical text are compressed into one entry owning all of their paths.
//! "NEEDLE is a substring of some filename" is then equivalent to "some
//! entry in the sorted collection has NEEDLE as a prefix", and those
//! entries form one contiguous block locatable with two binary searches.
//!
//! ## Quick start
//!
//! ```no_run
//! use flocate::index::{IndexConfig, build::build_index, load_index, save_index};
//! use flocate::query::QueryEngine;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let index = build_index(Path::new("."), &IndexConfig::default(), true)?;
//! save_index(Path::new("index.db"), &index)?;
//!
//! let index = load_index(Path::new("index.db"))?;
//! let engine = QueryEngine::new(&index);
//! for path in engine.search(b"readme") {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod index;
pub mod query;
pub mod utils;
