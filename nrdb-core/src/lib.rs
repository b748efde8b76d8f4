//! Card catalog lookup and rendering for NetrunnerDB card data.
//!
//! This crate is pure: it never touches the network or the filesystem.
//! Raw dataset records are decoded into the typed model in [`types`], joined
//! into an immutable [`Catalog`], searched with the fuzzy [`matcher`], and
//! rendered by [`render`]. Fetching the datasets lives in `nrdb-data`.

pub mod catalog;
pub mod extract;
pub mod matcher;
pub mod normalize;
pub mod render;
pub mod types;

pub use catalog::{CardEntry, Catalog};
pub use extract::{ScanMode, extract_queries, queries_in_message};
pub use matcher::{ScoredMatch, score, similarity};
pub use normalize::normalize;
pub use render::{Markup, render, render_plain, render_rich};
pub use types::{Card, Cycle, Mwl, Pack, RecordSet, decode_records};
