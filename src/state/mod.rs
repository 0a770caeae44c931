/// State management module
///
/// This module holds everything the views read, with no UI types:
/// - Asset discovery behind a swappable source (discovery.rs)
/// - Catalog building and keyword grouping (catalog.rs)
/// - Shared data structures (data.rs)
/// - Gallery navigation and scroll locking (gallery.rs)
/// - Pointer tilt math (tilt.rs)
/// - Music profile link parsing (profile.rs)

pub mod catalog;
pub mod data;
pub mod discovery;
pub mod gallery;
pub mod profile;
pub mod samples;
pub mod tilt;
