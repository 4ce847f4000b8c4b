#![warn(missing_docs)]

//! Style application for themekit => See the `themekit` crate.
//!
//! Resolves named style blocks from a
//! [ThemeResolver](themekit_theme::ThemeResolver) and pushes them onto views,
//! labels and buttons through the traits in [surface].

/// Contains [apply::apply] and the [apply::ApplyStyle] trait.
pub mod apply;

/// Contains headless implementations of the surface traits.
pub mod model;

/// Contains the [style::ResolvedStyle] struct.
pub mod style;

/// Contains the surface traits and [surface::StyleTarget].
pub mod surface;
