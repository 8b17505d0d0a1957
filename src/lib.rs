//! # Responsive Sets
//!
//! Resolve named "responsive image sets" from a declarative TOML
//! configuration into `<picture>`-style markup. A set is an ordered list of
//! (media query → resize arguments) entries plus one fallback image; the
//! resolver invokes a named resize operation on an image source for each
//! entry and hands the result to a compile-time template.
//!
//! ```text
//! responsive.toml  →  resolve_set("hero")  →  view model  →  <picture> markup
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `responsive.toml` loading, set-name normalization, structural validation |
//! | [`resolver`] | Core lookup-and-resolve operation producing the [`resolver::ResponsiveSet`] view model |
//! | [`imaging`] | [`imaging::ResizeMethod`] registry, [`imaging::ImageSource`] trait, disk-backed implementation |
//! | [`render`] | Maud markup generation: `picture` and legacy `data-picture` templates |
//!
//! # Design Decisions
//!
//! ## Explicit Lookup Over Dynamic Dispatch
//!
//! Systems in this space traditionally intercept *unknown method calls* on an
//! image object and treat the method name as a set name. Here the lookup is an
//! explicit API — [`resolver::Resolver::resolve_set`] — returning `Ok(None)`
//! for an unknown name and typed errors for defects of a matched set. The
//! implicit convention is gone; the input/output contract is the same.
//!
//! ## Typed Method Registry Over Reflective Calls
//!
//! Resize methods are not discovered reflectively at call time. Every
//! configured method name parses into [`imaging::ResizeMethod`] at load time,
//! each method declares its argument count, and argument lists are checked
//! against it before any image is touched. Image sources additionally report
//! per-method capability via [`imaging::ImageSource::supports`].
//!
//! ## Configuration Is a Value, Not a Singleton
//!
//! [`config::SetsConfig`] is loaded once and passed by reference into the
//! resolver. Set names are lower-cased once at load time; lookups go through
//! the same [`config::normalize_name`] function. There is no global mutable
//! state and nothing is cached between resolve calls.
//!
//! ## Failure Policy
//!
//! An unknown set name is the expected case and is a `None`, not an error. A
//! matched set that is malformed, names a method the source doesn't support,
//! or whose resize calls fail is an error that aborts that render — earlier
//! systems in this space were inconsistent about swallowing these.
//!
//! ## Maud Over Template Engines
//!
//! Markup is generated with [Maud](https://maud.lambda.xyz/): compile-time
//! checked, auto-escaped, no template directory to ship. The per-set
//! `template` key selects a named built-in renderer instead of a file path.

pub mod config;
pub mod imaging;
pub mod render;
pub mod resolver;
