//! Image operations — pure Rust, zero external dependencies.
//!
//! The module is split into:
//! - **Methods**: the [`ResizeMethod`] registry config names are validated against
//! - **Source**: the [`ImageSource`] trait the resolver calls through
//! - **Disk**: [`DiskSource`], the production `image`-crate implementation
//! - **Calculations**: pure functions for dimension math (unit testable)

pub mod calculations;
pub mod disk;
pub mod methods;
pub mod source;

pub use calculations::{fit_within, scale_to_height, scale_to_width};
pub use disk::DiskSource;
pub use methods::{Quality, ResizeMethod};
pub use source::{ImageHandle, ImageSource, SourceError};
