//! Image source trait and shared types.
//!
//! The [`ImageSource`] trait is the resolver's view of the image it is
//! building variants for: a capability check plus a single `resize` entry
//! point taking a [`ResizeMethod`] and its numeric arguments. The production
//! implementation is [`DiskSource`](super::disk::DiskSource); tests use a
//! recording mock that never touches pixels.
//!
//! A source may support only a subset of the registered methods, which is
//! why capability is checked per source and not just at config parse time.

use super::methods::ResizeMethod;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// A resized image produced by a source: where it lives and how big it is.
///
/// The url is whatever the source considers addressable output — a relative
/// file path for [`DiskSource`](super::disk::DiskSource). It is passed
/// through verbatim into `srcset`/`src` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageHandle {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// A source image that can perform named resize operations.
pub trait ImageSource {
    /// Does this source implement the given method?
    fn supports(&self, method: ResizeMethod) -> bool;

    /// Execute a resize operation with the given numeric arguments.
    ///
    /// Callers guarantee `args.len() == method.arity()`; a source may still
    /// reject argument values it cannot satisfy (e.g. zero dimensions).
    fn resize(&self, method: ResizeMethod, args: &[u32]) -> Result<ImageHandle, SourceError>;
}
