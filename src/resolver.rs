//! Responsive set resolution.
//!
//! The core operation of the crate: given a loaded [`SetsConfig`], an
//! [`ImageSource`], a requested set name, and optional override arguments,
//! produce the view model ([`ResponsiveSet`]) that the render module turns
//! into markup.
//!
//! ## Outcome policy
//!
//! An unknown set name is the expected, common case (a template asking for a
//! set this site doesn't configure) and returns `Ok(None)`. A *matched* set
//! that is structurally invalid, names a method the source doesn't support,
//! or whose resize calls fail is a genuine defect and returns `Err` — never
//! silently swallowed.
//!
//! Resolution is a single synchronous pass: no caching, no retries, no
//! partial results. The capability check runs before the first resize call,
//! so a missing method performs no work at all.

use crate::config::{ConfigError, Defaults, SetConfig, SetsConfig, normalize_name};
use crate::imaging::{ImageHandle, ImageSource, SourceError};
use crate::render::Template;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    /// The matched set (or the global defaults it leans on) is structurally
    /// invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(
        "responsive set '{set}': {method} takes {expected} argument(s), \
         but the call supplies {got}"
    )]
    OverrideArity {
        set: String,
        method: &'static str,
        expected: usize,
        got: usize,
    },
    /// The effective resize method exists in the registry but not on this
    /// image source. Raised before any resize call.
    #[error("image source does not support resize method '{method}' required by set '{set}'")]
    MissingCapability { set: String, method: &'static str },
    /// A delegated resize call failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// One resized variant paired with the media query that selects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub image: ImageHandle,
    pub query: String,
}

/// The view model handed to the render module: ordered variants, one
/// fallback image, optional extra classes, and the chosen template.
///
/// Built fresh per [`Resolver::resolve_set`] call and discarded after
/// rendering; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponsiveSet {
    pub variants: Vec<Variant>,
    pub default_image: ImageHandle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_classes: Option<String>,
    pub template: Template,
}

/// Resolves set names against a configuration loaded once at startup.
pub struct Resolver<'a> {
    config: &'a SetsConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(config: &'a SetsConfig) -> Self {
        Self { config }
    }

    /// Resolve a named set against an image source.
    ///
    /// `override_args`, when non-empty, replace the fallback-image arguments
    /// (call-time override > per-set `default_arguments` > global defaults).
    /// Returns `Ok(None)` when no set matches the name.
    pub fn resolve_set(
        &self,
        source: &impl ImageSource,
        name: &str,
        override_args: &[u32],
    ) -> Result<Option<ResponsiveSet>, ResolveError> {
        let key = normalize_name(name);
        let Some(set) = self.config.sets.get(&key) else {
            return Ok(None);
        };
        Ok(Some(self.build(source, &key, set, override_args)?))
    }

    fn build(
        &self,
        source: &impl ImageSource,
        key: &str,
        set: &SetConfig,
        override_args: &[u32],
    ) -> Result<ResponsiveSet, ResolveError> {
        // resolve_set accepts hand-constructed configs, so the matched set is
        // validated here even when the loader already did.
        let plan = set.plan(key, self.defaults())?;

        let default_args = if override_args.is_empty() {
            plan.default_arguments.as_slice()
        } else {
            if override_args.len() != plan.method.arity() {
                return Err(ResolveError::OverrideArity {
                    set: key.to_string(),
                    method: plan.method.name(),
                    expected: plan.method.arity(),
                    got: override_args.len(),
                });
            }
            override_args
        };

        if !source.supports(plan.method) {
            return Err(ResolveError::MissingCapability {
                set: key.to_string(),
                method: plan.method.name(),
            });
        }

        let mut variants = Vec::with_capacity(set.sizes.len());
        for (query, args) in &set.sizes {
            let image = source.resize(plan.method, args)?;
            variants.push(Variant {
                image,
                query: query.clone(),
            });
        }

        let default_image = source.resize(plan.method, default_args)?;

        Ok(ResponsiveSet {
            variants,
            default_image,
            css_classes: plan.css_classes,
            template: plan.template,
        })
    }

    fn defaults(&self) -> &Defaults {
        &self.config.defaults
    }
}
