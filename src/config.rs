//! Responsive set configuration.
//!
//! Handles loading and validating a `responsive.toml` file: a `[defaults]`
//! table plus one `[sets.<name>]` table per responsive set. Set names are
//! normalized to lower case once at load time; lookups go through the same
//! [`normalize_name`] function, so `Hero` and `hero` are the same set.
//!
//! ## Configuration file
//!
//! ```toml
//! [defaults]
//! method = "fill"            # Resize method when a set declares none
//! arguments = [800, 600]     # Fallback-image arguments when a set declares none
//! css_classes = ""           # Extra classes on every rendered fallback image
//! template = "picture"       # Markup template: "picture" or "data-picture"
//!
//! [sets.hero]
//! method = "fill"
//! default_arguments = [400, 200]
//! css_classes = "hero-image"
//!
//! [sets.hero.sizes]          # Ordered: declaration order is media-query precedence
//! "(min-width: 800px)" = [800, 400]
//! "(min-width: 1200px)" = [1200, 600]
//! ```
//!
//! `sizes` also accepts the key `arguments`, and `default_arguments` the key
//! `default_args`. Unknown keys are rejected to catch typos early.
//!
//! ## Validation
//!
//! Every set must declare at least one sizes entry; every query key must be a
//! non-empty, non-numeric string; every argument list must be non-empty and
//! match the declared arity of the effective resize method; method and
//! template names must exist in their registries. Violations are reported
//! with the set name and the offending entry.

use crate::imaging::ResizeMethod;
use crate::render::Template;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("set names '{first}' and '{second}' collide after lower-casing")]
    DuplicateSet { first: String, second: String },
    #[error("responsive set '{set}' does not declare any sizes")]
    MissingSizes { set: String },
    #[error("responsive set '{set}': size entry {index} has an empty query")]
    EmptyQuery { set: String, index: usize },
    #[error("responsive set '{set}': query '{query}' is purely numeric, expected a media query")]
    NumericQuery { set: String, query: String },
    #[error("responsive set '{set}': query '{query}' has an empty argument list")]
    EmptyArguments { set: String, query: String },
    #[error(
        "responsive set '{set}': method '{method}' takes {expected} argument(s), \
         but '{entry}' supplies {got}"
    )]
    BadArity {
        set: String,
        entry: String,
        method: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("responsive set '{set}': unknown resize method '{method}'")]
    UnknownMethod { set: String, method: String },
    #[error("responsive set '{set}': unknown template '{template}'")]
    UnknownTemplate { set: String, template: String },
    #[error("defaults: {0}")]
    Defaults(String),
}

/// Normalize a set name for lookup. Applied to every configured set name at
/// load time and to every requested name at resolve time.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Top-level configuration: global defaults plus the named sets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetsConfig {
    /// Global fallbacks applied when a set leaves a field unset.
    pub defaults: Defaults,
    /// Named responsive sets; keys are lower-cased at load time.
    pub sets: IndexMap<String, SetConfig>,
}

/// Global defaults for fields a set may omit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    /// Resize method used when a set declares none.
    pub method: String,
    /// Arguments for the fallback image when neither the call nor the set
    /// supplies any.
    pub arguments: Vec<u32>,
    /// Extra CSS classes on the rendered fallback image ("" = none).
    pub css_classes: String,
    /// Markup template used when a set declares none.
    pub template: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            method: "fill".to_string(),
            arguments: vec![800, 600],
            css_classes: String::new(),
            template: "picture".to_string(),
        }
    }
}

/// One named responsive set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetConfig {
    /// Resize method override for this set.
    pub method: Option<String>,
    /// Ordered media-query → resize-arguments mapping. Declaration order is
    /// preserved into the rendered markup.
    #[serde(alias = "arguments")]
    pub sizes: IndexMap<String, Vec<u32>>,
    /// Arguments for the fallback image.
    #[serde(alias = "default_args")]
    pub default_arguments: Option<Vec<u32>>,
    /// Extra CSS classes on the rendered fallback image.
    pub css_classes: Option<String>,
    /// Markup template override for this set.
    pub template: Option<String>,
}

/// A validated set with every fallback applied: what the resolver executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetPlan {
    pub method: ResizeMethod,
    pub default_arguments: Vec<u32>,
    pub css_classes: Option<String>,
    pub template: Template,
}

impl SetConfig {
    /// Validate this set against the method and template registries and
    /// resolve its effective method, fallback arguments, classes, and
    /// template. Errors name the set and the offending entry.
    pub fn plan(&self, name: &str, defaults: &Defaults) -> Result<SetPlan, ConfigError> {
        let method_name = self.method.as_deref().unwrap_or(&defaults.method);
        let method =
            ResizeMethod::parse(method_name).ok_or_else(|| ConfigError::UnknownMethod {
                set: name.to_string(),
                method: method_name.to_string(),
            })?;

        let template_name = self.template.as_deref().unwrap_or(&defaults.template);
        let template = Template::parse(template_name).ok_or_else(|| ConfigError::UnknownTemplate {
            set: name.to_string(),
            template: template_name.to_string(),
        })?;

        if self.sizes.is_empty() {
            return Err(ConfigError::MissingSizes {
                set: name.to_string(),
            });
        }

        for (index, (query, args)) in self.sizes.iter().enumerate() {
            if query.is_empty() {
                return Err(ConfigError::EmptyQuery {
                    set: name.to_string(),
                    index,
                });
            }
            if query.chars().all(|c| c.is_numeric() || c == '.') {
                return Err(ConfigError::NumericQuery {
                    set: name.to_string(),
                    query: query.clone(),
                });
            }
            if args.is_empty() {
                return Err(ConfigError::EmptyArguments {
                    set: name.to_string(),
                    query: query.clone(),
                });
            }
            if args.len() != method.arity() {
                return Err(ConfigError::BadArity {
                    set: name.to_string(),
                    entry: query.clone(),
                    method: method.name(),
                    expected: method.arity(),
                    got: args.len(),
                });
            }
        }

        let default_arguments = self
            .default_arguments
            .clone()
            .unwrap_or_else(|| defaults.arguments.clone());
        if default_arguments.is_empty() {
            return Err(ConfigError::EmptyArguments {
                set: name.to_string(),
                query: "default_arguments".to_string(),
            });
        }
        if default_arguments.len() != method.arity() {
            return Err(ConfigError::BadArity {
                set: name.to_string(),
                entry: "default_arguments".to_string(),
                method: method.name(),
                expected: method.arity(),
                got: default_arguments.len(),
            });
        }

        let css_classes = self
            .css_classes
            .clone()
            .or_else(|| (!defaults.css_classes.is_empty()).then(|| defaults.css_classes.clone()));

        Ok(SetPlan {
            method,
            default_arguments,
            css_classes,
            template,
        })
    }
}

impl SetsConfig {
    /// Parse config from a TOML string, normalize set names, and validate.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: SetsConfig = toml::from_str(content)?;
        let config = parsed.normalized()?;
        config.validate()?;
        Ok(config)
    }

    /// Rebuild the sets table with lower-cased keys, preserving order.
    fn normalized(mut self) -> Result<Self, ConfigError> {
        let mut sets: IndexMap<String, SetConfig> = IndexMap::with_capacity(self.sets.len());
        for (name, set) in std::mem::take(&mut self.sets) {
            let key = normalize_name(&name);
            if let Some((existing, _)) = sets.get_key_value(&key) {
                return Err(ConfigError::DuplicateSet {
                    first: existing.clone(),
                    second: name,
                });
            }
            sets.insert(key, set);
        }
        self.sets = sets;
        Ok(self)
    }

    /// Validate global defaults and every set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let method = ResizeMethod::parse(&self.defaults.method).ok_or_else(|| {
            ConfigError::Defaults(format!("unknown resize method '{}'", self.defaults.method))
        })?;
        if self.defaults.arguments.is_empty() {
            return Err(ConfigError::Defaults(
                "defaults.arguments must not be empty".to_string(),
            ));
        }
        if Template::parse(&self.defaults.template).is_none() {
            return Err(ConfigError::Defaults(format!(
                "unknown template '{}'",
                self.defaults.template
            )));
        }
        // Sets overriding the method check their own arity in plan(); the
        // global argument list only has to fit the global method.
        if self.defaults.arguments.len() != method.arity() {
            return Err(ConfigError::Defaults(format!(
                "defaults.method '{}' takes {} argument(s), defaults.arguments has {}",
                method.name(),
                method.arity(),
                self.defaults.arguments.len()
            )));
        }

        for (name, set) in &self.sets {
            set.plan(name, &self.defaults)?;
        }
        Ok(())
    }

    /// Look up a set by name, applying the same normalization as load time.
    pub fn get(&self, name: &str) -> Option<&SetConfig> {
        self.sets.get(&normalize_name(name))
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<SetsConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    SetsConfig::from_toml_str(&content)
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Responsive set configuration
# ============================
# Each [sets.<name>] table is one responsive image set: an ordered list of
# (media query -> resize arguments) entries plus one fallback image.
# Set names are case-insensitive.

[defaults]
# Resize method used when a set declares none.
# Registered methods: fill (w, h), fit (w, h), scale-width (w), scale-height (h).
method = "fill"

# Fallback-image arguments used when neither the render call nor the set
# supplies any. Must match the method's argument count.
arguments = [800, 600]

# Extra CSS classes on every rendered fallback image ("" = none).
css_classes = ""

# Markup template: "picture" (a <picture> element with <source media> children)
# or "data-picture" (legacy picturefill span markup).
template = "picture"

# ---------------------------------------------------------------------------
# Example set. Declaration order of the sizes entries is preserved in the
# markup and determines media-query precedence.
# ---------------------------------------------------------------------------
[sets.hero]
method = "fill"
default_arguments = [400, 200]
css_classes = "hero-image"

[sets.hero.sizes]
"(min-width: 800px)" = [800, 400]
"(min-width: 1200px)" = [1200, 600]
"##
}
