//! The resize method registry.
//!
//! Configuration refers to resize operations by name (`"fill"`, `"Fit"`,
//! `"scale-width"`…). Instead of dispatching reflectively on those strings at
//! call time, every name is parsed into a [`ResizeMethod`] when the config is
//! loaded, and each method declares how many numeric arguments it takes. A
//! name that doesn't parse, or an argument list of the wrong length, is a
//! configuration error before any image is touched.
//!
//! ## Methods
//!
//! | Name | Arguments | Behavior |
//! |---|---|---|
//! | `fill` | width, height | resize to cover, center-crop to exact dimensions |
//! | `fit` | width, height | resize to fit entirely within the box |
//! | `scale-width` | width | scale to exact width, height follows aspect |
//! | `scale-height` | height | scale to exact height, width follows aspect |

/// A resize operation an image source may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeMethod {
    /// Resize to cover the target box, then center-crop. Args: `[width, height]`.
    Fill,
    /// Resize to fit entirely within the target box. Args: `[width, height]`.
    Fit,
    /// Scale to an exact width, preserving aspect ratio. Args: `[width]`.
    ScaleWidth,
    /// Scale to an exact height, preserving aspect ratio. Args: `[height]`.
    ScaleHeight,
}

impl ResizeMethod {
    /// All registered methods, in documentation order.
    pub const ALL: &'static [ResizeMethod] = &[
        ResizeMethod::Fill,
        ResizeMethod::Fit,
        ResizeMethod::ScaleWidth,
        ResizeMethod::ScaleHeight,
    ];

    /// Parse a configured method name. Case-insensitive; both `scale-width`
    /// and `scale_width` spellings are accepted.
    pub fn parse(name: &str) -> Option<ResizeMethod> {
        match name.to_ascii_lowercase().replace('_', "-").as_str() {
            "fill" => Some(ResizeMethod::Fill),
            "fit" => Some(ResizeMethod::Fit),
            "scale-width" => Some(ResizeMethod::ScaleWidth),
            "scale-height" => Some(ResizeMethod::ScaleHeight),
            _ => None,
        }
    }

    /// Canonical lower-case name, as written in config and filenames.
    pub fn name(self) -> &'static str {
        match self {
            ResizeMethod::Fill => "fill",
            ResizeMethod::Fit => "fit",
            ResizeMethod::ScaleWidth => "scale-width",
            ResizeMethod::ScaleHeight => "scale-height",
        }
    }

    /// Number of numeric arguments the method takes.
    pub fn arity(self) -> usize {
        match self {
            ResizeMethod::Fill | ResizeMethod::Fit => 2,
            ResizeMethod::ScaleWidth | ResizeMethod::ScaleHeight => 1,
        }
    }
}

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_names() {
        assert_eq!(ResizeMethod::parse("fill"), Some(ResizeMethod::Fill));
        assert_eq!(ResizeMethod::parse("fit"), Some(ResizeMethod::Fit));
        assert_eq!(
            ResizeMethod::parse("scale-width"),
            Some(ResizeMethod::ScaleWidth)
        );
        assert_eq!(
            ResizeMethod::parse("scale-height"),
            Some(ResizeMethod::ScaleHeight)
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ResizeMethod::parse("Fill"), Some(ResizeMethod::Fill));
        assert_eq!(ResizeMethod::parse("FIT"), Some(ResizeMethod::Fit));
        assert_eq!(
            ResizeMethod::parse("Scale-Width"),
            Some(ResizeMethod::ScaleWidth)
        );
    }

    #[test]
    fn parse_accepts_underscore_spelling() {
        assert_eq!(
            ResizeMethod::parse("scale_width"),
            Some(ResizeMethod::ScaleWidth)
        );
        assert_eq!(
            ResizeMethod::parse("scale_height"),
            Some(ResizeMethod::ScaleHeight)
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(ResizeMethod::parse("crop"), None);
        assert_eq!(ResizeMethod::parse(""), None);
    }

    #[test]
    fn name_roundtrips_through_parse() {
        for &method in ResizeMethod::ALL {
            assert_eq!(ResizeMethod::parse(method.name()), Some(method));
        }
    }

    #[test]
    fn arity_per_method() {
        assert_eq!(ResizeMethod::Fill.arity(), 2);
        assert_eq!(ResizeMethod::Fit.arity(), 2);
        assert_eq!(ResizeMethod::ScaleWidth.arity(), 1);
        assert_eq!(ResizeMethod::ScaleHeight.arity(), 1);
    }

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_90() {
        assert_eq!(Quality::default().value(), 90);
    }
}
