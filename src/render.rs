//! Markup generation for resolved responsive sets.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating:
//! type-safe, auto-escaped, no template files to ship. The original system
//! selected a template file per set; here the per-set `template` key selects
//! one of the built-in renderers below.
//!
//! ## Templates
//!
//! - **`picture`** (default): a `<picture>` element with one
//!   `<source media srcset>` child per variant, in declaration order, and a
//!   fallback `<img>` carrying the default image and any extra CSS classes.
//! - **`data-picture`**: the legacy picturefill markup — a `span` tree with
//!   `data-src`/`data-media` attributes and a `<noscript>` fallback, for
//!   pages that still ship picturefill.js.

use crate::imaging::ImageHandle;
use crate::resolver::ResponsiveSet;
use maud::{Markup, html};
use serde::Serialize;

/// A built-in markup template a set may select by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    Picture,
    DataPicture,
}

impl Template {
    /// Parse a configured template name.
    pub fn parse(name: &str) -> Option<Template> {
        match name {
            "picture" => Some(Template::Picture),
            "data-picture" => Some(Template::DataPicture),
            _ => None,
        }
    }

    /// Canonical name, as written in config.
    pub fn name(self) -> &'static str {
        match self {
            Template::Picture => "picture",
            Template::DataPicture => "data-picture",
        }
    }
}

/// Render a resolved set with the template it selected.
pub fn render_set(set: &ResponsiveSet) -> Markup {
    match set.template {
        Template::Picture => render_picture(set),
        Template::DataPicture => render_data_picture(set),
    }
}

/// One `srcset` entry with a width descriptor.
fn srcset_entry(image: &ImageHandle) -> String {
    format!("{} {}w", image.url, image.width)
}

fn render_picture(set: &ResponsiveSet) -> Markup {
    let default = &set.default_image;
    html! {
        picture {
            @for variant in &set.variants {
                source media=(variant.query) srcset=(srcset_entry(&variant.image));
            }
            img src=(default.url)
                width=(default.width)
                height=(default.height)
                class=[set.css_classes.as_deref()];
        }
    }
}

fn render_data_picture(set: &ResponsiveSet) -> Markup {
    let default = &set.default_image;
    html! {
        span data-picture class=[set.css_classes.as_deref()] {
            span data-src=(default.url) {}
            @for variant in &set.variants {
                span data-src=(variant.image.url) data-media=(variant.query) {}
            }
            noscript {
                img src=(default.url) width=(default.width) height=(default.height);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Variant;

    fn handle(url: &str, width: u32, height: u32) -> ImageHandle {
        ImageHandle {
            url: url.to_string(),
            width,
            height,
        }
    }

    fn hero_set(template: Template) -> ResponsiveSet {
        ResponsiveSet {
            variants: vec![
                Variant {
                    image: handle("hero-fill-800x400.avif", 800, 400),
                    query: "(min-width: 800px)".to_string(),
                },
                Variant {
                    image: handle("hero-fill-1200x600.avif", 1200, 600),
                    query: "(min-width: 1200px)".to_string(),
                },
            ],
            default_image: handle("hero-fill-400x200.avif", 400, 200),
            css_classes: Some("hero-image".to_string()),
            template,
        }
    }

    #[test]
    fn template_parse_known_names() {
        assert_eq!(Template::parse("picture"), Some(Template::Picture));
        assert_eq!(Template::parse("data-picture"), Some(Template::DataPicture));
        assert_eq!(Template::parse("handlebars"), None);
    }

    #[test]
    fn template_name_roundtrips() {
        for template in [Template::Picture, Template::DataPicture] {
            assert_eq!(Template::parse(template.name()), Some(template));
        }
    }

    #[test]
    fn picture_template_structure() {
        let html = render_set(&hero_set(Template::Picture)).into_string();

        assert!(html.starts_with("<picture>"));
        assert!(html.contains(r#"media="(min-width: 800px)""#));
        assert!(html.contains(r#"srcset="hero-fill-800x400.avif 800w""#));
        assert!(html.contains(r#"srcset="hero-fill-1200x600.avif 1200w""#));
        assert!(html.contains(r#"src="hero-fill-400x200.avif""#));
        assert!(html.contains(r#"class="hero-image""#));
    }

    #[test]
    fn picture_template_preserves_variant_order() {
        let html = render_set(&hero_set(Template::Picture)).into_string();
        let first = html.find("(min-width: 800px)").unwrap();
        let second = html.find("(min-width: 1200px)").unwrap();
        assert!(first < second);
    }

    #[test]
    fn picture_fallback_carries_dimensions() {
        let html = render_set(&hero_set(Template::Picture)).into_string();
        assert!(html.contains(r#"width="400""#));
        assert!(html.contains(r#"height="200""#));
    }

    #[test]
    fn picture_omits_class_when_none() {
        let mut set = hero_set(Template::Picture);
        set.css_classes = None;
        let html = render_set(&set).into_string();
        assert!(!html.contains("class="));
    }

    #[test]
    fn data_picture_template_structure() {
        let html = render_set(&hero_set(Template::DataPicture)).into_string();

        assert!(html.contains("data-picture"));
        // Default span first, then media spans in order
        assert!(html.contains(r#"data-src="hero-fill-400x200.avif""#));
        assert!(html.contains(r#"data-media="(min-width: 800px)""#));
        assert!(html.contains(r#"data-media="(min-width: 1200px)""#));
        assert!(html.contains("<noscript>"));
        assert!(html.contains(r#"<img src="hero-fill-400x200.avif""#));
    }

    #[test]
    fn markup_escapes_untrusted_strings() {
        let mut set = hero_set(Template::Picture);
        set.variants[0].query = r#""><script>alert(1)</script>"#.to_string();
        let html = render_set(&set).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
