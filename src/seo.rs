//! SEO metadata: canonical URLs, `hreflang` alternates, Open Graph locales
//! and the multilingual sitemap.

use crate::i18n::{alternate_urls, language_from_path, localized_path, x_default_url, Language};
use crate::routes::Route;
use serde::Serialize;
use std::fmt::Write;

/// `hreflang` value of the fallback alternate.
pub const X_DEFAULT: &str = "x-default";

/// One `<link rel="alternate">` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HreflangLink {
    pub hreflang: &'static str,
    pub href: String,
}

/// Head metadata for a single rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub lang: Language,
    /// `<title>`: site name and tagline
    pub title: String,
    pub description: &'static str,
    pub canonical_url: String,
    pub og_locale: &'static str,
    pub og_locale_alternates: Vec<&'static str>,
    /// One link per language followed by the `x-default` link
    pub alternates: Vec<HreflangLink>,
}

impl PageMeta {
    /// Build the metadata for the page at `path` on `site_origin`.
    pub fn for_path(path: &str, site_origin: &str) -> Self {
        let lang = language_from_path(path);
        let base = site_origin.trim_end_matches('/');

        let mut alternates: Vec<HreflangLink> = alternate_urls(path, site_origin)
            .into_iter()
            .map(|alternate| HreflangLink {
                hreflang: alternate.hreflang,
                href: alternate.url,
            })
            .collect();
        alternates.push(HreflangLink {
            hreflang: X_DEFAULT,
            href: x_default_url(path, site_origin),
        });

        let strings = lang.strings();

        Self {
            lang,
            title: format!("{} | {}", strings.site_name, strings.tagline),
            description: strings.description,
            canonical_url: format!("{}{}", base, localized_path(lang, path)),
            og_locale: lang.locale(),
            og_locale_alternates: Language::ALL
                .into_iter()
                .filter(|&other| other != lang)
                .map(|other| other.locale())
                .collect(),
            alternates,
        }
    }

    /// Render the alternate links as HTML `<link>` tags, one per line.
    pub fn render_link_tags(&self) -> String {
        self.alternates
            .iter()
            .map(|link| {
                format!(
                    r#"<link rel="alternate" hreflang="{}" href="{}" />"#,
                    link.hreflang,
                    escape_xml(&link.href)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render a sitemap listing every page in every language, each entry
/// carrying `xhtml:link` alternates.
pub fn sitemap_xml(site_origin: &str) -> String {
    let base = site_origin.trim_end_matches('/');
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for route in Route::ALL {
        for lang in Language::ALL {
            let _ = writeln!(xml, "  <url>");
            let _ = writeln!(
                xml,
                "    <loc>{}</loc>",
                escape_xml(&format!("{}{}", base, route.localized(lang)))
            );
            for alternate in Language::ALL {
                let _ = writeln!(
                    xml,
                    "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />",
                    alternate.metadata().sitemap_locale,
                    escape_xml(&format!("{}{}", base, route.localized(alternate)))
                );
            }
            let _ = writeln!(xml, "  </url>");
        }
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
