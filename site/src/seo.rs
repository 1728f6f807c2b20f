//! Search-engine metadata: head copy, Organization JSON-LD, robots and sitemap.
//!
//! Everything here is a pure function of [`SiteConfig`] so the static export
//! and the SSR shell agree on every URL.

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

use serde::Serialize;

use crate::config::SiteConfig;

pub const SITE_NAME: &str = "Softwared";
pub const PAGE_TITLE: &str = "Softwared — Custom Software That Runs Your Business";
pub const PAGE_DESCRIPTION: &str = "We design and develop tailored mobile and web applications that automate core \
business processes, help you serve more customers, and reduce operational costs.";

const ORGANIZATION_DESCRIPTION: &str = "Custom software development for web applications, mobile applications, \
e-commerce solutions, and Flutter apps.";
const KNOWS_ABOUT: &[&str] = &[
    "software",
    "software development",
    "web applications",
    "mobile applications",
    "e-commerce",
    "Flutter",
];

/// Raster logo referenced by structured data.
pub const LOGO_PNG_PATH: &str = "/softwared_logo.png";

/// Google Fonts stylesheet for the body and display faces.
pub const FONTS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=Space+Grotesk:wght@500;600;700&display=swap";

/// Schema.org `Organization` document for the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub url: String,
    pub logo: String,
    pub description: &'static str,
    pub knows_about: &'static [&'static str],
}

impl Organization {
    #[must_use]
    pub fn for_site(config: &SiteConfig) -> Self {
        Self {
            context: "https://schema.org",
            kind: "Organization",
            name: SITE_NAME,
            url: config.absolute_url("/"),
            logo: config.absolute_url(LOGO_PNG_PATH),
            description: ORGANIZATION_DESCRIPTION,
            knows_about: KNOWS_ABOUT,
        }
    }

    /// JSON-LD body safe to inline in a `<script>` element.
    ///
    /// `<` is emitted as `\u003c`, which JSON parsers read back unchanged but
    /// which can never close the surrounding script.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; the document holds only strings, so this
    /// does not happen in practice.
    pub fn to_script(&self) -> Result<String, serde_json::Error> {
        Ok(serde_json::to_string(self)?.replace('<', "\\u003c"))
    }
}

/// `robots.txt`: allow everything and point at the sitemap.
#[must_use]
pub fn robots_txt(config: &SiteConfig) -> String {
    format!(
        "User-Agent: *\nAllow: /\n\nSitemap: {}\n",
        config.absolute_url("/sitemap.xml")
    )
}

/// Single-entry `sitemap.xml`. `lastmod` is an RFC 3339 timestamp.
#[must_use]
pub fn sitemap_xml(config: &SiteConfig, lastmod: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
         <url>\n\
         <loc>{}</loc>\n\
         <lastmod>{}</lastmod>\n\
         <changefreq>weekly</changefreq>\n\
         <priority>1.0</priority>\n\
         </url>\n\
         </urlset>\n",
        xml_escape(&config.absolute_url("/")),
        xml_escape(lastmod),
    )
}

fn xml_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
