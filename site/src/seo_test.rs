use super::*;

fn config() -> SiteConfig {
    SiteConfig::new("https://softwared.dev", "/site").unwrap()
}

// =============================================================
// Structured data
// =============================================================

#[test]
fn organization_uses_absolute_urls() {
    let org = Organization::for_site(&config());
    assert_eq!(org.url, "https://softwared.dev/site/");
    assert_eq!(org.logo, "https://softwared.dev/site/softwared_logo.png");
}

#[test]
fn organization_serializes_schema_org_keys() {
    let body = Organization::for_site(&config()).to_script().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["@context"], "https://schema.org");
    assert_eq!(parsed["@type"], "Organization");
    assert_eq!(parsed["name"], "Softwared");
    assert_eq!(parsed["url"], "https://softwared.dev/site/");
    assert_eq!(parsed["knowsAbout"].as_array().map(Vec::len), Some(6));
    assert_eq!(parsed["knowsAbout"][5], "Flutter");
}

#[test]
fn organization_script_cannot_close_script_tag() {
    // Hosts can't carry `<`, so exercise the escape through the base path.
    let config = SiteConfig::new("https://softwared.dev", "</script>").unwrap();
    let body = Organization::for_site(&config).to_script().unwrap();
    assert!(!body.contains('<'));
    assert!(body.contains("\\u003c/script>"));
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["url"], "https://softwared.dev/</script>/");
}

// =============================================================
// Robots and sitemap
// =============================================================

#[test]
fn robots_allows_all_and_points_at_sitemap() {
    let robots = robots_txt(&config());
    assert!(robots.starts_with("User-Agent: *\nAllow: /\n"));
    assert!(robots.contains("Sitemap: https://softwared.dev/site/sitemap.xml\n"));
}

#[test]
fn sitemap_lists_home_page() {
    let xml = sitemap_xml(&config(), "2026-01-02T03:04:05Z");
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset"));
    assert!(xml.contains("<loc>https://softwared.dev/site/</loc>"));
    assert!(xml.contains("<lastmod>2026-01-02T03:04:05Z</lastmod>"));
    assert!(xml.contains("<changefreq>weekly</changefreq>"));
    assert!(xml.contains("<priority>1.0</priority>"));
    assert_eq!(xml.matches("<url>").count(), 1);
}

#[test]
fn sitemap_escapes_markup_in_urls() {
    let config = SiteConfig::new("https://softwared.dev", "a&b").unwrap();
    let xml = sitemap_xml(&config, "now");
    assert!(xml.contains("<loc>https://softwared.dev/a&amp;b/</loc>"));
}

#[test]
fn title_and_description_copy() {
    assert!(PAGE_TITLE.starts_with("Softwared — "));
    assert!(PAGE_DESCRIPTION.contains("reduce operational costs."));
    assert!(!PAGE_DESCRIPTION.contains("  "));
}
