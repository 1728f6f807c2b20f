//! Deployment configuration: public site URL and base path.
//!
//! The site is exported as static files and may be hosted below a path
//! prefix (GitHub Pages project sites live at `/<repo>`). Every absolute URL
//! in metadata and every asset link goes through [`SiteConfig`] so the prefix
//! is applied consistently.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use url::Url;

/// Site URL used when `SITE_URL` is unset or blank.
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Error returned while resolving [`SiteConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The configured site URL does not parse.
    #[error("invalid SITE_URL `{url}`: {source}")]
    MalformedSiteUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The configured site URL parses but can't be used as the public origin.
    #[error("invalid SITE_URL `{url}`: {reason}")]
    InvalidSiteUrl { url: String, reason: &'static str },
}

/// Resolved public location of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    site_url: String,
    base_path: String,
    host: String,
}

impl SiteConfig {
    /// Build from raw values, normalizing both.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the URL has no usable host.
    pub fn new(site_url: &str, base_path: &str) -> Result<Self, ConfigError> {
        let site_url = normalize_site_url(Some(site_url));
        let host = site_host(&site_url)?;
        Ok(Self { site_url, base_path: normalize_base_path(Some(base_path)), host })
    }

    /// Build from environment variables.
    ///
    /// - `SITE_URL`: public origin, default [`DEFAULT_SITE_URL`]
    /// - `SITE_BASE_PATH`: path prefix; when unset, derived from
    ///   `GITHUB_ACTIONS` + `GITHUB_REPOSITORY`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a malformed `SITE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a malformed `SITE_URL`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let site_url = normalize_site_url(lookup("SITE_URL").as_deref());
        let host = site_host(&site_url)?;
        let base_path = resolve_base_path(
            lookup("SITE_BASE_PATH").as_deref(),
            lookup("GITHUB_ACTIONS").as_deref(),
            lookup("GITHUB_REPOSITORY").as_deref(),
        );
        Ok(Self { site_url, base_path, host })
    }

    /// Origin without trailing slash, e.g. `https://softwared.dev`.
    #[must_use]
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Path prefix with leading slash and no trailing slash, or empty.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Host of the site URL as a browser reports it: lowercase, IDNs in
    /// punycode, IPv6 literals bracketed.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Absolute URL for a site path, including the base path.
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.site_url, with_base(&self.base_path, path))
    }
}

/// Root-relative URL for a site path, including the base path.
#[must_use]
pub fn with_base(base_path: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base_path}{path}")
    } else {
        format!("{base_path}/{path}")
    }
}

/// Trim, ensure a leading slash, and drop trailing slashes. Blank means none.
#[must_use]
pub fn normalize_base_path(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return String::new();
    }
    let prefixed = if trimmed.starts_with('/') { trimmed.to_owned() } else { format!("/{trimmed}") };
    prefixed.trim_end_matches('/').to_owned()
}

/// Trim, default when blank, assume `https://` when no scheme is given, and
/// drop trailing slashes.
#[must_use]
pub fn normalize_site_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return DEFAULT_SITE_URL.to_owned();
    }
    let with_scheme = if has_http_scheme(trimmed) { trimmed.to_owned() } else { format!("https://{trimmed}") };
    with_scheme.trim_end_matches('/').to_owned()
}

/// Base path to deploy under.
///
/// An explicit non-blank override wins. Otherwise, inside GitHub Actions,
/// project pages deploy at `/<repo>` while user/organization pages
/// (`<name>.github.io`) deploy at the domain root.
#[must_use]
pub fn resolve_base_path(explicit: Option<&str>, github_actions: Option<&str>, repository: Option<&str>) -> String {
    if let Some(value) = explicit.filter(|v| !v.trim().is_empty()) {
        return normalize_base_path(Some(value));
    }
    if github_actions.is_none_or(str::is_empty) {
        return String::new();
    }
    let repo = repository
        .and_then(|full| full.split('/').nth(1))
        .unwrap_or_default();
    if repo.is_empty() || repo.ends_with(".github.io") {
        return String::new();
    }
    format!("/{repo}")
}

/// Whether `url` starts with `http://` or `https://`, case-insensitive.
fn has_http_scheme(url: &str) -> bool {
    ["https://", "http://"]
        .into_iter()
        .any(|scheme| url.get(..scheme.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme)))
}

fn invalid(url: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidSiteUrl { url: url.to_owned(), reason }
}

/// Parse an `http(s)` URL and return its host.
fn site_host(raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::MalformedSiteUrl { url: raw.to_owned(), source })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(raw, "scheme must be http or https"));
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(invalid(raw, "credentials are not allowed"));
    }
    url.host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| invalid(raw, "missing host"))
}
