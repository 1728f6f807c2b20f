//! Static export: render the page once and write a deployable directory.
//!
//! ARCHITECTURE
//! ============
//! ```text
//! out/
//!   index.html      server-rendered shell + page
//!   pkg/            WASM/JS/CSS bundle from the Leptos site root
//!   <public/*>      static assets
//!   robots.txt
//!   sitemap.xml
//!   .nojekyll       keeps GitHub Pages from hiding `_`-prefixed files
//! ```
//! The page is a directory index, so every URL ends in a trailing slash.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use std::fs;
use std::path::{Path, PathBuf};

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use site::app::{PageContext, shell};
use site::config::SiteConfig;
use site::seo::{Organization, robots_txt, sitemap_xml};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::AppError;

/// Where the export reads from and writes to.
#[derive(Debug, Clone)]
pub struct ExportPlan {
    pub out_dir: PathBuf,
    pub public_dir: PathBuf,
    /// Remove the previous output before writing.
    pub clean: bool,
}

/// What an export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub index: PathBuf,
    pub copied_files: usize,
    pub bundle_found: bool,
}

/// Render the full document to an HTML string.
///
/// # Errors
///
/// [`AppError::StructuredData`] when the JSON-LD can't be serialized.
pub fn render_page(options: &LeptosOptions, config: &SiteConfig, page: PageContext) -> Result<String, AppError> {
    let structured_data = Organization::for_site(config).to_script()?;
    let options = options.clone();
    let config = config.clone();
    Ok(Owner::new().with(move || shell(options, config, page, structured_data).to_html()))
}

/// Run the export described by `plan`, stamped with `now`.
///
/// # Errors
///
/// Any filesystem failure, or structured data or a timestamp that can't be
/// serialized.
pub fn run(
    plan: &ExportPlan,
    options: &LeptosOptions,
    config: &SiteConfig,
    now: OffsetDateTime,
) -> Result<ExportSummary, AppError> {
    let out = &plan.out_dir;
    if plan.clean && out.exists() {
        fs::remove_dir_all(out).map_err(AppError::io("removing", out))?;
        tracing::info!(dir = %out.display(), "removed previous export");
    }
    fs::create_dir_all(out).map_err(AppError::io("creating", out))?;

    let mut copied_files = 0;
    if plan.public_dir.is_dir() {
        copied_files += copy_dir(&plan.public_dir, out)?;
    } else {
        tracing::warn!(dir = %plan.public_dir.display(), "public assets directory missing");
    }

    let pkg_name: &str = &options.site_pkg_dir;
    let bundle = Path::new(&*options.site_root).join(pkg_name);
    let bundle_found = bundle.is_dir();
    if bundle_found {
        copied_files += copy_dir(&bundle, &out.join(pkg_name))?;
    } else {
        tracing::warn!(dir = %bundle.display(), "client bundle not built; page will render without hydration");
    }

    let page = PageContext { base_path: config.base_path().to_owned(), year: now.year() };
    let index = out.join("index.html");
    write(&index, &render_page(options, config, page)?)?;
    write(&out.join("robots.txt"), &robots_txt(config))?;
    write(&out.join("sitemap.xml"), &sitemap_xml(config, &now.format(&Rfc3339)?))?;
    write(&out.join(".nojekyll"), "")?;

    Ok(ExportSummary { index, copied_files, bundle_found })
}

fn write(path: &Path, contents: &str) -> Result<(), AppError> {
    fs::write(path, contents).map_err(AppError::io("writing", path))
}

/// Recursively copy `from` into `to`, returning the number of files copied.
fn copy_dir(from: &Path, to: &Path) -> Result<usize, AppError> {
    fs::create_dir_all(to).map_err(AppError::io("creating", to))?;
    let mut copied = 0;
    for entry in fs::read_dir(from).map_err(AppError::io("reading", from))? {
        let entry = entry.map_err(AppError::io("reading", from))?;
        let source = entry.path();
        let target = to.join(entry.file_name());
        let file_type = entry.file_type().map_err(AppError::io("inspecting", &source))?;
        if file_type.is_dir() {
            copied += copy_dir(&source, &target)?;
        } else {
            fs::copy(&source, &target).map_err(AppError::io("copying", &source))?;
            copied += 1;
        }
    }
    Ok(copied)
}
