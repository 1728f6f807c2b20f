//! `softwared`: build and preview the Softwared landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page itself lives in the `site` crate. This binary renders it through
//! Leptos SSR into a static directory (`export`), serves such a directory
//! locally (`serve`), or does both behind a single-instance lock (`dev`).
//! Deployment settings come from the environment (optionally a `.env` file);
//! build layout comes from `[package.metadata.leptos]`.

mod dev_lock;
mod error;
mod export;
mod serve;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use leptos::config::{LeptosOptions, get_configuration};
use site::config::SiteConfig;
use time::OffsetDateTime;

use crate::dev_lock::DevLock;
use crate::error::AppError;
use crate::export::ExportPlan;

#[derive(Parser, Debug)]
#[command(name = "softwared", about = "Build and preview the Softwared landing page")]
struct Cli {
    /// Manifest carrying `[package.metadata.leptos]`.
    #[arg(long, env = "SOFTWARED_MANIFEST", default_value = "Cargo.toml", global = true)]
    manifest: PathBuf,

    /// Static export directory.
    #[arg(long, env = "SOFTWARED_OUT_DIR", default_value = "out", global = true)]
    out_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page and write a deployable static directory.
    Export(ExportArgs),
    /// Serve an exported directory.
    Serve(ServeArgs),
    /// Export, then serve while holding the dev lock.
    Dev(DevArgs),
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Remove the previous export first.
    #[arg(long)]
    clean: bool,

    /// Static assets copied into the export.
    #[arg(long, default_value = "public")]
    public_dir: PathBuf,
}

#[derive(Args, Debug)]
struct ServeArgs {
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
}

impl ServeArgs {
    fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Args, Debug)]
struct DevArgs {
    /// Remove a stale dev lock left by a crashed run.
    #[arg(long)]
    clean: bool,

    #[arg(long, default_value = ".softwared/dev.lock")]
    lock_file: PathBuf,

    #[arg(long, default_value = "public")]
    public_dir: PathBuf,

    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "ignoring unreadable .env"),
    }

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "softwared failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Export(args) => {
            let plan = ExportPlan { out_dir: cli.out_dir, public_dir: args.public_dir, clean: args.clean };
            export_site(&cli.manifest, &plan)?;
            Ok(())
        }
        Command::Serve(args) => {
            let config = SiteConfig::from_env()?;
            serve::run(&cli.out_dir, config.base_path(), args.addr()).await
        }
        Command::Dev(args) => {
            let lock = DevLock::acquire(&args.lock_file, args.clean)?;
            tracing::info!(lock = %lock.path().display(), "dev session started");

            let plan = ExportPlan { out_dir: cli.out_dir, public_dir: args.public_dir, clean: false };
            let config = export_site(&cli.manifest, &plan)?;
            let served = serve::run(&plan.out_dir, config.base_path(), args.serve.addr()).await;
            drop(lock);
            served
        }
    }
}

/// Resolve configuration and write the export. Returns the site config used.
fn export_site(manifest: &Path, plan: &ExportPlan) -> Result<SiteConfig, AppError> {
    let config = SiteConfig::from_env()?;
    let options = leptos_options(manifest)?;
    let summary = export::run(plan, &options, &config, OffsetDateTime::now_utc())?;
    tracing::info!(
        index = %summary.index.display(),
        copied_files = summary.copied_files,
        hydrates = summary.bundle_found,
        site_url = config.site_url(),
        base_path = config.base_path(),
        "export complete"
    );
    Ok(config)
}

fn leptos_options(manifest: &Path) -> Result<LeptosOptions, AppError> {
    let manifest = manifest.to_string_lossy();
    get_configuration(Some(&*manifest))
        .map(|conf| conf.leptos_options)
        .map_err(|e| AppError::LeptosConfig(e.to_string()))
}
