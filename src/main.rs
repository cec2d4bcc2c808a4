//! Taihang site — branding bootstrap for the assistant web shell.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Init logger at configured level
//!   4. Build and install the site identity
//!   5. Check that its images load, print it as JSON and exit

use taihang_site::{
    BundledAssets, SiteIdentity, config,
    error::AppError,
    logger, site,
};
use tracing::{info, warn};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let config = config::load()?;
    logger::init(&config)?;

    info!(
        assets_dir = %config.assets_dir.display(),
        log_level = %config.log_level,
        "config loaded"
    );

    let assets = BundledAssets::new(&config.assets_dir);
    let identity = site::install(SiteIdentity::default_with(&assets))?;

    // A missing image is reported, not fatal: the rendering layer owns loading.
    for asset in [identity.logo(), identity.login_image()] {
        match asset.load() {
            Ok(loaded) => info!(id = asset.id(), bytes = loaded.body.len(), "asset ok"),
            Err(e) => warn!(id = asset.id(), "{e}"),
        }
    }

    info!(title = identity.title(), shared_image = identity.shares_brand_image(), "site identity ready");
    println!("{}", identity.to_json()?);

    Ok(())
}
