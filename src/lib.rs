// Library root — the binary entry point is src/main.rs.

pub mod assets;
pub mod config;
pub mod error;
pub mod logger;
pub mod site;

pub use assets::{AssetRef, AssetResolver, BundledAssets};
pub use error::AppError;
pub use site::{SiteField, SiteIdentity, install, site_identity};
