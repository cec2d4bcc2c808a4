//! Site identity — the branding record read by the web shell.
//!
//! One [`SiteIdentity`] exists per process. It is built once, either
//! explicitly through [`install`] during startup or lazily on the first
//! [`site_identity`] call, and is never changed afterwards.
//!
//! Fields are private and only exposed through getters, so assignment does not
//! compile:
//!
//! ```compile_fail
//! let mut identity = taihang_site::site::SiteIdentity::default_with(
//!     &taihang_site::assets::BundledAssets::new("assets"),
//! );
//! identity.title = String::from("other");
//! ```
//!
//! Callers that address fields by name (e.g. a rendering bridge) go through
//! [`SiteIdentity::set`] / [`SiteIdentity::set_by_name`], which always return
//! [`AppError::ImmutableWrite`].

use std::{fmt, str::FromStr, sync::OnceLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    assets::{AssetRef, AssetResolver, BundledAssets},
    error::AppError,
};

pub const DEFAULT_TITLE: &str = "太行实验室智能助手";
pub const DEFAULT_LOGIN_DESC: &str = "基于ChatGPT、LLM、LangChain的智能化AI平台";
/// Logo and login image share one file.
pub const DEFAULT_LOGO_ID: &str = "images/sxctclogo1.png";
pub const DEFAULT_LOGIN_IMAGE_ID: &str = "images/sxctclogo1.png";
/// Asset root used when [`site_identity`] initialises lazily.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

static SITE: OnceLock<SiteIdentity> = OnceLock::new();

// ── SiteField ─────────────────────────────────────────────────────────────────

/// Addressable fields of [`SiteIdentity`], named as serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteField {
    Title,
    Logo,
    LoginImage,
    LoginDesc,
}

impl SiteField {
    pub const ALL: [SiteField; 4] =
        [SiteField::Title, SiteField::Logo, SiteField::LoginImage, SiteField::LoginDesc];

    pub fn as_str(&self) -> &'static str {
        match self {
            SiteField::Title => "title",
            SiteField::Logo => "logo",
            SiteField::LoginImage => "loginImage",
            SiteField::LoginDesc => "loginDesc",
        }
    }
}

impl fmt::Display for SiteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiteField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SiteField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| AppError::UnknownField(s.to_string()))
    }
}

// ── SiteIdentity ──────────────────────────────────────────────────────────────

/// Immutable branding record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteIdentity {
    title: String,
    logo: AssetRef,
    login_image: AssetRef,
    login_desc: String,
}

impl SiteIdentity {
    pub fn new(
        title: impl Into<String>,
        logo: AssetRef,
        login_image: AssetRef,
        login_desc: impl Into<String>,
    ) -> Self {
        Self { title: title.into(), logo, login_image, login_desc: login_desc.into() }
    }

    /// The shipped branding, with image ids resolved through `resolver`.
    pub fn default_with(resolver: &dyn AssetResolver) -> Self {
        Self::new(
            DEFAULT_TITLE,
            resolver.resolve(DEFAULT_LOGO_ID),
            resolver.resolve(DEFAULT_LOGIN_IMAGE_ID),
            DEFAULT_LOGIN_DESC,
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn logo(&self) -> &AssetRef {
        &self.logo
    }

    pub fn login_image(&self) -> &AssetRef {
        &self.login_image
    }

    pub fn login_desc(&self) -> &str {
        &self.login_desc
    }

    /// `true` when logo and login image point at the same asset.
    pub fn shares_brand_image(&self) -> bool {
        self.logo == self.login_image
    }

    /// Attempt to overwrite `field`. Always fails; the record is left as is.
    pub fn set(&self, field: SiteField, _value: &str) -> Result<(), AppError> {
        warn!(field = %field, "rejected write to site identity");
        Err(AppError::ImmutableWrite { field: field.as_str() })
    }

    /// [`SiteIdentity::set`] with the field given by its serialized name.
    pub fn set_by_name(&self, name: &str, value: &str) -> Result<(), AppError> {
        let field = name.parse::<SiteField>()?;
        self.set(field, value)
    }

    /// Serialize for the rendering layer.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }
}

// ── process-wide instance ─────────────────────────────────────────────────────

/// Install the process-wide identity. Only the first call succeeds.
pub fn install(identity: SiteIdentity) -> Result<&'static SiteIdentity, AppError> {
    let mut installed = false;
    let current = SITE.get_or_init(|| {
        installed = true;
        identity
    });

    if !installed {
        return Err(AppError::AlreadyInstalled);
    }
    debug!(title = %current.title, "site identity installed");
    Ok(current)
}

/// The process-wide identity.
///
/// Falls back to the shipped branding resolved against [`DEFAULT_ASSETS_DIR`]
/// when nothing was installed beforehand.
pub fn site_identity() -> &'static SiteIdentity {
    SITE.get_or_init(|| {
        debug!(assets_dir = DEFAULT_ASSETS_DIR, "site identity initialised with defaults");
        SiteIdentity::default_with(&BundledAssets::new(DEFAULT_ASSETS_DIR))
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
