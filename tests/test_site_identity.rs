//! Process-wide site identity initialised lazily with the shipped branding.

use std::thread;

use taihang_site::{AppError, SiteField, SiteIdentity, install, site_identity};

#[test]
fn repeated_calls_return_the_same_instance() {
    let a = site_identity();
    let b = site_identity();
    assert!(std::ptr::eq(a, b));
    assert_eq!(a, b);
}

#[test]
fn shipped_branding() {
    let s = site_identity();
    assert_eq!(s.title(), "太行实验室智能助手");
    assert_eq!(s.login_desc(), "基于ChatGPT、LLM、LangChain的智能化AI平台");
    assert_eq!(s.logo(), s.login_image());
    assert_eq!(s.logo().id(), "images/sxctclogo1.png");
}

#[test]
fn bundled_logo_loads() {
    let loaded = site_identity().logo().load().unwrap();
    assert_eq!(loaded.content_type, "image/png");
    assert!(loaded.body.starts_with(b"\x89PNG"));
}

#[test]
fn writes_fail_and_leave_values_unchanged() {
    let s = site_identity();
    for field in SiteField::ALL {
        assert!(matches!(s.set(field, "other"), Err(AppError::ImmutableWrite { .. })));
    }
    assert_eq!(s.title(), "太行实验室智能助手");
    assert_eq!(site_identity().login_desc(), "基于ChatGPT、LLM、LangChain的智能化AI平台");
}

#[test]
fn install_after_first_access_is_rejected() {
    let current = site_identity();
    let replacement = SiteIdentity::new(
        "other",
        current.logo().clone(),
        current.login_image().clone(),
        "other",
    );
    assert!(matches!(install(replacement), Err(AppError::AlreadyInstalled)));
    assert_eq!(site_identity().title(), "太行实验室智能助手");
}

#[test]
fn concurrent_readers_observe_one_instance() {
    let addrs: Vec<usize> = (0..8)
        .map(|_| thread::spawn(|| site_identity() as *const SiteIdentity as usize))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn transport_round_trip() {
    let s = site_identity();
    let json = s.to_json().unwrap();
    assert!(json.contains("太行实验室智能助手"));
    assert_eq!(&SiteIdentity::from_json(&json).unwrap(), s);
}
