//! Browser catalogue
//!
//! Six browser families with their release tables. Chromium-based
//! entries share the Chrome build table except Edge, which ships its
//! own build numbers. Accept header templates are per rendering
//! family; XHR requests use a single wildcard template everywhere.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;

use crate::config::Browser;
use crate::fingerprint::HelloId;
use crate::profiles::{
    AcceptPart, AcceptTemplate, BrowserProfile, EngineDetail, RenderingFamily, VersionProfile,
};

/// Major version to Chromium build number.
const CHROME_BUILDS: &[(u32, u32)] = &[
    (114, 5735),
    (116, 5845),
    (118, 5993),
    (120, 6099),
    (124, 6367),
    (128, 6636),
    (130, 6735),
    (133, 6912),
    (140, 7255),
];

const EDGE_BUILDS: &[(u32, u32)] = &[
    (114, 1823),
    (116, 1938),
    (118, 2088),
    (120, 2210),
    (124, 2478),
    (128, 2739),
    (133, 2988),
    (140, 3265),
];

const FIREFOX_VERSIONS: &[u32] = &[115, 120, 127, 128];

fn chrome_accept_templates() -> Vec<AcceptTemplate> {
    vec![
        vec![
            AcceptPart::plain("text/html"),
            AcceptPart::plain("application/xhtml+xml"),
            AcceptPart::weighted("application/xml", 0.9),
            AcceptPart::plain("image/avif"),
            AcceptPart::plain("image/webp"),
            AcceptPart::plain("image/apng"),
            AcceptPart::weighted("*/*", 0.8),
            AcceptPart::weighted_with("application/signed-exchange", 0.7, &["v=b3"]),
        ],
        vec![
            AcceptPart::plain("text/html"),
            AcceptPart::plain("application/xhtml+xml"),
            AcceptPart::weighted("application/xml", 0.9),
            AcceptPart::plain("image/avif"),
            AcceptPart::plain("image/webp"),
            AcceptPart::plain("image/apng"),
            AcceptPart::weighted("*/*", 0.8),
        ],
    ]
}

fn firefox_accept_templates() -> Vec<AcceptTemplate> {
    vec![vec![
        AcceptPart::plain("text/html"),
        AcceptPart::plain("application/xhtml+xml"),
        AcceptPart::weighted("application/xml", 0.9),
        AcceptPart::plain("image/avif"),
        AcceptPart::plain("image/webp"),
        AcceptPart::weighted("*/*", 0.8),
    ]]
}

fn safari_accept_templates() -> Vec<AcceptTemplate> {
    vec![vec![
        AcceptPart::plain("text/html"),
        AcceptPart::plain("application/xhtml+xml"),
        AcceptPart::weighted("application/xml", 0.9),
        AcceptPart::weighted("*/*", 0.8),
    ]]
}

fn xhr_accept_templates() -> Vec<AcceptTemplate> {
    vec![vec![AcceptPart::plain("*/*")]]
}

fn chromium_versions(builds: &[(u32, u32)]) -> BTreeMap<u32, VersionProfile> {
    builds
        .iter()
        .map(|&(version, build)| {
            (
                version,
                VersionProfile {
                    engine: EngineDetail::Chromium { build },
                    hello: HelloId::Chrome120,
                    supports_h2: true,
                },
            )
        })
        .collect()
}

fn gecko_versions(versions: &[u32]) -> BTreeMap<u32, VersionProfile> {
    versions
        .iter()
        .map(|&version| {
            (
                version,
                VersionProfile {
                    engine: EngineDetail::Gecko {
                        revision: format!("{version}.0"),
                    },
                    hello: HelloId::Firefox120,
                    supports_h2: true,
                },
            )
        })
        .collect()
}

fn webkit_versions() -> BTreeMap<u32, VersionProfile> {
    BTreeMap::from([
        (
            16,
            VersionProfile {
                engine: EngineDetail::WebKit {
                    webkit: "605.1.15".to_string(),
                    mobile_build: "20F66".to_string(),
                    safari: "16.5".to_string(),
                },
                hello: HelloId::Safari16,
                supports_h2: true,
            },
        ),
        (
            17,
            VersionProfile {
                engine: EngineDetail::WebKit {
                    webkit: "605.1.15".to_string(),
                    mobile_build: "15E148".to_string(),
                    safari: "17.5".to_string(),
                },
                hello: HelloId::Safari16,
                supports_h2: true,
            },
        ),
    ])
}

pub static BROWSER_PROFILES: Lazy<HashMap<Browser, BrowserProfile>> = Lazy::new(|| {
    let mut profiles = HashMap::new();
    profiles.insert(
        Browser::Chrome,
        BrowserProfile {
            brand: "Google Chrome",
            family: RenderingFamily::Chromium,
            ua_suffix: None,
            versions: chromium_versions(CHROME_BUILDS),
            accept_navigate: chrome_accept_templates(),
            accept_xhr: xhr_accept_templates(),
        },
    );
    profiles.insert(
        Browser::Opera,
        BrowserProfile {
            brand: "Opera",
            family: RenderingFamily::Chromium,
            ua_suffix: Some("OPR"),
            versions: chromium_versions(CHROME_BUILDS),
            accept_navigate: chrome_accept_templates(),
            accept_xhr: xhr_accept_templates(),
        },
    );
    profiles.insert(
        Browser::Edge,
        BrowserProfile {
            brand: "Microsoft Edge",
            family: RenderingFamily::Chromium,
            ua_suffix: Some("Edg"),
            versions: chromium_versions(EDGE_BUILDS),
            accept_navigate: chrome_accept_templates(),
            accept_xhr: xhr_accept_templates(),
        },
    );
    profiles.insert(
        Browser::Brave,
        BrowserProfile {
            brand: "Brave",
            family: RenderingFamily::Chromium,
            ua_suffix: None,
            versions: chromium_versions(CHROME_BUILDS),
            accept_navigate: chrome_accept_templates(),
            accept_xhr: xhr_accept_templates(),
        },
    );
    profiles.insert(
        Browser::Firefox,
        BrowserProfile {
            brand: "Firefox",
            family: RenderingFamily::Gecko,
            ua_suffix: None,
            versions: gecko_versions(FIREFOX_VERSIONS),
            accept_navigate: firefox_accept_templates(),
            accept_xhr: xhr_accept_templates(),
        },
    );
    profiles.insert(
        Browser::Safari,
        BrowserProfile {
            brand: "Safari",
            family: RenderingFamily::WebKit,
            ua_suffix: None,
            versions: webkit_versions(),
            accept_navigate: safari_accept_templates(),
            accept_xhr: xhr_accept_templates(),
        },
    );
    profiles
});

/// Catalogue entry for a concrete browser, `None` for wildcards.
pub fn browser_profile(browser: Browser) -> Option<&'static BrowserProfile> {
    BROWSER_PROFILES.get(&browser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_covers_all_concrete_browsers() {
        for browser in [
            Browser::Chrome,
            Browser::Opera,
            Browser::Edge,
            Browser::Brave,
            Browser::Firefox,
            Browser::Safari,
        ] {
            assert!(browser_profile(browser).is_some(), "{browser} missing");
        }
        assert!(browser_profile(Browser::Random).is_none());
    }

    #[test]
    fn chrome_build_table_is_current() {
        let chrome = browser_profile(Browser::Chrome).unwrap();
        assert_eq!(chrome.versions[&140].chromium_build(), Some(7255));
        assert_eq!(chrome.versions[&114].chromium_build(), Some(5735));
        assert!(chrome.versions.values().all(|v| v.supports_h2));
    }

    #[test]
    fn edge_ships_its_own_builds() {
        let edge = browser_profile(Browser::Edge).unwrap();
        assert_eq!(edge.ua_suffix, Some("Edg"));
        assert_eq!(edge.versions[&140].chromium_build(), Some(3265));
        assert!(!edge.versions.contains_key(&130));
    }

    #[test]
    fn firefox_revisions_follow_major() {
        let firefox = browser_profile(Browser::Firefox).unwrap();
        assert!(!firefox.is_chromium());
        match &firefox.versions[&115].engine {
            EngineDetail::Gecko { revision } => assert_eq!(revision, "115.0"),
            other => panic!("unexpected engine {other:?}"),
        }
        assert_eq!(firefox.versions[&120].hello, HelloId::Firefox120);
    }

    #[test]
    fn safari_rows_carry_webkit_tokens() {
        let safari = browser_profile(Browser::Safari).unwrap();
        match &safari.versions[&17].engine {
            EngineDetail::WebKit {
                webkit,
                mobile_build,
                safari,
            } => {
                assert_eq!(webkit, "605.1.15");
                assert_eq!(mobile_build, "15E148");
                assert_eq!(safari, "17.5");
            }
            other => panic!("unexpected engine {other:?}"),
        }
    }

    #[test]
    fn xhr_template_is_a_bare_wildcard() {
        let chrome = browser_profile(Browser::Chrome).unwrap();
        assert_eq!(chrome.accept_xhr.len(), 1);
        assert_eq!(chrome.accept_xhr[0], vec![AcceptPart::plain("*/*")]);
        assert_eq!(chrome.accept_navigate.len(), 2);
    }
}
