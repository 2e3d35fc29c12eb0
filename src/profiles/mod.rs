//! Identity catalogue
//!
//! Responsibilities:
//! - Browser, operating-system and bot profile registries
//! - Version tables with engine-specific detail per release
//! - Closest-version matching against those tables

pub mod bots;
pub mod browsers;
pub mod os;

pub use browsers::browser_profile;
pub use os::os_profile;

use std::collections::BTreeMap;

use crate::fingerprint::{H2Settings, HelloId};

/// Rendering engine family a browser belongs to.
///
/// The family decides the user-agent fragment pipeline, the client-hint
/// surface and the HTTP/2 SETTINGS the identity advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderingFamily {
    Chromium,
    Gecko,
    WebKit,
}

impl RenderingFamily {
    /// SETTINGS frame browsers of this family advertise.
    pub fn h2_settings(&self) -> H2Settings {
        match self {
            RenderingFamily::Chromium => H2Settings::chromium(),
            RenderingFamily::Gecko => H2Settings::gecko(),
            RenderingFamily::WebKit => H2Settings::webkit(),
        }
    }
}

/// Engine-specific versioning detail carried by one catalogue release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineDetail {
    /// Chromium build number, the third component of the full version.
    Chromium { build: u32 },
    /// Gecko revision as rendered in `rv:` and `Firefox/` fragments.
    Gecko { revision: String },
    /// WebKit build plus the Safari version and mobile build tokens.
    WebKit {
        webkit: String,
        mobile_build: String,
        safari: String,
    },
}

/// One release row in a browser's version table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionProfile {
    pub engine: EngineDetail,
    pub hello: HelloId,
    pub supports_h2: bool,
}

impl VersionProfile {
    /// Build number when this release is Chromium-based.
    pub fn chromium_build(&self) -> Option<u32> {
        match self.engine {
            EngineDetail::Chromium { build } => Some(build),
            _ => None,
        }
    }
}

/// One media range inside an Accept-style header template.
///
/// A part with `q > 0` receives a freshly drawn quality weight during
/// rendering; a part with `q == 0` is emitted bare.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptPart {
    pub value: String,
    pub q: f64,
    pub extras: Vec<String>,
}

impl AcceptPart {
    pub fn plain(value: &str) -> Self {
        AcceptPart {
            value: value.to_string(),
            q: 0.0,
            extras: Vec::new(),
        }
    }

    pub fn weighted(value: &str, q: f64) -> Self {
        AcceptPart {
            value: value.to_string(),
            q,
            extras: Vec::new(),
        }
    }

    pub fn weighted_with(value: &str, q: f64, extras: &[&str]) -> Self {
        AcceptPart {
            value: value.to_string(),
            q,
            extras: extras.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Ordered list of media ranges forming one Accept header variant.
pub type AcceptTemplate = Vec<AcceptPart>;

/// Static description of one browser family in the catalogue.
#[derive(Debug, Clone)]
pub struct BrowserProfile {
    /// Brand name as spelled in `sec-ch-ua`.
    pub brand: &'static str,
    pub family: RenderingFamily,
    /// Trailing token such as `OPR` or `Edg`, rendered as `{token}/{major}`.
    pub ua_suffix: Option<&'static str>,
    /// Release rows keyed by major version.
    pub versions: BTreeMap<u32, VersionProfile>,
    pub accept_navigate: Vec<AcceptTemplate>,
    pub accept_xhr: Vec<AcceptTemplate>,
}

impl BrowserProfile {
    pub fn is_chromium(&self) -> bool {
        self.family == RenderingFamily::Chromium
    }
}

/// Static description of one operating system in the catalogue.
#[derive(Debug, Clone, Copy)]
pub struct OsProfile {
    /// Name as spelled in `sec-ch-ua-platform`.
    pub name: &'static str,
    /// Parenthesized token rendered into the user-agent string.
    pub platform_token: &'static str,
    pub version: Option<&'static str>,
    pub arch: Option<&'static str>,
    pub bitness: Option<&'static str>,
    pub mobile: bool,
}

/// Closest release at or below `target`, if the table has one.
pub fn closest_at_most<V>(table: &BTreeMap<u32, V>, target: u32) -> Option<(u32, &V)> {
    table.range(..=target).next_back().map(|(k, v)| (*k, v))
}

/// Closest release at or below `target`, falling back to the oldest
/// entry when `target` predates the whole table.
pub fn closest_or_oldest<V>(table: &BTreeMap<u32, V>, target: u32) -> Option<(u32, &V)> {
    closest_at_most(table, target).or_else(|| table.iter().next().map(|(k, v)| (*k, v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> BTreeMap<u32, &'static str> {
        BTreeMap::from([(114, "a"), (120, "b"), (133, "c")])
    }

    #[test]
    fn exact_version_matches_itself() {
        assert_eq!(closest_at_most(&table(), 120), Some((120, &"b")));
    }

    #[test]
    fn newer_version_snaps_down() {
        assert_eq!(closest_at_most(&table(), 138), Some((133, &"c")));
        assert_eq!(closest_at_most(&table(), 121), Some((120, &"b")));
    }

    #[test]
    fn older_than_table_is_a_miss() {
        assert_eq!(closest_at_most(&table(), 100), None);
    }

    #[test]
    fn fallback_matcher_returns_oldest() {
        assert_eq!(closest_or_oldest(&table(), 100), Some((114, &"a")));
        assert_eq!(closest_or_oldest(&table(), 138), Some((133, &"c")));
        let empty: BTreeMap<u32, &str> = BTreeMap::new();
        assert_eq!(closest_or_oldest(&empty, 120), None);
    }

    #[test]
    fn family_settings_are_distinct() {
        let chromium = RenderingFamily::Chromium.h2_settings();
        let gecko = RenderingFamily::Gecko.h2_settings();
        let webkit = RenderingFamily::WebKit.h2_settings();
        assert_ne!(chromium, gecko);
        assert_ne!(gecko, webkit);
    }

    #[test]
    fn accept_part_constructors() {
        let part = AcceptPart::weighted_with("application/signed-exchange", 0.7, &["v=b3"]);
        assert_eq!(part.value, "application/signed-exchange");
        assert_eq!(part.extras, vec!["v=b3"]);
        assert_eq!(AcceptPart::plain("text/html").q, 0.0);
    }
}
