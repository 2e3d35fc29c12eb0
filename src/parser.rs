//! Reverse agent construction
//!
//! Takes a user-agent string a caller already has and rebuilds the
//! matching identity: deterministic headers, a canonical hello from
//! the stable Chrome table and Chromium SETTINGS. The input string is
//! echoed verbatim so existing traffic capture stays consistent.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::agent::Agent;
use crate::config::{Browser, OperatingSystem, Platform, RequestType};
use crate::fingerprint::{H2Settings, HelloId, TlsIdentity};
use crate::headers::{self, HeaderContext};
use crate::profiles::{browser_profile, closest_at_most, closest_or_oldest, os_profile};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unsupported browser could not be parsed")]
    UnsupportedBrowser,
    #[error("unsupported os could not be parsed")]
    UnsupportedOs,
    #[error("could not parse version from user agent")]
    InvalidVersion,
    #[error("no suitable profile found for browser version {0}")]
    UnsupportedVersion(u32),
}

/// Match order matters: Safari first because Chromium agents also end
/// in `Safari/`, and branded Chromium tokens before the bare `Chrome/`.
static UA_PATTERNS: Lazy<Vec<(Browser, Regex)>> = Lazy::new(|| {
    [
        (Browser::Safari, r"Version/(\d+)\..*Safari/"),
        (Browser::Edge, r"Edg/(\d+)\.\d+"),
        (Browser::Opera, r"OPR/(\d+)\.\d+"),
        (Browser::Brave, r"Brave/(\d+)\.\d+"),
        (Browser::Chrome, r"Chrome/(\d+)\.\d+"),
        (Browser::Firefox, r"Firefox/(\d+)\.\d+"),
    ]
    .into_iter()
    .map(|(browser, pattern)| (browser, Regex::new(pattern).expect("valid ua pattern")))
    .collect()
});

/// Chrome versions with a verified canonical hello. Parsed versions
/// snap to the closest entry at or below, or the oldest entry when the
/// version predates the table.
static STABLE_CHROME_HELLOS: Lazy<BTreeMap<u32, HelloId>> = Lazy::new(|| {
    BTreeMap::from([
        (120, HelloId::Chrome120),
        (131, HelloId::Chrome131),
        (133, HelloId::Chrome133),
    ])
});

#[derive(Debug)]
struct ParsedUa {
    browser: Browser,
    version: u32,
    os: OperatingSystem,
}

fn classify(ua: &str) -> Result<ParsedUa, ParseError> {
    let mut matched = None;
    for (browser, pattern) in UA_PATTERNS.iter() {
        if let Some(capture) = pattern.captures(ua).and_then(|c| c.get(1)) {
            let version = capture
                .as_str()
                .parse()
                .map_err(|_| ParseError::InvalidVersion)?;
            matched = Some((*browser, version));
            break;
        }
    }
    let (browser, version) = matched.ok_or(ParseError::UnsupportedBrowser)?;

    let os = if ua.contains("Windows NT 10.0") {
        OperatingSystem::Windows11
    } else if ua.contains("iPhone") || ua.contains("iPad") {
        OperatingSystem::Ios
    } else if ua.contains("Macintosh") {
        OperatingSystem::MacIntel
    } else if ua.contains("Linux") {
        OperatingSystem::Linux
    } else if ua.contains("Android") {
        OperatingSystem::Android
    } else if ua.contains("CrOS") {
        OperatingSystem::ChromeOs
    } else {
        return Err(ParseError::UnsupportedOs);
    };

    Ok(ParsedUa {
        browser,
        version,
        os,
    })
}

/// Rebuilds a full agent from an existing user-agent string.
pub fn from_user_agent(user_agent: &str, request_type: RequestType) -> Result<Agent, ParseError> {
    let parsed = classify(user_agent)?;
    log::debug!(
        "classified user agent as {} {} on {}",
        parsed.browser,
        parsed.version,
        parsed.os
    );

    let profile = browser_profile(parsed.browser).ok_or(ParseError::UnsupportedBrowser)?;
    let os = os_profile(parsed.os).ok_or(ParseError::UnsupportedOs)?;
    let platform = if parsed.os == OperatingSystem::Android || parsed.os == OperatingSystem::Ios {
        Platform::Mobile
    } else {
        Platform::Desktop
    };

    let (_, version_profile) = closest_at_most(&profile.versions, parsed.version)
        .ok_or(ParseError::UnsupportedVersion(parsed.version))?;

    let full_version = match version_profile.chromium_build() {
        Some(build) => format!("{}.0.{}.0", parsed.version, build),
        None => String::new(),
    };

    let ctx = HeaderContext {
        browser: profile,
        os: &os,
        major: parsed.version,
        full_version: &full_version,
        mobile_hint: platform.mobile_hint(),
    };
    let (headers, header_order) = headers::build_static_headers(request_type, &ctx);

    let hello = closest_or_oldest(&STABLE_CHROME_HELLOS, parsed.version)
        .map(|(_, id)| *id)
        .unwrap_or(HelloId::Chrome120);

    Ok(Agent {
        user_agent: user_agent.to_string(),
        headers,
        header_order,
        tls: Some(TlsIdentity::Canonical(hello)),
        h2_settings: Some(H2Settings::chromium()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_WIN: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36";
    const EDGE_WIN: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                            (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.2210.91";
    const SAFARI_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                              AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15";
    const FIREFOX_LINUX: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

    #[test]
    fn branded_tokens_beat_the_chrome_token() {
        let parsed = classify(EDGE_WIN).unwrap();
        assert_eq!(parsed.browser, Browser::Edge);
        assert_eq!(parsed.version, 120);

        let opera = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                     (KHTML, like Gecko) Chrome/128.0.0.0 Safari/537.36 OPR/128.0.0.0";
        assert_eq!(classify(opera).unwrap().browser, Browser::Opera);
    }

    #[test]
    fn safari_wins_via_version_token() {
        let parsed = classify(SAFARI_MAC).unwrap();
        assert_eq!(parsed.browser, Browser::Safari);
        assert_eq!(parsed.version, 17);
        assert_eq!(parsed.os, OperatingSystem::MacIntel);
    }

    #[test]
    fn android_agents_classify_as_linux() {
        // the Linux token check runs before the Android one
        let ua = "Mozilla/5.0 (Linux; Android 14; Pixel 7) AppleWebKit/537.36 \
                  (KHTML, like Gecko) Chrome/120.0.6099.43 Mobile Safari/537.36";
        assert_eq!(classify(ua).unwrap().os, OperatingSystem::Linux);
    }

    #[test]
    fn non_browser_agents_are_rejected() {
        assert_eq!(
            classify("curl/7.64.1").unwrap_err(),
            ParseError::UnsupportedBrowser
        );
        assert_eq!(
            from_user_agent("curl/7.64.1", RequestType::Navigate).unwrap_err(),
            ParseError::UnsupportedBrowser
        );
    }

    #[test]
    fn versions_older_than_the_catalogue_are_rejected() {
        let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                  (KHTML, like Gecko) Chrome/100.0.0.0 Safari/537.36";
        assert_eq!(
            from_user_agent(ua, RequestType::Navigate).unwrap_err(),
            ParseError::UnsupportedVersion(100)
        );
    }

    #[test]
    fn chrome_agent_snaps_to_stable_hello() {
        let agent = from_user_agent(CHROME_WIN, RequestType::Navigate).unwrap();
        assert_eq!(agent.user_agent, CHROME_WIN);
        assert_eq!(
            agent.tls.unwrap().hello_id(),
            Some(HelloId::Chrome133)
        );
        assert_eq!(agent.h2_settings, Some(H2Settings::chromium()));
        let sec_ch_ua = agent.headers.get("sec-ch-ua").unwrap().to_str().unwrap();
        assert!(sec_ch_ua.contains(r#""Google Chrome";v="138""#), "{sec_ch_ua}");
        // closest catalogue build below 138 is the 133 row
        let list = agent
            .headers
            .get("sec-ch-ua-full-version-list")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(list.contains("138.0.6912.0"), "{list}");
    }

    #[test]
    fn firefox_agent_gets_chromium_transport_defaults() {
        let agent = from_user_agent(FIREFOX_LINUX, RequestType::Navigate).unwrap();
        assert!(agent.headers.get("sec-ch-ua").is_none());
        assert_eq!(agent.tls.unwrap().hello_id(), Some(HelloId::Chrome120));
        assert_eq!(agent.h2_settings, Some(H2Settings::chromium()));
    }

    #[test]
    fn rebuilds_are_deterministic() {
        let first = from_user_agent(CHROME_WIN, RequestType::Xhr).unwrap();
        let second = from_user_agent(CHROME_WIN, RequestType::Xhr).unwrap();
        assert_eq!(first.headers, second.headers);
        assert_eq!(first.header_order, second.header_order);
        assert_eq!(first.headers.get("accept").unwrap(), "*/*");
    }
}
