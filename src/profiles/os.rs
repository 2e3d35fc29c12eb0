//! Operating system catalogue
//!
//! Platform tokens as real browsers render them. The two Windows
//! entries share one token and differ only in the client-hint platform
//! version, which is how Chromium actually distinguishes Windows 11.
//! The Android token carries a `{device_model}` placeholder filled with
//! a random device at composition time.

use crate::config::OperatingSystem;
use crate::profiles::OsProfile;

/// Device models substituted into the Android platform token.
pub(crate) const ANDROID_DEVICES: &[&str] = &[
    "Pixel 7",
    "Pixel 8 Pro",
    "SM-S928B",
    "SM-G991U",
    "SM-F936U",
    "2201116SG",
    "V2109",
    "SM-A525F",
    "Pixel 6a",
    "SM-A536U",
    "Galaxy S23 Ultra",
];

/// Catalogue entry for a concrete operating system.
///
/// Wildcards (`Random`, `Mac`) have no entry of their own; the
/// generator expands them before lookup.
pub fn os_profile(os: OperatingSystem) -> Option<OsProfile> {
    let profile = match os {
        OperatingSystem::Windows => OsProfile {
            name: "Windows",
            platform_token: "Windows NT 10.0; Win64; x64",
            version: Some("10.0.0"),
            arch: Some("x86"),
            bitness: Some("64"),
            mobile: false,
        },
        OperatingSystem::Windows11 => OsProfile {
            name: "Windows",
            platform_token: "Windows NT 10.0; Win64; x64",
            version: Some("15.0.0"),
            arch: Some("x86"),
            bitness: Some("64"),
            mobile: false,
        },
        OperatingSystem::MacIntel => OsProfile {
            name: "macOS",
            platform_token: "Macintosh; Intel Mac OS X 10_15_7",
            version: Some("14.5.0"),
            arch: Some("x86"),
            bitness: Some("64"),
            mobile: false,
        },
        OperatingSystem::MacAppleSilicon => OsProfile {
            name: "macOS",
            platform_token: "Macintosh; ARM Mac OS X 10_15_7",
            version: Some("14.5.0"),
            arch: Some("arm"),
            bitness: Some("64"),
            mobile: false,
        },
        OperatingSystem::Linux => OsProfile {
            name: "Linux",
            platform_token: "X11; Linux x86_64",
            version: None,
            arch: Some("x86"),
            bitness: Some("64"),
            mobile: false,
        },
        OperatingSystem::Ubuntu => OsProfile {
            name: "Linux",
            platform_token: "X11; Ubuntu; Linux x86_64",
            version: None,
            arch: Some("x86"),
            bitness: Some("64"),
            mobile: false,
        },
        OperatingSystem::Fedora => OsProfile {
            name: "Linux",
            platform_token: "X11; Fedora; Linux x86_64",
            version: None,
            arch: Some("x86"),
            bitness: Some("64"),
            mobile: false,
        },
        OperatingSystem::Android => OsProfile {
            name: "Android",
            platform_token: "Linux; Android 14; {device_model}",
            version: Some("14.0.0"),
            arch: Some("arm"),
            bitness: Some("64"),
            mobile: true,
        },
        OperatingSystem::Ios => OsProfile {
            name: "iOS",
            platform_token: "iPhone; CPU iPhone OS 17_5_1 like Mac OS X",
            version: Some("17.5.1"),
            arch: None,
            bitness: None,
            mobile: true,
        },
        OperatingSystem::ChromeOs => OsProfile {
            name: "Chrome OS",
            platform_token: "X11; CrOS x86_64 14541.0.0",
            version: Some("14541.0.0"),
            arch: Some("x86"),
            bitness: Some("64"),
            mobile: false,
        },
        OperatingSystem::Random | OperatingSystem::Mac => return None,
    };
    Some(profile)
}
