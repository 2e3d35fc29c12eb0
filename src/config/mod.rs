//! Generation option vocabulary
//!
//! Selection enums shared by the generator and the reverse parser:
//! browser families, platform classes, operating systems and request
//! contexts, plus the string tokens they parse from and print to.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when an option token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} token `{token}`")]
pub struct UnknownToken {
    kind: &'static str,
    token: String,
}

impl UnknownToken {
    fn new(kind: &'static str, token: &str) -> Self {
        Self {
            kind,
            token: token.to_string(),
        }
    }
}

/// Browser families an identity can be generated for.
///
/// `Random` is a wildcard: when it appears anywhere in the configured
/// selection the generator draws from the full catalogue instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    Random,
    Chrome,
    Opera,
    Edge,
    Brave,
    Firefox,
    Safari,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Random => "random",
            Browser::Chrome => "chrome",
            Browser::Opera => "opera",
            Browser::Edge => "edge",
            Browser::Brave => "brave",
            Browser::Firefox => "firefox",
            Browser::Safari => "safari",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Browser {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Browser::Random),
            "chrome" => Ok(Browser::Chrome),
            "opera" => Ok(Browser::Opera),
            "edge" => Ok(Browser::Edge),
            "brave" => Ok(Browser::Brave),
            "firefox" => Ok(Browser::Firefox),
            "safari" => Ok(Browser::Safari),
            _ => Err(UnknownToken::new("browser", s)),
        }
    }
}

/// Device class of the generated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Random,
    Desktop,
    Mobile,
}

impl Platform {
    /// Value carried by the `sec-ch-ua-mobile` client hint.
    pub fn mobile_hint(&self) -> &'static str {
        match self {
            Platform::Mobile => "?1",
            _ => "?0",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Random => "random",
            Platform::Desktop => "desktop",
            Platform::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Platform::Random),
            "desktop" => Ok(Platform::Desktop),
            "mobile" => Ok(Platform::Mobile),
            _ => Err(UnknownToken::new("platform", s)),
        }
    }
}

/// Operating systems the catalogue carries platform tokens for.
///
/// `Mac` is a wildcard over the two macOS architectures; the generator
/// expands it to `MacIntel` and `MacAppleSilicon` during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatingSystem {
    Random,
    Windows,
    Windows11,
    Linux,
    Ubuntu,
    Fedora,
    Mac,
    MacIntel,
    MacAppleSilicon,
    Android,
    Ios,
    ChromeOs,
}

impl OperatingSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingSystem::Random => "random",
            OperatingSystem::Windows => "windows",
            OperatingSystem::Windows11 => "windows11",
            OperatingSystem::Linux => "linux",
            OperatingSystem::Ubuntu => "ubuntu",
            OperatingSystem::Fedora => "fedora",
            OperatingSystem::Mac => "mac",
            OperatingSystem::MacIntel => "mac_intel",
            OperatingSystem::MacAppleSilicon => "mac_apple_silicon",
            OperatingSystem::Android => "android",
            OperatingSystem::Ios => "ios",
            OperatingSystem::ChromeOs => "chromeos",
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatingSystem {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(OperatingSystem::Random),
            "windows" => Ok(OperatingSystem::Windows),
            "windows11" => Ok(OperatingSystem::Windows11),
            "linux" => Ok(OperatingSystem::Linux),
            "ubuntu" => Ok(OperatingSystem::Ubuntu),
            "fedora" => Ok(OperatingSystem::Fedora),
            "mac" => Ok(OperatingSystem::Mac),
            "mac_intel" => Ok(OperatingSystem::MacIntel),
            "mac_apple_silicon" => Ok(OperatingSystem::MacAppleSilicon),
            "android" => Ok(OperatingSystem::Android),
            "ios" => Ok(OperatingSystem::Ios),
            "chromeos" => Ok(OperatingSystem::ChromeOs),
            _ => Err(UnknownToken::new("operating system", s)),
        }
    }
}

/// Request context the header set is shaped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    /// Top-level document navigation.
    Navigate,
    /// Embedded asset fetch (stylesheet, script, image, font).
    Subresource,
    /// Programmatic fetch/XHR call.
    Xhr,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Navigate => "navigate",
            RequestType::Subresource => "subresource",
            RequestType::Xhr => "xhr",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "navigate" => Ok(RequestType::Navigate),
            "subresource" => Ok(RequestType::Subresource),
            "xhr" => Ok(RequestType::Xhr),
            _ => Err(UnknownToken::new("request type", s)),
        }
    }
}

/// How aggressively the TLS and header surface is varied per agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FingerprintProfile {
    /// Canonical ClientHello for the selected browser version.
    Normal,
    /// Fully synthesized ClientHello with shuffled cipher and extension
    /// layout, plus forced shuffled header ordering.
    Maximum,
    /// Canonical ClientHello but each `sec-ch-*` client hint is
    /// independently dropped with 50% probability. Fetch metadata is
    /// never thinned.
    Extreme,
}

/// Per-agent jitter applied to the HTTP/2 SETTINGS the agent advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum H2Jitter {
    /// Family table verbatim.
    None,
    /// Small deviations around the family table values.
    Moderate,
    /// Settings rebuilt around protocol minima, unrelated to any family.
    Maximum,
}
