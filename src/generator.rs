//! Identity generation
//!
//! Responsibilities:
//! - Resolving wildcard browser/platform/OS selections into one
//!   concrete, mutually compatible tuple
//! - Version draw under range and HTTP/2 constraints
//! - Assembling the final agent record: user-agent string, headers,
//!   TLS identity and HTTP/2 SETTINGS
//! - Pooling released records so header maps get reused
//!
//! All fallible resolution happens before a pooled record is checked
//! out, so a failed generation never produces a partial agent.

use std::sync::{Mutex, PoisonError};

use http::HeaderMap;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use thiserror::Error;

use crate::agent::Agent;
use crate::compose::{compose_user_agent, FragmentContext};
use crate::config::{
    Browser, FingerprintProfile, H2Jitter, OperatingSystem, Platform, RequestType,
};
use crate::fingerprint::{ClientHelloSpec, H2Settings, TlsIdentity};
use crate::headers::order::HeaderOrdering;
use crate::headers::{self, HeaderContext, HeaderPolicy};
use crate::profiles::bots::{self, BotProfile};
use crate::profiles::{
    browser_profile, os_profile, AcceptPart, AcceptTemplate, BrowserProfile, OsProfile,
    VersionProfile,
};

const ALL_BROWSERS: &[Browser] = &[
    Browser::Chrome,
    Browser::Opera,
    Browser::Edge,
    Browser::Brave,
    Browser::Firefox,
    Browser::Safari,
];

const ALL_PLATFORMS: &[Platform] = &[Platform::Desktop, Platform::Mobile];

const ALL_OPERATING_SYSTEMS: &[OperatingSystem] = &[
    OperatingSystem::Windows,
    OperatingSystem::Windows11,
    OperatingSystem::Linux,
    OperatingSystem::Mac,
    OperatingSystem::Android,
    OperatingSystem::Ios,
    OperatingSystem::ChromeOs,
    OperatingSystem::Ubuntu,
    OperatingSystem::Fedora,
];

/// Concrete targets a `Mac` selection fans out to.
const MAC_ARCHITECTURES: &[OperatingSystem] = &[
    OperatingSystem::MacIntel,
    OperatingSystem::MacAppleSilicon,
];

const DEFAULT_LANGUAGES: &[&str] = &[
    "en-US,en;q=0.9",
    "de-DE,de;q=0.9",
    "fa-IR,fa;q=0.9",
    "fr-FR,fr;q=0.9",
    "es-ES,es;q=0.9",
    "ja-JP,ja;q=0.9",
    "ko-KR,ko;q=0.9",
    "pt-BR,pt;q=0.9",
    "ru-RU,ru;q=0.9",
    "tr-TR,tr;q=0.9",
    "it-IT,it;q=0.9",
    "pl-PL,pl;q=0.9",
    "nl-NL,nl;q=0.9",
    "sv-SE,sv;q=0.9",
    "ar-EG,ar;q=0.9",
    "cs-CZ,cs;q=0.9",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("no browsers configured for generation")]
    NoBrowsers,
    #[error("no compatible platform and os combination for {0}")]
    NoPlatformCombo(Browser),
    #[error("no available versions of {0} meet the configured criteria")]
    NoVersion(Browser),
    #[error("no bot profiles found for the requested categories: {0:?}")]
    NoBotProfiles(Vec<String>),
}

/// Parses a raw `accept-language` header value into a template.
///
/// Parts carrying an unparsable `;q=` weight are dropped; bare parts
/// stay unweighted and render without a quality value.
pub fn parse_language_header(header: &str) -> AcceptTemplate {
    let mut template = AcceptTemplate::new();
    for part in header.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match part.split_once(";q=") {
            Some((value, q)) => {
                if let Ok(q) = q.parse::<f64>() {
                    template.push(AcceptPart::weighted(value, q));
                }
            }
            None => template.push(AcceptPart::plain(part)),
        }
    }
    template
}

/// Plain-data configuration behind a [`Generator`].
///
/// The defaults describe a stock navigation session: every catalogue
/// browser, platform and OS eligible, HTTP/2-capable versions only,
/// priority header ordering, no fingerprint randomization.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub browsers: Vec<Browser>,
    pub platforms: Vec<Platform>,
    pub operating_systems: Vec<OperatingSystem>,
    /// Inclusive major-version bounds; `None` admits every catalogue entry.
    pub version_range: Option<(u32, u32)>,
    /// Accept-language templates; one is drawn per generated identity.
    pub languages: Vec<AcceptTemplate>,
    pub request_type: RequestType,
    pub header_ordering: HeaderOrdering,
    /// Emit the extended client-hint surface (full version list, platform
    /// version, architecture, bitness).
    pub full_fingerprint: bool,
    /// Restrict the draw to HTTP/2-capable versions and attach SETTINGS.
    pub h2_only: bool,
    pub fingerprint_profile: FingerprintProfile,
    pub h2_jitter: H2Jitter,
    /// Serve catalogued crawler identities instead of browser ones.
    pub bot_mode: bool,
    /// Bot categories to draw from; empty means the whole catalogue.
    pub bot_categories: Vec<String>,
    pub accept: bool,
    pub accept_encoding: bool,
    /// When false, generated agents carry an empty header set.
    pub emit_headers: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            browsers: vec![Browser::Random],
            platforms: vec![Platform::Random],
            operating_systems: vec![OperatingSystem::Random],
            version_range: None,
            languages: DEFAULT_LANGUAGES
                .iter()
                .map(|header| parse_language_header(header))
                .collect(),
            request_type: RequestType::Navigate,
            header_ordering: HeaderOrdering::Priority,
            full_fingerprint: false,
            h2_only: true,
            fingerprint_profile: FingerprintProfile::Normal,
            h2_jitter: H2Jitter::None,
            bot_mode: false,
            bot_categories: Vec::new(),
            accept: true,
            accept_encoding: false,
            emit_headers: true,
        }
    }
}

/// Fluent configuration for a [`Generator`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    config: GeneratorConfig,
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        GeneratorBuilder::default()
    }

    /// Restricts generation to the given browsers. Empty input keeps
    /// the current selection.
    pub fn with_browsers(mut self, browsers: impl IntoIterator<Item = Browser>) -> Self {
        let browsers: Vec<Browser> = browsers.into_iter().collect();
        if !browsers.is_empty() {
            self.config.browsers = browsers;
        }
        self
    }

    /// Restricts generation to the given platforms. Empty input keeps
    /// the current selection.
    pub fn with_platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        let platforms: Vec<Platform> = platforms.into_iter().collect();
        if !platforms.is_empty() {
            self.config.platforms = platforms;
        }
        self
    }

    /// Restricts generation to the given operating systems. Empty input
    /// keeps the current selection.
    pub fn with_operating_systems(
        mut self,
        systems: impl IntoIterator<Item = OperatingSystem>,
    ) -> Self {
        let systems: Vec<OperatingSystem> = systems.into_iter().collect();
        if !systems.is_empty() {
            self.config.operating_systems = systems;
        }
        self
    }

    /// Constrains major versions to `min..=max`. Degenerate ranges
    /// (`min` of zero or `max` below `min`) are ignored.
    pub fn with_version_range(mut self, min: u32, max: u32) -> Self {
        if min > 0 && max >= min {
            self.config.version_range = Some((min, max));
        }
        self
    }

    /// Replaces the accept-language pool with parsed header strings.
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed: Vec<AcceptTemplate> = languages
            .into_iter()
            .map(|header| parse_language_header(header.as_ref()))
            .collect();
        if !parsed.is_empty() {
            self.config.languages = parsed;
        }
        self
    }

    pub fn with_request_type(mut self, request_type: RequestType) -> Self {
        self.config.request_type = request_type;
        self
    }

    pub fn with_header_ordering(mut self, ordering: HeaderOrdering) -> Self {
        self.config.header_ordering = ordering;
        self
    }

    pub fn with_full_fingerprint(mut self, full: bool) -> Self {
        self.config.full_fingerprint = full;
        self
    }

    pub fn with_h2_only(mut self, h2_only: bool) -> Self {
        self.config.h2_only = h2_only;
        self
    }

    pub fn with_fingerprint_profile(mut self, profile: FingerprintProfile) -> Self {
        self.config.fingerprint_profile = profile;
        self
    }

    pub fn with_h2_jitter(mut self, jitter: H2Jitter) -> Self {
        self.config.h2_jitter = jitter;
        self
    }

    /// Switches generation to catalogued bot identities, optionally
    /// confined to the given categories (see [`bots::categories`]).
    pub fn with_bot_agents<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.bot_mode = true;
        self.config.bot_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_accept(mut self, enabled: bool) -> Self {
        self.config.accept = enabled;
        self
    }

    pub fn with_accept_encoding(mut self, enabled: bool) -> Self {
        self.config.accept_encoding = enabled;
        self
    }

    /// Generated agents keep only the user-agent string and transport
    /// identity; no header set is built.
    pub fn disable_headers(mut self) -> Self {
        self.config.emit_headers = false;
        self
    }

    pub fn build(self) -> Generator {
        Generator::with_config(self.config)
    }
}

/// Synthetic identity generator with a pool of reusable agent records.
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    pool: Mutex<Vec<Agent>>,
}

impl Generator {
    pub fn new() -> Self {
        Generator::with_config(GeneratorConfig::default())
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Generator {
            config,
            pool: Mutex::new(Vec::new()),
        }
    }

    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates one complete agent record.
    pub fn generate(&self) -> Result<Agent, GenerateError> {
        if self.config.bot_mode {
            return self.generate_bot();
        }

        let mut rng = thread_rng();

        let (browser, profile) = self.resolve_browser(&mut rng)?;
        let (platform, os, os_prof) = self.resolve_platform_and_os(browser, &mut rng)?;

        let mut candidates: Vec<(u32, &VersionProfile)> =
            profile.versions.iter().map(|(v, p)| (*v, p)).collect();
        if let Some((min, max)) = self.config.version_range {
            candidates.retain(|(v, _)| (min..=max).contains(v));
        }
        if self.config.h2_only {
            candidates.retain(|(_, p)| p.supports_h2);
        }
        let (version, version_prof) = *candidates
            .choose(&mut rng)
            .ok_or(GenerateError::NoVersion(browser))?;

        let full_version = match version_prof.chromium_build() {
            Some(build) => format!("{version}.0.{build}.{}", rng.gen_range(0..999)),
            None => String::new(),
        };

        let user_agent = compose_user_agent(
            platform,
            &FragmentContext {
                browser: profile,
                os: &os_prof,
                version: version_prof,
                full_version: &full_version,
            },
        );

        // Maximum randomization also shuffles equal-priority header runs.
        let ordering = if self.config.fingerprint_profile == FingerprintProfile::Maximum {
            HeaderOrdering::ShuffledPriority
        } else {
            self.config.header_ordering
        };

        let (headers, header_order) = if self.config.emit_headers {
            let policy = HeaderPolicy {
                request_type: self.config.request_type,
                languages: &self.config.languages,
                ordering,
                accept: self.config.accept,
                accept_encoding: self.config.accept_encoding,
                full_fingerprint: self.config.full_fingerprint,
                fingerprint_profile: self.config.fingerprint_profile,
            };
            let ctx = HeaderContext {
                browser: profile,
                os: &os_prof,
                major: version,
                full_version: &full_version,
                mobile_hint: platform.mobile_hint(),
            };
            headers::build_headers(&policy, &ctx)
        } else {
            (HeaderMap::new(), Vec::new())
        };

        let h2_settings = self
            .config
            .h2_only
            .then(|| profile.family.h2_settings().jittered(self.config.h2_jitter));

        let tls = if self.config.fingerprint_profile == FingerprintProfile::Maximum {
            TlsIdentity::Synthesized(ClientHelloSpec::randomized_chrome())
        } else {
            TlsIdentity::Canonical(version_prof.hello)
        };

        log::debug!(
            "generated {browser} {version} on {} ({platform})",
            os_prof.name
        );

        let mut agent = self.checkout();
        agent.user_agent = user_agent;
        agent.headers = headers;
        agent.header_order = header_order;
        agent.tls = Some(tls);
        agent.h2_settings = h2_settings;
        Ok(agent)
    }

    fn generate_bot(&self) -> Result<Agent, GenerateError> {
        let mut rng = thread_rng();

        let eligible: Vec<&'static BotProfile> = if self.config.bot_categories.is_empty() {
            bots::all_profiles().iter().collect()
        } else {
            self.config
                .bot_categories
                .iter()
                .filter_map(|category| bots::profiles_for(category))
                .flat_map(|profiles| profiles.iter())
                .collect()
        };

        let profile = eligible
            .choose(&mut rng)
            .copied()
            .ok_or_else(|| GenerateError::NoBotProfiles(self.config.bot_categories.clone()))?;

        log::debug!("generated bot identity {}", profile.user_agent);

        let (headers, header_order) = headers::build_bot_headers(profile.headers);

        let mut agent = self.checkout();
        agent.user_agent = profile.user_agent.to_string();
        agent.headers = headers;
        agent.header_order = header_order;
        agent.tls = Some(TlsIdentity::Canonical(profile.hello));
        agent.h2_settings = self.config.h2_only.then(H2Settings::chromium);
        Ok(agent)
    }

    fn resolve_browser(
        &self,
        rng: &mut impl Rng,
    ) -> Result<(Browser, &'static BrowserProfile), GenerateError> {
        let pool: &[Browser] = if self.config.browsers.contains(&Browser::Random) {
            ALL_BROWSERS
        } else {
            &self.config.browsers
        };
        pool.choose(rng)
            .and_then(|browser| browser_profile(*browser).map(|profile| (*browser, profile)))
            .ok_or(GenerateError::NoBrowsers)
    }

    fn resolve_platform_and_os(
        &self,
        browser: Browser,
        rng: &mut impl Rng,
    ) -> Result<(Platform, OperatingSystem, OsProfile), GenerateError> {
        let platforms: &[Platform] = if self.config.platforms.contains(&Platform::Random) {
            ALL_PLATFORMS
        } else {
            &self.config.platforms
        };
        let systems: &[OperatingSystem] =
            if self.config.operating_systems.contains(&OperatingSystem::Random) {
                ALL_OPERATING_SYSTEMS
            } else {
                &self.config.operating_systems
            };

        let mut combos = Vec::with_capacity(platforms.len() * systems.len());
        for &platform in platforms {
            for &os in systems {
                let concrete: &[OperatingSystem] = if os == OperatingSystem::Mac {
                    MAC_ARCHITECTURES
                } else {
                    std::slice::from_ref(&os)
                };
                for &target in concrete {
                    let Some(prof) = os_profile(target) else {
                        continue;
                    };
                    if (platform == Platform::Mobile) != prof.mobile {
                        continue;
                    }
                    if !compatible(browser, platform, target, &prof) {
                        continue;
                    }
                    combos.push((platform, target, prof));
                }
            }
        }

        combos
            .choose(rng)
            .copied()
            .ok_or(GenerateError::NoPlatformCombo(browser))
    }

    fn checkout(&self) -> Agent {
        self.pool
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .unwrap_or_default()
    }

    /// Returns an agent to the pool. The record is cleared in place and
    /// reused by a later [`Generator::generate`] call.
    pub fn release(&self, mut agent: Agent) {
        agent.clear();
        self.pool
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(agent);
    }
}

impl Default for Generator {
    fn default() -> Self {
        Generator::new()
    }
}

/// Browser-specific OS restrictions beyond the mobility match: Safari
/// ships only on Apple systems, Firefox has no iOS build and its only
/// mobile target is Android.
fn compatible(
    browser: Browser,
    platform: Platform,
    os: OperatingSystem,
    profile: &OsProfile,
) -> bool {
    match browser {
        Browser::Safari => {
            if platform == Platform::Mobile {
                os == OperatingSystem::Ios
            } else {
                profile.name == "macOS"
            }
        }
        Browser::Firefox => {
            if platform == Platform::Mobile {
                os == OperatingSystem::Android
            } else {
                os != OperatingSystem::Ios && os != OperatingSystem::Android
            }
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_headers_parse_into_templates() {
        let template = parse_language_header("en-US,en;q=0.9");
        assert_eq!(
            template,
            vec![AcceptPart::plain("en-US"), AcceptPart::weighted("en", 0.9)]
        );

        // unparsable weights drop the part instead of guessing one
        let broken = parse_language_header("en-US,en;q=abc");
        assert_eq!(broken, vec![AcceptPart::plain("en-US")]);

        let spaced = parse_language_header("de-DE, de;q=0.8, en;q=0.7");
        assert_eq!(spaced.len(), 3);
        assert_eq!(spaced[1], AcceptPart::weighted("de", 0.8));
    }

    #[test]
    fn default_config_describes_a_stock_session() {
        let config = GeneratorConfig::default();
        assert_eq!(config.browsers, vec![Browser::Random]);
        assert_eq!(config.platforms, vec![Platform::Random]);
        assert_eq!(config.version_range, None);
        assert_eq!(config.languages.len(), 16);
        assert!(config.h2_only);
        assert!(config.accept);
        assert!(!config.accept_encoding);
        assert!(config.emit_headers);
        assert!(!config.bot_mode);
    }

    #[test]
    fn degenerate_version_ranges_are_ignored() {
        let generator = Generator::builder().with_version_range(140, 120).build();
        assert_eq!(generator.config().version_range, None);

        let generator = Generator::builder().with_version_range(0, 120).build();
        assert_eq!(generator.config().version_range, None);

        let generator = Generator::builder().with_version_range(120, 128).build();
        assert_eq!(generator.config().version_range, Some((120, 128)));
    }

    #[test]
    fn empty_browser_list_is_rejected() {
        let generator = Generator::with_config(GeneratorConfig {
            browsers: Vec::new(),
            ..GeneratorConfig::default()
        });
        assert_eq!(generator.generate().unwrap_err(), GenerateError::NoBrowsers);
    }

    #[test]
    fn impossible_combinations_are_rejected() {
        let generator = Generator::builder()
            .with_browsers([Browser::Safari])
            .with_operating_systems([OperatingSystem::Windows])
            .build();
        assert_eq!(
            generator.generate().unwrap_err(),
            GenerateError::NoPlatformCombo(Browser::Safari)
        );

        let generator = Generator::builder()
            .with_browsers([Browser::Firefox])
            .with_platforms([Platform::Mobile])
            .with_operating_systems([OperatingSystem::Ios])
            .build();
        assert_eq!(
            generator.generate().unwrap_err(),
            GenerateError::NoPlatformCombo(Browser::Firefox)
        );
    }

    #[test]
    fn out_of_range_versions_are_rejected() {
        let generator = Generator::builder()
            .with_browsers([Browser::Chrome])
            .with_version_range(1, 1)
            .build();
        assert_eq!(
            generator.generate().unwrap_err(),
            GenerateError::NoVersion(Browser::Chrome)
        );
    }

    #[test]
    fn unknown_bot_categories_are_rejected() {
        let generator = Generator::builder()
            .with_bot_agents(["NonExistentBot"])
            .build();
        assert_eq!(
            generator.generate().unwrap_err(),
            GenerateError::NoBotProfiles(vec!["NonExistentBot".to_string()])
        );
    }

    #[test]
    fn mac_selection_covers_both_architectures() {
        let generator = Generator::builder()
            .with_browsers([Browser::Safari])
            .with_platforms([Platform::Desktop])
            .with_operating_systems([OperatingSystem::Mac])
            .build();
        let mut saw_intel = false;
        let mut saw_arm = false;
        for _ in 0..40 {
            let agent = generator.generate().unwrap();
            assert!(agent.user_agent.contains("Macintosh"), "{}", agent.user_agent);
            saw_intel |= agent.user_agent.contains("Intel Mac OS X");
            saw_arm |= agent.user_agent.contains("ARM Mac OS X");
            generator.release(agent);
        }
        assert!(saw_intel && saw_arm);
    }

    #[test]
    fn released_agents_come_back_cleared() {
        let generator = Generator::new();
        let agent = generator.generate().unwrap();
        assert!(!agent.user_agent.is_empty());
        generator.release(agent);

        let pooled = generator.checkout();
        assert!(pooled.user_agent.is_empty());
        assert!(pooled.headers.is_empty());
        assert!(pooled.header_order.is_empty());
        assert!(pooled.tls.is_none());
        assert!(pooled.h2_settings.is_none());
    }
}
