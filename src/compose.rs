//! User-agent string composition
//!
//! A user agent is an ordered pipeline of fragments selected by the
//! platform and rendering family. Each fragment renders independently
//! from the resolved profile data; fragments that do not apply render
//! to nothing and are skipped, so pipelines stay total.

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::config::Platform;
use crate::profiles::os::ANDROID_DEVICES;
use crate::profiles::{BrowserProfile, EngineDetail, OsProfile, RenderingFamily, VersionProfile};

/// Resolved inputs one composition draws from.
pub(crate) struct FragmentContext<'a> {
    pub browser: &'a BrowserProfile,
    pub os: &'a OsProfile,
    pub version: &'a VersionProfile,
    /// Four-component version string, empty for non-Chromium engines.
    pub full_version: &'a str,
}

/// One positional piece of a user-agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fragment {
    Mozilla,
    OsToken,
    WebKitEngine,
    Khtml,
    ChromeVersion,
    DesktopSafari,
    MobileSafari,
    BrandSuffix,
    GeckoOsToken,
    GeckoTrail,
    FirefoxVersion,
    SafariWebKit,
    SafariVersion,
    SafariMobileBuild,
    SafariBrowser,
}

impl Fragment {
    fn render(&self, ctx: &FragmentContext) -> Option<String> {
        match self {
            Fragment::Mozilla => Some("Mozilla/5.0".to_string()),
            Fragment::OsToken => Some(format!("({})", os_token(ctx.os))),
            Fragment::WebKitEngine => Some("AppleWebKit/537.36".to_string()),
            Fragment::Khtml => Some("(KHTML, like Gecko)".to_string()),
            Fragment::ChromeVersion => Some(format!("Chrome/{}", ctx.full_version)),
            Fragment::DesktopSafari => Some("Safari/537.36".to_string()),
            Fragment::MobileSafari => Some("Mobile Safari/537.36".to_string()),
            Fragment::BrandSuffix => {
                let suffix = ctx.browser.ua_suffix?;
                let major = ctx.full_version.split('.').next().unwrap_or(ctx.full_version);
                Some(format!("{suffix}/{major}"))
            }
            Fragment::GeckoOsToken => match &ctx.version.engine {
                EngineDetail::Gecko { revision } => {
                    Some(format!("({}; rv:{revision})", os_token(ctx.os)))
                }
                _ => None,
            },
            Fragment::GeckoTrail => Some("Gecko/20100101".to_string()),
            Fragment::FirefoxVersion => match &ctx.version.engine {
                EngineDetail::Gecko { revision } => Some(format!("Firefox/{revision}")),
                _ => None,
            },
            Fragment::SafariWebKit => match &ctx.version.engine {
                EngineDetail::WebKit { webkit, .. } => Some(format!("AppleWebKit/{webkit}")),
                _ => None,
            },
            Fragment::SafariVersion => match &ctx.version.engine {
                EngineDetail::WebKit { safari, .. } => Some(format!("Version/{safari}")),
                _ => None,
            },
            Fragment::SafariMobileBuild => match &ctx.version.engine {
                EngineDetail::WebKit { mobile_build, .. } => {
                    Some(format!("Mobile/{mobile_build}"))
                }
                _ => None,
            },
            Fragment::SafariBrowser => match &ctx.version.engine {
                EngineDetail::WebKit { webkit, .. } => {
                    if ctx.os.mobile {
                        Some("Safari/604.1".to_string())
                    } else {
                        Some(format!("Safari/{webkit}"))
                    }
                }
                _ => None,
            },
        }
    }
}

/// Renders the OS token, substituting a random Android device model.
fn os_token(os: &OsProfile) -> String {
    if os.platform_token.contains("{device_model}") {
        let mut rng = thread_rng();
        let device = ANDROID_DEVICES.choose(&mut rng).copied().unwrap_or("Pixel 7");
        os.platform_token.replace("{device_model}", device)
    } else {
        os.platform_token.to_string()
    }
}

/// Fragment order for one platform and rendering family.
pub(crate) fn pipeline(platform: Platform, family: RenderingFamily) -> &'static [Fragment] {
    use Fragment::*;
    match (platform, family) {
        (Platform::Mobile, RenderingFamily::Chromium) => &[
            Mozilla,
            OsToken,
            WebKitEngine,
            Khtml,
            ChromeVersion,
            MobileSafari,
            BrandSuffix,
        ],
        (_, RenderingFamily::Chromium) => &[
            Mozilla,
            OsToken,
            WebKitEngine,
            Khtml,
            ChromeVersion,
            DesktopSafari,
            BrandSuffix,
        ],
        (_, RenderingFamily::Gecko) => &[Mozilla, GeckoOsToken, GeckoTrail, FirefoxVersion],
        (Platform::Mobile, RenderingFamily::WebKit) => &[
            Mozilla,
            OsToken,
            SafariWebKit,
            Khtml,
            SafariVersion,
            SafariMobileBuild,
            SafariBrowser,
        ],
        (_, RenderingFamily::WebKit) => &[
            Mozilla,
            OsToken,
            SafariWebKit,
            Khtml,
            SafariVersion,
            SafariBrowser,
        ],
    }
}

/// Joins the rendered pipeline with single spaces, skipping empty slots.
pub(crate) fn compose_user_agent(platform: Platform, ctx: &FragmentContext) -> String {
    let mut out = String::new();
    for fragment in pipeline(platform, ctx.browser.family) {
        let Some(part) = fragment.render(ctx) else {
            continue;
        };
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&part);
    }
    out
}
