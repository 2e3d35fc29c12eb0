//! Header set assembly
//!
//! Responsibilities:
//! - Accept-style header rendering with randomized quality weights
//! - Chromium client-hint surface, `sec-ch-ua` brand lists included
//! - Fetch-metadata headers per request context
//! - Deterministic static variants for reverse-built agents
//!
//! Header names never include `user-agent`: the user-agent string
//! lives on the agent itself and transports inject it at send time.

pub mod order;

use std::collections::HashMap;

use http::{HeaderMap, HeaderName, HeaderValue};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::config::{FingerprintProfile, RequestType};
use crate::headers::order::{HeaderOrdering, PSEUDO_HEADER_ORDER};
use crate::profiles::{AcceptPart, AcceptTemplate, BrowserProfile, OsProfile};

/// GREASE brand entries as Chromium spells them, version quotes included.
const GREASE_BRANDS: &[&str] = &[
    r#""Not/A)Brand";v="8""#,
    r#""Not;A Brand";v="99""#,
    r#""Not(A:Brand";v="24""#,
    r#""Chromium";v="99""#,
];

/// `sec-fetch-dest` values a subresource fetch plausibly carries.
const SUBRESOURCE_DESTS: &[&str] = &["style", "script", "image", "font", "empty"];

/// Configuration slice steering one header build.
pub(crate) struct HeaderPolicy<'a> {
    pub request_type: RequestType,
    pub languages: &'a [AcceptTemplate],
    pub ordering: HeaderOrdering,
    pub accept: bool,
    pub accept_encoding: bool,
    pub full_fingerprint: bool,
    pub fingerprint_profile: FingerprintProfile,
}

/// Resolved identity slice one header build describes.
pub(crate) struct HeaderContext<'a> {
    pub browser: &'a BrowserProfile,
    pub os: &'a OsProfile,
    pub major: u32,
    /// Four-component version string, empty for non-Chromium engines.
    pub full_version: &'a str,
    pub mobile_hint: &'static str,
}

/// Builds the randomized header set and its emission order.
pub(crate) fn build_headers(
    policy: &HeaderPolicy,
    ctx: &HeaderContext,
) -> (HeaderMap, Vec<String>) {
    let mut rng = thread_rng();
    let mut pending: HashMap<&'static str, String> = HashMap::with_capacity(16);

    let accept_templates = match policy.request_type {
        RequestType::Xhr => &ctx.browser.accept_xhr,
        _ => &ctx.browser.accept_navigate,
    };
    if policy.accept {
        if let Some(template) = accept_templates.choose(&mut rng) {
            pending.insert("accept", render_accept(template));
        }
    }
    if policy.accept_encoding {
        pending.insert("accept-encoding", random_accept_encoding());
    }
    if let Some(language) = policy.languages.choose(&mut rng) {
        pending.insert("accept-language", render_accept(language));
    }

    if ctx.browser.is_chromium() {
        pending.insert(
            "sec-ch-ua",
            sec_ch_ua_value(ctx.browser.brand, &ctx.major.to_string(), false, true),
        );
        pending.insert("sec-ch-ua-mobile", ctx.mobile_hint.to_string());
        pending.insert("sec-ch-ua-platform", format!("\"{}\"", ctx.os.name));

        if policy.full_fingerprint {
            pending.insert(
                "sec-ch-ua-full-version-list",
                sec_ch_ua_value(ctx.browser.brand, ctx.full_version, true, true),
            );
            if let Some(version) = ctx.os.version {
                pending.insert("sec-ch-ua-platform-version", format!("\"{version}\""));
            }
            if let Some(arch) = ctx.os.arch {
                pending.insert("sec-ch-ua-arch", format!("\"{arch}\""));
            }
            if let Some(bitness) = ctx.os.bitness {
                pending.insert("sec-ch-ua-bitness", format!("\"{bitness}\""));
            }
        }
    }

    if policy.fingerprint_profile == FingerprintProfile::Extreme {
        pending.retain(|name, _| !(name.starts_with("sec-") && rng.gen_bool(0.5)));
    }

    if policy.request_type == RequestType::Navigate && ctx.browser.brand == "Brave" {
        pending.insert("sec-gpc", "1".to_string());
    }

    match policy.request_type {
        RequestType::Navigate => {
            pending.insert("sec-fetch-dest", "document".to_string());
            pending.insert("sec-fetch-mode", "navigate".to_string());
            pending.insert("sec-fetch-site", "none".to_string());
            pending.insert("sec-fetch-user", "?1".to_string());
            pending.insert("upgrade-insecure-requests", "1".to_string());
        }
        RequestType::Subresource => {
            let dest = SUBRESOURCE_DESTS.choose(&mut rng).copied().unwrap_or("empty");
            pending.insert("sec-fetch-dest", dest.to_string());
            pending.insert("sec-fetch-mode", "no-cors".to_string());
            pending.insert("sec-fetch-site", "same-origin".to_string());
        }
        RequestType::Xhr => {
            pending.insert("sec-fetch-dest", "empty".to_string());
            pending.insert("sec-fetch-mode", "cors".to_string());
            pending.insert("sec-fetch-site", "same-origin".to_string());
        }
    }

    finalize(pending, policy.ordering)
}

/// Builds the deterministic header set a reverse-built agent carries.
///
/// Uses each family's first Accept template with its weights verbatim,
/// fixed encoding and language values, and the full client-hint surface
/// for Chromium engines. Subresource contexts get no fetch metadata.
pub(crate) fn build_static_headers(
    request_type: RequestType,
    ctx: &HeaderContext,
) -> (HeaderMap, Vec<String>) {
    let mut pending: HashMap<&'static str, String> = HashMap::with_capacity(16);

    let accept_templates = match request_type {
        RequestType::Xhr => &ctx.browser.accept_xhr,
        _ => &ctx.browser.accept_navigate,
    };
    if let Some(template) = accept_templates.first() {
        pending.insert("accept", render_accept_template(template));
    }
    pending.insert("accept-encoding", "gzip, deflate, br".to_string());
    pending.insert("accept-language", "en-US,en;q=0.9".to_string());

    if ctx.browser.is_chromium() {
        pending.insert(
            "sec-ch-ua",
            sec_ch_ua_value(ctx.browser.brand, &ctx.major.to_string(), false, false),
        );
        pending.insert("sec-ch-ua-mobile", ctx.mobile_hint.to_string());
        pending.insert("sec-ch-ua-platform", format!("\"{}\"", ctx.os.name));
        pending.insert(
            "sec-ch-ua-full-version-list",
            sec_ch_ua_value(ctx.browser.brand, ctx.full_version, true, false),
        );
        if let Some(version) = ctx.os.version {
            pending.insert("sec-ch-ua-platform-version", format!("\"{version}\""));
        }
        if let Some(arch) = ctx.os.arch {
            pending.insert("sec-ch-ua-arch", format!("\"{arch}\""));
        }
        if let Some(bitness) = ctx.os.bitness {
            pending.insert("sec-ch-ua-bitness", format!("\"{bitness}\""));
        }
    }

    match request_type {
        RequestType::Navigate => {
            pending.insert("sec-fetch-dest", "document".to_string());
            pending.insert("sec-fetch-mode", "navigate".to_string());
            pending.insert("sec-fetch-site", "none".to_string());
            pending.insert("sec-fetch-user", "?1".to_string());
            pending.insert("upgrade-insecure-requests", "1".to_string());
        }
        RequestType::Xhr => {
            pending.insert("sec-fetch-dest", "empty".to_string());
            pending.insert("sec-fetch-mode", "cors".to_string());
            pending.insert("sec-fetch-site", "same-origin".to_string());
        }
        RequestType::Subresource => {}
    }

    finalize(pending, HeaderOrdering::Priority)
}

/// Builds the fixed header set a catalogued bot identity ships with.
/// Bot headers always use priority ordering.
pub(crate) fn build_bot_headers(
    pairs: &[(&'static str, &'static str)],
) -> (HeaderMap, Vec<String>) {
    let pending: HashMap<&'static str, String> = pairs
        .iter()
        .map(|(name, value)| (*name, value.to_string()))
        .collect();
    finalize(pending, HeaderOrdering::Priority)
}

/// Renders an Accept-style template with a fresh descending q sequence.
///
/// The running weight starts at 1.0, loses up to 0.1 per weighted part
/// and never drops below 0.1, so weights always read plausibly ordered.
pub(crate) fn render_accept(parts: &[AcceptPart]) -> String {
    let mut rng = thread_rng();
    let mut out = String::new();
    let mut current_q = 1.0f64;
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&part.value);
        for extra in &part.extras {
            out.push(';');
            out.push_str(extra);
        }
        if part.q > 0.0 {
            current_q -= rng.gen_range(0.0..0.1);
            if current_q < 0.1 {
                current_q = 0.1;
            }
            out.push_str(";q=");
            out.push_str(&format!("{current_q:.1}"));
        }
    }
    out
}

/// Renders an Accept-style template with its catalogue weights verbatim.
fn render_accept_template(parts: &[AcceptPart]) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&part.value);
        for extra in &part.extras {
            out.push(';');
            out.push_str(extra);
        }
        if part.q > 0.0 {
            out.push_str(";q=");
            out.push_str(&format!("{:.1}", part.q));
        }
    }
    out
}

/// Shuffled coding list, with zstd appearing half the time.
fn random_accept_encoding() -> String {
    let mut rng = thread_rng();
    let mut codings = ["gzip", "deflate", "br"];
    codings.shuffle(&mut rng);
    let mut out = codings.join(", ");
    if rng.gen_bool(0.5) {
        out.push_str(", zstd");
    }
    out
}

/// Builds a `sec-ch-ua` style brand list.
///
/// `full` switches to four-component versions as used by
/// `sec-ch-ua-full-version-list`. `randomize` draws the GREASE brand
/// from the pool and shuffles the final list; static builds keep the
/// first GREASE brand and the fixed Chromium-brand-GREASE order.
pub(crate) fn sec_ch_ua_value(brand: &str, version: &str, full: bool, randomize: bool) -> String {
    let mut rng = thread_rng();
    let grease = if randomize {
        GREASE_BRANDS.choose(&mut rng).copied().unwrap_or(GREASE_BRANDS[0])
    } else {
        GREASE_BRANDS[0]
    };
    let (grease_brand, grease_version) = grease.split_once(";v=").unwrap_or((grease, "\"99\""));
    let grease_version = if full { "\"99.0.0.0\"" } else { grease_version };

    let version = if full {
        version
    } else {
        version.split('.').next().unwrap_or(version)
    };

    let mut brands = vec![
        format!("\"Chromium\";v=\"{version}\""),
        format!("\"{brand}\";v=\"{version}\""),
        format!("{grease_brand};v={grease_version}"),
    ];
    if randomize {
        brands.shuffle(&mut rng);
    }
    brands.join(", ")
}

fn insert_header(target: &mut HeaderMap, name: &str, value: &str) {
    if let (Ok(name), Ok(value)) = (
        HeaderName::from_bytes(name.as_bytes()),
        HeaderValue::from_str(value),
    ) {
        target.insert(name, value);
    }
}

/// Sorts the pending keys, fills the map and prepends the pseudo order.
fn finalize(
    pending: HashMap<&'static str, String>,
    ordering: HeaderOrdering,
) -> (HeaderMap, Vec<String>) {
    let mut keys: Vec<String> = pending.keys().map(|k| k.to_string()).collect();
    ordering.apply(&mut keys);

    let mut headers = HeaderMap::with_capacity(pending.len());
    for key in &keys {
        if let Some(value) = pending.get(key.as_str()) {
            insert_header(&mut headers, key, value);
        }
    }

    let mut header_order: Vec<String> =
        PSEUDO_HEADER_ORDER.iter().map(|s| s.to_string()).collect();
    header_order.extend(keys);
    (headers, header_order)
}
