//! Header ordering strategies
//!
//! Browsers emit headers in a stable, browser-specific order, and
//! anti-bot systems compare against it. The priority table mirrors
//! Chromium's emission order; unknown headers sink to the end.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::thread_rng;

/// HTTP/2 pseudo-headers, always first and always in this order.
pub const PSEUDO_HEADER_ORDER: [&str; 4] = [":method", ":authority", ":scheme", ":path"];

static HEADER_PRIORITY: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    HashMap::from([
        (":authority", 0),
        (":method", 1),
        (":path", 2),
        (":scheme", 3),
        (":status", 4),
        ("host", 10),
        ("connection", 11),
        ("upgrade", 12),
        ("upgrade-insecure-requests", 13),
        ("user-agent", 14),
        ("sec-ch-ua", 15),
        ("sec-ch-ua-arch", 16),
        ("sec-ch-ua-bitness", 17),
        ("sec-ch-ua-full-version", 18),
        ("sec-ch-ua-full-version-list", 19),
        ("sec-ch-ua-mobile", 20),
        ("sec-ch-ua-model", 21),
        ("sec-ch-ua-platform", 22),
        ("sec-ch-ua-platform-version", 23),
        ("sec-ch-ua-wow64", 24),
        ("authorization", 30),
        ("proxy-authorization", 31),
        ("cookie", 32),
        ("sec-gpc", 33),
        ("expect", 34),
        ("max-forwards", 35),
        ("from", 36),
        ("accept", 40),
        ("accept-charset", 41),
        ("accept-encoding", 42),
        ("accept-language", 43),
        ("te", 44),
        ("if-match", 50),
        ("if-none-match", 51),
        ("if-modified-since", 52),
        ("if-unmodified-since", 53),
        ("if-range", 54),
        ("range", 60),
        ("sec-fetch-site", 65),
        ("sec-fetch-mode", 66),
        ("sec-fetch-user", 67),
        ("sec-fetch-dest", 68),
        ("referer", 70),
        ("content-type", 80),
        ("content-length", 81),
        ("content-encoding", 82),
        ("content-language", 83),
        ("content-location", 84),
        ("content-md5", 85),
        ("content-range", 86),
        ("transfer-encoding", 87),
        ("date", 100),
        ("location", 101),
        ("retry-after", 102),
        ("set-cookie", 103),
        ("expires", 104),
        ("pragma", 105),
        ("cache-control", 106),
        ("etag", 107),
        ("last-modified", 108),
        ("age", 109),
        ("vary", 110),
        ("accept-ranges", 111),
        ("allow", 112),
        ("server", 113),
        ("via", 114),
        ("warning", 115),
        ("strict-transport-security", 120),
        ("content-security-policy", 121),
        ("permissions-policy", 123),
        ("cross-origin-opener-policy", 124),
        ("cross-origin-resource-policy", 125),
        ("cross-origin-embedder-policy", 126),
        ("x-frame-options", 127),
        ("x-content-type-options", 128),
        ("x-xss-protection", 129),
        ("report-to", 130),
        ("reporting-endpoints", 131),
        ("www-authenticate", 140),
        ("proxy-authenticate", 141),
        ("accept-ch", 150),
        ("alt-svc", 160),
        ("trailer", 170),
        ("x-ua-compatible", 171),
    ])
});

pub(crate) fn priority_of(name: &str) -> usize {
    HEADER_PRIORITY.get(name).copied().unwrap_or(usize::MAX)
}

/// Strategy applied to regular header keys before emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderOrdering {
    /// Strict priority-table order.
    Priority,
    /// Priority order, then each same-priority run shuffled in place.
    ShuffledPriority,
    /// Uniformly random permutation.
    Random,
}

impl HeaderOrdering {
    pub fn apply(&self, keys: &mut [String]) {
        let mut rng = thread_rng();
        match self {
            HeaderOrdering::Priority => {
                keys.sort_by_key(|k| priority_of(k));
            }
            HeaderOrdering::ShuffledPriority => {
                keys.sort_by_key(|k| priority_of(k));
                let mut start = 0;
                for i in 1..=keys.len() {
                    let run_ends =
                        i == keys.len() || priority_of(&keys[i]) != priority_of(&keys[start]);
                    if run_ends {
                        if i - start > 1 {
                            keys[start..i].shuffle(&mut rng);
                        }
                        start = i;
                    }
                }
            }
            HeaderOrdering::Random => {
                keys.shuffle(&mut rng);
            }
        }
    }
}
