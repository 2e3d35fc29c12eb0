//! Crawler bot catalogue
//!
//! Verbatim user-agent strings and header sets of well-known crawlers,
//! grouped by category token. Most crawlers make plain HTTP-library
//! handshakes; the Chrome-rendering Googlebot and Bingbot variants are
//! the exception and reference the matching canonical hello instead.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::fingerprint::HelloId;

pub const AHREFS: &str = "AhrefsBot";
pub const APPLE: &str = "AppleBot";
pub const BAIDU: &str = "BaiduBot";
pub const BING: &str = "BingBot";
pub const BYTESPIDER: &str = "BytespiderBot";
pub const CC: &str = "CCBot";
pub const CHAT_GPT: &str = "ChatGPTUser";
pub const CLAUDE: &str = "ClaudeBot";
pub const COHERE: &str = "CohereBot";
pub const DIFFBOT: &str = "Diffbot";
pub const DUCK_DUCK_GO: &str = "DuckDuckGoBot";
pub const FACEBOOK: &str = "FacebookBot";
pub const GPT: &str = "GPTBot";
pub const GOOGLE: &str = "GoogleBot";
pub const GOOGLE_EXTENDED: &str = "GoogleExtended";
pub const LINKED_IN: &str = "LinkedInBot";
pub const MAJESTIC: &str = "MajesticBot";
pub const MOZ: &str = "MozBot";
pub const PERPLEXITY: &str = "PerplexityBot";
pub const PETAL: &str = "PetalBot";
pub const PINTEREST: &str = "PinterestBot";
pub const SEMRUSH: &str = "SemrushBot";
pub const SOGOU: &str = "SogouBot";
pub const TWITTER: &str = "TwitterBot";
pub const UPTIME_ROBOT: &str = "UptimeRobot";
pub const WHATS_APP: &str = "WhatsAppBot";
pub const YAHOO: &str = "YahooBot";
pub const YANDEX: &str = "YandexBot";
pub const YOU: &str = "YouBot";

/// One crawler presentation: fixed user agent, fixed headers, fixed hello.
#[derive(Debug, Clone, Copy)]
pub struct BotProfile {
    pub user_agent: &'static str,
    pub hello: HelloId,
    pub headers: &'static [(&'static str, &'static str)],
}

const BASE_BOT_HEADERS: &[(&str, &str)] = &[
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
    ),
    ("accept-encoding", "gzip, deflate"),
];

const GOOGLEBOT_FROM: &[(&str, &str)] = &[
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
    ),
    ("accept-encoding", "gzip, deflate"),
    ("from", "googlebot@googlebot.com"),
];

static BOT_PROFILES: Lazy<HashMap<&'static str, Vec<BotProfile>>> = Lazy::new(|| {
    let mut categories = HashMap::new();

    categories.insert(
        GOOGLE,
        vec![
            BotProfile {
                user_agent: "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
                hello: HelloId::GenericCrawler,
                headers: GOOGLEBOT_FROM,
            },
            BotProfile {
                user_agent: "Mozilla/5.0 AppleWebKit/537.36 (KHTML, like Gecko; compatible; Googlebot/2.1; +http://www.google.com/bot.html) Chrome/120.0.0.0 Safari/537.36",
                hello: HelloId::Chrome120,
                headers: &[
                    ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7"),
                    ("accept-encoding", "gzip, deflate, br"),
                    ("accept-language", "en-US,en;q=0.9"),
                    ("upgrade-insecure-requests", "1"),
                    ("sec-fetch-site", "none"),
                    ("sec-fetch-mode", "navigate"),
                    ("sec-fetch-user", "?1"),
                    ("sec-fetch-dest", "document"),
                    ("sec-ch-ua", "\"Not_A Brand\";v=\"8\", \"Chromium\";v=\"120\", \"Google Chrome\";v=\"120\""),
                    ("sec-ch-ua-mobile", "?0"),
                    ("sec-ch-ua-platform", "\"Linux\""),
                    ("from", "googlebot@googlebot.com"),
                ],
            },
            BotProfile {
                user_agent: "Mozilla/5.0 (Linux; Android 6.0.1; Nexus 5X Build/MMB29P) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
                hello: HelloId::Chrome120,
                headers: &[
                    ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7"),
                    ("accept-encoding", "gzip, deflate, br"),
                    ("accept-language", "en-US,en;q=0.9"),
                    ("upgrade-insecure-requests", "1"),
                    ("sec-fetch-site", "none"),
                    ("sec-fetch-mode", "navigate"),
                    ("sec-fetch-user", "?1"),
                    ("sec-fetch-dest", "document"),
                    ("sec-ch-ua", "\"Not_A Brand\";v=\"8\", \"Chromium\";v=\"120\", \"Google Chrome\";v=\"120\""),
                    ("sec-ch-ua-mobile", "?1"),
                    ("sec-ch-ua-platform", "\"Android\""),
                    ("from", "googlebot@googlebot.com"),
                ],
            },
            BotProfile {
                user_agent: "Googlebot-Image/1.0",
                hello: HelloId::GenericCrawler,
                headers: &[
                    ("accept", "image/*"),
                    ("accept-encoding", "gzip, deflate"),
                    ("from", "googlebot@googlebot.com"),
                ],
            },
            BotProfile {
                user_agent: "Googlebot-News",
                hello: HelloId::GenericCrawler,
                headers: GOOGLEBOT_FROM,
            },
            BotProfile {
                user_agent: "Googlebot-Video/1.0",
                hello: HelloId::GenericCrawler,
                headers: &[
                    ("accept", "video/*"),
                    ("accept-encoding", "gzip, deflate"),
                    ("from", "googlebot@googlebot.com"),
                ],
            },
            BotProfile {
                user_agent: "Mediapartners-Google",
                hello: HelloId::GenericCrawler,
                headers: GOOGLEBOT_FROM,
            },
            BotProfile {
                user_agent: "AdsBot-Google (+http://www.google.com/adsbot.html)",
                hello: HelloId::GenericCrawler,
                headers: GOOGLEBOT_FROM,
            },
            BotProfile {
                user_agent: "FeedFetcher-Google; (+http://www.google.com/feedfetcher.html)",
                hello: HelloId::GenericCrawler,
                headers: &[
                    ("accept", "application/atom+xml,application/rss+xml,application/xml;q=0.9,*/*;q=0.8"),
                    ("accept-encoding", "gzip, deflate"),
                ],
            },
        ],
    );
    categories.insert(
        GOOGLE_EXTENDED,
        vec![BotProfile {
            user_agent: "Google-Extended",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );

    categories.insert(
        BING,
        vec![
            BotProfile {
                user_agent: "Mozilla/5.0 (compatible; Bingbot/2.0; +http://www.bing.com/bingbot.htm)",
                hello: HelloId::GenericCrawler,
                headers: &[
                    ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
                    ("accept-encoding", "gzip, deflate"),
                    ("accept-language", "en-US,en;q=0.9"),
                ],
            },
            BotProfile {
                user_agent: "Mozilla/5.0 (compatible; Bingbot/2.0; +http://www.bing.com/bingbot.htm)",
                hello: HelloId::Edge106,
                headers: &[
                    ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7"),
                    ("accept-encoding", "gzip, deflate, br"),
                    ("accept-language", "en-US,en;q=0.9"),
                    ("upgrade-insecure-requests", "1"),
                    ("sec-fetch-site", "none"),
                    ("sec-fetch-mode", "navigate"),
                    ("sec-fetch-user", "?1"),
                    ("sec-fetch-dest", "document"),
                    ("sec-ch-ua", "\"Microsoft Edge\";v=\"106\", \"Chromium\";v=\"106\", \"Not;A=Brand\";v=\"99\""),
                    ("sec-ch-ua-mobile", "?0"),
                    ("sec-ch-ua-platform", "\"Linux\""),
                ],
            },
            BotProfile {
                user_agent: "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/534+ (KHTML, like Gecko) BingPreview/1.0b",
                hello: HelloId::Edge106,
                headers: &[
                    ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8"),
                    ("accept-encoding", "gzip, deflate, br"),
                    ("accept-language", "en-US,en;q=0.9"),
                    ("upgrade-insecure-requests", "1"),
                    ("sec-fetch-site", "none"),
                    ("sec-fetch-mode", "navigate"),
                    ("sec-fetch-user", "?1"),
                    ("sec-fetch-dest", "document"),
                    ("sec-ch-ua", "\"Microsoft Edge\";v=\"106\", \"Chromium\";v=\"106\", \"Not;A=Brand\";v=\"99\""),
                    ("sec-ch-ua-mobile", "?0"),
                    ("sec-ch-ua-platform", "\"Windows\""),
                ],
            },
        ],
    );

    categories.insert(
        DUCK_DUCK_GO,
        vec![BotProfile {
            user_agent: "Mozilla/5.0 (compatible; DuckDuckBot/1.0; +http://duckduckgo.com/duckduckbot.html)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        BAIDU,
        vec![BotProfile {
            user_agent: "Mozilla/5.0 (compatible; Baiduspider/2.0; +http://www.baidu.com/search/spider.html)",
            hello: HelloId::GenericCrawler,
            headers: &[
                ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
                ("accept-encoding", "gzip, deflate"),
                ("accept-language", "zh-CN,zh;q=0.8,en;q=0.6"),
            ],
        }],
    );
    categories.insert(
        YANDEX,
        vec![
            BotProfile {
                user_agent: "Mozilla/5.0 (compatible; YandexBot/3.0; +http://yandex.com/bots)",
                hello: HelloId::GenericCrawler,
                headers: BASE_BOT_HEADERS,
            },
            BotProfile {
                user_agent: "Mozilla/5.0 (compatible; YandexImages/3.0; +http://yandex.com/bots)",
                hello: HelloId::GenericCrawler,
                headers: &[
                    ("accept", "image/*,*/*;q=0.8"),
                    ("accept-encoding", "gzip, deflate"),
                ],
            },
        ],
    );
    categories.insert(
        YAHOO,
        vec![BotProfile {
            user_agent: "Mozilla/5.0 (compatible; Yahoo! Slurp; http://help.yahoo.com/help/us/ysearch/slurp)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        SOGOU,
        vec![BotProfile {
            user_agent: "Sogou web spider/4.0(+http://www.sogou.com/docs/help/webmasters.htm#07)",
            hello: HelloId::GenericCrawler,
            headers: &[
                ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
                ("accept-encoding", "gzip, deflate"),
                ("accept-language", "zh-CN,zh;q=0.8"),
            ],
        }],
    );

    categories.insert(
        AHREFS,
        vec![BotProfile {
            user_agent: "Mozilla/5.0 (compatible; AhrefsBot/7.0; +http://ahrefs.com/robot/)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        SEMRUSH,
        vec![BotProfile {
            user_agent: "SemrushBot/7~bl; +http://www.semrush.com/bot.html",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        MAJESTIC,
        vec![BotProfile {
            user_agent: "Mozilla/5.0 (compatible; MJ12bot/v1.4.8; http://mj12bot.com/)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        MOZ,
        vec![BotProfile {
            user_agent: "Mozilla/5.0 (compatible; DotBot/1.1; http://www.opensiteexplorer.org/dotbot, help@moz.com)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );

    categories.insert(
        GPT,
        vec![BotProfile {
            user_agent: "GPTBot/1.0 (+http://openai.com/gptbot)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        CHAT_GPT,
        vec![BotProfile {
            user_agent: "ChatGPT-User",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        CLAUDE,
        vec![BotProfile {
            user_agent: "ClaudeBot/1.0 (+claudebot@anthropic.com)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        COHERE,
        vec![BotProfile {
            user_agent: "cohere-ai/1.0 (+https://cohere.com/bot)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        PERPLEXITY,
        vec![BotProfile {
            user_agent: "PerplexityBot/1.0 (+https://about.perplexity.ai/docs/perplexitybot)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        YOU,
        vec![BotProfile {
            user_agent: "Mozilla/5.0 (compatible; YouBot/1.0; +http://about.you.com/youbot)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        DIFFBOT,
        vec![BotProfile {
            user_agent: "Diffbot/1.0 (+http://www.diffbot.com/our-bot/)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );

    categories.insert(
        FACEBOOK,
        vec![BotProfile {
            user_agent: "facebookexternalhit/1.1 (+http://www.facebook.com/externalhit_uatext.php)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        TWITTER,
        vec![BotProfile {
            user_agent: "Twitterbot/1.0",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        PINTEREST,
        vec![BotProfile {
            user_agent: "Pinterest/0.2 (+http://www.pinterest.com/bot.html)",
            hello: HelloId::GenericCrawler,
            headers: &[
                ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/*;q=0.8,*/*;q=0.7"),
                ("accept-encoding", "gzip, deflate"),
            ],
        }],
    );
    categories.insert(
        LINKED_IN,
        vec![BotProfile {
            user_agent: "LinkedInBot/1.0 (compatible; Mozilla/5.0; Apache-HttpClient +http://www.linkedin.com)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        WHATS_APP,
        vec![BotProfile {
            user_agent: "WhatsApp/2.21.18.17 A",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );

    categories.insert(
        APPLE,
        vec![BotProfile {
            user_agent: "Mozilla/5.0 (compatible; Applebot/1.0; +http://www.apple.com/go/applebot)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        UPTIME_ROBOT,
        vec![BotProfile {
            user_agent: "Mozilla/5.0 (compatible; UptimeRobot/2.0; https://www.uptimerobot.com/)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        PETAL,
        vec![BotProfile {
            user_agent: "Mozilla/5.0 (compatible; PetalBot; +http://aspiegel.com/petalbot)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        BYTESPIDER,
        vec![BotProfile {
            user_agent: "Mozilla/5.0 (compatible; Bytespider; +http://www.bytespider.com/)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );
    categories.insert(
        CC,
        vec![BotProfile {
            user_agent: "CCBot/2.0 (+https://commoncrawl.org/commoncrawl/projects/bots)",
            hello: HelloId::GenericCrawler,
            headers: BASE_BOT_HEADERS,
        }],
    );

    categories
});

static ALL_BOT_PROFILES: Lazy<Vec<BotProfile>> =
    Lazy::new(|| BOT_PROFILES.values().flatten().copied().collect());

/// Profiles registered under one category token.
pub fn profiles_for(category: &str) -> Option<&'static [BotProfile]> {
    BOT_PROFILES.get(category).map(|profiles| profiles.as_slice())
}

/// Every profile across all categories.
pub fn all_profiles() -> &'static [BotProfile] {
    &ALL_BOT_PROFILES
}

/// Registered category tokens, sorted.
pub fn categories() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BOT_PROFILES.keys().copied().collect();
    names.sort_unstable();
    names
}
