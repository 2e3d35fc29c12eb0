use uaforge::{
    Agent,
    Browser,
    Generator,
    OperatingSystem,
    Platform,
};

fn header_value(agent: &Agent, name: &str) -> String {
    agent
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[test]
fn chrome_matches_requested_version_and_os() {
    let generator = Generator::builder()
        .with_browsers([Browser::Chrome])
        .with_version_range(140, 140)
        .with_operating_systems([OperatingSystem::Windows11])
        .with_platforms([Platform::Desktop])
        .build();

    let agent = generator.generate().unwrap();
    assert!(
        agent.user_agent.contains("Chrome/140.0.7255"),
        "expected Chrome 140 UA, got: {}",
        agent.user_agent
    );
}

#[test]
fn firefox_desktop_renders_gecko_tokens() {
    let generator = Generator::builder()
        .with_browsers([Browser::Firefox])
        .with_version_range(128, 128)
        .with_operating_systems([OperatingSystem::Linux])
        .with_platforms([Platform::Desktop])
        .build();

    let agent = generator.generate().unwrap();
    assert!(
        agent.user_agent.contains("Firefox/128.0") && agent.user_agent.contains("Gecko/"),
        "expected Firefox 128 UA, got: {}",
        agent.user_agent
    );
}

#[test]
fn firefox_mobile_lands_on_android() {
    let generator = Generator::builder()
        .with_browsers([Browser::Firefox])
        .with_version_range(127, 127)
        .with_platforms([Platform::Mobile])
        .build();

    let agent = generator.generate().unwrap();
    assert!(
        agent.user_agent.contains("Firefox/127.0") && agent.user_agent.contains("Android"),
        "expected Firefox mobile UA on Android, got: {}",
        agent.user_agent
    );
    assert!(
        !agent.user_agent.contains("{device_model}"),
        "device model placeholder was not replaced: {}",
        agent.user_agent
    );
}

#[test]
fn safari_mobile_is_an_iphone() {
    let generator = Generator::builder()
        .with_browsers([Browser::Safari])
        .with_platforms([Platform::Mobile])
        .build();

    let agent = generator.generate().unwrap();
    assert!(
        agent.user_agent.contains("iPhone") && agent.user_agent.contains("Mobile/"),
        "expected Safari mobile UA on iPhone, got: {}",
        agent.user_agent
    );
}

#[test]
fn opera_carries_its_brand_suffix() {
    let generator = Generator::builder()
        .with_browsers([Browser::Opera])
        .with_version_range(128, 128)
        .with_operating_systems([OperatingSystem::Mac])
        .with_platforms([Platform::Desktop])
        .build();

    let agent = generator.generate().unwrap();
    assert!(
        agent.user_agent.contains("OPR/128"),
        "expected Opera 128 UA, got: {}",
        agent.user_agent
    );
}

#[test]
fn default_fingerprint_omits_extended_hints() {
    let generator = Generator::builder().with_browsers([Browser::Chrome]).build();
    let agent = generator.generate().unwrap();
    assert_eq!(header_value(&agent, "sec-ch-ua-arch"), "");
}

#[test]
fn full_fingerprint_adds_extended_hints() {
    let generator = Generator::builder()
        .with_browsers([Browser::Chrome])
        .with_full_fingerprint(true)
        .with_operating_systems([OperatingSystem::Windows11])
        .build();

    let agent = generator.generate().unwrap();
    assert_eq!(header_value(&agent, "sec-ch-ua-arch"), "\"x86\"");
    assert!(!header_value(&agent, "sec-ch-ua-full-version-list").is_empty());
    assert_eq!(header_value(&agent, "sec-ch-ua-platform-version"), "\"15.0.0\"");
}

#[test]
fn random_os_varies_the_platform_hint() {
    let generator = Generator::builder()
        .with_browsers([Browser::Chrome])
        .with_operating_systems([OperatingSystem::Random])
        .build();

    let mut platforms = std::collections::HashSet::new();
    for _ in 0..50 {
        let agent = generator.generate().unwrap();
        platforms.insert(header_value(&agent, "sec-ch-ua-platform"));
        generator.release(agent);
    }
    assert!(
        platforms.len() >= 3,
        "expected a variety of OS platforms, got: {platforms:?}"
    );
}

#[test]
fn random_browser_varies_families() {
    let generator = Generator::builder().with_browsers([Browser::Random]).build();

    let mut seen = std::collections::HashSet::new();
    for _ in 0..50 {
        let agent = generator.generate().unwrap();
        let ua = &agent.user_agent;
        if ua.contains("Firefox/") {
            seen.insert("firefox");
        } else if ua.contains("OPR/") {
            seen.insert("opera");
        } else if ua.contains("Edg/") {
            seen.insert("edge");
        } else if ua.contains("Chrome/") {
            seen.insert("chrome");
        } else if ua.contains("Safari/") {
            seen.insert("safari");
        }
        generator.release(agent);
    }
    assert!(
        seen.len() >= 4,
        "expected a variety of browsers, got: {seen:?}"
    );
}

#[test]
fn random_platform_covers_both_mobility_hints() {
    let generator = Generator::builder()
        .with_browsers([Browser::Chrome])
        .with_platforms([Platform::Random])
        .build();

    let mut hints = std::collections::HashSet::new();
    for _ in 0..100 {
        let agent = generator.generate().unwrap();
        hints.insert(header_value(&agent, "sec-ch-ua-mobile"));
        generator.release(agent);
    }
    assert!(
        hints.contains("?0") && hints.contains("?1"),
        "expected both desktop and mobile hints, got: {hints:?}"
    );
}

#[test]
fn accept_header_present_by_default_and_removable() {
    let generator = Generator::new();
    let agent = generator.generate().unwrap();
    assert!(!header_value(&agent, "accept").is_empty());
    generator.release(agent);

    let generator = Generator::builder().with_accept(false).build();
    let agent = generator.generate().unwrap();
    assert_eq!(header_value(&agent, "accept"), "");
}

#[test]
fn accept_encoding_off_by_default_and_enableable() {
    let generator = Generator::new();
    let agent = generator.generate().unwrap();
    assert_eq!(header_value(&agent, "accept-encoding"), "");
    generator.release(agent);

    let generator = Generator::builder().with_accept_encoding(true).build();
    let agent = generator.generate().unwrap();
    let encoding = header_value(&agent, "accept-encoding");
    assert!(encoding.contains("gzip"), "got: {encoding}");
}

#[test]
fn disabled_headers_keep_only_the_transport_identity() {
    let generator = Generator::builder()
        .with_browsers([Browser::Chrome])
        .disable_headers()
        .build();

    let agent = generator.generate().unwrap();
    assert!(!agent.user_agent.is_empty());
    assert!(agent.headers.is_empty());
    assert!(agent.header_order.is_empty());
    assert!(agent.tls.is_some());
    assert!(agent.h2_settings.is_some());
}

#[test]
fn header_order_opens_with_pseudo_headers() {
    let generator = Generator::builder().with_browsers([Browser::Chrome]).build();
    let agent = generator.generate().unwrap();
    assert_eq!(
        &agent.header_order[..4],
        &[":method", ":authority", ":scheme", ":path"]
    );
    // every ordered key past the pseudo block exists in the map
    for key in &agent.header_order[4..] {
        assert!(agent.headers.contains_key(key.as_str()), "missing {key}");
    }
}

#[test]
fn mass_generation_reuses_cleared_records() {
    let generator = Generator::builder()
        .with_operating_systems([OperatingSystem::Random])
        .build();

    for i in 0..1000 {
        let agent = generator.generate().unwrap_or_else(|err| {
            panic!("generation failed on iteration {i}: {err}");
        });
        assert!(agent.user_agent.starts_with("Mozilla/5.0"), "{}", agent.user_agent);
        generator.release(agent);
    }
}
