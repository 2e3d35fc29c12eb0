use uaforge::bots;
use uaforge::{Generator, H2Settings, HelloId};

#[test]
fn default_pool_draws_from_the_whole_catalogue() {
    let generator = Generator::builder()
        .with_bot_agents(Vec::<String>::new())
        .build();

    let agent = generator.generate().unwrap();
    assert!(!agent.user_agent.is_empty());
    assert!(
        bots::all_profiles()
            .iter()
            .any(|profile| profile.user_agent == agent.user_agent),
        "user agent not in the catalogue: {}",
        agent.user_agent
    );
    assert!(agent.headers.get("accept").is_some());
    assert_eq!(agent.h2_settings, Some(H2Settings::chromium()));
    assert!(agent.tls.as_ref().unwrap().hello_id().is_some());
}

#[test]
fn google_bots_use_expected_hellos() {
    let generator = Generator::builder().with_bot_agents([bots::GOOGLE]).build();

    for _ in 0..10 {
        let agent = generator.generate().unwrap();
        assert!(
            agent.user_agent.contains("Google"),
            "expected a Google crawler, got: {}",
            agent.user_agent
        );
        let hello = agent.tls.as_ref().unwrap().hello_id().unwrap();
        assert!(
            hello == HelloId::GenericCrawler || hello == HelloId::Chrome120,
            "unexpected hello for a Google crawler: {hello}"
        );
        generator.release(agent);
    }
}

#[test]
fn categories_confine_the_pool() {
    let generator = Generator::builder()
        .with_bot_agents([bots::DUCK_DUCK_GO, bots::BAIDU])
        .build();

    let mut saw_ddg = false;
    let mut saw_baidu = false;
    for _ in 0..50 {
        let agent = generator.generate().unwrap();
        let from_ddg = agent.user_agent.contains("DuckDuckBot");
        let from_baidu = agent.user_agent.contains("Baiduspider");
        assert!(
            from_ddg || from_baidu,
            "agent outside the requested categories: {}",
            agent.user_agent
        );
        saw_ddg |= from_ddg;
        saw_baidu |= from_baidu;
        generator.release(agent);
    }
    assert!(saw_ddg && saw_baidu);
}

#[test]
fn accept_toggles_do_not_strip_bot_headers() {
    let generator = Generator::builder()
        .with_bot_agents([bots::GOOGLE])
        .with_accept(false)
        .with_accept_encoding(false)
        .build();

    let agent = generator.generate().unwrap();
    assert!(
        agent.headers.get("accept").is_some(),
        "bot headers ship verbatim regardless of accept toggles"
    );
}

#[test]
fn unknown_categories_are_an_error() {
    let generator = Generator::builder().with_bot_agents(["NonExistentBot"]).build();
    assert!(generator.generate().is_err());
}

#[test]
fn catalogue_exposes_categories_and_profiles() {
    let categories = bots::categories();
    assert!(categories.contains(&bots::GOOGLE));
    assert!(categories.contains(&bots::GPT));
    // categories() returns a sorted list
    let mut sorted = categories.clone();
    sorted.sort_unstable();
    assert_eq!(categories, sorted);

    let google = bots::profiles_for(bots::GOOGLE).unwrap();
    assert!(!google.is_empty());
    assert!(bots::profiles_for("nope").is_none());
}
