//! End-to-end tests of the analyze flow against a mocked API.

use profile_rank::analyzer::ProfileAnalyzer;
use profile_rank::facts::{FetchError, MemoryCache};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn make_analyzer(server: &MockServer) -> ProfileAnalyzer {
    ProfileAnalyzer::with_base_url(None, server.uri(), MemoryCache::default()).expect("analyzer should build")
}

/// Mount the full endpoint set for a small but realistic profile.
async fn mount_profile(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "octocat",
            "name": "The Octocat",
            "avatar_url": "https://example.invalid/avatar.png",
            "bio": "Mascot",
            "location": "San Francisco",
            "created_at": "2015-04-01T10:00:00Z",
            "followers": 140,
            "following": 7,
            "public_repos": 2,
            "public_gists": 0,
            "html_url": "https://github.com/octocat"
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": "engine",
                "description": "The engine",
                "stargazers_count": 50,
                "forks_count": 10,
                "language": "Rust",
                "created_at": "2020-05-01T00:00:00Z",
                "html_url": "https://github.com/octocat/engine"
            },
            {
                "name": "scripts",
                "description": null,
                "stargazers_count": 4,
                "forks_count": 0,
                "language": "Python",
                "created_at": "2021-09-01T00:00:00Z",
                "html_url": "https://github.com/octocat/scripts"
            }
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"login": "acme"}])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/events/public"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"type": "PushEvent", "created_at": "2024-01-15T09:30:00Z"},
            {"type": "PushEvent", "created_at": "2024-01-16T09:10:00Z"},
            {"type": "PushEvent", "created_at": "2024-01-20T21:00:00Z"},
            {"type": "PullRequestEvent", "created_at": "2024-01-17T11:00:00Z"}
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/events/public"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/engine/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Rust": 9000, "Shell": 500})))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/scripts/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Python": 500})))
        .mount(server)
        .await;
}

#[tokio::test]
async fn analyze_by_handle_produces_the_full_analysis() {
    let server = MockServer::start().await;
    mount_profile(&server).await;

    let analyzer = make_analyzer(&server);
    let analysis = analyzer.analyze("octocat").await.unwrap();

    assert_eq!(analysis.username, "octocat");
    assert_eq!(analysis.name.as_deref(), Some("The Octocat"));
    assert_eq!(analysis.total_stars, 54);
    assert_eq!(analysis.total_forks, 10);

    // 9000 Rust + 500 Shell + 500 Python = 10000 bytes.
    assert_eq!(analysis.primary_language.as_deref(), Some("Rust"));
    assert_eq!(analysis.languages[0].percentage, 90.0);
    let percent_sum: f64 = analysis.languages.iter().map(|l| l.percentage).sum();
    assert!((percent_sum - 100.0).abs() < 0.5);

    // Two morning pushes to one evening push.
    assert_eq!(analysis.activity.most_active_hour, 9);
    assert!(analysis.summary.contains("(morning coder)"));

    assert_eq!(analysis.collaboration.followers, 140);
    assert_eq!(analysis.collaboration.follower_ratio, 20.0);
    assert_eq!(analysis.collaboration.organizations, vec!["acme".to_string()]);

    let years: Vec<i32> = analysis.growth_timeline.iter().map(|y| y.year).collect();
    assert_eq!(years, vec![2020, 2021]);

    assert!(analysis.overall_score > 0.0);
    assert!(analysis.overall_score <= 100.0);
    assert!(analysis.focus_areas.contains(&"Systems Programming".to_string()));

    assert_eq!(analysis.top_repos[0].name, "engine");
}

#[tokio::test]
async fn analyze_twice_within_ttl_is_idempotent() {
    let server = MockServer::start().await;
    mount_profile(&server).await;

    let analyzer = make_analyzer(&server);
    let first = analyzer.analyze("octocat").await.unwrap();
    let second = analyzer.analyze("octocat").await.unwrap();

    assert_eq!(first, second);

    let stats = analyzer.cache_stats();
    assert!(stats.total_entries >= 5);
    assert!(stats.valid_entries <= stats.total_entries);
}

#[tokio::test]
async fn analyze_resolves_profile_urls() {
    let server = MockServer::start().await;
    mount_profile(&server).await;

    let analyzer = make_analyzer(&server);
    let analysis = analyzer.analyze("https://github.com/octocat").await.unwrap();
    assert_eq!(analysis.username, "octocat");
}

#[tokio::test]
async fn analyze_resolves_emails_via_search() {
    let server = MockServer::start().await;
    mount_profile(&server).await;

    Mock::given(method("GET"))
        .and(path("/search/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 1,
            "items": [{"login": "octocat"}]
        })))
        .mount(&server)
        .await;

    let analyzer = make_analyzer(&server);
    let analysis = analyzer.analyze("octo@example.com").await.unwrap();
    assert_eq!(analysis.username, "octocat");
}

#[tokio::test]
async fn analyze_unmatched_email_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 0,
            "items": []
        })))
        .mount(&server)
        .await;

    let analyzer = make_analyzer(&server);
    let err = analyzer.analyze("ghost@example.com").await.unwrap_err();

    match err {
        FetchError::NotFound(message) => assert!(message.contains("ghost@example.com"), "{message}"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn analyze_unknown_handle_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/nobody"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let analyzer = make_analyzer(&server);
    let err = analyzer.analyze("nobody").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn clear_cache_resets_the_stats() {
    let server = MockServer::start().await;
    mount_profile(&server).await;

    let analyzer = make_analyzer(&server);
    let _ = analyzer.analyze("octocat").await.unwrap();
    assert!(analyzer.cache_stats().total_entries > 0);

    analyzer.clear_cache();
    assert_eq!(analyzer.cache_stats().total_entries, 0);
}
