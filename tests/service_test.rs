//! End-to-end tests of the HTTP-backed shooting data service

use std::time::Duration;

use shotzone::{
    core::{config::parse_base_url, SourceConfig},
    shots::Zone,
    FallbackReason, Season, ShootingDataService,
};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const SHOOTING_TABLE: &str = r#"
    <table id="shooting">
      <thead><tr><th>Zone</th><th>FGM</th><th>FGA</th><th>FG%</th></tr></thead>
      <tbody>
        <tr><td>Restricted Area</td><td>210</td><td>300</td><td>70.0</td></tr>
        <tr><td>Mid-Range</td><td>60</td><td>150</td><td>40.0</td></tr>
        <tr><td>Above the Break 3</td><td>1,005</td><td>2,500</td><td>40.2</td></tr>
        <tr><td>Free Throws</td><td>270</td><td>300</td><td>90.0</td></tr>
      </tbody>
    </table>
"#;

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(format!("<html><body>{body}</body></html>"))
}

fn service_for(server: &MockServer) -> ShootingDataService<shotzone::bbref::HttpPageSource> {
    let config = SourceConfig::new(parse_base_url(&server.uri()).unwrap())
        .with_timeout(Duration::from_secs(5));
    ShootingDataService::from_config(config).unwrap()
}

#[cfg(test)]
mod scrape_tests {
    use super::*;

    #[tokio::test]
    async fn test_search_then_commented_table() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/search.fcgi"))
            .and(query_param("search", "stephen curry"))
            .respond_with(html(
                r#"<div class="search-item-name">
                     <a href="/players/c/curryst01.html">Stephen Curry</a>
                   </div>"#,
            ))
            .mount(&server)
            .await;

        // The site ships secondary tables inside HTML comments
        Mock::given(method("GET"))
            .and(path("/players/c/curryst01.html"))
            .respond_with(html(&format!(
                "<h1>Stephen Curry</h1><div id=\"all_shooting\"><!--{SHOOTING_TABLE}--></div>"
            )))
            .mount(&server)
            .await;

        let profile = service_for(&server)
            .fetch_profile("stephen curry", Season::new(2024))
            .await;

        assert!(!profile.is_synthetic());
        assert_eq!(profile.fallback_reason(), None);
        assert_eq!(profile.zones().len(), 4);

        let atb3 = profile.get(Zone::AboveTheBreak3).unwrap();
        assert_eq!((atb3.made(), atb3.attempted()), (1005, 2500));
        assert_eq!(atb3.percentage(), 40.2);

        let stats = shotzone::aggregate(&profile);
        assert_eq!(stats.two_pt.made, 270);
        assert_eq!(stats.total.attempted, 2950);
        assert_eq!(stats.ft.percentage, 90.0);
    }

    #[tokio::test]
    async fn test_search_redirect_to_player_page() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/search.fcgi"))
            .respond_with(
                ResponseTemplate::new(302).insert_header("location", "/players/d/duranke01.html"),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/players/d/duranke01.html"))
            .respond_with(html(&format!("<h1>Kevin Durant</h1>{SHOOTING_TABLE}")))
            .mount(&server)
            .await;

        let profile = service_for(&server)
            .fetch_profile("Durant", Season::new(2024))
            .await;

        assert!(!profile.is_synthetic());
        assert_eq!(profile.player_name(), "Durant");
        assert_eq!(profile.get(Zone::RestrictedArea).unwrap().made(), 210);
    }

    #[tokio::test]
    async fn test_follows_season_shooting_link() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/search.fcgi"))
            .respond_with(html(
                r#"<a href="/players/e/embiijo01.html">Joel Embiid</a>"#,
            ))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/players/e/embiijo01.html"))
            .respond_with(html(
                r#"<a href="/players/e/embiijo01/shooting/2023.html">2023 Shooting</a>
                   <a href="/players/e/embiijo01/shooting/2024.html">2024 Shooting</a>"#,
            ))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/players/e/embiijo01/shooting/2024.html"))
            .respond_with(html(SHOOTING_TABLE))
            .expect(1)
            .mount(&server)
            .await;

        let profile = service_for(&server)
            .fetch_profile("Embiid", Season::new(2024))
            .await;

        assert!(!profile.is_synthetic());
        assert_eq!(profile.season(), Season::new(2024));
        assert_eq!(profile.zones().len(), 4);
    }
}

#[cfg(test)]
mod fallback_tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_player_falls_back() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/search.fcgi"))
            .respond_with(html("<p>No results</p>"))
            .mount(&server)
            .await;

        let profile = service_for(&server)
            .fetch_profile("Nobody Atall", Season::new(2024))
            .await;

        assert!(profile.is_synthetic());
        assert_eq!(profile.fallback_reason(), Some(FallbackReason::NotFound));
        assert_eq!(profile.zones().len(), 7);
    }

    #[tokio::test]
    async fn test_server_error_falls_back() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let profile = service_for(&server)
            .fetch_profile("Stephen Curry", Season::new(2024))
            .await;

        assert!(profile.is_synthetic());
        assert_eq!(profile.fallback_reason(), Some(FallbackReason::FetchFailure));
        let ra = profile.get(Zone::RestrictedArea).unwrap();
        assert_eq!((ra.made(), ra.attempted(), ra.percentage()), (45, 60, 75.0));
    }

    #[tokio::test]
    async fn test_page_without_table_falls_back() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/search.fcgi"))
            .respond_with(html(
                r#"<a href="/players/a/antetgi01.html">Giannis Antetokounmpo</a>"#,
            ))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/players/a/antetgi01.html"))
            .respond_with(html("<h1>Giannis Antetokounmpo</h1><table id=\"per_game\"></table>"))
            .mount(&server)
            .await;

        let profile = service_for(&server)
            .fetch_profile("Giannis", Season::new(2024))
            .await;

        assert!(profile.is_synthetic());
        assert_eq!(profile.fallback_reason(), Some(FallbackReason::ParseFailure));
        assert_eq!(profile.get(Zone::FreeThrows).unwrap().attempted(), 450);
    }

    #[tokio::test]
    async fn test_network_failure_gives_lebron_sample() {
        let config = SourceConfig::new(parse_base_url("http://127.0.0.1:1").unwrap())
            .with_timeout(Duration::from_secs(2));
        let service = ShootingDataService::from_config(config).unwrap();

        let profile = service
            .fetch_profile("LeBron James", Season::new(2024))
            .await;

        assert!(profile.is_synthetic());
        assert_eq!(profile.fallback_reason(), Some(FallbackReason::FetchFailure));
        let ra = profile.get(Zone::RestrictedArea).unwrap();
        assert_eq!((ra.made(), ra.attempted()), (180, 250));
        assert_eq!(ra.percentage(), 72.0);
    }
}
