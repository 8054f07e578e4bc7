//! Common helpers shared by every command: building the service from
//! command-line options and emitting reports.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    bbref::{HttpPageSource, ShootingDataService},
    core::{resolve_base_url, SourceConfig},
    shots::PlayerShotProfile,
    Result, Season,
};

use super::report::{render_comparison, render_summary, to_json};

/// Parameters shared by the profile-fetching commands.
#[derive(Debug, Clone, Default)]
pub struct FetchParams {
    pub player_names: Vec<String>,
    pub season: Season,
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub offline: bool,
    pub as_json: bool,
    pub output: Option<PathBuf>,
}

/// How text output is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Per-player summaries only.
    Summary,
    /// Per-player summaries followed by a category comparison table.
    Comparison,
}

/// Build a service for `params`, resolving the base URL from flag or env.
pub fn build_service(params: &FetchParams) -> Result<ShootingDataService<HttpPageSource>> {
    let base_url = resolve_base_url(params.base_url.as_deref())?;
    let config = SourceConfig::new(base_url)
        .offline(params.offline)
        .with_user_agent(params.user_agent.clone());
    ShootingDataService::from_config(config)
}

/// Render profiles as text in the given layout.
pub fn render_text(profiles: &[PlayerShotProfile], layout: Layout) -> String {
    let mut out = profiles
        .iter()
        .map(render_summary)
        .collect::<Vec<_>>()
        .join("\n");

    if layout == Layout::Comparison && profiles.len() > 1 {
        out.push('\n');
        out.push_str(&render_comparison(profiles));
    }

    let synthetic = profiles.iter().filter(|p| p.is_synthetic()).count();
    if synthetic > 0 {
        out.push_str(&format!(
            "\nNote: {synthetic} of {} profile(s) use sample data.\n",
            profiles.len()
        ));
    }
    out
}

/// Print reports to stdout and optionally write the JSON form to a file.
pub fn emit(profiles: &[PlayerShotProfile], params: &FetchParams, layout: Layout) -> Result<()> {
    let json = if params.as_json || params.output.is_some() {
        Some(to_json(profiles)?)
    } else {
        None
    };

    match (&json, params.as_json) {
        (Some(json), true) => println!("{json}"), // tarpaulin::skip
        _ => print!("{}", render_text(profiles, layout)), // tarpaulin::skip
    }

    if let (Some(json), Some(path)) = (&json, &params.output) {
        write_json(path, json)?;
        eprintln!("Report saved to {}", path.display()); // tarpaulin::skip
    }
    Ok(())
}

/// Write `contents` to `path`, creating parent directories.
pub fn write_json(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

/// Fetch every requested profile and emit them.
pub async fn run(params: FetchParams, layout: Layout) -> Result<Vec<PlayerShotProfile>> {
    let service = build_service(&params)?;
    let profiles = service
        .fetch_profiles(&params.player_names, params.season)
        .await;
    emit(&profiles, &params, layout)?;
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbref::sample;

    #[test]
    fn test_render_text_comparison_layout() {
        let profiles = vec![
            sample::generate("Stephen Curry", Season::new(2024)),
            sample::generate("Kevin Durant", Season::new(2024)),
        ];

        let text = render_text(&profiles, Layout::Comparison);
        assert!(text.contains("Stephen Curry (2024) Shooting Summary"));
        assert!(text.contains("Kevin Durant (2024) Shooting Summary"));
        assert!(text.contains("Total FG%"));
        assert!(text.contains("Note: 2 of 2 profile(s) use sample data."));
    }

    #[test]
    fn test_render_text_summary_layout_has_no_table() {
        let profiles = vec![sample::generate("Stephen Curry", Season::new(2024))];
        let text = render_text(&profiles, Layout::Summary);
        assert!(!text.contains("Total FG%"));
    }

    #[test]
    fn test_write_json_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        write_json(&path, "[]").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_build_service_offline() {
        let params = FetchParams {
            player_names: vec!["Stephen Curry".to_string()],
            base_url: Some("http://127.0.0.1:1".to_string()),
            offline: true,
            ..Default::default()
        };
        let service = build_service(&params).unwrap();
        assert!(service.config().offline);
        assert_eq!(service.config().base_url.port(), Some(1));
    }

    #[test]
    fn test_build_service_user_agent() {
        let params = FetchParams {
            base_url: Some("http://127.0.0.1:1".to_string()),
            user_agent: Some("shotzone-test/0.1".to_string()),
            ..Default::default()
        };
        let service = build_service(&params).unwrap();
        assert_eq!(
            service.config().user_agent.as_deref(),
            Some("shotzone-test/0.1")
        );
    }

    #[test]
    fn test_build_service_rejects_bad_url() {
        let params = FetchParams {
            base_url: Some("::not a url::".to_string()),
            ..Default::default()
        };
        assert!(build_service(&params).is_err());
    }
}
