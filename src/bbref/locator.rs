//! Player search: resolve a free-text name to a player page path.

use reqwest::Url;
use tracing::{debug, info};

use super::{
    document::{self, Link},
    http::{Page, PageSource},
};
use crate::{error::ShotError, Result};

/// Search endpoint, relative to the site root.
pub const SEARCH_PATH: &str = "/search/search.fcgi";

/// A resolved player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerMatch {
    pub display_name: String,
    /// Player page path, e.g. `/players/c/curryst01.html`.
    pub path: String,
    /// Other candidates that also matched the query.
    pub alternatives: usize,
}

/// A player link from the search results. `rank` is its document position;
/// lower wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub rank: usize,
    pub display_name: String,
    pub path: String,
}

/// The path of a player page link, if `href` is one.
///
/// Player pages live under `/players/<letter>/...`; absolute URLs are accepted.
pub fn player_path(href: &str) -> Option<&str> {
    let path = match href.split_once("://") {
        Some((_, rest)) => &rest[rest.find('/')?..],
        None => href,
    };
    let rest = path.strip_prefix("/players/")?;
    let bytes = rest.as_bytes();
    let is_player = bytes.len() > 2 && bytes[0].is_ascii_lowercase() && bytes[1] == b'/';
    is_player.then_some(path)
}

/// Player links in the order they appear.
pub fn candidates(links: &[Link]) -> Vec<Candidate> {
    links
        .iter()
        .filter_map(|link| {
            let path = player_path(&link.href)?;
            Some((link.text.clone(), path.to_string()))
        })
        .enumerate()
        .map(|(rank, (display_name, path))| Candidate {
            rank,
            display_name,
            path,
        })
        .collect()
}

/// Pick the best-ranked candidate whose name contains `query`
/// (case-insensitive). Returns it with the number of other matches.
pub fn select_candidate<'a>(
    candidates: &'a [Candidate],
    query: &str,
) -> Option<(&'a Candidate, usize)> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let mut matched: Vec<&Candidate> = candidates
        .iter()
        .filter(|c| c.display_name.to_lowercase().contains(&needle))
        .collect();
    matched.sort_by_key(|c| c.rank);

    let best = *matched.first()?;
    Some((best, matched.len() - 1))
}

/// Build the search URL for `query`.
pub fn search_url(base_url: &Url, query: &str) -> Result<Url> {
    let mut url = base_url
        .join(SEARCH_PATH)
        .map_err(|e| ShotError::Parse {
            context: format!("search URL: {e}"),
        })?;
    url.query_pairs_mut().append_pair("search", query.trim());
    Ok(url)
}

/// Resolves player names against the search endpoint of a [`PageSource`].
pub struct PlayerLocator<'a, S> {
    source: &'a S,
    base_url: &'a Url,
}

impl<'a, S: PageSource> PlayerLocator<'a, S> {
    pub fn new(source: &'a S, base_url: &'a Url) -> Self {
        Self { source, base_url }
    }

    /// Resolve `query` to a player page.
    ///
    /// # Errors
    ///
    /// - [`ShotError::PlayerNotFound`] when the query is blank or no result matches
    /// - fetch errors from the page source when the search itself fails
    pub async fn resolve(&self, query: &str) -> Result<PlayerMatch> {
        let not_found = || ShotError::PlayerNotFound {
            name: query.to_string(),
        };
        if query.trim().is_empty() {
            return Err(not_found());
        }

        let url = search_url(self.base_url, query)?;
        let page = self.source.fetch(&url).await?;

        if let Some(found) = direct_hit(&page, query) {
            info!(player = %found.display_name, path = %found.path, "search redirected to player page");
            return Ok(found);
        }

        let candidates = candidates(&document::links(&page.body));
        debug!(query, count = candidates.len(), "search candidates");

        let (best, alternatives) = select_candidate(&candidates, query).ok_or_else(not_found)?;
        if alternatives > 0 {
            info!(
                query,
                player = %best.display_name,
                alternatives,
                "ambiguous search, taking the first listed match"
            );
        } else {
            info!(query, player = %best.display_name, "player resolved");
        }

        Ok(PlayerMatch {
            display_name: best.display_name.clone(),
            path: best.path.clone(),
            alternatives,
        })
    }
}

/// The site answers unique searches by redirecting to the player page.
fn direct_hit(page: &Page, query: &str) -> Option<PlayerMatch> {
    let path = player_path(page.url.path())?;
    Some(PlayerMatch {
        display_name: document::heading(&page.body).unwrap_or_else(|| query.trim().to_string()),
        path: path.to_string(),
        alternatives: 0,
    })
}
