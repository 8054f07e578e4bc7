//! Profile acquisition: locate, fetch, extract, and fall back to sample data.

use reqwest::Url;
use tracing::{debug, info, warn};

use super::{
    document::{self, SHOOTING_TABLE_ID},
    http::{HttpPageSource, Page, PageSource},
    locator::PlayerLocator,
    sample,
    table::{self, RawTable},
};
use crate::{
    core::SourceConfig,
    error::{FallbackReason, ShotError},
    shots::PlayerShotProfile,
    Result, Season,
};


/// Fetches player shot profiles; every failure ends in a sample profile.
pub struct ShootingDataService<S> {
    source: S,
    config: SourceConfig,
}

impl ShootingDataService<HttpPageSource> {
    /// Service backed by a real HTTP client built from `config`.
    pub fn from_config(config: SourceConfig) -> Result<Self> {
        let source = HttpPageSource::new(&config)?;
        Ok(Self::new(source, config))
    }
}

impl<S: PageSource> ShootingDataService<S> {
    pub fn new(source: S, config: SourceConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Profile for one player and season. Never fails.
    ///
    /// When the source cannot supply data the returned profile comes from
    /// [`sample::generate`], is marked synthetic, and carries the reason.
    pub async fn fetch_profile(&self, player_name: &str, season: Season) -> PlayerShotProfile {
        if self.config.offline {
            debug!(player = player_name, "offline, using sample data");
            return sample::generate(player_name, season)
                .with_fallback_reason(FallbackReason::Offline);
        }

        match self.scrape_profile(player_name, season).await {
            Ok(profile) => profile,
            Err(err) => {
                let reason = FallbackReason::from(&err);
                warn!(
                    player = player_name,
                    %season,
                    %reason,
                    error = %err,
                    "using sample data"
                );
                sample::generate(player_name, season).with_fallback_reason(reason)
            }
        }
    }

    /// Profiles for several players, fetched one after another in input order.
    pub async fn fetch_profiles<N: AsRef<str>>(
        &self,
        player_names: &[N],
        season: Season,
    ) -> Vec<PlayerShotProfile> {
        let mut profiles = Vec::with_capacity(player_names.len());
        for name in player_names {
            profiles.push(self.fetch_profile(name.as_ref(), season).await);
        }
        profiles
    }

    /// The data-source path with typed failures; no fallback.
    pub async fn scrape_profile(
        &self,
        player_name: &str,
        season: Season,
    ) -> Result<PlayerShotProfile> {
        let located = PlayerLocator::new(&self.source, &self.config.base_url)
            .resolve(player_name)
            .await?;

        let url = join(&self.config.base_url, &located.path)?;
        let page = self.source.fetch(&url).await?;

        let table = self.shooting_table(&page, player_name, season).await?;
        let zones = table::extract(&table);
        if zones.is_empty() {
            return Err(ShotError::EmptyTable {
                player: player_name.to_string(),
            });
        }

        info!(
            player = player_name,
            %season,
            zones = zones.len(),
            "shooting data extracted"
        );
        Ok(PlayerShotProfile::scraped(player_name, season, zones))
    }

    /// Table search: the player page first, then its season shooting page.
    async fn shooting_table(
        &self,
        page: &Page,
        player_name: &str,
        season: Season,
    ) -> Result<RawTable> {
        if let Some(table) = document::find_table(&page.body, SHOOTING_TABLE_ID) {
            debug!(player = player_name, "shooting table on player page");
            return Ok(table);
        }

        if let Some(href) = document::shooting_link(&page.body, &season.to_string()) {
            let url = join(&page.url, &href)?;
            debug!(player = player_name, %url, "following season shooting link");
            let sub_page = self.source.fetch(&url).await?;
            if let Some(table) = document::find_table(&sub_page.body, SHOOTING_TABLE_ID) {
                return Ok(table);
            }
        }

        Err(ShotError::MissingTable {
            player: player_name.to_string(),
        })
    }
}

fn join(base: &Url, href: &str) -> Result<Url> {
    base.join(href).map_err(|e| ShotError::Parse {
        context: format!("link {href:?}: {e}"),
    })
}
