//! HTTP client for the Liiga statistics API.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::endpoints::{self, games, players, teams, EndpointSpec, NormalizeOptions, Records};
use crate::errors::Error;
use crate::game_type::GameType;
use crate::record::FlatRecord;
use crate::user_agent::get_user_agent;

/// HTTP client for the Liiga statistics API.
///
/// Sends requests with browser-like headers and a randomized user agent to
/// avoid being blocked. Each request builds a fresh `reqwest::Client` with
/// a 30-second timeout. Fetching and normalization are separate steps:
/// every endpoint method is `fetch_raw` followed by the pure
/// [`endpoints::normalize`], so callers needing both summed and per-period
/// views of the same game can fetch once via [`Client::fetch_raw`] and
/// normalize the value twice.
pub struct Client {
    /// Base URL for the API. Defaults to `https://liiga.fi/api/v2`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production Liiga API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://liiga.fi/api/v2".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
        }
    }

    fn get_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, Error> {
        let mut url =
            Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::RequestFailed
            })?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Fetches one raw JSON response. Exposed so callers can fetch once and
    /// reuse the value across multiple [`endpoints::normalize`] calls.
    pub async fn fetch_raw(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, Error> {
        let url = self.get_url(path, query)?;
        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("content-type", "application/json")
            .header("origin", "https://liiga.fi")
            .header("referer", "https://liiga.fi")
            .header("accept", "application/json, text/plain, */*")
            .header("accept-language", "en-US,en;q=0.9")
            .header("sec-fetch-dest", "empty")
            .header("sec-fetch-mode", "cors")
            .header("sec-fetch-site", "same-site")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<Value>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    async fn get_flat(
        &self,
        spec: &EndpointSpec,
        path: &str,
        query: &[(&str, &str)],
        options: &NormalizeOptions,
    ) -> Result<Vec<FlatRecord>, Error> {
        let raw = self.fetch_raw(path, query).await?;
        flat(endpoints::normalize(spec, &raw, options)?, spec.name)
    }

    async fn get_single(
        &self,
        spec: &EndpointSpec,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<FlatRecord, Error> {
        let records = self
            .get_flat(spec, path, query, &NormalizeOptions::new())
            .await?;
        single(records, spec.name)
    }

    // --- Games ---

    /// Fetches the season schedule with simple results.
    pub async fn schedule(
        &self,
        season: u16,
        game_type: GameType,
    ) -> Result<Vec<FlatRecord>, Error> {
        let season = season.to_string();
        self.get_flat(
            &games::SCHEDULE,
            "/schedule",
            &[("tournament", game_type.tournament()), ("season", &season)],
            &NormalizeOptions::new(),
        )
        .await
    }

    /// Fetches detailed results for every game of a season.
    pub async fn game_results(
        &self,
        season: u16,
        game_type: GameType,
    ) -> Result<Vec<FlatRecord>, Error> {
        let season = season.to_string();
        self.get_flat(
            &games::GAME_RESULTS,
            "/games",
            &[("tournament", game_type.tournament()), ("season", &season)],
            &NormalizeOptions::new(),
        )
        .await
    }

    /// Fetches every goal event of a season, one record per goal.
    pub async fn season_goal_events(
        &self,
        season: u16,
        game_type: GameType,
    ) -> Result<Vec<FlatRecord>, Error> {
        let season = season.to_string();
        self.get_flat(
            &games::SEASON_GOAL_EVENTS,
            "/games",
            &[("tournament", game_type.tournament()), ("season", &season)],
            &NormalizeOptions::new(),
        )
        .await
    }

    /// Fetches the header record of a single game.
    pub async fn game_info(&self, season: u16, game_id: u32) -> Result<FlatRecord, Error> {
        self.get_single(&games::GAME_INFO, &format!("/games/{season}/{game_id}"), &[])
            .await
    }

    /// Fetches the goal events of a single game.
    pub async fn game_goal_events(
        &self,
        season: u16,
        game_id: u32,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.get_flat(
            &games::GAME_GOAL_EVENTS,
            &format!("/games/{season}/{game_id}"),
            &[],
            &NormalizeOptions::new(),
        )
        .await
    }

    /// Fetches the penalty events of a single game.
    pub async fn game_penalty_events(
        &self,
        season: u16,
        game_id: u32,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.get_flat(
            &games::GAME_PENALTY_EVENTS,
            &format!("/games/{season}/{game_id}"),
            &[],
            &NormalizeOptions::new(),
        )
        .await
    }

    /// Fetches the referees of a single game.
    pub async fn game_referees(&self, season: u16, game_id: u32) -> Result<Vec<FlatRecord>, Error> {
        self.get_flat(
            &games::GAME_REFEREES,
            &format!("/games/{season}/{game_id}"),
            &[],
            &NormalizeOptions::new(),
        )
        .await
    }

    /// Fetches the post-game awards of a single game.
    pub async fn game_awards(&self, season: u16, game_id: u32) -> Result<Vec<FlatRecord>, Error> {
        self.get_flat(
            &games::GAME_AWARDS,
            &format!("/games/{season}/{game_id}"),
            &[],
            &NormalizeOptions::new(),
        )
        .await
    }

    /// Fetches both rosters of a single game, home players first.
    pub async fn game_players(&self, season: u16, game_id: u32) -> Result<Vec<FlatRecord>, Error> {
        self.get_flat(
            &games::GAME_PLAYERS,
            &format!("/games/{season}/{game_id}"),
            &[],
            &NormalizeOptions::new(),
        )
        .await
    }

    /// Fetches the shot map of a single game.
    pub async fn game_shot_map(&self, season: u16, game_id: u32) -> Result<Vec<FlatRecord>, Error> {
        self.get_flat(
            &games::GAME_SHOT_MAP,
            &format!("/shotmap/{season}/{game_id}"),
            &[],
            &NormalizeOptions::new(),
        )
        .await
    }

    /// Fetches skater statistics of a single game, summed across periods or
    /// one record sequence per period.
    pub async fn skater_game_stats(
        &self,
        season: u16,
        game_id: u32,
        summed: bool,
    ) -> Result<Records, Error> {
        let raw = self
            .fetch_raw(&format!("/games/stats/{season}/{game_id}"), &[])
            .await?;
        endpoints::normalize(
            &games::SKATER_GAME_STATS,
            &raw,
            &NormalizeOptions::new().with_summed(summed),
        )
    }

    /// Fetches goalie statistics of a single game, summed across periods or
    /// one record sequence per period.
    pub async fn goalie_game_stats(
        &self,
        season: u16,
        game_id: u32,
        summed: bool,
    ) -> Result<Records, Error> {
        let raw = self
            .fetch_raw(&format!("/games/stats/{season}/{game_id}"), &[])
            .await?;
        endpoints::normalize(
            &games::GOALIE_GAME_STATS,
            &raw,
            &NormalizeOptions::new().with_summed(summed),
        )
    }

    // --- Players ---

    /// Fetches the game-by-game log of one player for a season. With no game
    /// type every category is concatenated; with one, only that category is
    /// returned and a response missing it is malformed.
    pub async fn player_game_log(
        &self,
        player_id: u32,
        season: u16,
        game_type: Option<GameType>,
    ) -> Result<Vec<FlatRecord>, Error> {
        let mut options = NormalizeOptions::new();
        if let Some(game_type) = game_type {
            options = options.with_category(game_type.game_log_key());
        }
        self.get_flat(
            &players::PLAYER_GAME_LOG,
            &format!("/players/info/{player_id}/games/{season}"),
            &[],
            &options,
        )
        .await
    }

    /// Fetches the biographical profile of one player.
    pub async fn player_profile(&self, player_id: u32) -> Result<FlatRecord, Error> {
        self.get_single(
            &players::PLAYER_PROFILE,
            &format!("/players/info/{player_id}"),
            &[],
        )
        .await
    }

    /// Fetches the seasons a player has been active in, as raw values.
    pub async fn player_active_seasons(&self, player_id: u32) -> Result<Vec<Value>, Error> {
        let raw = self
            .fetch_raw(&format!("/players/info/{player_id}"), &[])
            .await?;
        raw.get("activeSeasons")
            .and_then(Value::as_array)
            .cloned()
            .ok_or_else(|| Error::MalformedResponse {
                endpoint: "playerActiveSeasons",
                detail: "missing `activeSeasons`".to_string(),
            })
    }

    /// Fetches the teams a player has played for, one record per season stint.
    pub async fn player_teams(&self, player_id: u32) -> Result<Vec<FlatRecord>, Error> {
        self.get_flat(
            &players::PLAYER_TEAMS,
            &format!("/players/info/{player_id}"),
            &[],
            &NormalizeOptions::new(),
        )
        .await
    }

    /// Fetches the historical per-season statistics of one player. With no
    /// game type every category is returned, tagged and sorted newest first.
    pub async fn player_season_stats(
        &self,
        player_id: u32,
        game_type: Option<GameType>,
    ) -> Result<Vec<FlatRecord>, Error> {
        let mut options = NormalizeOptions::new();
        if let Some(game_type) = game_type {
            reject_chl(players::PLAYER_SEASON_STATS.name, game_type)?;
            options = options.with_category(game_type.game_log_key());
        }
        self.get_flat(
            &players::PLAYER_SEASON_STATS,
            &format!("/players/info/{player_id}"),
            &[],
            &options,
        )
        .await
    }

    /// Fetches all-time aggregated statistics for every player. Only regular
    /// season and playoffs are available.
    pub async fn all_players(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
    ) -> Result<Vec<FlatRecord>, Error> {
        if !matches!(game_type, GameType::RegularSeason | GameType::Playoffs) {
            return Err(Error::InvalidOption {
                endpoint: players::ALL_PLAYERS.name,
                detail: format!("game type `{game_type}` is not available, use regularseason or playoff"),
            });
        }
        let path = summed_stats_path(start_season, end_season, game_type);
        self.get_flat(
            &players::ALL_PLAYERS,
            &path,
            &[("team", ""), ("dataType", "all"), ("splitTeams", "true")],
            &NormalizeOptions::new(),
        )
        .await
    }

    async fn players_summed(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
        data_type: &str,
        team_id: Option<u32>,
        summed: bool,
    ) -> Result<Vec<FlatRecord>, Error> {
        reject_chl(players::PLAYERS_SUMMED_STATS.name, game_type)?;
        let path = summed_stats_path(start_season, end_season, game_type);
        let team = team_id.map(|id| id.to_string()).unwrap_or_default();
        self.get_flat(
            &players::PLAYERS_SUMMED_STATS,
            &path,
            &[("team", &team), ("dataType", data_type), ("splitTeams", "true")],
            &NormalizeOptions::new().with_summed(summed),
        )
        .await
    }

    /// Fetches basic statistics for all players across a season range,
    /// optionally filtered to one team. With `summed = false` players who
    /// changed teams split into one record per team.
    pub async fn players_basic_stats(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
        team_id: Option<u32>,
        summed: bool,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.players_summed(start_season, end_season, game_type, "basicStats", team_id, summed)
            .await
    }

    /// Fetches goal statistics for all players across a season range.
    pub async fn players_goals(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
        summed: bool,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.players_summed(start_season, end_season, game_type, "goalStats", None, summed)
            .await
    }

    /// Fetches shot statistics for all players across a season range.
    pub async fn players_shots(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
        summed: bool,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.players_summed(start_season, end_season, game_type, "shotStats", None, summed)
            .await
    }

    /// Fetches pass statistics for all players across a season range.
    pub async fn players_passes(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
        summed: bool,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.players_summed(start_season, end_season, game_type, "passes", None, summed)
            .await
    }

    /// Fetches penalty statistics for all players across a season range.
    pub async fn players_penalties(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
        summed: bool,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.players_summed(start_season, end_season, game_type, "penaltyStats", None, summed)
            .await
    }

    /// Fetches time-on-ice statistics for all players across a season range.
    pub async fn players_game_time(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
        summed: bool,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.players_summed(start_season, end_season, game_type, "gameTimes", None, summed)
            .await
    }

    /// Fetches skating statistics for all players across a season range.
    pub async fn players_skating(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
        summed: bool,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.players_summed(start_season, end_season, game_type, "skatingStats", None, summed)
            .await
    }

    /// Fetches advanced statistics for all players across a season range.
    pub async fn players_advanced(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
        summed: bool,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.players_summed(start_season, end_season, game_type, "advancedStats", None, summed)
            .await
    }

    // --- Teams ---

    /// Fetches static club information for every team.
    pub async fn teams_info(&self) -> Result<Vec<FlatRecord>, Error> {
        self.get_flat(
            &teams::TEAMS_INFO,
            "/teams/info",
            &[],
            &NormalizeOptions::new(),
        )
        .await
    }

    /// Fetches per-season tournament statistics for every team.
    pub async fn teams_stats_per_season(&self) -> Result<Vec<FlatRecord>, Error> {
        self.get_flat(
            &teams::TEAMS_STATS_PER_SEASON,
            "/teams/info",
            &[],
            &NormalizeOptions::new(),
        )
        .await
    }

    /// Fetches rosters across a season range.
    pub async fn teams_rosters(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
    ) -> Result<Vec<FlatRecord>, Error> {
        reject_chl(teams::TEAMS_ROSTERS.name, game_type)?;
        let from = start_season.to_string();
        let to = end_season.to_string();
        self.get_flat(
            &teams::TEAMS_ROSTERS,
            "/players/info",
            &[
                ("tournament", game_type.tournament()),
                ("fromSeason", &from),
                ("toSeason", &to),
                ("team", ""),
            ],
            &NormalizeOptions::new(),
        )
        .await
    }

    async fn team_stats(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
        data_type: &str,
    ) -> Result<Vec<FlatRecord>, Error> {
        reject_chl(teams::TEAM_STATS.name, game_type)?;
        let from = start_season.to_string();
        let to = end_season.to_string();
        self.get_flat(
            &teams::TEAM_STATS,
            "/teams/stats",
            &[
                ("seasonFrom", &from),
                ("seasonTo", &to),
                ("tournament", game_type.tournament()),
                ("dataType", data_type),
            ],
            &NormalizeOptions::new(),
        )
        .await
    }

    /// Fetches team standings across a season range.
    pub async fn team_standings(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.team_stats(start_season, end_season, game_type, "standings")
            .await
    }

    /// Fetches team shot statistics across a season range.
    pub async fn team_shots(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.team_stats(start_season, end_season, game_type, "shots")
            .await
    }

    /// Fetches team pass statistics across a season range.
    pub async fn team_passes(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.team_stats(start_season, end_season, game_type, "passes")
            .await
    }

    /// Fetches team faceoff statistics across a season range.
    pub async fn team_faceoffs(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.team_stats(start_season, end_season, game_type, "faceoffs")
            .await
    }

    /// Fetches team even-strength statistics across a season range.
    pub async fn team_even_strength(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.team_stats(start_season, end_season, game_type, "even_strength")
            .await
    }

    /// Fetches team penalty-kill statistics across a season range.
    pub async fn team_penalty_kill(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.team_stats(start_season, end_season, game_type, "penalty_kill")
            .await
    }

    /// Fetches team power-play statistics across a season range.
    pub async fn team_power_play(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.team_stats(start_season, end_season, game_type, "powerplay")
            .await
    }

    /// Fetches team penalty statistics across a season range.
    pub async fn team_penalties(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.team_stats(start_season, end_season, game_type, "penalties")
            .await
    }

    /// Fetches attendance statistics across a season range.
    pub async fn team_attendance(
        &self,
        start_season: u16,
        end_season: u16,
        game_type: GameType,
    ) -> Result<Vec<FlatRecord>, Error> {
        self.team_stats(start_season, end_season, game_type, "attendance")
            .await
    }

    /// Fetches all-time team standings, from the first league season onward.
    pub async fn teams_all_time(&self, game_type: GameType) -> Result<Vec<FlatRecord>, Error> {
        self.team_stats(1976, 2025, game_type, "standings").await
    }

    /// Fetches the league table for one season.
    pub async fn standings(&self, season: u16) -> Result<Vec<FlatRecord>, Error> {
        let season = season.to_string();
        self.get_flat(
            &teams::STANDINGS,
            "/standings/",
            &[("season", &season)],
            &NormalizeOptions::new(),
        )
        .await
    }
}

fn summed_stats_path(start_season: u16, end_season: u16, game_type: GameType) -> String {
    format!(
        "/players/stats/summed/{start_season}/{end_season}/{}/false",
        game_type.tournament()
    )
}

fn reject_chl(endpoint: &'static str, game_type: GameType) -> Result<(), Error> {
    if game_type == GameType::Chl {
        return Err(Error::InvalidOption {
            endpoint,
            detail: "game type `chl` is not available for this endpoint".to_string(),
        });
    }
    Ok(())
}

fn flat(records: Records, endpoint: &'static str) -> Result<Vec<FlatRecord>, Error> {
    records.into_flat().ok_or_else(|| Error::MalformedResponse {
        endpoint,
        detail: "expected flat records".to_string(),
    })
}

fn single(mut records: Vec<FlatRecord>, endpoint: &'static str) -> Result<FlatRecord, Error> {
    if records.is_empty() {
        return Err(Error::MalformedResponse {
            endpoint,
            detail: "empty response".to_string(),
        });
    }
    Ok(records.remove(0))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
