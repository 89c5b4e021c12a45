//! Player endpoint descriptors: profile lookups, per-season history, and the
//! league-wide summed statistics family.

use crate::endpoints::{EndpointSpec, Expand, ParseMode, Select};
use crate::normalize::ColumnSpec;

/// Game-by-game log of one player, keyed by game-type at the response root.
pub static PLAYER_GAME_LOG: EndpointSpec = EndpointSpec::new(
    "playerGameLog",
    Select::Category {
        root: None,
        tag: None,
    },
    ParseMode::Passthrough,
);

const PROFILE_COLUMNS: ColumnSpec = ColumnSpec::new(&[
    ("birthLocality.country.name", "birthCountry"),
    ("birthLocality.country.code", "birthCountryCode"),
    ("birthLocality.name", "birthLocality"),
    ("dateOfBirth", "dateOfBirth"),
    ("fihaId", "fihaId"),
    ("firstName", "firstName"),
    ("lastName", "lastName"),
    ("handedness", "handedness"),
    ("height", "height"),
    ("isSuspended", "isSuspended"),
    ("isRemoved", "isRemoved"),
    ("nationality.name", "nationality"),
    ("nationality.code", "nationalityCode"),
    ("weight", "weight"),
]);

/// Biographical profile of one player.
pub static PLAYER_PROFILE: EndpointSpec = EndpointSpec::new(
    "playerProfile",
    Select::Response,
    ParseMode::Extract {
        columns: PROFILE_COLUMNS,
    },
);

const TEAMS_PLAYED_FOR_COLUMNS: ColumnSpec = ColumnSpec::new(&[
    ("season", "season"),
    ("teamId", "teamId"),
    ("teamName", "teamName"),
    ("slug", "slug"),
    ("jersey", "jersey"),
    ("position", "position"),
    ("imageUrl", "imageUrl"),
]);

/// One row per season-team stint, from the keyed `teams` object of a player
/// info response.
pub static PLAYER_TEAMS: EndpointSpec = EndpointSpec::new(
    "playerTeams",
    Select::ObjectValues("teams"),
    ParseMode::Extract {
        columns: TEAMS_PLAYED_FOR_COLUMNS,
    },
);

/// Historical per-season statistics of one player, tagged with the game-type
/// each row came from and sorted newest first.
pub static PLAYER_SEASON_STATS: EndpointSpec = EndpointSpec::new(
    "playerSeasonStats",
    Select::Category {
        root: Some("historical"),
        tag: Some("gametype"),
    },
    ParseMode::Passthrough,
)
.with_sort_desc(&["season", "gametype"]);

/// League-wide summed player statistics. With `summed = false` each record
/// splits into its `previousTeamsForTournament` breakdown rows when present.
pub static PLAYERS_SUMMED_STATS: EndpointSpec = EndpointSpec::new(
    "playersSummedStats",
    Select::Response,
    ParseMode::Passthrough,
)
.with_expand(Expand {
    key: "previousTeamsForTournament",
    keep_record_if_missing: true,
    only_when_not_summed: true,
});

/// All-time aggregated statistics for every player, always summed.
pub static ALL_PLAYERS: EndpointSpec =
    EndpointSpec::new("allPlayers", Select::Response, ParseMode::Passthrough);
