//! Team endpoint descriptors.

use crate::endpoints::{EndpointSpec, Expand, ParseMode, Select};
use crate::normalize::ColumnSpec;

const TEAMS_INFO_COLUMNS: ColumnSpec = ColumnSpec::new(&[
    ("id", "teamId"),
    ("name", "teamName"),
    ("contact_info", "contactInfo"),
    ("country.code", "countryCode"),
    ("country.name", "countryName"),
    ("current_venue_capacity", "currentVenueCapacity"),
    ("general_info", "generalInfo"),
    ("url", "url"),
    ("locality", "locality"),
    ("logo", "logo"),
    ("short_name", "shortName"),
    ("slug", "slug"),
]);

/// Static club information, one record per team from the keyed `teams` object.
pub static TEAMS_INFO: EndpointSpec = EndpointSpec::new(
    "teamsInfo",
    Select::ObjectValues("teams"),
    ParseMode::Extract {
        columns: TEAMS_INFO_COLUMNS,
    },
);

/// Per-season tournament statistics of every team, hoisted out of each team's
/// `teamtournamentstats` list.
pub static TEAMS_STATS_PER_SEASON: EndpointSpec = EndpointSpec::new(
    "teamsStatsPerSeason",
    Select::ObjectValues("teams"),
    ParseMode::Passthrough,
)
.with_expand(Expand {
    key: "teamtournamentstats",
    keep_record_if_missing: false,
    only_when_not_summed: false,
});

/// Roster listing across a season range, already flat in the response.
pub static TEAMS_ROSTERS: EndpointSpec =
    EndpointSpec::new("teamsRosters", Select::Response, ParseMode::Passthrough);

/// Shared shape of the `teams/stats` data types (standings, shots, passes,
/// faceoffs, special teams, penalties, attendance, all-time).
pub static TEAM_STATS: EndpointSpec = EndpointSpec::new(
    "teamStats",
    Select::Path("teamStats"),
    ParseMode::Flatten {
        skip_keys: &[],
        renames: &[],
    },
);

/// League table for one season.
pub static STANDINGS: EndpointSpec = EndpointSpec::new(
    "standings",
    Select::Path("season"),
    ParseMode::Flatten {
        skip_keys: &[],
        renames: &[],
    },
);
