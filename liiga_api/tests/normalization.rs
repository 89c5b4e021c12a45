//! Fixture-driven checks of the pure normalization layer, no HTTP involved.

use liiga_api::endpoints::{self, games, players, teams, NormalizeOptions};
use serde_json::{json, Value};

fn load_fixture(name: &str) -> Value {
    let body = std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap();
    serde_json::from_str(&body).unwrap()
}

fn flat(spec: &endpoints::EndpointSpec, raw: &Value) -> Vec<liiga_api::FlatRecord> {
    endpoints::normalize(spec, raw, &NormalizeOptions::new())
        .unwrap()
        .into_flat()
        .unwrap()
}

#[test]
fn game_results_extracts_the_declared_columns() {
    let raw = load_fixture("games.json");
    let records = flat(&games::GAME_RESULTS, &raw);

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["gameId"], json!(10001));
    assert_eq!(record["homeTeamId"], json!("tappara"));
    assert_eq!(record["homeGoals"], json!(3));
    assert_eq!(record["awayGoals"], json!(2));
    assert_eq!(record["iceRinkName"], json!("Nokia Arena"));
    // Declared columns absent from the response resolve to null, not errors.
    assert_eq!(record["buyTicketsUrl"], Value::Null);
    // Undeclared response fields never leak into the output.
    assert!(record.get("homeTeam").is_none());
}

#[test]
fn season_goal_events_merge_game_context() {
    let raw = load_fixture("games.json");
    let events = flat(&games::SEASON_GOAL_EVENTS, &raw);

    assert_eq!(events.len(), 2);
    let home_goal = &events[0];
    assert_eq!(home_goal["goalTeamSide"], json!("home"));
    assert_eq!(home_goal["gameId"], json!(10001));
    assert_eq!(home_goal["homeTeam"], json!("Tappara"));
    assert_eq!(home_goal["assistant1LastName"], json!("Syöttäjä"));
    assert_eq!(home_goal["assistant2Id"], Value::Null);

    let away_goal = &events[1];
    assert_eq!(away_goal["goalTeamSide"], json!("away"));
    assert_eq!(away_goal["scorerPlayerId"], json!(50277301));
}

#[test]
fn game_goal_and_penalty_events_read_under_the_game_key() {
    let raw = load_fixture("game.json");

    let goals = flat(&games::GAME_GOAL_EVENTS, &raw);
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0]["assistant2LastName"], json!("Toinen"));
    assert_eq!(goals[0]["homeTeamId"], json!("tappara"));

    let penalties = flat(&games::GAME_PENALTY_EVENTS, &raw);
    assert_eq!(penalties.len(), 1);
    assert_eq!(penalties[0]["penaltyTeamSide"], json!("home"));
    assert_eq!(penalties[0]["penaltyMinutes"], json!(2));
    assert_eq!(penalties[0]["penaltyFaultType"], json!("TRIPPING"));
}

#[test]
fn game_referees_awards_and_players_pass_through() {
    let raw = load_fixture("game.json");

    let referees = flat(&games::GAME_REFEREES, &raw);
    assert_eq!(referees.len(), 2);
    assert_eq!(referees[0]["roleAbbrv"], json!("PT"));

    let awards = flat(&games::GAME_AWARDS, &raw);
    assert_eq!(awards.len(), 2);
    assert_eq!(awards[0]["teamId"], json!("tappara"));
    assert_eq!(awards[1]["teamId"], json!("ilves"));

    let rosters = flat(&games::GAME_PLAYERS, &raw);
    // Home players first, then away players.
    assert_eq!(rosters.len(), 2);
    assert_eq!(rosters[0]["teamId"], json!("tappara"));
    assert_eq!(rosters[1]["teamId"], json!("ilves"));
}

#[test]
fn skater_stats_sum_across_periods() {
    let raw = load_fixture("game_stats.json");
    let summed = flat(&games::SKATER_GAME_STATS, &raw);

    let skater = summed
        .iter()
        .find(|r| r["playerId"] == json!(40311015))
        .unwrap();
    assert_eq!(skater["goals"], json!(1));
    assert_eq!(skater["shots"], json!(5));
    assert_eq!(skater["timeofice"], json!(800));
    assert_eq!(skater["period"], json!(2));
    // Puck-possession distance takes precedence over the player distance
    // during the per-period merge; floats keep fractional precision.
    assert_eq!(skater["distance"], json!(5120.4 + 4980.1));
    assert_eq!(skater["homeTeamControlDuration"], json!(540 + 500));
    // Per-period team context merges in, composite id split.
    assert_eq!(skater["teamId"], json!("tappara"));
    assert_eq!(skater["teamSide"], json!("home"));
}

#[test]
fn skater_stats_by_period_keep_period_buckets() {
    let raw = load_fixture("game_stats.json");
    let by_period = endpoints::normalize(
        &games::SKATER_GAME_STATS,
        &raw,
        &NormalizeOptions::new().with_summed(false),
    )
    .unwrap()
    .into_by_period()
    .unwrap();

    assert_eq!(by_period.len(), 2);
    // Period 1 has a skater on both sides, period 2 only at home.
    assert_eq!(by_period[0].len(), 2);
    assert_eq!(by_period[1].len(), 1);
    assert_eq!(by_period[0][0]["homeTeamControlDuration"], json!(540));
    assert_eq!(by_period[1][0]["homeTeamControlDuration"], json!(500));
}

#[test]
fn player_profile_extracts_nested_birth_and_nationality() {
    let raw = load_fixture("player_info.json");
    let records = flat(&players::PLAYER_PROFILE, &raw);

    assert_eq!(records.len(), 1);
    let profile = &records[0];
    assert_eq!(profile["birthCountry"], json!("Finland"));
    assert_eq!(profile["birthCountryCode"], json!("FI"));
    assert_eq!(profile["birthLocality"], json!("Tampere"));
    assert_eq!(profile["nationalityCode"], json!("FI"));
    assert_eq!(profile["lastName"], json!("Maalintekijä"));
}

#[test]
fn player_teams_yield_one_row_per_season_stint() {
    let raw = load_fixture("player_info.json");
    let stints = flat(&players::PLAYER_TEAMS, &raw);

    assert_eq!(stints.len(), 2);
    for stint in &stints {
        assert!(stint.contains_key("season"));
        assert!(stint.contains_key("teamId"));
        assert!(stint.contains_key("jersey"));
    }
}

#[test]
fn player_season_stats_tag_and_sort_all_categories() {
    let raw = load_fixture("player_info.json");
    let rows = flat(&players::PLAYER_SEASON_STATS, &raw);

    let keys: Vec<(i64, &str)> = rows
        .iter()
        .map(|r| (r["season"].as_i64().unwrap(), r["gametype"].as_str().unwrap()))
        .collect();
    assert_eq!(
        keys,
        vec![(2025, "regular"), (2025, "playoffs"), (2024, "regular")]
    );
}

#[test]
fn player_season_stats_single_category_is_unsorted_but_tagged() {
    let raw = load_fixture("player_info.json");
    let rows = endpoints::normalize(
        &players::PLAYER_SEASON_STATS,
        &raw,
        &NormalizeOptions::new().with_category("playoffs"),
    )
    .unwrap()
    .into_flat()
    .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["gametype"], json!("playoffs"));
    assert_eq!(rows[0]["games"], json!(12));
}

#[test]
fn teams_info_extracts_from_keyed_object() {
    let raw = load_fixture("teams_info.json");
    let records = flat(&teams::TEAMS_INFO, &raw);

    assert_eq!(records.len(), 2);
    for record in &records {
        assert!(record.contains_key("teamId"));
        assert!(record.contains_key("countryCode"));
        assert!(record.contains_key("shortName"));
        // The per-season stats list is not part of the info columns.
        assert!(record.get("teamtournamentstats").is_none());
    }
}

#[test]
fn teams_stats_per_season_hoist_the_nested_rows() {
    let raw = load_fixture("teams_info.json");
    let rows = flat(&teams::TEAMS_STATS_PER_SEASON, &raw);

    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.contains_key("season")));
}

#[test]
fn team_stats_flatten_nested_groups() {
    let raw = load_fixture("team_stats.json");
    let records = flat(&teams::TEAM_STATS, &raw);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["goals_scored"], json!(198));
    assert_eq!(records[0]["goals_against"], json!(134));
    assert_eq!(records[0]["powerplay_goals"], json!(44));
    assert!(records[0].get("goals").is_none());
}

#[test]
fn standings_flatten_the_record_group() {
    let raw = load_fixture("standings.json");
    let records = flat(&teams::STANDINGS, &raw);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["record_overtimeWins"], json!(6));
    assert_eq!(records[1]["ranking"], json!(2));
}

#[test]
fn players_summed_breakdown_reuses_one_raw_value() {
    // Fetch-once reuse: the same raw value normalizes under both options.
    let raw = load_fixture("players_stats.json");

    let summed = flat(&players::PLAYERS_SUMMED_STATS, &raw);
    assert_eq!(summed.len(), 2);

    let split = endpoints::normalize(
        &players::PLAYERS_SUMMED_STATS,
        &raw,
        &NormalizeOptions::new().with_summed(false),
    )
    .unwrap()
    .into_flat()
    .unwrap();
    assert_eq!(split.len(), 3);
    // A null breakdown list keeps the parent record.
    assert!(split.iter().any(|r| r["playerId"] == json!(50277301)));
}

#[test]
fn game_log_concatenates_categories_in_key_order() {
    let raw = load_fixture("player_game_log.json");
    let all = flat(&players::PLAYER_GAME_LOG, &raw);
    assert_eq!(all.len(), 3);

    let playoffs = endpoints::normalize(
        &players::PLAYER_GAME_LOG,
        &raw,
        &NormalizeOptions::new().with_category("playoffs"),
    )
    .unwrap()
    .into_flat()
    .unwrap();
    assert_eq!(playoffs.len(), 1);
    assert_eq!(playoffs[0]["gameId"], json!(20001));
}
