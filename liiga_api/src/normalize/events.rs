//! Per-game event collection: goal and penalty events nested under each team
//! side, flattened into one record per event with game context merged in.

use serde_json::Value;

use crate::errors::Error;
use crate::normalize::extract::{extract, extract_record, ColumnSpec};
use crate::record::{split_composite_id, FlatRecord};

/// Configuration for one event endpoint.
#[derive(Clone, Copy)]
pub struct EventSpec {
    pub endpoint: &'static str,
    /// Game-level columns merged into every event record.
    pub game_columns: ColumnSpec,
    pub event_columns: ColumnSpec,
    /// Key holding the event list under each team side
    /// (`goalEvents` or `penaltyEvents`).
    pub event_key: &'static str,
    /// Output column tagging which side the event belongs to.
    pub side_column: &'static str,
    /// Expand the first two entries of `assistantPlayers` into flat columns.
    pub with_assists: bool,
}

/// Collects all events of one game, both sides, in document order.
pub fn collect_events(game: &Value, spec: &EventSpec) -> Result<Vec<FlatRecord>, Error> {
    if !game.is_object() {
        return Err(Error::MalformedResponse {
            endpoint: spec.endpoint,
            detail: "expected a game mapping".to_string(),
        });
    }

    let game_info = extract_record(game, &spec.game_columns);
    let home_team_id = split_composite_id(&extract(game, "homeTeam.teamId"));
    let away_team_id = split_composite_id(&extract(game, "awayTeam.teamId"));

    let mut out = Vec::new();
    for (side_key, side_tag) in [("homeTeam", "home"), ("awayTeam", "away")] {
        let events = game
            .get(side_key)
            .and_then(|side| side.get(spec.event_key))
            .and_then(Value::as_array);
        for event in events.into_iter().flatten() {
            let mut record = extract_record(event, &spec.event_columns);
            if spec.with_assists {
                expand_assists(&mut record, event);
            }
            record.insert("homeTeamId".to_string(), home_team_id.clone());
            record.insert("awayTeamId".to_string(), away_team_id.clone());
            record.insert(spec.side_column.to_string(), Value::from(side_tag));
            for (column, value) in &game_info {
                record.insert(column.clone(), value.clone());
            }
            out.push(record);
        }
    }
    Ok(out)
}

/// Flattens the first two assistants into `assistant1*`/`assistant2*`
/// columns, null when a goal had fewer assists.
fn expand_assists(record: &mut FlatRecord, event: &Value) {
    let assistants = event.get("assistantPlayers").and_then(Value::as_array);
    for (index, prefix) in [(0usize, "assistant1"), (1, "assistant2")] {
        let assistant = assistants.and_then(|list| list.get(index));
        for (field, suffix) in [
            ("playerId", "Id"),
            ("firstName", "FirstName"),
            ("lastName", "LastName"),
        ] {
            let value = assistant
                .map(|player| extract(player, field))
                .unwrap_or(Value::Null);
            record.insert(format!("{prefix}{suffix}"), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static GAME_COLUMNS: ColumnSpec = ColumnSpec::new(&[
        ("id", "gameId"),
        ("homeTeam.teamName", "homeTeam"),
        ("awayTeam.teamName", "awayTeam"),
    ]);
    static GOAL_COLUMNS: ColumnSpec = ColumnSpec::new(&[
        ("scorerPlayerId", "scorerPlayerId"),
        ("period", "period"),
        ("logTime", "logTime"),
    ]);

    fn spec() -> EventSpec {
        EventSpec {
            endpoint: "gameGoalEvents",
            game_columns: GAME_COLUMNS,
            event_columns: GOAL_COLUMNS,
            event_key: "goalEvents",
            side_column: "goalTeamSide",
            with_assists: true,
        }
    }

    fn game() -> Value {
        json!({
            "id": 9,
            "homeTeam": {
                "teamId": "123:Home Team",
                "teamName": "Home Team",
                "goalEvents": [{
                    "scorerPlayerId": 555,
                    "period": 2,
                    "logTime": "18:32:11",
                    "assistantPlayers": [
                        {"playerId": 777, "firstName": "Aku", "lastName": "Assist"}
                    ],
                }],
            },
            "awayTeam": {
                "teamId": "456:Away Team",
                "teamName": "Away Team",
                "goalEvents": [],
            },
        })
    }

    #[test]
    fn merges_game_context_and_tags_the_side() {
        let events = collect_events(&game(), &spec()).unwrap();
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event["gameId"], json!(9));
        assert_eq!(event["homeTeam"], json!("Home Team"));
        assert_eq!(event["goalTeamSide"], json!("home"));
        assert_eq!(event["homeTeamId"], json!("123"));
        assert_eq!(event["awayTeamId"], json!("456"));
    }

    #[test]
    fn missing_assistants_become_null_columns() {
        let events = collect_events(&game(), &spec()).unwrap();
        let event = &events[0];
        assert_eq!(event["assistant1Id"], json!(777));
        assert_eq!(event["assistant1LastName"], json!("Assist"));
        assert_eq!(event["assistant2Id"], Value::Null);
        assert_eq!(event["assistant2FirstName"], Value::Null);
    }

    #[test]
    fn non_mapping_game_is_malformed() {
        let err = collect_events(&json!("nope"), &spec()).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }
}
