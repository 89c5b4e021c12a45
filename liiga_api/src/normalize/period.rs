//! Period-by-period player statistics and summation across periods.
//!
//! Game-stat responses carry one entry per period per team side, each with
//! team-level context and a list of player stat mappings. This module buckets
//! those player records by period number and, in summed mode, merges the
//! buckets into one record per player for the whole contest.

use std::collections::{btree_map::Entry, BTreeMap};

use serde_json::Value;

use crate::errors::Error;
use crate::normalize::extract::{extract_record, ColumnSpec};
use crate::record::{add_numeric, split_id_field, FlatRecord};

/// Identity fields that are never merged when summing across periods.
const IDENTITY_FIELDS: &[&str] = &["playerId", "jerseyId", "teamId"];

/// Team sides of a contest, with the tag written into every player record.
const SIDES: &[(&str, &str)] = &[("homeTeam", "home"), ("awayTeam", "away")];

/// Configuration for one game-stat endpoint.
///
/// The key holding the per-period player entries differs between skaters and
/// goalies; the column specs drive all field extraction. This is configuration,
/// not a branch in the aggregation algorithm.
#[derive(Clone, Copy)]
pub struct PeriodStatsSpec {
    pub endpoint: &'static str,
    /// `periodPlayerStats` for skaters, `goaliePeriodStats` for goalies.
    pub player_key: &'static str,
    pub player_columns: ColumnSpec,
    /// Team-level context merged into every player record of the period.
    pub team_columns: ColumnSpec,
    /// Puck-possession stats, indexed by period position within each side.
    pub puck_columns: ColumnSpec,
}

/// Buckets every player record by period number.
///
/// Produces one inner sequence per period number present in the response,
/// ascending, each holding all player records for that period from both
/// sides. Periods without player records are omitted, not emitted empty.
pub fn aggregate_by_period(
    raw: &Value,
    spec: &PeriodStatsSpec,
) -> Result<Vec<Vec<FlatRecord>>, Error> {
    let response = raw.as_object().ok_or_else(|| Error::MalformedResponse {
        endpoint: spec.endpoint,
        detail: "expected a mapping at the top level".to_string(),
    })?;

    let puck_stats: Vec<FlatRecord> = response
        .get("puckStats")
        .and_then(Value::as_array)
        .map(|periods| {
            periods
                .iter()
                .map(|period| extract_record(period, &spec.puck_columns))
                .collect()
        })
        .unwrap_or_default();

    let mut buckets: BTreeMap<i64, Vec<FlatRecord>> = BTreeMap::new();

    for (side_key, side_tag) in SIDES {
        let periods = response.get(*side_key).and_then(Value::as_array);
        for (position, period) in periods.into_iter().flatten().enumerate() {
            let mut team_context = extract_record(period, &spec.team_columns);
            split_id_field(&mut team_context, "teamId");

            let players = period.get(spec.player_key).and_then(Value::as_array);
            for player in players.into_iter().flatten() {
                let mut record = extract_record(player, &spec.player_columns);
                for (column, value) in &team_context {
                    record.insert(column.clone(), value.clone());
                }
                if let Some(puck) = puck_stats.get(position) {
                    for (column, value) in puck {
                        record.insert(column.clone(), value.clone());
                    }
                }
                record.insert("teamSide".to_string(), Value::from(*side_tag));

                let period_number = record.get("period").and_then(Value::as_i64).unwrap_or(0);
                buckets.entry(period_number).or_default().push(record);
            }
        }
    }

    Ok(buckets.into_values().collect())
}

/// Merges the per-period records into one record per player.
///
/// Iterates [`aggregate_by_period`] output in period order. The first
/// occurrence of a player is copied verbatim; later occurrences merge
/// field-by-field: `period` keeps the highest period the player appeared in,
/// numeric fields are summed, and non-numeric non-null fields are overwritten
/// by the latest period (a documented last-write-wins case). Records with no
/// resolvable `playerId` are silently excluded. Output is sorted ascending by
/// `playerId`.
pub fn aggregate_summed(raw: &Value, spec: &PeriodStatsSpec) -> Result<Vec<FlatRecord>, Error> {
    let by_period = aggregate_by_period(raw, spec)?;
    let mut totals: BTreeMap<PlayerKey, FlatRecord> = BTreeMap::new();

    for period in by_period {
        for record in period {
            let Some(key) = PlayerKey::new(record.get("playerId")) else {
                continue;
            };
            match totals.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
                Entry::Occupied(mut slot) => merge_period(slot.get_mut(), &record),
            }
        }
    }

    Ok(totals.into_values().collect())
}

fn merge_period(total: &mut FlatRecord, incoming: &FlatRecord) {
    for (column, value) in incoming {
        if IDENTITY_FIELDS.contains(&column.as_str()) {
            continue;
        }
        if column == "period" {
            let highest = total
                .get(column)
                .and_then(Value::as_i64)
                .unwrap_or(0)
                .max(value.as_i64().unwrap_or(0));
            total.insert(column.clone(), Value::from(highest));
        } else if value.is_number() {
            let sum = match total.get(column) {
                Some(existing) => add_numeric(existing, value),
                None => value.clone(),
            };
            total.insert(column.clone(), sum);
        } else if !value.is_null() {
            total.insert(column.clone(), value.clone());
        }
    }
}

/// Ordering key for player ids: numeric ids sort before string ids, each
/// ascending. Null, empty-string, and zero ids are unresolvable and excluded.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum PlayerKey {
    Numeric(i64),
    Text(String),
}

impl PlayerKey {
    fn new(id: Option<&Value>) -> Option<Self> {
        match id? {
            Value::Number(n) => match n.as_i64() {
                Some(0) | None => None,
                Some(v) => Some(PlayerKey::Numeric(v)),
            },
            Value::String(s) if !s.is_empty() => Some(PlayerKey::Text(s.clone())),
            _ => None,
        }
    }
}
