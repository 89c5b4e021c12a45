//! Endpoint descriptors and the generic normalization dispatch.
//!
//! Every endpoint is described as data: where its records live inside the raw
//! response, which parse mode applies, and which composite id fields need
//! splitting. One [`normalize`] function consumes the descriptors, so adding
//! an endpoint means adding a descriptor, not a type.

pub mod games;
pub mod players;
pub mod teams;

use std::cmp::Ordering;

use serde_json::Value;

use crate::errors::Error;
use crate::normalize::{
    aggregate_by_period, aggregate_summed, collect_events, extract, extract_record, flatten,
    rename_nested, ColumnSpec, EventSpec, PeriodStatsSpec,
};
use crate::record::{split_id_field, FlatRecord};

/// Options shared by every normalization call.
#[derive(Clone, Copy)]
pub struct NormalizeOptions {
    /// Sum game statistics across periods into one record per player, and
    /// keep player season stats as one row per player instead of a per-team
    /// breakdown.
    pub summed: bool,
    /// Sub-category (game-type key) to select for category endpoints; `None`
    /// concatenates every category.
    pub category: Option<&'static str>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            summed: true,
            category: None,
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summed(mut self, summed: bool) -> Self {
        self.summed = summed;
        self
    }

    pub fn with_category(mut self, category: &'static str) -> Self {
        self.category = Some(category);
        self
    }
}

/// Normalized output: flat records, or one sequence of records per period.
#[derive(Debug)]
pub enum Records {
    Flat(Vec<FlatRecord>),
    ByPeriod(Vec<Vec<FlatRecord>>),
}

impl Records {
    /// Returns the flat record sequence, if this output is flat.
    pub fn into_flat(self) -> Option<Vec<FlatRecord>> {
        match self {
            Records::Flat(records) => Some(records),
            Records::ByPeriod(_) => None,
        }
    }

    /// Returns the per-period record sequences, if this output is by period.
    pub fn into_by_period(self) -> Option<Vec<Vec<FlatRecord>>> {
        match self {
            Records::ByPeriod(periods) => Some(periods),
            Records::Flat(_) => None,
        }
    }
}

/// Where an endpoint's records live inside the raw response.
#[derive(Clone, Copy)]
pub enum Select {
    /// The response itself is the record (or the list of records).
    Response,
    /// A dotted path to a list or single record. Missing path is a malformed
    /// response.
    Path(&'static str),
    /// Several dotted paths, concatenated in order.
    Paths(&'static [&'static str]),
    /// The values of a keyed object at a dotted path.
    ObjectValues(&'static str),
    /// A caller-selected category key (game-type) inside a keyed object, all
    /// categories concatenated when no category is requested.
    Category {
        /// Dotted path to the category object; `None` means the response root.
        root: Option<&'static str>,
        /// Column recording which category each record came from, if wanted.
        tag: Option<&'static str>,
    },
}

/// Hoists a nested list of records out of each selected record.
#[derive(Clone, Copy)]
pub struct Expand {
    pub key: &'static str,
    /// Keep the parent record itself when the nested list is absent or empty.
    pub keep_record_if_missing: bool,
    /// Apply only when the caller asked for a breakdown (`summed = false`).
    pub only_when_not_summed: bool,
}

/// Copy-then-rename of a nested key before flattening, to avoid column
/// collisions. The raw response is never mutated; renaming happens on a copy.
#[derive(Clone, Copy)]
pub struct KeyRename {
    pub parent: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

/// How the selected records are turned into flat records.
#[derive(Clone, Copy)]
pub enum ParseMode {
    /// Records are already the desired shape; copy them through.
    Passthrough,
    /// Recursively flatten every nested mapping.
    Flatten {
        skip_keys: &'static [&'static str],
        renames: &'static [KeyRename],
    },
    /// Extract exactly the declared columns.
    Extract { columns: ColumnSpec },
    /// Two-stage game/event extraction (goal and penalty events).
    ExtractEvents(EventSpec),
    /// Period-by-period player statistics, summed or by period per options.
    PeriodStats(PeriodStatsSpec),
}

/// Descriptor for one endpoint's raw-response-to-records transformation.
pub struct EndpointSpec {
    pub name: &'static str,
    pub select: Select,
    pub expand: Option<Expand>,
    pub mode: ParseMode,
    /// Composite `"<id>:<name>"` fields reduced to the id part in every
    /// output record.
    pub split_fields: &'static [&'static str],
    /// Sort the final records descending by these columns. Applied only when
    /// no single category was requested.
    pub sort_desc: &'static [&'static str],
}

impl EndpointSpec {
    pub const fn new(name: &'static str, select: Select, mode: ParseMode) -> Self {
        Self {
            name,
            select,
            expand: None,
            mode,
            split_fields: &[],
            sort_desc: &[],
        }
    }

    pub const fn with_expand(mut self, expand: Expand) -> Self {
        self.expand = Some(expand);
        self
    }

    pub const fn with_split_fields(mut self, fields: &'static [&'static str]) -> Self {
        self.split_fields = fields;
        self
    }

    pub const fn with_sort_desc(mut self, columns: &'static [&'static str]) -> Self {
        self.sort_desc = columns;
        self
    }
}

/// Normalizes one endpoint's raw response into output records.
///
/// Pure function of its inputs: the raw value is never mutated and may be
/// fetched once and reused across calls.
pub fn normalize(
    spec: &EndpointSpec,
    raw: &Value,
    options: &NormalizeOptions,
) -> Result<Records, Error> {
    if let ParseMode::PeriodStats(stats) = &spec.mode {
        return if options.summed {
            Ok(Records::Flat(aggregate_summed(raw, stats)?))
        } else {
            Ok(Records::ByPeriod(aggregate_by_period(raw, stats)?))
        };
    }

    let selected = select_records(spec, raw, options)?;
    let selected = expand_records(spec, selected, options);

    let mut records = match &spec.mode {
        ParseMode::Passthrough => passthrough(spec, &selected)?,
        ParseMode::Flatten { skip_keys, renames } => selected
            .iter()
            .map(|record| flatten_one(spec, record, skip_keys, renames))
            .collect::<Result<_, _>>()?,
        ParseMode::Extract { columns } => selected
            .iter()
            .map(|record| extract_record(record, columns))
            .collect(),
        ParseMode::ExtractEvents(events) => {
            let mut out = Vec::new();
            for game in &selected {
                out.extend(collect_events(game, events)?);
            }
            out
        }
        // Handled above.
        ParseMode::PeriodStats(_) => unreachable!(),
    };

    for record in &mut records {
        for field in spec.split_fields {
            split_id_field(record, field);
        }
    }

    if !spec.sort_desc.is_empty() && options.category.is_none() {
        sort_records_desc(&mut records, spec.sort_desc);
    }

    Ok(Records::Flat(records))
}

fn select_records(
    spec: &EndpointSpec,
    raw: &Value,
    options: &NormalizeOptions,
) -> Result<Vec<Value>, Error> {
    match spec.select {
        Select::Response => Ok(as_items(raw)),
        Select::Path(path) => {
            let value = extract(raw, path);
            if value.is_null() {
                return Err(malformed(spec, &format!("missing `{path}`")));
            }
            Ok(as_items(&value))
        }
        Select::Paths(paths) => {
            let mut items = Vec::new();
            for path in paths {
                let value = extract(raw, path);
                if value.is_null() {
                    return Err(malformed(spec, &format!("missing `{path}`")));
                }
                items.extend(as_items(&value));
            }
            Ok(items)
        }
        Select::ObjectValues(path) => {
            let value = extract(raw, path);
            let object = value
                .as_object()
                .ok_or_else(|| malformed(spec, &format!("expected a mapping at `{path}`")))?;
            Ok(object.values().cloned().collect())
        }
        Select::Category { root, tag } => select_category(spec, raw, options, root, tag),
    }
}

fn select_category(
    spec: &EndpointSpec,
    raw: &Value,
    options: &NormalizeOptions,
    root: Option<&'static str>,
    tag: Option<&'static str>,
) -> Result<Vec<Value>, Error> {
    let base = match root {
        Some(path) => extract(raw, path),
        None => raw.clone(),
    };
    let categories = base
        .as_object()
        .ok_or_else(|| malformed(spec, "expected a mapping of categories"))?;

    let mut items = Vec::new();
    match options.category {
        Some(category) => {
            let value = categories
                .get(category)
                .ok_or_else(|| malformed(spec, &format!("category `{category}` not available")))?;
            collect_category(&mut items, category, value, tag);
        }
        None => {
            for (category, value) in categories {
                collect_category(&mut items, category, value, tag);
            }
        }
    }
    Ok(items)
}

fn collect_category(items: &mut Vec<Value>, category: &str, value: &Value, tag: Option<&str>) {
    for mut item in as_items(value) {
        if let (Some(column), Value::Object(map)) = (tag, &mut item) {
            map.insert(column.to_string(), Value::from(category));
        }
        items.push(item);
    }
}

fn expand_records(
    spec: &EndpointSpec,
    records: Vec<Value>,
    options: &NormalizeOptions,
) -> Vec<Value> {
    let Some(expand) = spec.expand else {
        return records;
    };
    if expand.only_when_not_summed && options.summed {
        return records;
    }
    let mut out = Vec::new();
    for record in records {
        match record.get(expand.key).and_then(Value::as_array) {
            Some(nested) if !nested.is_empty() => out.extend(nested.iter().cloned()),
            _ if expand.keep_record_if_missing => out.push(record),
            _ => {}
        }
    }
    out
}

fn passthrough(spec: &EndpointSpec, records: &[Value]) -> Result<Vec<FlatRecord>, Error> {
    records
        .iter()
        .map(|record| {
            record
                .as_object()
                .cloned()
                .ok_or_else(|| malformed(spec, "expected a mapping record"))
        })
        .collect()
}

fn flatten_one(
    spec: &EndpointSpec,
    record: &Value,
    skip_keys: &[&str],
    renames: &[KeyRename],
) -> Result<FlatRecord, Error> {
    let mut map = record
        .as_object()
        .cloned()
        .ok_or_else(|| malformed(spec, "expected a mapping record"))?;
    for rename in renames {
        map = rename_nested(&map, rename.parent, rename.from, rename.to);
    }
    Ok(flatten(&map, skip_keys))
}

fn sort_records_desc(records: &mut [FlatRecord], columns: &[&str]) {
    records.sort_by(|a, b| {
        for column in columns {
            let ordering = compare_values(a.get(*column), b.get(*column));
            if ordering != Ordering::Equal {
                return ordering.reverse();
            }
        }
        Ordering::Equal
    });
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .unwrap_or(0.0)
            .partial_cmp(&y.as_f64().unwrap_or(0.0))
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

fn as_items(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::Null => Vec::new(),
        other => vec![other.clone()],
    }
}

fn malformed(spec: &EndpointSpec, detail: &str) -> Error {
    Error::MalformedResponse {
        endpoint: spec.name,
        detail: detail.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static PASSTHROUGH_LIST: EndpointSpec = EndpointSpec::new(
        "passthroughList",
        Select::Path("items"),
        ParseMode::Passthrough,
    )
    .with_split_fields(&["teamId"]);

    static CATEGORY_TAGGED: EndpointSpec = EndpointSpec::new(
        "categoryTagged",
        Select::Category {
            root: Some("historical"),
            tag: Some("gametype"),
        },
        ParseMode::Passthrough,
    )
    .with_sort_desc(&["season", "gametype"]);

    static BREAKDOWN: EndpointSpec = EndpointSpec::new(
        "breakdown",
        Select::Response,
        ParseMode::Passthrough,
    )
    .with_expand(Expand {
        key: "previousTeamsForTournament",
        keep_record_if_missing: true,
        only_when_not_summed: true,
    });

    #[test]
    fn passthrough_splits_composite_ids() {
        let raw = json!({"items": [{"teamId": "42:Ilves", "name": "A"}]});
        let records = normalize(&PASSTHROUGH_LIST, &raw, &NormalizeOptions::new())
            .unwrap()
            .into_flat()
            .unwrap();
        assert_eq!(records[0]["teamId"], json!("42"));
        assert_eq!(records[0]["name"], json!("A"));
    }

    #[test]
    fn missing_select_path_is_malformed_not_empty() {
        let raw = json!({"other": []});
        let err = normalize(&PASSTHROUGH_LIST, &raw, &NormalizeOptions::new()).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn category_select_picks_one_key() {
        let raw = json!({"historical": {
            "regular": [{"season": 2024}],
            "playoffs": [{"season": 2024}],
        }});
        let options = NormalizeOptions::new().with_category("regular");
        let records = normalize(&CATEGORY_TAGGED, &raw, &options)
            .unwrap()
            .into_flat()
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["gametype"], json!("regular"));
    }

    #[test]
    fn category_select_concatenates_and_sorts_all_keys() {
        let raw = json!({"historical": {
            "playoffs": [{"season": 2023}],
            "regular": [{"season": 2024}, {"season": 2023}],
        }});
        let records = normalize(&CATEGORY_TAGGED, &raw, &NormalizeOptions::new())
            .unwrap()
            .into_flat()
            .unwrap();
        let rows: Vec<(i64, &str)> = records
            .iter()
            .map(|r| (r["season"].as_i64().unwrap(), r["gametype"].as_str().unwrap()))
            .collect();
        assert_eq!(
            rows,
            vec![(2024, "regular"), (2023, "regular"), (2023, "playoffs")]
        );
    }

    #[test]
    fn unknown_category_is_an_error() {
        let raw = json!({"historical": {"regular": []}});
        let options = NormalizeOptions::new().with_category("chl");
        let err = normalize(&CATEGORY_TAGGED, &raw, &options).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn breakdown_expands_only_when_not_summed() {
        let raw = json!([
            {"name": "split", "previousTeamsForTournament": [{"name": "a"}, {"name": "b"}]},
            {"name": "stayed"},
        ]);
        let summed = normalize(&BREAKDOWN, &raw, &NormalizeOptions::new())
            .unwrap()
            .into_flat()
            .unwrap();
        assert_eq!(summed.len(), 2);

        let split = normalize(&BREAKDOWN, &raw, &NormalizeOptions::new().with_summed(false))
            .unwrap()
            .into_flat()
            .unwrap();
        let names: Vec<&str> = split.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["a", "b", "stayed"]);
    }
}
