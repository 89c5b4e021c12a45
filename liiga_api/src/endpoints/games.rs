//! Game, schedule, and game-stat endpoint descriptors.

use crate::endpoints::{EndpointSpec, KeyRename, ParseMode, Select};
use crate::normalize::{ColumnSpec, EventSpec, PeriodStatsSpec};

/// Season schedule with simple results. The ice rink id is renamed before
/// flattening so it cannot collide with the game id.
pub static SCHEDULE: EndpointSpec = EndpointSpec::new(
    "schedule",
    Select::Response,
    ParseMode::Flatten {
        skip_keys: &[],
        renames: &[KeyRename {
            parent: "iceRink",
            from: "id",
            to: "rinkId",
        }],
    },
);

const GAME_RESULT_COLUMNS: ColumnSpec = ColumnSpec::new(&[
    // Game-level fields.
    ("id", "gameId"),
    ("season", "season"),
    ("start", "start"),
    ("end", "end"),
    ("finishedType", "finishedType"),
    ("started", "started"),
    ("ended", "ended"),
    ("gameTime", "gameTime"),
    ("spectators", "spectators"),
    ("buyTicketsUrl", "buyTicketsUrl"),
    ("currentPeriod", "currentPeriod"),
    ("cacheUpdateDate", "cacheUpdateDate"),
    ("provider", "provider"),
    ("stale", "stale"),
    ("serie", "serie"),
    ("gameWeek", "gameWeek"),
    // Home team fields.
    ("homeTeam.teamId", "homeTeamId"),
    ("homeTeam.teamPlaceholder", "homeTeamPlaceholder"),
    ("homeTeam.teamName", "homeTeamName"),
    ("homeTeam.goals", "homeGoals"),
    ("homeTeam.timeOut", "homeTimeOut"),
    ("homeTeam.powerplayInstances", "homePowerplayInstances"),
    ("homeTeam.powerplayGoals", "homePowerplayGoals"),
    ("homeTeam.shortHandedInstances", "homeShortHandedInstances"),
    ("homeTeam.shortHandedGoals", "homeShortHandedGoals"),
    ("homeTeam.expectedGoals", "homeExpectedGoals"),
    ("homeTeam.ranking", "homeRanking"),
    ("homeTeam.gameStartDateTime", "homeGameStartDateTime"),
    ("homeTeam.logos.darkBg", "homeDarkBgLogo"),
    ("homeTeam.logos.lightBg", "homeLightBgLogo"),
    ("homeTeam.logos.darkBgOriginal", "homeDarkBgOriginalLogo"),
    ("homeTeam.logos.lightBgOriginal", "homeLightBgOriginalLogo"),
    // Away team fields.
    ("awayTeam.teamId", "awayTeamId"),
    ("awayTeam.teamPlaceholder", "awayTeamPlaceholder"),
    ("awayTeam.teamName", "awayTeamName"),
    ("awayTeam.goals", "awayGoals"),
    ("awayTeam.timeOut", "awayTimeOut"),
    ("awayTeam.powerplayInstances", "awayPowerplayInstances"),
    ("awayTeam.powerplayGoals", "awayPowerplayGoals"),
    ("awayTeam.shortHandedInstances", "awayShortHandedInstances"),
    ("awayTeam.shortHandedGoals", "awayShortHandedGoals"),
    ("awayTeam.expectedGoals", "awayExpectedGoals"),
    ("awayTeam.ranking", "awayRanking"),
    ("awayTeam.gameStartDateTime", "awayGameStartDateTime"),
    ("awayTeam.logos.darkBg", "awayDarkBgLogo"),
    ("awayTeam.logos.lightBg", "awayLightBgLogo"),
    ("awayTeam.logos.darkBgOriginal", "awayDarkBgOriginalLogo"),
    ("awayTeam.logos.lightBgOriginal", "awayLightBgOriginalLogo"),
    // Ice rink fields.
    ("iceRink.id", "iceRinkId"),
    ("iceRink.name", "iceRinkName"),
    ("iceRink.latitude", "iceRinkLatitude"),
    ("iceRink.longitude", "iceRinkLongitude"),
    ("iceRink.streetAddress", "iceRinkStreetAddress"),
    ("iceRink.zip", "iceRinkZip"),
    ("iceRink.city", "iceRinkCity"),
]);

/// Season games with the curated result column set.
pub static GAME_RESULTS: EndpointSpec = EndpointSpec::new(
    "gameResults",
    Select::Response,
    ParseMode::Extract {
        columns: GAME_RESULT_COLUMNS,
    },
)
.with_split_fields(&["homeTeamId", "awayTeamId"]);

const EVENT_GAME_COLUMNS: ColumnSpec = ColumnSpec::new(&[
    ("id", "gameId"),
    ("season", "season"),
    ("start", "gameStart"),
    ("homeTeam.teamName", "homeTeam"),
    ("awayTeam.teamName", "awayTeam"),
]);

const GOAL_EVENT_COLUMNS: ColumnSpec = ColumnSpec::new(&[
    ("scorerPlayerId", "scorerPlayerId"),
    ("scorerPlayer.playerId", "scorerPlayerPlayerId"),
    ("scorerPlayer.firstName", "scorerPlayerFirstName"),
    ("scorerPlayer.lastName", "scorerPlayerLastName"),
    ("scorerGoalsInSeason", "scorerGoalsInSeason"),
    ("assistantPlayers", "assistantPlayers"),
    ("assistsSoFarInSeason", "assistsSoFarInSeason"),
    ("goalTypes", "goalTypes"),
    ("logTime", "logTime"),
    ("winningGoal", "winningGoal"),
    ("gameTime", "gameTime"),
    ("period", "period"),
    ("eventId", "eventId"),
    ("plusPlayerIds", "plusPlayerIds"),
    ("minusPlayerIds", "minusPlayerIds"),
    ("homeTeamScore", "homeTeamScore"),
    ("awayTeamScore", "awayTeamScore"),
    ("goalsSoFarInSeason", "goalsSoFarInSeason"),
    ("videoClipUrl", "videoClipUrl"),
    ("videoThumbnailUrl", "videoThumbnailUrl"),
]);

const fn goal_events(endpoint: &'static str) -> EventSpec {
    EventSpec {
        endpoint,
        game_columns: EVENT_GAME_COLUMNS,
        event_columns: GOAL_EVENT_COLUMNS,
        event_key: "goalEvents",
        side_column: "goalTeamSide",
        with_assists: true,
    }
}

/// Goal events for every game of a season.
pub static SEASON_GOAL_EVENTS: EndpointSpec = EndpointSpec::new(
    "seasonGoalEvents",
    Select::Response,
    ParseMode::ExtractEvents(goal_events("seasonGoalEvents")),
);

/// Goal events of a single game.
pub static GAME_GOAL_EVENTS: EndpointSpec = EndpointSpec::new(
    "gameGoalEvents",
    Select::Path("game"),
    ParseMode::ExtractEvents(goal_events("gameGoalEvents")),
);

const PENALTY_EVENT_COLUMNS: ColumnSpec = ColumnSpec::new(&[
    ("playerId", "playerId"),
    ("suffererPlayerId", "suffererPlayerId"),
    ("eventId", "eventId"),
    ("logTime", "logTime"),
    ("gameTime", "gameTime"),
    ("period", "period"),
    ("penaltyBegintime", "penaltyBegintime"),
    ("penaltyEndtime", "penaltyEndtime"),
    ("penaltyFaultName", "penaltyFaultName"),
    ("penaltyFaultType", "penaltyFaultType"),
    ("penaltyInfo", "penaltyInfo"),
    ("penaltyMinutes", "penaltyMinutes"),
]);

/// Penalty events of a single game.
pub static GAME_PENALTY_EVENTS: EndpointSpec = EndpointSpec::new(
    "gamePenaltyEvents",
    Select::Path("game"),
    ParseMode::ExtractEvents(EventSpec {
        endpoint: "gamePenaltyEvents",
        game_columns: EVENT_GAME_COLUMNS,
        event_columns: PENALTY_EVENT_COLUMNS,
        event_key: "penaltyEvents",
        side_column: "penaltyTeamSide",
        with_assists: false,
    }),
);

const GAME_INFO_COLUMNS: ColumnSpec = ColumnSpec::new(&[
    ("game.id", "gameId"),
    ("game.season", "season"),
    ("game.start", "start"),
    ("game.end", "end"),
    ("game.homeTeam.teamId", "homeTeamId"),
    ("game.homeTeam.teamName", "homeTeamName"),
    ("game.homeTeam.goals", "homeGoals"),
    ("game.homeTeam.timeOut", "homeTimeOut"),
    ("game.homeTeam.powerplayInstances", "homePowerplayInstances"),
    ("game.homeTeam.powerplayGoals", "homePowerplayGoals"),
    ("game.homeTeam.shortHandedInstances", "homeShortHandedInstances"),
    ("game.homeTeam.shortHandedGoals", "homeShortHandedGoals"),
    ("game.homeTeam.expectedGoals", "homeExpectedGoals"),
    ("game.homeTeam.ranking", "homeRanking"),
    ("game.homeTeam.gameStartDateTime", "homeGameStartDateTime"),
    ("game.homeTeam.logos.darkBg", "homeDarkBgLogo"),
    ("game.homeTeam.logos.lightBg", "homeLightBgLogo"),
    ("game.awayTeam.teamId", "awayTeamId"),
    ("game.awayTeam.teamName", "awayTeamName"),
    ("game.awayTeam.goals", "awayGoals"),
    ("game.awayTeam.timeOut", "awayTimeOut"),
    ("game.awayTeam.powerplayInstances", "awayPowerplayInstances"),
    ("game.awayTeam.powerplayGoals", "awayPowerplayGoals"),
    ("game.awayTeam.shortHandedInstances", "awayShortHandedInstances"),
    ("game.awayTeam.shortHandedGoals", "awayShortHandedGoals"),
    ("game.awayTeam.expectedGoals", "awayExpectedGoals"),
    ("game.awayTeam.ranking", "awayRanking"),
    ("game.awayTeam.gameStartDateTime", "awayGameStartDateTime"),
    ("game.awayTeam.logos.darkBg", "awayDarkBgLogo"),
    ("game.awayTeam.logos.lightBg", "awayLightBgLogo"),
    ("game.finishedType", "finishedType"),
    ("game.started", "started"),
    ("game.ended", "ended"),
    ("game.gameTime", "gameTime"),
    ("game.spectators", "spectators"),
    ("game.iceRink.id", "iceRinkId"),
    ("game.iceRink.name", "iceRinkName"),
    ("game.iceRink.latitude", "iceRinkLatitude"),
    ("game.iceRink.longitude", "iceRinkLongitude"),
    ("game.iceRink.zip", "iceRinkZip"),
    ("game.iceRink.city", "iceRinkCity"),
    ("game.currentPeriod", "currentPeriod"),
]);

/// Header record of a single game.
pub static GAME_INFO: EndpointSpec = EndpointSpec::new(
    "gameInfo",
    Select::Response,
    ParseMode::Extract {
        columns: GAME_INFO_COLUMNS,
    },
)
.with_split_fields(&["homeTeamId", "awayTeamId"]);

/// Referees of a single game.
pub static GAME_REFEREES: EndpointSpec = EndpointSpec::new(
    "gameReferees",
    Select::Path("game.referees"),
    ParseMode::Passthrough,
);

/// Post-game awards.
pub static GAME_AWARDS: EndpointSpec = EndpointSpec::new(
    "gameAwards",
    Select::Path("awards"),
    ParseMode::Passthrough,
)
.with_split_fields(&["teamId"]);

/// Rosters of both teams for a single game.
pub static GAME_PLAYERS: EndpointSpec = EndpointSpec::new(
    "gamePlayers",
    Select::Paths(&["homeTeamPlayers", "awayTeamPlayers"]),
    ParseMode::Passthrough,
)
.with_split_fields(&["teamId"]);

/// Shot map of a single game.
pub static GAME_SHOT_MAP: EndpointSpec =
    EndpointSpec::new("gameShotMap", Select::Response, ParseMode::Passthrough);

const SKATER_PERIOD_COLUMNS: ColumnSpec = ColumnSpec::new(&[
    ("jerseyId", "jerseyId"),
    ("playerId", "playerId"),
    ("period.points", "points"),
    ("period.period", "period"),
    ("period.assists", "assists"),
    ("period.goals", "goals"),
    ("period.validGoals", "validGoals"),
    ("period.plusminus", "plusminus"),
    ("period.plus", "plus"),
    ("period.minus", "minus"),
    ("period.shots", "shots"),
    ("period.penaltyminutes", "penaltyminutes"),
    ("period.powerplayGoals", "powerplayGoals"),
    ("period.shortHandedGoals", "shortHandedGoals"),
    ("period.winningGoal", "winningGoal"),
    ("period.blockedShots", "blockedShots"),
    ("period.faceoffsTotal", "faceoffsTotal"),
    ("period.faceoffsWon", "faceoffsWon"),
    ("period.corsiFor", "corsiFor"),
    ("period.corsiAgainst", "corsiAgainst"),
    ("period.faceoffsCenterTotal", "faceoffsCenterTotal"),
    ("period.faceoffsCenterWon", "faceoffsCenterWon"),
    ("period.faceoffsDefenceTotal", "faceoffsDefenceTotal"),
    ("period.faceoffsDefenceWon", "faceoffsDefenceWon"),
    ("period.faceoffsOffenceTotal", "faceoffsOffenceTotal"),
    ("period.faceoffsOffenceWon", "faceoffsOffenceWon"),
    ("period.fsZoneStartsDz", "fsZoneStartsDz"),
    ("period.fsZoneStartsOz", "fsZoneStartsOz"),
    ("period.powerplay2Goals", "powerplay2Goals"),
    ("period.penaltykill2Goals", "penaltykill2Goals"),
    ("period.powerplayAssists", "powerplayAssists"),
    ("period.penaltykillAssists", "penaltykillAssists"),
    ("period.goalsToEmptyGoal", "goalsToEmptyGoal"),
    ("period.fsTeamShots", "fsTeamShots"),
    ("period.fsTeamGoals", "fsTeamGoals"),
    ("period.fsTeamShotsAgainst", "fsTeamShotsAgainst"),
    ("period.fsTeamGoalsAgainst", "fsTeamGoalsAgainst"),
    ("period.timeofice", "timeofice"),
    ("distance", "distance"),
    ("totalPasses", "totalPasses"),
    ("successfulPasses", "successfulPasses"),
    ("playerPassesUnderPressure", "playerPassesUnderPressure"),
    (
        "playerSuccessfulPassesUnderPressure",
        "playerSuccessfulPassesUnderPressure",
    ),
    ("playerPassesUnderHighPressure", "playerPassesUnderHighPressure"),
    (
        "playerSuccessfulPassesUnderHighPressure",
        "playerSuccessfulPassesUnderHighPressure",
    ),
    ("expectedGoalsPlayer", "expectedGoalsPlayer"),
    ("expectedGoalsTeam", "expectedGoalsTeam"),
    ("expectedGoalsAgainst", "expectedGoalsAgainst"),
    ("expectedGoalsAgainstShotOnGoal", "expectedGoalsAgainstShotOnGoal"),
]);

const GOALIE_PERIOD_COLUMNS: ColumnSpec = ColumnSpec::new(&[
    ("jerseyId", "jerseyId"),
    ("playerId", "playerId"),
    ("period.shotsOnGoal", "shotsOnGoal"),
    ("period.period", "period"),
    ("period.penaltyminutes", "penaltyminutes"),
    ("period.timeofice", "timeofice"),
    ("period.saves", "saves"),
    ("period.goalsAllowed", "goalsAllowed"),
    ("period.savesPercentage", "savesPercentage"),
    ("period.assists", "assists"),
    ("period.goals", "goals"),
    ("period.validGoals", "validGoals"),
    ("period.blockedShots", "blockedShots"),
    ("period.faceoffsTotal", "faceoffsTotal"),
    ("period.faceoffsWon", "faceoffsWon"),
    ("period.faceoffsCenterTotal", "faceoffsCenterTotal"),
    ("period.faceoffsCenterWon", "faceoffsCenterWon"),
    ("period.faceoffsDefenceTotal", "faceoffsDefenceTotal"),
    ("period.faceoffsDefenceWon", "faceoffsDefenceWon"),
    ("period.faceoffsOffenceTotal", "faceoffsOffenceTotal"),
    ("period.faceoffsOffenceWon", "faceoffsOffenceWon"),
    ("period.points", "points"),
    ("period.plus", "plus"),
    ("period.minus", "minus"),
    ("period.powerplayGoals", "powerplayGoals"),
    ("period.shortHandedGoals", "shortHandedGoals"),
    ("period.winningGoal", "winningGoal"),
    ("period.corsiFor", "corsiFor"),
    ("period.corsiAgainst", "corsiAgainst"),
    ("period.fsZoneStartsOz", "fsZoneStartsOz"),
    ("period.fsZoneStartsDz", "fsZoneStartsDz"),
    ("period.powerplay2Goals", "powerplay2Goals"),
    ("period.penaltykill2Goals", "penaltykill2Goals"),
    ("period.powerplayAssists", "powerplayAssists"),
    ("period.penaltykillAssists", "penaltykillAssists"),
    ("period.goalsToEmptyGoal", "goalsToEmptyGoal"),
    ("period.fsTeamShots", "fsTeamShots"),
    ("period.fsTeamGoals", "fsTeamGoals"),
    ("period.fsTeamShotsAgainst", "fsTeamShotsAgainst"),
    ("period.fsTeamGoalsAgainst", "fsTeamGoalsAgainst"),
    ("distance", "distance"),
    ("totalPasses", "totalPasses"),
    ("successfulPasses", "successfulPasses"),
    ("playerPassesUnderPressure", "playerPassesUnderPressure"),
    (
        "playerSuccessfulPassesUnderPressure",
        "playerSuccessfulPassesUnderPressure",
    ),
    ("playerPassesUnderHighPressure", "playerPassesUnderHighPressure"),
    (
        "playerSuccessfulPassesUnderHighPressure",
        "playerSuccessfulPassesUnderHighPressure",
    ),
    ("expectedGoalsPlayer", "expectedGoalsPlayer"),
    ("expectedGoalsTeam", "expectedGoalsTeam"),
    ("expectedGoalsAgainst", "expectedGoalsAgainst"),
    ("expectedGoalsAgainstShotOnGoal", "expectedGoalsAgainstShotOnGoal"),
]);

const TEAM_CONTEXT_COLUMNS: ColumnSpec = ColumnSpec::new(&[
    ("teamId", "teamId"),
    ("goals", "teamGoals"),
    ("shots", "teamShots"),
    ("powerPlayGoals", "teamPowerPlayGoals"),
    ("shortHandedGoalsAgainst", "teamShortHandedGoalsAgainst"),
    ("penaltyMinutes", "teamPenaltyMinutes"),
    ("faceOffWins", "teamFaceOffWins"),
    ("twoMinutePenalties", "teamTwoMinutePenalties"),
    ("fiveMinutePenalties", "teamFiveMinutePenalties"),
    ("tenMinutePenalties", "teamTenMinutePenalties"),
    ("twentyMinutePenalties", "teamTwentyMinutePenalties"),
    ("totalDistanceTravelled", "teamTotalDistanceTravelled"),
]);

const PUCK_COLUMNS: ColumnSpec = ColumnSpec::new(&[
    ("periodNumber", "periodNumber"),
    ("homeTeamControlDuration", "homeTeamControlDuration"),
    ("awayTeamControlDuration", "awayTeamControlDuration"),
    ("contestedControlDuration", "contestedControlDuration"),
    ("distance", "distance"),
]);

/// Skater statistics of a single game, per period or summed.
pub static SKATER_GAME_STATS: EndpointSpec = EndpointSpec::new(
    "skaterGameStats",
    Select::Response,
    ParseMode::PeriodStats(PeriodStatsSpec {
        endpoint: "skaterGameStats",
        player_key: "periodPlayerStats",
        player_columns: SKATER_PERIOD_COLUMNS,
        team_columns: TEAM_CONTEXT_COLUMNS,
        puck_columns: PUCK_COLUMNS,
    }),
);

/// Goalie statistics of a single game, per period or summed.
pub static GOALIE_GAME_STATS: EndpointSpec = EndpointSpec::new(
    "goalieGameStats",
    Select::Response,
    ParseMode::PeriodStats(PeriodStatsSpec {
        endpoint: "goalieGameStats",
        player_key: "goaliePeriodStats",
        player_columns: GOALIE_PERIOD_COLUMNS,
        team_columns: TEAM_CONTEXT_COLUMNS,
        puck_columns: PUCK_COLUMNS,
    }),
);
