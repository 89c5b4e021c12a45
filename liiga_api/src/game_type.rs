//! Game types (tournament phases) recognized by the Liiga API.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tournament phase selector shared by most endpoints.
///
/// The API uses two different spellings for the same phases: a tournament
/// name in query strings and URL paths ([`GameType::tournament`]) and a
/// category key inside player game-log responses ([`GameType::game_log_key`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    #[default]
    #[serde(rename = "regularseason")]
    RegularSeason,
    #[serde(rename = "playoff")]
    Playoffs,
    Preseason,
    Playout,
    Qualification,
    Chl,
}

impl GameType {
    /// Tournament name used in `tournament=` query parameters and stat paths.
    pub fn tournament(&self) -> &'static str {
        match self {
            GameType::RegularSeason => "runkosarja",
            GameType::Playoffs => "playoffs",
            GameType::Preseason => "valmistavat_ottelut",
            GameType::Playout => "playout",
            GameType::Qualification => "qualifications",
            GameType::Chl => "chl",
        }
    }

    /// Category key used by the player game-log and per-season breakdowns.
    pub fn game_log_key(&self) -> &'static str {
        match self {
            GameType::RegularSeason => "regular",
            GameType::Playoffs => "playoffs",
            GameType::Preseason => "practice",
            GameType::Playout => "playout",
            GameType::Qualification => "qualifications",
            GameType::Chl => "chl",
        }
    }
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                GameType::RegularSeason => "regularseason",
                GameType::Playoffs => "playoff",
                GameType::Preseason => "preseason",
                GameType::Playout => "playout",
                GameType::Qualification => "qualification",
                GameType::Chl => "chl",
            }
        )
    }
}

impl FromStr for GameType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regularseason" => Ok(GameType::RegularSeason),
            "playoff" | "playoffs" => Ok(GameType::Playoffs),
            "preseason" => Ok(GameType::Preseason),
            "playout" => Ok(GameType::Playout),
            "qualification" | "qualifications" => Ok(GameType::Qualification),
            "chl" => Ok(GameType::Chl),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_display_and_from_str() {
        for game_type in [
            GameType::RegularSeason,
            GameType::Playoffs,
            GameType::Preseason,
            GameType::Playout,
            GameType::Qualification,
            GameType::Chl,
        ] {
            assert_eq!(game_type.to_string().parse::<GameType>(), Ok(game_type));
        }
        assert!("rodeo".parse::<GameType>().is_err());
    }

    #[test]
    fn tournament_names_match_the_api() {
        assert_eq!(GameType::RegularSeason.tournament(), "runkosarja");
        assert_eq!(GameType::Preseason.tournament(), "valmistavat_ottelut");
        assert_eq!(GameType::RegularSeason.game_log_key(), "regular");
        assert_eq!(GameType::Preseason.game_log_key(), "practice");
    }
}
