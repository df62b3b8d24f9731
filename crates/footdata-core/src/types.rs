//! Core domain records for football data.
//!
//! All fields are strings: the upstream API emits numeric values (wins,
//! points, founding years) as JSON strings and no arithmetic is performed on
//! them, so they are carried opaquely rather than coerced to numbers.
//!
//! Serde field names follow the apifootball.com wire format exactly,
//! including the upstream misspelling `overall_league_payed` for games
//! played. Deserialization is lenient: missing fields default to empty
//! strings and unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// A country that hosts one or more leagues.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    /// Country identifier.
    #[serde(rename = "country_id")]
    pub country_id: String,
    /// Country name.
    #[serde(rename = "country_name")]
    pub country_name: String,
    /// URL of the country flag/logo.
    #[serde(rename = "country_logo")]
    pub country_logo: String,
}

/// A league within a country, for a given season.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct League {
    /// League identifier.
    #[serde(rename = "league_id")]
    pub league_id: String,
    /// League name.
    #[serde(rename = "league_name")]
    pub league_name: String,
    /// Identifier of the hosting country.
    #[serde(rename = "country_id")]
    pub country_id: String,
    /// Name of the hosting country.
    #[serde(rename = "country_name")]
    pub country_name: String,
    /// Season label (e.g. "2023/2024").
    #[serde(rename = "league_season")]
    pub league_season: String,
    /// URL of the league logo.
    #[serde(rename = "league_logo")]
    pub league_logo: String,
}

/// A team playing in a league.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    /// Team identifier ("key" in the upstream API).
    #[serde(rename = "team_key")]
    pub team_key: String,
    /// Team name.
    #[serde(rename = "team_name")]
    pub team_name: String,
    /// Country the team plays in.
    #[serde(rename = "team_country")]
    pub team_country: String,
    /// Year the team was founded.
    #[serde(rename = "team_founded")]
    pub team_founded: String,
    /// URL of the team badge.
    #[serde(rename = "team_badge")]
    pub team_badge: String,
}

/// A team's position in a league table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Standing {
    /// Name of the country the league belongs to.
    #[serde(rename = "country_name")]
    pub country_name: String,
    /// League identifier.
    #[serde(rename = "league_id")]
    pub league_id: String,
    /// League name.
    #[serde(rename = "league_name")]
    pub league_name: String,
    /// Team identifier.
    #[serde(rename = "team_id")]
    pub team_id: String,
    /// Team name.
    #[serde(rename = "team_name")]
    pub team_name: String,
    /// Position in the league table.
    #[serde(rename = "overall_league_position")]
    pub overall_league_position: String,
    /// Games played. The wire name carries an upstream typo ("payed").
    #[serde(rename = "overall_league_payed")]
    pub overall_league_played: String,
    /// Games won.
    #[serde(rename = "overall_league_W")]
    pub overall_league_wins: String,
    /// Games drawn.
    #[serde(rename = "overall_league_D")]
    pub overall_league_draws: String,
    /// Games lost.
    #[serde(rename = "overall_league_L")]
    pub overall_league_losses: String,
    /// Goals scored.
    #[serde(rename = "overall_league_GF")]
    pub overall_league_goals_for: String,
    /// Goals conceded.
    #[serde(rename = "overall_league_GA")]
    pub overall_league_goals_against: String,
    /// League points.
    #[serde(rename = "overall_league_PTS")]
    pub overall_league_points: String,
    /// URL of the team badge.
    #[serde(rename = "team_badge")]
    pub team_badge: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_uses_wire_field_names() {
        let json = r#"{"country_id":"44","country_name":"England","country_logo":"https://example.com/england.png"}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.country_id, "44");
        assert_eq!(country.country_name, "England");
    }

    #[test]
    fn standing_maps_the_misspelled_played_field() {
        let json = r#"{
            "country_name": "England",
            "league_id": "148",
            "league_name": "Premier League",
            "team_id": "2611",
            "team_name": "Arsenal",
            "overall_league_position": "1",
            "overall_league_payed": "38",
            "overall_league_W": "28",
            "overall_league_D": "6",
            "overall_league_L": "4",
            "overall_league_GF": "91",
            "overall_league_GA": "29",
            "overall_league_PTS": "90",
            "team_badge": "https://example.com/arsenal.png"
        }"#;
        let standing: Standing = serde_json::from_str(json).unwrap();
        assert_eq!(standing.overall_league_played, "38");
        assert_eq!(standing.overall_league_points, "90");

        // Round-trip preserves the wire name.
        let out = serde_json::to_string(&standing).unwrap();
        assert!(out.contains("\"overall_league_payed\":\"38\""));
    }

    #[test]
    fn missing_and_unknown_fields_are_tolerated() {
        let json = r#"{"team_key":"73","team_name":"Arsenal","venue":{"name":"Emirates"}}"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.team_key, "73");
        assert_eq!(team.team_founded, "");
    }
}
