//! Team and model reference table

/// Team (model) information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub code: u16,
    pub name: &'static str,
}

/// All teams in the current season roster. Model draws are uniform over
/// this table.
pub const TEAMS: &[Team] = &[
    Team {
        code: 0,
        name: "Apex GP",
    },
    Team {
        code: 1,
        name: "Borealis Racing",
    },
    Team {
        code: 2,
        name: "Cobalt Motorsport",
    },
    Team {
        code: 3,
        name: "Delta Prime",
    },
    Team {
        code: 4,
        name: "Emberline",
    },
    Team {
        code: 5,
        name: "Foxtrot Racing",
    },
    Team {
        code: 6,
        name: "Gravelle",
    },
    Team {
        code: 7,
        name: "Helio GP",
    },
    Team {
        code: 8,
        name: "Ionix",
    },
    Team {
        code: 9,
        name: "Jetstream Racing",
    },
];

/// Get team by model code
pub fn team_by_code(code: u16) -> Option<&'static Team> {
    TEAMS.iter().find(|t| t.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_lookup() {
        assert_eq!(team_by_code(0).map(|t| t.name), Some("Apex GP"));
        assert_eq!(team_by_code(9).map(|t| t.name), Some("Jetstream Racing"));
        assert_eq!(team_by_code(10), None);
    }

    #[test]
    fn test_codes_match_positions() {
        for (i, team) in TEAMS.iter().enumerate() {
            assert_eq!(team.code as usize, i);
        }
    }
}
