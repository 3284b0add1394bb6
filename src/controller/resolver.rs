use crate::model::{Player, PlayerId, Team, TeamId};

/// Name → id lookups over the rosters loaded at startup. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    // lowercased full name, kept in roster order so substring ties always pick the same team
    team_ids: Vec<(String, TeamId)>,
    players: Vec<Player>,
}

impl Resolver {
    #[must_use]
    pub fn new(teams: &[Team], players: Vec<Player>) -> Self {
        let team_ids = teams
            .iter()
            .map(|team| (team.full_name.to_lowercase(), team.id))
            .collect();
        Self { team_ids, players }
    }

    #[must_use]
    pub fn team_count(&self) -> usize {
        self.team_ids.len()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Exact (case-insensitive) full name first, then the first team whose name contains `input`.
    #[must_use]
    pub fn resolve_team_id(&self, input: &str) -> Option<TeamId> {
        let needle = input.to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.team_ids
            .iter()
            .find(|(name, _)| *name == needle)
            .or_else(|| self.team_ids.iter().find(|(name, _)| name.contains(&needle)))
            .map(|(_, id)| *id)
    }

    #[must_use]
    pub fn resolve_player_id(&self, full_name: &str) -> Option<PlayerId> {
        let wanted = full_name.to_lowercase();
        self.players
            .iter()
            .find(|player| player.full_name.to_lowercase() == wanted)
            .map(|player| player.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::static_teams;

    fn resolver() -> Resolver {
        let teams = static_teams().expect("embedded teams parse");
        let players = vec![
            Player {
                id: 2544,
                full_name: "LeBron James".to_string(),
            },
            Player {
                id: 201939,
                full_name: "Stephen Curry".to_string(),
            },
        ];
        Resolver::new(&teams, players)
    }

    #[test]
    fn every_team_resolves_by_full_name_in_any_case() {
        let resolver = resolver();
        for team in static_teams().expect("embedded teams parse") {
            assert_eq!(resolver.resolve_team_id(&team.full_name), Some(team.id));
            assert_eq!(
                resolver.resolve_team_id(&team.full_name.to_uppercase()),
                Some(team.id)
            );
        }
    }

    #[test]
    fn every_substring_of_a_team_name_resolves_to_some_team() {
        let resolver = resolver();
        let teams = static_teams().expect("embedded teams parse");
        let ids: Vec<TeamId> = teams.iter().map(|t| t.id).collect();
        for team in &teams {
            let chars: Vec<char> = team.full_name.chars().collect();
            for start in 0..chars.len() {
                for end in start + 1..=chars.len() {
                    let sub: String = chars[start..end].iter().collect();
                    let id = resolver.resolve_team_id(&sub);
                    assert!(
                        id.is_some_and(|id| ids.contains(&id)),
                        "substring {sub:?} of {} did not resolve",
                        team.full_name
                    );
                }
            }
        }
    }

    #[test]
    fn ambiguous_substring_takes_first_team_in_roster_order() {
        let resolver = resolver();
        // both Los Angeles teams match; the Clippers come first in the roster
        assert_eq!(resolver.resolve_team_id("los angeles"), Some(1_610_612_746));
        assert_eq!(resolver.resolve_team_id("lakers"), Some(1_610_612_747));
    }

    #[test]
    fn unknown_or_empty_team_does_not_resolve() {
        let resolver = resolver();
        assert_eq!(resolver.resolve_team_id("seattle supersonics"), None);
        assert_eq!(resolver.resolve_team_id(""), None);
    }

    #[test]
    fn player_needs_full_name_match() {
        let resolver = resolver();
        assert_eq!(resolver.resolve_player_id("lebron JAMES"), Some(2544));
        assert_eq!(resolver.resolve_player_id("LeBron"), None);
        assert_eq!(resolver.resolve_player_id("Michael Jordan"), None);
    }
}
