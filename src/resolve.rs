use crate::model::{StandingEntry, Team};

/// Finds the first table entry whose name or short name contains `name`,
/// ignoring case.
///
/// Matching is lenient: a short needle such as "int" can hit an unintended
/// club, and the first hit in table order wins.
pub fn resolve_team(name: &str, standings: &[StandingEntry]) -> Option<Team> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    standings
        .iter()
        .find(|entry| {
            entry.team.name.to_lowercase().contains(&needle)
                || entry
                    .team
                    .short_name
                    .as_deref()
                    .is_some_and(|short| short.to_lowercase().contains(&needle))
        })
        .map(|entry| Team {
            id: entry.team.id,
            name: entry.team.name.clone(),
            crest: entry.team.crest.clone(),
            position: entry.position,
        })
}
