//! Client-side leaderboard ranking. The backend returns profiles; places are
//! assigned here on every fetch and never persisted.

use crate::features::badges::types::UserProfile;

/// A ranked row derived from a profile for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub place: u32,
    pub username: String,
    pub points: u64,
    pub badges: u32,
}

/// Sorts profiles by descending reputation score and assigns places starting
/// at 1. The sort is stable, so ties keep their input order.
pub fn rank_profiles(profiles: &[UserProfile]) -> Vec<LeaderboardEntry> {
    let mut ordered: Vec<&UserProfile> = profiles.iter().collect();
    ordered.sort_by(|a, b| b.reputation_score.cmp(&a.reputation_score));

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, profile)| LeaderboardEntry {
            place: index as u32 + 1,
            username: profile.github_username.clone(),
            points: profile.reputation_score,
            badges: profile.total_badges,
        })
        .collect()
}

/// Placeholder rows shown when the backend is unreachable, so the view never
/// goes blank.
pub fn demo_entries() -> Vec<LeaderboardEntry> {
    (1..=10)
        .map(|place| LeaderboardEntry {
            place,
            username: format!("developer{place}"),
            points: 4600 - u64::from(place) * 100,
            badges: 11 - place,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{demo_entries, rank_profiles};
    use crate::features::badges::types::UserProfile;

    fn profile(username: &str, score: u64, badges: u32) -> UserProfile {
        UserProfile {
            user_principal: format!("{username}-principal"),
            github_username: username.to_string(),
            github_connected: true,
            github_data: None,
            created_at: 0,
            updated_at: 0,
            last_github_sync: None,
            reputation_score: score,
            badges: Vec::new(),
            total_badges: badges,
        }
    }

    #[test]
    fn ranks_descending_by_score() {
        let profiles = vec![
            profile("third", 3500, 2),
            profile("first", 4500, 8),
            profile("second", 3800, 5),
        ];

        let ranked = rank_profiles(&profiles);

        assert_eq!(ranked.len(), 3);
        assert_eq!(
            ranked.iter().map(|entry| entry.place).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(ranked[0].username, "first");
        assert_eq!(ranked[1].username, "second");
        assert_eq!(ranked[2].username, "third");
    }

    #[test]
    fn ties_keep_input_order() {
        let profiles = vec![
            profile("alpha", 4500, 8),
            profile("beta", 4500, 7),
            profile("gamma", 4500, 6),
        ];

        let ranked = rank_profiles(&profiles);

        assert_eq!(ranked[0].username, "alpha");
        assert_eq!(ranked[1].username, "beta");
        assert_eq!(ranked[2].username, "gamma");
        assert_eq!(
            ranked.iter().map(|entry| entry.place).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn demo_entries_are_already_ranked() {
        let entries = demo_entries();
        assert_eq!(entries.len(), 10);
        assert!(entries.windows(2).all(|pair| {
            pair[0].place < pair[1].place && pair[0].points >= pair[1].points
        }));
    }
}
