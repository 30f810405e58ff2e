//! Profile and badge types served by the data backend. Badges are immutable
//! once issued; the client only ever reads them. Enum wire formats mirror the
//! backend's variant encoding: tiers are bare strings (`"Bronze1"`) and
//! categories are single-key objects carrying their qualifier
//! (`{"Language": "Rust"}`).

use serde::{Deserialize, Serialize};

/// Badge tier, ordered from Bronze I up to Gold III. The set is closed: a
/// tier never changes after issuance and no other values exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BadgeTier {
    Bronze1,
    Bronze2,
    Bronze3,
    Silver1,
    Silver2,
    Silver3,
    Gold1,
    Gold2,
    Gold3,
}

impl BadgeTier {
    /// Human-readable tier name with roman numerals.
    pub fn display_name(self) -> &'static str {
        match self {
            BadgeTier::Bronze1 => "Bronze I",
            BadgeTier::Bronze2 => "Bronze II",
            BadgeTier::Bronze3 => "Bronze III",
            BadgeTier::Silver1 => "Silver I",
            BadgeTier::Silver2 => "Silver II",
            BadgeTier::Silver3 => "Silver III",
            BadgeTier::Gold1 => "Gold I",
            BadgeTier::Gold2 => "Gold II",
            BadgeTier::Gold3 => "Gold III",
        }
    }

    /// Path to the tier artwork bundled with the app.
    pub fn image_path(self) -> &'static str {
        match self {
            BadgeTier::Bronze1 => "/assets/badges/bronze1.png",
            BadgeTier::Bronze2 => "/assets/badges/bronze2.png",
            BadgeTier::Bronze3 => "/assets/badges/bronze3.png",
            BadgeTier::Silver1 => "/assets/badges/silver1.png",
            BadgeTier::Silver2 => "/assets/badges/silver2.png",
            BadgeTier::Silver3 => "/assets/badges/silver3.png",
            BadgeTier::Gold1 => "/assets/badges/gold1.png",
            BadgeTier::Gold2 => "/assets/badges/gold2.png",
            BadgeTier::Gold3 => "/assets/badges/gold3.png",
        }
    }
}

/// Badge category. Each kind carries a free-text qualifier, e.g.
/// `Language("Rust")` or `Achievement("Repository Creator")`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeCategory {
    Language(String),
    Contribution(String),
    Achievement(String),
    Special(String),
}

impl BadgeCategory {
    /// The qualifier string shown in the UI.
    pub fn display_name(&self) -> &str {
        match self {
            BadgeCategory::Language(name)
            | BadgeCategory::Contribution(name)
            | BadgeCategory::Achievement(name)
            | BadgeCategory::Special(name) => name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeAttribute {
    pub trait_type: String,
    pub value: String,
    pub display_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeMetadata {
    pub image_url: String,
    pub animation_url: Option<String>,
    pub attributes: Vec<BadgeAttribute>,
    pub rarity_score: u32,
}

/// An issued credential. Immutable; only appended to a profile's collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: BadgeCategory,
    pub tier: BadgeTier,
    pub earned_at: u64,
    pub criteria_met: Vec<String>,
    pub score_achieved: u32,
    pub metadata: BadgeMetadata,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubData {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: String,
    pub updated_at: String,
}

/// Application-level account record tied to one identity reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_principal: String,
    pub github_username: String,
    pub github_connected: bool,
    pub github_data: Option<GitHubData>,
    pub created_at: u64,
    pub updated_at: u64,
    pub last_github_sync: Option<u64>,
    pub reputation_score: u64,
    pub badges: Vec<Badge>,
    pub total_badges: u32,
}

impl UserProfile {
    /// Display handle: the GitHub login when connected, the username field
    /// otherwise.
    pub fn display_name(&self) -> &str {
        self.github_data
            .as_ref()
            .and_then(|data| data.name.as_deref())
            .unwrap_or(&self.github_username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered_bronze_to_gold() {
        assert!(BadgeTier::Bronze1 < BadgeTier::Bronze3);
        assert!(BadgeTier::Bronze3 < BadgeTier::Silver1);
        assert!(BadgeTier::Silver3 < BadgeTier::Gold1);
        assert!(BadgeTier::Gold1 < BadgeTier::Gold3);
    }

    #[test]
    fn tier_wire_format_is_a_bare_string() {
        let json = serde_json::to_string(&BadgeTier::Silver2).expect("serialize tier");
        assert_eq!(json, "\"Silver2\"");

        let tier: BadgeTier = serde_json::from_str("\"Gold3\"").expect("deserialize tier");
        assert_eq!(tier, BadgeTier::Gold3);
        assert_eq!(tier.display_name(), "Gold III");
    }

    #[test]
    fn category_wire_format_carries_the_qualifier() {
        let category = BadgeCategory::Language("Rust".to_string());
        let json = serde_json::to_string(&category).expect("serialize category");
        assert_eq!(json, "{\"Language\":\"Rust\"}");

        let parsed: BadgeCategory =
            serde_json::from_str("{\"Achievement\":\"Repository Creator\"}")
                .expect("deserialize category");
        assert_eq!(parsed.display_name(), "Repository Creator");
    }

    #[test]
    fn profile_display_name_prefers_github_name() {
        let mut profile = UserProfile {
            user_principal: "aaaa-bbbb".to_string(),
            github_username: "octocat".to_string(),
            github_connected: true,
            github_data: None,
            created_at: 0,
            updated_at: 0,
            last_github_sync: None,
            reputation_score: 0,
            badges: Vec::new(),
            total_badges: 0,
        };
        assert_eq!(profile.display_name(), "octocat");

        profile.github_data = Some(GitHubData {
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            avatar_url: String::new(),
            bio: None,
            public_repos: 8,
            followers: 100,
            following: 1,
            created_at: String::new(),
            updated_at: String::new(),
        });
        assert_eq!(profile.display_name(), "The Octocat");
    }
}
