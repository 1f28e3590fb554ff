//! Filter criteria and matching.
//!
//! A profile matches when every active dimension holds (AND across
//! dimensions); an empty dimension imposes no constraint.

use serde::{Deserialize, Serialize};

use crate::models::Profile;

/// The active set of filter constraints. Transient: held only in memory and
/// in the query string, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the profile name.
    pub search_query: String,
    /// Exact role match (case-sensitive).
    pub role: String,
    /// Exact availability match against the stored classifier string.
    pub availability: String,
    /// Every selected skill must be present in the profile's skill set.
    pub selected_skills: Vec<String>,
}

impl FilterCriteria {
    /// True when no dimension is active.
    pub fn is_empty(&self) -> bool {
        self.search_query.is_empty()
            && self.role.is_empty()
            && self.availability.is_empty()
            && self.selected_skills.is_empty()
    }

    /// Evaluate a single profile against the active criteria.
    pub fn matches(&self, profile: &Profile) -> bool {
        if !self.search_query.is_empty()
            && !profile
                .name
                .to_lowercase()
                .contains(&self.search_query.to_lowercase())
        {
            return false;
        }

        if !self.role.is_empty() && profile.role != self.role {
            return false;
        }

        if !self.availability.is_empty() && profile.availability.as_str() != self.availability {
            return false;
        }

        if !self.selected_skills.is_empty() {
            let has_all = self
                .selected_skills
                .iter()
                .all(|skill| profile.skills.contains(skill));
            if !has_all {
                return false;
            }
        }

        true
    }

    /// Stable filter over the full record set, preserving input order.
    /// Re-evaluated from scratch on every call; the expected data size is
    /// tens to low hundreds of records.
    pub fn apply<'a>(&self, profiles: &'a [Profile]) -> Vec<&'a Profile> {
        profiles.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, MediaType};

    fn profile(name: &str, role: &str, availability: Availability, skills: &[&str]) -> Profile {
        Profile {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            role: role.to_string(),
            experience: "5 years".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            availability,
            media_type: MediaType::Image,
            media_url: "https://example.com/a.png".to_string(),
            thumbnail_url: None,
            bio: None,
            email: None,
            location: None,
            cv_url: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    fn sample() -> Vec<Profile> {
        vec![
            profile(
                "Sarah Johnson",
                "Engineer",
                Availability::Available,
                &["Go", "SQL", "Docker"],
            ),
            profile(
                "Michael Chen",
                "Accountant",
                Availability::Busy,
                &["Excel", "SQL"],
            ),
            profile(
                "Emma Williams",
                "Engineer",
                Availability::OnLeave,
                &["Go", "Rust"],
            ),
        ]
    }

    #[test]
    fn test_empty_criteria_includes_everything() {
        let profiles = sample();
        let criteria = FilterCriteria::default();
        let filtered = criteria.apply(&profiles);
        assert_eq!(filtered.len(), profiles.len());
        // Stable filter: same order as input.
        for (got, want) in filtered.iter().zip(profiles.iter()) {
            assert_eq!(got.id, want.id);
        }
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let profiles = sample();
        let criteria = FilterCriteria {
            search_query: "SARAH".to_string(),
            ..Default::default()
        };
        let filtered = criteria.apply(&profiles);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Sarah Johnson");

        let criteria = FilterCriteria {
            search_query: "ll".to_string(),
            ..Default::default()
        };
        assert_eq!(criteria.apply(&profiles).len(), 1); // Williams
    }

    #[test]
    fn test_role_is_exact_and_case_sensitive() {
        let profiles = sample();
        let criteria = FilterCriteria {
            role: "Engineer".to_string(),
            ..Default::default()
        };
        assert_eq!(criteria.apply(&profiles).len(), 2);

        let criteria = FilterCriteria {
            role: "engineer".to_string(),
            ..Default::default()
        };
        assert_eq!(criteria.apply(&profiles).len(), 0);
    }

    #[test]
    fn test_availability_exact_match() {
        let profiles = sample();
        let criteria = FilterCriteria {
            availability: "On Leave".to_string(),
            ..Default::default()
        };
        let filtered = criteria.apply(&profiles);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Emma Williams");
    }

    #[test]
    fn test_skills_require_subset() {
        let profiles = sample();
        let criteria = FilterCriteria {
            selected_skills: vec!["Go".to_string(), "SQL".to_string()],
            ..Default::default()
        };
        let filtered = criteria.apply(&profiles);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Sarah Johnson");

        // AND across skills, not OR: one missing skill excludes the record.
        let criteria = FilterCriteria {
            selected_skills: vec!["Go".to_string(), "Excel".to_string()],
            ..Default::default()
        };
        assert_eq!(criteria.apply(&profiles).len(), 0);
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let profiles = sample();
        let criteria = FilterCriteria {
            role: "Engineer".to_string(),
            availability: "Available".to_string(),
            ..Default::default()
        };
        let filtered = criteria.apply(&profiles);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Sarah Johnson");
    }

    #[test]
    fn test_no_match_yields_empty() {
        let profiles = sample();
        let criteria = FilterCriteria {
            search_query: "zzz-no-such-name".to_string(),
            ..Default::default()
        };
        assert!(criteria.apply(&profiles).is_empty());
    }

    #[test]
    fn test_unknown_availability_matches_only_literal_unknown() {
        let mut profiles = sample();
        profiles.push(profile(
            "Ghost",
            "Engineer",
            Availability::Unknown,
            &["Go"],
        ));

        let criteria = FilterCriteria {
            availability: "Available".to_string(),
            ..Default::default()
        };
        assert!(criteria.apply(&profiles).iter().all(|p| p.name != "Ghost"));

        let criteria = FilterCriteria {
            availability: "Unknown".to_string(),
            ..Default::default()
        };
        let filtered = criteria.apply(&profiles);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Ghost");
    }
}
