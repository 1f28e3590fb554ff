//! Facet extraction for the filter panel.

use serde::Serialize;

use crate::models::Profile;

/// Distinct filterable values present in the loaded record set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Facets {
    /// Distinct roles in first-seen order.
    pub roles: Vec<String>,
    /// Distinct skill labels across all profiles, sorted ascending.
    pub skills: Vec<String>,
}

impl Facets {
    /// Pure function of the record sequence; recomputed whenever it changes.
    pub fn extract(profiles: &[Profile]) -> Self {
        let mut roles: Vec<String> = Vec::new();
        for profile in profiles {
            if !roles.contains(&profile.role) {
                roles.push(profile.role.clone());
            }
        }

        let mut skills: Vec<String> = Vec::new();
        for profile in profiles {
            for skill in &profile.skills {
                if !skills.contains(skill) {
                    skills.push(skill.clone());
                }
            }
        }
        skills.sort();

        Facets { roles, skills }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, MediaType};

    fn profile(role: &str, skills: &[&str]) -> Profile {
        Profile {
            id: uuid::Uuid::new_v4().to_string(),
            name: "Test".to_string(),
            role: role.to_string(),
            experience: String::new(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            availability: Availability::Available,
            media_type: MediaType::Image,
            media_url: String::new(),
            thumbnail_url: None,
            bio: None,
            email: None,
            location: None,
            cv_url: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_empty_input_produces_empty_facets() {
        let facets = Facets::extract(&[]);
        assert!(facets.roles.is_empty());
        assert!(facets.skills.is_empty());
    }

    #[test]
    fn test_roles_keep_first_seen_order() {
        let profiles = vec![
            profile("Designer", &[]),
            profile("Engineer", &[]),
            profile("Designer", &[]),
            profile("Analyst", &[]),
        ];
        let facets = Facets::extract(&profiles);
        assert_eq!(facets.roles, vec!["Designer", "Engineer", "Analyst"]);
    }

    #[test]
    fn test_skills_are_deduplicated_and_sorted() {
        let profiles = vec![
            profile("Engineer", &["SQL", "Go"]),
            profile("Analyst", &["Excel", "SQL"]),
        ];
        let facets = Facets::extract(&profiles);
        assert_eq!(facets.skills, vec!["Excel", "Go", "SQL"]);
    }
}
