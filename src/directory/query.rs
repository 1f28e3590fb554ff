//! Query-string codec for the filter criteria.
//!
//! Recognized parameters: `role`, `availability`, `skills` (comma-joined),
//! `search`. Absence of a parameter means no constraint on that dimension;
//! unrecognized parameters are ignored. A fully-unfiltered state encodes to
//! the empty string so callers can build a clean base URL without a
//! trailing `?`.

use serde::{Deserialize, Serialize};

use super::FilterCriteria;

/// Raw filter parameters as they appear in a query string or a `setFilters`
/// message payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    pub role: Option<String>,
    pub availability: Option<String>,
    pub skills: Option<String>,
    pub search: Option<String>,
}

impl FilterParams {
    /// Decode into criteria. Skill tokens are trimmed and empty tokens
    /// dropped, so `skills=Go, SQL,` yields `["Go", "SQL"]`.
    pub fn into_criteria(self) -> FilterCriteria {
        let selected_skills = self
            .skills
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        FilterCriteria {
            search_query: self.search.unwrap_or_default(),
            role: self.role.unwrap_or_default(),
            availability: self.availability.unwrap_or_default(),
            selected_skills,
        }
    }
}

/// Serialize only the non-empty dimensions, in a fixed parameter order.
pub fn encode(criteria: &FilterCriteria) -> String {
    if criteria.is_empty() {
        return String::new();
    }

    let mut pairs: Vec<(&str, String)> = Vec::new();
    if !criteria.role.is_empty() {
        pairs.push(("role", criteria.role.clone()));
    }
    if !criteria.availability.is_empty() {
        pairs.push(("availability", criteria.availability.clone()));
    }
    if !criteria.selected_skills.is_empty() {
        pairs.push(("skills", criteria.selected_skills.join(",")));
    }
    if !criteria.search_query.is_empty() {
        pairs.push(("search", criteria.search_query.clone()));
    }

    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a raw query string back into criteria. The inverse of [`encode`]
/// for every criteria value; unknown parameters and malformed escapes are
/// skipped rather than failing.
pub fn decode(query_string: &str) -> FilterCriteria {
    let mut params = FilterParams::default();
    for pair in query_string.trim_start_matches('?').split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        // Form-urlencoded input uses `+` for spaces; a literal plus arrives
        // as %2B and is untouched by this replacement.
        let value = value.replace('+', " ");
        let Ok(value) = urlencoding::decode(&value) else {
            continue;
        };
        let value = value.into_owned();
        match key {
            "role" => params.role = Some(value),
            "availability" => params.availability = Some(value),
            "skills" => params.skills = Some(value),
            "search" => params.search = Some(value),
            _ => {}
        }
    }
    params.into_criteria()
}

/// Cross-window sync messages exchanged with an embedding page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SyncMessage {
    /// Inbound: the hosting page pushes filter state into the embed.
    #[serde(rename = "setFilters")]
    SetFilters { filters: FilterParams },
    /// Outbound: the canonical query string the hosting page should mirror
    /// into its own address bar.
    #[serde(rename = "updateURL")]
    UpdateUrl {
        #[serde(rename = "queryString")]
        query_string: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_omits_empty_dimensions() {
        let criteria = FilterCriteria {
            role: "Engineer".to_string(),
            ..Default::default()
        };
        assert_eq!(encode(&criteria), "role=Engineer");

        assert_eq!(encode(&FilterCriteria::default()), "");
    }

    #[test]
    fn test_round_trip_preserves_criteria() {
        let criteria = FilterCriteria {
            role: "Engineer".to_string(),
            availability: String::new(),
            selected_skills: vec!["Go".to_string(), "SQL".to_string()],
            search_query: "ann".to_string(),
        };
        let encoded = encode(&criteria);
        assert_eq!(encoded, "role=Engineer&skills=Go%2CSQL&search=ann");
        assert_eq!(decode(&encoded), criteria);
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let criteria = FilterCriteria {
            availability: "On Leave".to_string(),
            ..Default::default()
        };
        let encoded = encode(&criteria);
        assert_eq!(encoded, "availability=On%20Leave");
        assert_eq!(decode(&encoded), criteria);
    }

    #[test]
    fn test_decode_accepts_plus_for_space() {
        // URLSearchParams-built links encode spaces as `+`
        let criteria = decode("availability=On+Leave&skills=Financial+Modeling");
        assert_eq!(criteria.availability, "On Leave");
        assert_eq!(criteria.selected_skills, vec!["Financial Modeling"]);

        // A percent-encoded plus stays a literal plus
        let criteria = decode("search=C%2B%2B");
        assert_eq!(criteria.search_query, "C++");
    }

    #[test]
    fn test_decode_trims_skill_tokens() {
        let criteria = decode("skills=Go,%20SQL%20,,Docker");
        assert_eq!(criteria.selected_skills, vec!["Go", "SQL", "Docker"]);
    }

    #[test]
    fn test_decode_ignores_unknown_params() {
        let criteria = decode("role=Engineer&utm_source=newsletter&page=3");
        assert_eq!(criteria.role, "Engineer");
        assert!(criteria.search_query.is_empty());
        assert!(criteria.selected_skills.is_empty());
    }

    #[test]
    fn test_decode_empty_string_is_no_constraint() {
        assert!(decode("").is_empty());
        assert!(decode("?").is_empty());
    }

    #[test]
    fn test_sync_message_wire_shape() {
        let inbound: SyncMessage = serde_json::from_str(
            r#"{"type":"setFilters","filters":{"role":"Engineer","skills":"Go,SQL"}}"#,
        )
        .unwrap();
        let SyncMessage::SetFilters { filters } = inbound else {
            panic!("expected setFilters");
        };
        let criteria = filters.into_criteria();
        assert_eq!(criteria.role, "Engineer");
        assert_eq!(criteria.selected_skills, vec!["Go", "SQL"]);

        let outbound = SyncMessage::UpdateUrl {
            query_string: "role=Engineer".to_string(),
        };
        let json = serde_json::to_value(&outbound).unwrap();
        assert_eq!(json["type"], "updateURL");
        assert_eq!(json["queryString"], "role=Engineer");
    }
}
