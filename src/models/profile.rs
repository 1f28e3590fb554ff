//! Team member profile model matching the frontend Profile interface.

use serde::{Deserialize, Serialize};

/// Availability classifier for a profile.
///
/// Stored as a plain string; values read from the database that are not part
/// of the closed set map to `Unknown` instead of passing through unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    Busy,
    #[serde(rename = "On Leave")]
    OnLeave,
    Unknown,
}

impl Availability {
    pub fn from_db(value: &str) -> Self {
        match value {
            "Available" => Availability::Available,
            "Busy" => Availability::Busy,
            "On Leave" => Availability::OnLeave,
            _ => Availability::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Busy => "Busy",
            Availability::OnLeave => "On Leave",
            Availability::Unknown => "Unknown",
        }
    }
}

/// Kind of media attached to a profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Unknown,
}

impl MediaType {
    pub fn from_db(value: &str) -> Self {
        match value {
            "image" => MediaType::Image,
            "video" => MediaType::Video,
            _ => MediaType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Unknown => "unknown",
        }
    }
}

/// A team member's public profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub role: String,
    /// Free-form experience descriptor, e.g. "5 years".
    pub experience: String,
    pub skills: Vec<String>,
    pub availability: Availability,
    pub media_type: MediaType,
    pub media_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_url: Option<String>,
    pub created_at: String,
}

/// Request body for creating a new profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub availability: Availability,
    pub media_type: MediaType,
    pub media_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub cv_url: Option<String>,
}

/// Request body for updating an existing profile. Absent fields keep their
/// stored value, and so does an explicit `null` — the optional fields
/// (bio, email, location, CV and thumbnail URLs) cannot be cleared through
/// this request, only overwritten.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub media_type: Option<MediaType>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub cv_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_round_trip() {
        for value in ["Available", "Busy", "On Leave"] {
            assert_eq!(Availability::from_db(value).as_str(), value);
        }
    }

    #[test]
    fn test_unrecognized_availability_maps_to_unknown() {
        assert_eq!(Availability::from_db("In Office"), Availability::Unknown);
        assert_eq!(Availability::from_db(""), Availability::Unknown);
    }

    #[test]
    fn test_unrecognized_media_type_maps_to_unknown() {
        assert_eq!(MediaType::from_db("image"), MediaType::Image);
        assert_eq!(MediaType::from_db("gif"), MediaType::Unknown);
    }

    #[test]
    fn test_availability_serializes_with_space() {
        let json = serde_json::to_string(&Availability::OnLeave).unwrap();
        assert_eq!(json, "\"On Leave\"");
    }
}
