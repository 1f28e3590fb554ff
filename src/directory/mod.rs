//! The directory engine: filtering, facets, pagination, and the
//! query-string codec behind every listing surface.
//!
//! The public page and the embed page consume this one engine; the only
//! differences between them are configuration (page size, header
//! visibility), not logic.

mod facets;
mod filter;
mod page;
pub mod query;

pub use facets::Facets;
pub use filter::FilterCriteria;
pub use page::page_bounds;

use crate::models::Profile;

/// A loaded record set with the active criteria and current page.
///
/// Changing the criteria resets the page to 1 in the same step, so a slice
/// taken afterwards can never come from a stale page of a shrunk result set.
#[derive(Debug)]
pub struct Directory {
    profiles: Vec<Profile>,
    page_size: usize,
    criteria: FilterCriteria,
    current_page: usize,
}

impl Directory {
    pub fn new(profiles: Vec<Profile>, page_size: usize) -> Self {
        Self {
            profiles,
            page_size,
            criteria: FilterCriteria::default(),
            current_page: 1,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the active criteria and reset to page 1.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.current_page = 1;
    }

    /// Jump to a page, clamped to the valid range. A no-op beyond the
    /// bounds rather than an error.
    pub fn set_page(&mut self, page: usize) {
        let filtered_len = self.filtered().len();
        self.current_page = page_bounds(filtered_len, self.page_size, page).page;
    }

    pub fn next_page(&mut self) {
        self.set_page(self.current_page + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        let filtered_len = self.filtered().len();
        page_bounds(filtered_len, self.page_size, self.current_page).total_pages
    }

    pub fn total_records(&self) -> usize {
        self.profiles.len()
    }

    pub fn filtered(&self) -> Vec<&Profile> {
        self.criteria.apply(&self.profiles)
    }

    /// The slice of filtered records on the current page.
    pub fn page(&self) -> Vec<&Profile> {
        let filtered = self.filtered();
        let bounds = page_bounds(filtered.len(), self.page_size, self.current_page);
        filtered[bounds.start..bounds.end].to_vec()
    }

    pub fn facets(&self) -> Facets {
        Facets::extract(&self.profiles)
    }

    /// Canonical query-string form of the active criteria.
    pub fn query_string(&self) -> String {
        query::encode(&self.criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, MediaType};

    fn profiles(count: usize) -> Vec<Profile> {
        (0..count)
            .map(|i| Profile {
                id: format!("id-{i}"),
                name: format!("Member {i}"),
                role: if i % 2 == 0 { "Engineer" } else { "Analyst" }.to_string(),
                experience: "3 years".to_string(),
                skills: vec!["Go".to_string()],
                availability: Availability::Available,
                media_type: MediaType::Image,
                media_url: String::new(),
                thumbnail_url: None,
                bio: None,
                email: None,
                location: None,
                cv_url: None,
                created_at: format!("2025-01-{:02}T00:00:00Z", i + 1),
            })
            .collect()
    }

    #[test]
    fn test_page_slices_filtered_set() {
        let mut dir = Directory::new(profiles(17), 8);
        assert_eq!(dir.total_pages(), 3);
        assert_eq!(dir.page().len(), 8);

        dir.set_page(3);
        assert_eq!(dir.page().len(), 1);
        assert_eq!(dir.page()[0].id, "id-16");
    }

    #[test]
    fn test_page_navigation_clamps() {
        let mut dir = Directory::new(profiles(17), 8);
        dir.set_page(99);
        assert_eq!(dir.current_page(), 3);
        dir.next_page();
        assert_eq!(dir.current_page(), 3);
        dir.set_page(0);
        assert_eq!(dir.current_page(), 1);
        dir.previous_page();
        assert_eq!(dir.current_page(), 1);
    }

    #[test]
    fn test_criteria_change_resets_page_before_slicing() {
        let mut dir = Directory::new(profiles(17), 8);
        dir.set_page(3);

        // Shrinks the filtered set to 9 records (2 pages).
        dir.set_criteria(FilterCriteria {
            role: "Engineer".to_string(),
            ..Default::default()
        });
        assert_eq!(dir.current_page(), 1);
        assert_eq!(dir.total_pages(), 2);
        assert_eq!(dir.page().len(), 8);
    }

    #[test]
    fn test_empty_result_has_zero_pages_and_empty_slice() {
        let mut dir = Directory::new(profiles(5), 8);
        dir.set_criteria(FilterCriteria {
            search_query: "zzz-no-such-name".to_string(),
            ..Default::default()
        });
        assert_eq!(dir.total_pages(), 0);
        assert!(dir.page().is_empty());
    }

    #[test]
    fn test_query_string_follows_criteria() {
        let mut dir = Directory::new(profiles(3), 8);
        assert_eq!(dir.query_string(), "");

        dir.set_criteria(FilterCriteria {
            role: "Engineer".to_string(),
            ..Default::default()
        });
        assert_eq!(dir.query_string(), "role=Engineer");
    }
}
