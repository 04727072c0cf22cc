//! Resource list filtering.

use relmap_core::entity::Resource;

/// Filter state for the resource list panel.
///
/// The text query is a case-insensitive substring match over name,
/// location, and type; the type and status filters are exact matches.
/// An empty query and `None` filters match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    /// Free-text query.
    pub query: String,
    /// Exact type-code filter.
    pub type_code: Option<String>,
    /// Exact status filter.
    pub status: Option<String>,
}

impl ResourceFilter {
    /// Whether a record passes this filter.
    pub fn matches(&self, resource: &Resource) -> bool {
        if let Some(type_code) = &self.type_code {
            if &resource.type_code != type_code {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if &resource.status != status {
                return false;
            }
        }
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        resource.name.to_lowercase().contains(&query)
            || resource.location_name.to_lowercase().contains(&query)
            || resource.type_code.to_lowercase().contains(&query)
    }

    /// The records passing this filter, in input order.
    pub fn apply<'a>(&self, resources: &'a [Resource]) -> Vec<&'a Resource> {
        resources.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relmap_test_utils::fixtures::resource_at;

    fn named(id: &str, name: &str, type_code: &str) -> Resource {
        let mut r = resource_at(id, 1.0, 1.0, type_code);
        r.name = name.to_string();
        r
    }

    #[test]
    fn query_matches_name_location_and_type_case_insensitively() {
        let r = named("r-0", "Red Cross Emergency Shelter", "shelter");

        assert!(ResourceFilter { query: "red cross".into(), ..Default::default() }.matches(&r));
        assert!(ResourceFilter { query: "VILLAGE".into(), ..Default::default() }.matches(&r));
        assert!(ResourceFilter { query: "shel".into(), ..Default::default() }.matches(&r));
        assert!(!ResourceFilter { query: "hospital".into(), ..Default::default() }.matches(&r));
    }

    #[test]
    fn type_and_status_filters_are_exact() {
        let resources = vec![
            named("r-0", "Shelter A", "shelter"),
            named("r-1", "Food Bank", "food"),
        ];
        let filter = ResourceFilter {
            type_code: Some("food".to_string()),
            ..Default::default()
        };
        let hits = filter.apply(&resources);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Food Bank");

        let filter = ResourceFilter {
            status: Some("full".to_string()),
            ..Default::default()
        };
        assert!(filter.apply(&resources).is_empty());
    }

    #[test]
    fn default_filter_matches_everything() {
        let resources = vec![
            named("r-0", "Shelter A", "shelter"),
            named("r-1", "Food Bank", "food"),
        ];
        assert_eq!(ResourceFilter::default().apply(&resources).len(), 2);
    }
}
