use serde::Serialize;

use portal_database::database::search::{search_all, search_page, Searchable};
use portal_database::models::{
    industry_profiles, pi_profiles, publications, research_facilities, student_profiles,
    technologies, vendor_profiles,
};

use crate::error::PortalError;

/// Page size of the per-type "load more" operation.
pub const PAGE_SIZE: u64 = 5;

/**
 * The seven result tabs of the faceted search, in their fixed priority
 * order. PI profiles are both the highest-priority tab and the default
 * when nothing matches, so the first render always has a tab selected.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTab {
    PiProfile,
    Student,
    Vendor,
    Industry,
    ResearchFacilities,
    Publication,
    Technology,
}

impl SearchTab {
    pub const PRIORITY: [SearchTab; 7] = [
        SearchTab::PiProfile,
        SearchTab::Student,
        SearchTab::Vendor,
        SearchTab::Industry,
        SearchTab::ResearchFacilities,
        SearchTab::Publication,
        SearchTab::Technology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchTab::PiProfile => "PI-profile",
            SearchTab::Student => "Student",
            SearchTab::Vendor => "Vendor",
            SearchTab::Industry => "Industry",
            SearchTab::ResearchFacilities => "Research-Facilities",
            SearchTab::Publication => "Publication",
            SearchTab::Technology => "Technology",
        }
    }

    /// Tab names as they appear in URLs and responses. Anything else is
    /// None; callers fall back to the resolution algorithm.
    pub fn parse(raw: &str) -> Option<Self> {
        SearchTab::PRIORITY.iter().copied().find(|t| t.as_str() == raw)
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    #[serde(rename = "PI-profile")]
    pub profiles: Vec<pi_profiles::Model>,
    #[serde(rename = "Student")]
    pub students: Vec<student_profiles::Model>,
    #[serde(rename = "Vendor")]
    pub vendors: Vec<vendor_profiles::Model>,
    #[serde(rename = "Industry")]
    pub industries: Vec<industry_profiles::Model>,
    #[serde(rename = "Research-Facilities")]
    pub facilities: Vec<research_facilities::Model>,
    #[serde(rename = "Publication")]
    pub publications: Vec<publications::Model>,
    #[serde(rename = "Technology")]
    pub technologies: Vec<technologies::Model>,
    pub active_tab: &'static str,
}

impl SearchResponse {
    fn empty(query: &str, active_tab: SearchTab) -> Self {
        SearchResponse {
            query: query.to_string(),
            profiles: Vec::new(),
            students: Vec::new(),
            vendors: Vec::new(),
            industries: Vec::new(),
            facilities: Vec::new(),
            publications: Vec::new(),
            technologies: Vec::new(),
            active_tab: active_tab.as_str(),
        }
    }
}

/**
 * Pick the tab to show. A recognized hint wins. Otherwise PI-profile
 * wins whenever it has any results, then the first non-empty tab in
 * priority order, then the PI-profile default when everything is empty.
 */
pub fn resolve_active_tab(hint: Option<SearchTab>, counts: &[(SearchTab, usize)]) -> SearchTab {
    if let Some(hint) = hint {
        return hint;
    }
    let pi_count = counts
        .iter()
        .find(|(tab, _)| *tab == SearchTab::PiProfile)
        .map(|(_, count)| *count)
        .unwrap_or(0);
    if pi_count > 0 {
        return SearchTab::PiProfile;
    }
    for tab in SearchTab::PRIORITY {
        let count = counts
            .iter()
            .find(|(t, _)| *t == tab)
            .map(|(_, count)| *count)
            .unwrap_or(0);
        if count > 0 {
            return tab;
        }
    }
    SearchTab::PiProfile
}

/**
 * Run the free-text query against all seven entity types and resolve
 * the active tab
 *
 * # Arguments
 * @param query: &str - The free-text query; empty means no results
 * @param active_tab_hint: Option<&str> - The caller's current tab, if any
 *
 * # Returns
 * @return Result<SearchResponse, PortalError> - Per-type result lists and the resolved tab
 */
pub async fn run_search(
    query: &str,
    active_tab_hint: Option<&str>,
) -> Result<SearchResponse, PortalError> {
    let query = query.trim();
    let hint = active_tab_hint.and_then(SearchTab::parse);

    if query.is_empty() {
        return Ok(SearchResponse::empty(
            query,
            hint.unwrap_or(SearchTab::PiProfile),
        ));
    }

    let profiles = search_all::<pi_profiles::Entity>(query).await?;
    let students = search_all::<student_profiles::Entity>(query).await?;
    let vendors = search_all::<vendor_profiles::Entity>(query).await?;
    let industries = search_all::<industry_profiles::Entity>(query).await?;
    let facilities = search_all::<research_facilities::Entity>(query).await?;
    let publications = search_all::<publications::Entity>(query).await?;
    let technologies = search_all::<technologies::Entity>(query).await?;

    let counts = [
        (SearchTab::PiProfile, profiles.len()),
        (SearchTab::Student, students.len()),
        (SearchTab::Vendor, vendors.len()),
        (SearchTab::Industry, industries.len()),
        (SearchTab::ResearchFacilities, facilities.len()),
        (SearchTab::Publication, publications.len()),
        (SearchTab::Technology, technologies.len()),
    ];
    let active_tab = resolve_active_tab(hint, &counts);

    Ok(SearchResponse {
        query: query.to_string(),
        profiles,
        students,
        vendors,
        industries,
        facilities,
        publications,
        technologies,
        active_tab: active_tab.as_str(),
    })
}

#[derive(Debug, Serialize)]
pub struct LoadMoreResponse {
    pub items: serde_json::Value,
    pub total: u64,
}

async fn load_page<E>(query: &str, offset: u64) -> Result<LoadMoreResponse, PortalError>
where
    E: Searchable,
    E::Model: Serialize + Send + Sync,
{
    let (items, total) = search_page::<E>(query, offset, PAGE_SIZE).await?;
    let items = serde_json::to_value(items).map_err(|e| PortalError::Transient(e.to_string()))?;
    Ok(LoadMoreResponse { items, total })
}

/**
 * Fetch the next page of matches for one entity type. Runs the same
 * filter as run_search, so walking offsets reproduces the full result
 * list without gaps or duplicates.
 *
 * # Arguments
 * @param tab: SearchTab - The entity type to page through
 * @param query: &str - The free-text query
 * @param offset: u64 - How many matches to skip
 *
 * # Returns
 * @return Result<LoadMoreResponse, PortalError> - The page and total match count
 */
pub async fn load_more(
    tab: SearchTab,
    query: &str,
    offset: u64,
) -> Result<LoadMoreResponse, PortalError> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(LoadMoreResponse {
            items: serde_json::Value::Array(Vec::new()),
            total: 0,
        });
    }
    match tab {
        SearchTab::PiProfile => load_page::<pi_profiles::Entity>(query, offset).await,
        SearchTab::Student => load_page::<student_profiles::Entity>(query, offset).await,
        SearchTab::Vendor => load_page::<vendor_profiles::Entity>(query, offset).await,
        SearchTab::Industry => load_page::<industry_profiles::Entity>(query, offset).await,
        SearchTab::ResearchFacilities => {
            load_page::<research_facilities::Entity>(query, offset).await
        }
        SearchTab::Publication => load_page::<publications::Entity>(query, offset).await,
        SearchTab::Technology => load_page::<technologies::Entity>(query, offset).await,
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use portal_database::sea_orm::{ActiveModelTrait, Set};
    use portal_database::{get_database_connection, setup_test_environment};
    use serial_test::serial;

    #[test]
    fn test_tab_names_round_trip() {
        for tab in SearchTab::PRIORITY {
            assert_eq!(SearchTab::parse(tab.as_str()), Some(tab));
        }
        assert_eq!(SearchTab::parse("technologies"), None);
        assert_eq!(SearchTab::parse(""), None);
    }

    #[test]
    fn test_pi_profile_wins_whenever_it_has_results() {
        let counts = [
            (SearchTab::PiProfile, 1),
            (SearchTab::Student, 50),
            (SearchTab::Vendor, 50),
        ];
        assert_eq!(resolve_active_tab(None, &counts), SearchTab::PiProfile);
    }

    #[test]
    fn test_first_non_empty_tab_in_priority_order_wins() {
        let counts = [
            (SearchTab::PiProfile, 0),
            (SearchTab::Student, 0),
            (SearchTab::Vendor, 3),
            (SearchTab::Publication, 9),
        ];
        assert_eq!(resolve_active_tab(None, &counts), SearchTab::Vendor);
    }

    #[test]
    fn test_all_empty_falls_back_to_default() {
        assert_eq!(resolve_active_tab(None, &[]), SearchTab::PiProfile);
    }

    #[test]
    fn test_recognized_hint_wins() {
        let counts = [(SearchTab::PiProfile, 5)];
        assert_eq!(
            resolve_active_tab(Some(SearchTab::Publication), &counts),
            SearchTab::Publication
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_empty_query_returns_empty_lists_and_default_tab() {
        // The empty path never touches the database.
        let response = run_search("", None).await.unwrap();
        assert!(response.profiles.is_empty());
        assert!(response.students.is_empty());
        assert!(response.vendors.is_empty());
        assert!(response.industries.is_empty());
        assert!(response.facilities.is_empty());
        assert!(response.publications.is_empty());
        assert!(response.technologies.is_empty());
        assert_eq!(response.active_tab, "PI-profile");

        let blank = run_search("   ", None).await.unwrap();
        assert_eq!(blank.active_tab, "PI-profile");
    }

    #[tokio::test]
    #[serial]
    async fn test_unknown_hint_falls_back_to_resolution() {
        setup_test_environment().await;
        let conn = get_database_connection().await.unwrap();
        vendor_profiles::ActiveModel {
            company_name: Set(Some("Acme Scientific".to_string())),
            ..Default::default()
        }
        .insert(&conn)
        .await
        .unwrap();

        let response = run_search("acme", Some("no-such-tab")).await.unwrap();
        assert_eq!(response.active_tab, "Vendor");
        assert_eq!(response.vendors.len(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_fan_out_and_load_more_agree() {
        setup_test_environment().await;
        let conn = get_database_connection().await.unwrap();
        for i in 0..6 {
            student_profiles::ActiveModel {
                name: Set(Some(format!("Tissue Culture Student {}", i))),
                ..Default::default()
            }
            .insert(&conn)
            .await
            .unwrap();
        }

        let response = run_search("tissue culture", None).await.unwrap();
        assert_eq!(response.students.len(), 6);
        assert_eq!(response.active_tab, "Student");

        let first = load_more(SearchTab::Student, "tissue culture", 0).await.unwrap();
        assert_eq!(first.total, 6);
        assert_eq!(first.items.as_array().unwrap().len(), 5);

        let second = load_more(SearchTab::Student, "tissue culture", 5).await.unwrap();
        assert_eq!(second.total, 6);
        assert_eq!(second.items.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_load_more_with_empty_query_is_empty() {
        let response = load_more(SearchTab::Vendor, "  ", 0).await.unwrap();
        assert_eq!(response.total, 0);
        assert!(response.items.as_array().unwrap().is_empty());
    }
}
