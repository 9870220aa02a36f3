//! Landing-page filter: category tab AND free-text search AND city selector.
//!
//! No ranking. Matches keep the order of the source list, and an empty result is
//! a normal outcome.

use std::str::FromStr;

use serde::Serialize;

use crate::errors::AppError;
use crate::models::{Category, Opportunity};

const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(s)
            .map(CategoryFilter::Only)
            .map_err(|_| AppError::Validation(format!("Unknown category '{s}'")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CityFilter {
    #[default]
    All,
    Only(String),
}

impl CityFilter {
    /// Exact, case-sensitive match: the selector only offers cities taken from the data.
    pub fn admits(&self, city: &str) -> bool {
        match self {
            CityFilter::All => true,
            CityFilter::Only(wanted) => wanted == city,
        }
    }
}

impl From<&str> for CityFilter {
    fn from(s: &str) -> Self {
        if s == ALL {
            CityFilter::All
        } else {
            CityFilter::Only(s.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OpportunityFilter {
    pub category: CategoryFilter,
    pub query: String,
    pub city: CityFilter,
}

impl OpportunityFilter {
    /// Builds a filter from the raw UI values (`"all"` means no restriction).
    pub fn from_params(category: &str, query: &str, city: &str) -> Result<Self, AppError> {
        Ok(OpportunityFilter {
            category: category.parse()?,
            query: query.to_string(),
            city: CityFilter::from(city),
        })
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = CityFilter::Only(city.into());
        self
    }

    pub fn matches(&self, opp: &Opportunity) -> bool {
        self.matches_with(opp, &self.needle())
    }

    fn needle(&self) -> String {
        self.query.to_lowercase()
    }

    fn matches_with(&self, opp: &Opportunity, needle: &str) -> bool {
        self.category.admits(opp.category)
            && (needle.is_empty() || opp.mentions(needle))
            && self.city.admits(&opp.city)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterResult<'a> {
    pub matches: Vec<&'a Opportunity>,
    pub total: usize,
}

impl FilterResult<'_> {
    /// "Visar N av M uppdrag".
    pub fn summary(&self) -> String {
        format!("Visar {} av {} uppdrag", self.matches.len(), self.total)
    }
}

pub fn filter_opportunities<'a>(
    dataset: &'a [Opportunity],
    filter: &OpportunityFilter,
) -> FilterResult<'a> {
    let needle = filter.needle();
    FilterResult {
        matches: dataset
            .iter()
            .filter(|opp| filter.matches_with(opp, &needle))
            .collect(),
        total: dataset.len(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTab {
    pub id: &'static str,
    pub label: &'static str,
}

/// Tabs shown above the listing grid, in display order.
pub fn category_tabs() -> Vec<CategoryTab> {
    let mut tabs = vec![CategoryTab {
        id: ALL,
        label: "Alla uppdrag",
    }];
    tabs.extend(
        [
            Category::Matchday,
            Category::Volunteer,
            Category::Professional,
            Category::Strategic,
        ]
        .into_iter()
        .map(|c| CategoryTab {
            id: c.into(),
            label: c.label(),
        }),
    );
    tabs
}

/// Distinct cities in first-seen order, for the city selector.
pub fn available_cities(dataset: &[Opportunity]) -> Vec<String> {
    let mut cities: Vec<String> = Vec::new();
    for opp in dataset {
        if !cities.iter().any(|c| c == &opp.city) {
            cities.push(opp.city.clone());
        }
    }
    cities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::landing_opportunities;
    use strum::IntoEnumIterator;

    fn titles<'a>(result: &FilterResult<'a>) -> Vec<&'a str> {
        result.matches.iter().map(|o| o.title.as_str()).collect()
    }

    #[test]
    fn test_default_filter_returns_everything_in_order() {
        let data = landing_opportunities();
        let result = filter_opportunities(&data, &OpportunityFilter::default());
        assert_eq!(result.matches.len(), data.len());
        let ids: Vec<_> = result.matches.iter().map(|o| o.id.as_str()).collect();
        let expected: Vec<_> = data.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_tranare_query_finds_youth_coach_only() {
        let data = landing_opportunities();
        for query in ["Tränare", "tränare", "TRÄNARE"] {
            let result =
                filter_opportunities(&data, &OpportunityFilter::default().with_query(query));
            assert_eq!(titles(&result), vec!["Ungdomstränare"], "query {query}");
        }
    }

    #[test]
    fn test_query_matches_club_and_description() {
        let data = landing_opportunities();
        let by_club = filter_opportunities(&data, &OpportunityFilter::default().with_query("häcken"));
        assert_eq!(titles(&by_club), vec!["Dataanalytiker"]);

        let by_description =
            filter_opportunities(&data, &OpportunityFilter::default().with_query("styrelsen"));
        assert_eq!(titles(&by_description), vec!["Strategisk Rådgivare"]);
    }

    #[test]
    fn test_padded_query_is_matched_literally() {
        let data = landing_opportunities();
        let padded =
            filter_opportunities(&data, &OpportunityFilter::default().with_query("tränare "));
        assert!(padded.matches.is_empty());

        let spaced = filter_opportunities(&data, &OpportunityFilter::default().with_query(" "));
        let expected = data.iter().filter(|o| o.mentions(" ")).count();
        assert_eq!(spaced.matches.len(), expected);
    }

    #[test]
    fn test_all_three_predicates_are_anded() {
        let data = landing_opportunities();
        let filter = OpportunityFilter::default()
            .with_category(Category::Matchday)
            .with_city("Stockholm")
            .with_query("event");
        let result = filter_opportunities(&data, &filter);
        assert_eq!(titles(&result), vec!["Eventkoordinator"]);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let data = landing_opportunities();
        let filter = OpportunityFilter::default()
            .with_category(Category::Strategic)
            .with_city("Malmö");
        let result = filter_opportunities(&data, &filter);
        assert!(result.matches.is_empty());
        assert_eq!(result.summary(), "Visar 0 av 6 uppdrag");
    }

    #[test]
    fn test_result_equals_set_definition_for_every_tab_and_city() {
        let data = landing_opportunities();
        let mut categories = vec![ALL.to_string()];
        categories.extend(Category::iter().map(|c| c.to_string()));
        let mut cities = vec![ALL.to_string()];
        cities.extend(available_cities(&data));

        for category in &categories {
            for city in &cities {
                for query in ["", "matchdag", "IF", "zzz", "tränare ", " "] {
                    let filter = OpportunityFilter::from_params(category, query, city).unwrap();
                    let got: Vec<&str> = filter_opportunities(&data, &filter)
                        .matches
                        .iter()
                        .map(|o| o.id.as_str())
                        .collect();
                    let q = query.to_lowercase();
                    let expected: Vec<&str> = data
                        .iter()
                        .filter(|o| category == ALL || o.category.to_string() == *category)
                        .filter(|o| {
                            q.is_empty()
                                || o.title.to_lowercase().contains(&q)
                                || o.club_name.to_lowercase().contains(&q)
                                || o.description.to_lowercase().contains(&q)
                        })
                        .filter(|o| city == ALL || o.city == *city)
                        .map(|o| o.id.as_str())
                        .collect();
                    assert_eq!(got, expected, "{category} / {query} / {city}");
                }
            }
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = OpportunityFilter::from_params("goalkeeping", "", ALL).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_matches_agrees_with_filter() {
        let data = landing_opportunities();
        let filter = OpportunityFilter::default().with_city("Göteborg");
        let direct: Vec<_> = data.iter().filter(|o| filter.matches(o)).collect();
        assert_eq!(direct, filter_opportunities(&data, &filter).matches);
    }

    #[test]
    fn test_category_tabs_order() {
        let ids: Vec<_> = category_tabs().iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec!["all", "matchday", "volunteer", "professional", "strategic"]
        );
        assert_eq!(category_tabs()[0].label, "Alla uppdrag");
    }

    #[test]
    fn test_available_cities_first_seen_order() {
        let data = landing_opportunities();
        assert_eq!(
            available_cities(&data),
            vec!["Stockholm", "Malmö", "Göteborg"]
        );
    }
}
