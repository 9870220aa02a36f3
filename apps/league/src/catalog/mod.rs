// Opportunity catalog: the listing datasets, the landing-page filter and
// club-side listing management (create, publish, close, reopen).

pub mod filter;
pub mod fixtures;
pub mod listing;

pub use filter::{
    available_cities, category_tabs, filter_opportunities, CategoryFilter, CategoryTab,
    CityFilter, FilterResult, OpportunityFilter,
};
pub use listing::{publish_opportunity, set_opportunity_status, NewOpportunity};
