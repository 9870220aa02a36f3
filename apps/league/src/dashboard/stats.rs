use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::{AppError, Result};
use crate::models::{Application, ApplicationStatus, Opportunity, UserProfile};
use crate::storage::{load_list, KeyValueStore, StorageKey};

/// Listings shown in the "your opportunities" panel.
pub const HIGHLIGHTED_OPPORTUNITIES: usize = 3;
/// Applications shown in the "recent applications" panel.
pub const RECENT_APPLICATIONS: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_opportunities: usize,
    pub total_applications: usize,
    pub pending_review: usize,
    pub accepted_talents: usize,
}

/// Row of the recent applications panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentApplication {
    pub id: String,
    pub applicant_name: String,
    pub opportunity_id: String,
    pub opportunity_title: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// Everything a club sees on its dashboard, derived from the two stored lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubDashboard {
    pub club_id: String,
    pub opportunities: Vec<Opportunity>,
    pub applications: Vec<Application>,
    pub stats: DashboardStats,
}

impl ClubDashboard {
    pub fn applications_for(&self, opportunity_id: &str) -> usize {
        self.applications
            .iter()
            .filter(|a| a.opportunity_id == opportunity_id)
            .count()
    }

    pub fn highlighted_opportunities(&self) -> &[Opportunity] {
        let end = self.opportunities.len().min(HIGHLIGHTED_OPPORTUNITIES);
        &self.opportunities[..end]
    }

    /// First applications in stored order, each with the title it targets.
    pub fn recent_applications(&self) -> Vec<RecentApplication> {
        self.applications
            .iter()
            .take(RECENT_APPLICATIONS)
            .map(|app| RecentApplication {
                id: app.id.clone(),
                applicant_name: app.applicant_name.clone(),
                opportunity_id: app.opportunity_id.clone(),
                opportunity_title: self
                    .opportunities
                    .iter()
                    .find(|o| o.id == app.opportunity_id)
                    .map(|o| o.title.clone()),
                status: app.status,
                applied_at: app.applied_at,
            })
            .collect()
    }
}

pub fn compute_stats(owned: &[Opportunity], applications: &[Application]) -> DashboardStats {
    let count = |status| applications.iter().filter(|a| a.status == status).count();
    DashboardStats {
        active_opportunities: owned.iter().filter(|o| o.is_active()).count(),
        total_applications: applications.len(),
        pending_review: count(ApplicationStatus::Pending),
        accepted_talents: count(ApplicationStatus::Accepted),
    }
}

/// Keeps the club's own listings and the applications that target them.
pub fn compute_dashboard(
    opportunities: &[Opportunity],
    applications: &[Application],
    club_id: &str,
) -> ClubDashboard {
    let owned: Vec<Opportunity> = opportunities
        .iter()
        .filter(|o| o.club_id == club_id)
        .cloned()
        .collect();
    let owned_ids: HashSet<&str> = owned.iter().map(|o| o.id.as_str()).collect();
    let received: Vec<Application> = applications
        .iter()
        .filter(|a| owned_ids.contains(a.opportunity_id.as_str()))
        .cloned()
        .collect();

    let stats = compute_stats(&owned, &received);
    ClubDashboard {
        club_id: club_id.to_string(),
        opportunities: owned,
        applications: received,
        stats,
    }
}

/// Reads both lists from the store and builds the dashboard for a club user.
pub fn load_dashboard(store: &dyn KeyValueStore, user: &UserProfile) -> Result<ClubDashboard> {
    if user.as_club().is_none() {
        return Err(AppError::Forbidden(
            "the club dashboard requires a club account".to_string(),
        ));
    }
    let opportunities: Vec<Opportunity> = load_list(store, StorageKey::OPPORTUNITIES)?;
    let applications: Vec<Application> = load_list(store, StorageKey::APPLICATIONS)?;
    Ok(compute_dashboard(&opportunities, &applications, &user.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{
        demo_applications, demo_club_opportunities, demo_club_user, landing_opportunities,
        DEMO_CLUB_ID,
    };
    use crate::storage::{save_list, MemoryStore};

    #[test]
    fn test_demo_dataset_counts() {
        let dashboard =
            compute_dashboard(&demo_club_opportunities(), &demo_applications(), DEMO_CLUB_ID);
        assert_eq!(
            dashboard.stats,
            DashboardStats {
                active_opportunities: 6,
                total_applications: 7,
                pending_review: 4,
                accepted_talents: 2,
            }
        );
    }

    #[test]
    fn test_only_own_listings_are_counted() {
        let mut all = demo_club_opportunities();
        for (i, mut other) in demo_club_opportunities().into_iter().take(2).enumerate() {
            other.id = format!("other_{i}");
            other.club_id = "club_other".to_string();
            all.push(other);
        }
        let dashboard = compute_dashboard(&all, &[], DEMO_CLUB_ID);
        assert_eq!(dashboard.stats.active_opportunities, 6);
        assert_eq!(dashboard.opportunities.len(), 6);

        let other = compute_dashboard(&all, &[], "club_other");
        assert_eq!(other.stats.active_opportunities, 2);
    }

    #[test]
    fn test_applications_to_foreign_listings_are_ignored() {
        let mut apps = demo_applications();
        apps[0].opportunity_id = "listing_2".to_string();
        let mut opps = demo_club_opportunities();
        opps.extend(landing_opportunities());

        let dashboard = compute_dashboard(&opps, &apps, DEMO_CLUB_ID);
        assert_eq!(dashboard.stats.total_applications, 6);
        assert_eq!(dashboard.stats.pending_review, 3);
    }

    #[test]
    fn test_per_listing_counts_and_recent_rows() {
        let dashboard =
            compute_dashboard(&demo_club_opportunities(), &demo_applications(), DEMO_CLUB_ID);
        assert_eq!(dashboard.applications_for("opp_3"), 2);
        assert_eq!(dashboard.applications_for("opp_1"), 1);
        assert_eq!(dashboard.highlighted_opportunities().len(), 3);

        let recent = dashboard.recent_applications();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].id, "app_1");
        assert_eq!(
            recent[0].opportunity_title.as_deref(),
            Some(dashboard.opportunities[0].title.as_str())
        );
    }

    #[test]
    fn test_empty_club_has_zero_stats() {
        let dashboard = compute_dashboard(&[], &[], "club_new");
        assert_eq!(dashboard.stats, DashboardStats::default());
        assert!(dashboard.recent_applications().is_empty());
        assert!(dashboard.highlighted_opportunities().is_empty());
    }

    #[test]
    fn test_load_from_store() {
        let store = MemoryStore::new();
        let club = demo_club_user();
        assert_eq!(load_dashboard(&store, &club).unwrap().stats, DashboardStats::default());

        save_list(&store, StorageKey::OPPORTUNITIES, &demo_club_opportunities()).unwrap();
        save_list(&store, StorageKey::APPLICATIONS, &demo_applications()).unwrap();
        let dashboard = load_dashboard(&store, &club).unwrap();
        assert_eq!(dashboard.stats.total_applications, 7);
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let value = serde_json::to_value(DashboardStats::default()).unwrap();
        assert!(value.get("pendingReview").is_some());
        assert!(value.get("acceptedTalents").is_some());
    }
}
