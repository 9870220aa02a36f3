//! Hard-coded datasets: the public landing-page listings and the demo club
//! (Hammarby IF) with its own listings and incoming applications.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    Application, ApplicationStatus, Category, ClubProfile, Division, Opportunity,
    OpportunityStatus, ProfileDetails, UserProfile,
};

pub const DEMO_CLUB_ID: &str = "club_1234567890";

struct Listing {
    id: &'static str,
    club_id: &'static str,
    club_name: &'static str,
    title: &'static str,
    category: Category,
    type_label: &'static str,
    description: &'static str,
    location: &'static str,
    city: &'static str,
    time_commitment: &'static str,
    start_date: &'static str,
}

impl Listing {
    fn into_opportunity(self) -> Opportunity {
        Opportunity {
            id: self.id.to_string(),
            club_id: self.club_id.to_string(),
            club_name: self.club_name.to_string(),
            title: self.title.to_string(),
            category: self.category,
            type_label: self.type_label.to_string(),
            description: self.description.to_string(),
            location: self.location.to_string(),
            city: self.city.to_string(),
            time_commitment: self.time_commitment.to_string(),
            employment_type: None,
            start_date: self.start_date.to_string(),
            compensation: None,
            spots: None,
            applicant_count: 0,
            featured: false,
            days_left: None,
            status: OpportunityStatus::Active,
        }
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

/// The six listings shown on the public landing page.
pub fn landing_opportunities() -> Vec<Opportunity> {
    let rows = [
        (
            Listing {
                id: "listing_1",
                club_id: DEMO_CLUB_ID,
                club_name: "Hammarby IF",
                title: "Matchdagsvärdar",
                category: Category::Matchday,
                type_label: "Matchdagsuppdrag",
                description: "Vi söker entusiastiska värdar för att välkomna fans på matchdag.",
                location: "Tele2 Arena, Stockholm",
                city: "Stockholm",
                time_commitment: "4 timmar",
                start_date: "15 oktober 2025",
            },
            23,
            true,
            Some(5),
        ),
        (
            Listing {
                id: "listing_2",
                club_id: "club_malmo_ff",
                club_name: "Malmö FF",
                title: "Social Media Manager",
                category: Category::Professional,
                type_label: "Professionell roll",
                description: "Ansvarig för klubbens sociala medier och digitala närvaro.",
                location: "Malmö",
                city: "Malmö",
                time_commitment: "Heltid",
                start_date: "Löpande",
            },
            67,
            false,
            None,
        ),
        (
            Listing {
                id: "listing_3",
                club_id: "club_aik",
                club_name: "AIK",
                title: "Ungdomstränare",
                category: Category::Volunteer,
                type_label: "Volontärroll",
                description: "Träna och utveckla våra unga spelare i åldrarna 10-12 år.",
                location: "Stockholm",
                city: "Stockholm",
                time_commitment: "6 timmar/vecka",
                start_date: "Säsongsstart",
            },
            45,
            false,
            Some(12),
        ),
        (
            Listing {
                id: "listing_4",
                club_id: "club_ifk_goteborg",
                club_name: "IFK Göteborg",
                title: "Strategisk Rådgivare",
                category: Category::Strategic,
                type_label: "Strategiskt uppdrag",
                description: "Stötta styrelsen i strategiska beslut och affärsutveckling.",
                location: "Göteborg",
                city: "Göteborg",
                time_commitment: "Konsultbasis",
                start_date: "Q4 2025",
            },
            12,
            false,
            Some(30),
        ),
        (
            Listing {
                id: "listing_5",
                club_id: "club_djurgarden",
                club_name: "Djurgårdens IF",
                title: "Eventkoordinator",
                category: Category::Matchday,
                type_label: "Matchdagsuppdrag",
                description: "Koordinera och genomföra matchdagsevent och aktiviteter.",
                location: "Tele2 Arena, Stockholm",
                city: "Stockholm",
                time_commitment: "5 timmar",
                start_date: "22 oktober 2025",
            },
            34,
            true,
            Some(8),
        ),
        (
            Listing {
                id: "listing_6",
                club_id: "club_bk_hacken",
                club_name: "BK Häcken",
                title: "Dataanalytiker",
                category: Category::Professional,
                type_label: "Professionell roll",
                description: "Analysera matchdata och spelare för att optimera prestanda.",
                location: "Göteborg",
                city: "Göteborg",
                time_commitment: "Heltid",
                start_date: "Omgående",
            },
            89,
            false,
            Some(3),
        ),
    ];

    rows.into_iter()
        .map(|(listing, applicants, featured, days_left)| {
            let mut opp = listing.into_opportunity();
            opp.applicant_count = applicants;
            opp.featured = featured;
            opp.days_left = days_left;
            opp
        })
        .collect()
}

/// The logged-in club used by the dashboard demo.
pub fn demo_club_user() -> UserProfile {
    let joined = at(2025, 9, 1, 9, 0);
    UserProfile {
        id: DEMO_CLUB_ID.to_string(),
        created_at: joined,
        updated_at: joined,
        details: ProfileDetails::Club(ClubProfile {
            club_name: "Hammarby IF".to_string(),
            email: "info@hammarbyfotboll.se".to_string(),
            phone: "08-123 456 78".to_string(),
            city: "Stockholm".to_string(),
            division: Division::Allsvenskan,
            about: "Hammarby IF är en av Sveriges största fotbollsklubbar med en rik historia sedan 1897."
                .to_string(),
            founded: 1897,
            members: 25000,
            website: Some("https://www.hammarbyfotboll.se".to_string()),
            contact_name: "Anna Svensson".to_string(),
            contact_role: "Sportchef".to_string(),
            contact_email: "anna.svensson@hammarbyfotboll.se".to_string(),
            contact_phone: "08-123 456 79".to_string(),
        }),
    }
}

/// Six active listings owned by the demo club.
pub fn demo_club_opportunities() -> Vec<Opportunity> {
    let rows = [
        (
            Listing {
                id: "opp_1",
                club_id: DEMO_CLUB_ID,
                club_name: "Hammarby IF",
                title: "Anläggningsskötare",
                category: Category::Facility,
                type_label: "Anläggning",
                description: "Vi söker en anläggningsskötare för underhåll av gräsplan, omklädningsrum och träningsanläggningar. Arbetet inkluderar gräsklippning, linjedragning och allmänt underhåll.",
                location: "Tele2 Arena & Årsta IP, Stockholm",
                city: "Stockholm",
                time_commitment: "Heltid",
                start_date: "2025-11-01",
            },
            "Heltid",
            "28 000-32 000 kr/mån",
            1,
            1,
        ),
        (
            Listing {
                id: "opp_2",
                club_id: DEMO_CLUB_ID,
                club_name: "Hammarby IF",
                title: "Content Creator - Video & Foto",
                category: Category::Content,
                type_label: "Content & Media",
                description: "Skapa engagerande videoinnehåll och fotografera matcher, träningar och event. Redigera material för sociala medier och klubbens kanaler. Kreativ frihet att bygga vårt varumärke.",
                location: "Tele2 Arena, Stockholm",
                city: "Stockholm",
                time_commitment: "Deltid (50%)",
                start_date: "2025-10-20",
            },
            "Deltid",
            "18 000 kr/mån",
            1,
            1,
        ),
        (
            Listing {
                id: "opp_3",
                club_id: DEMO_CLUB_ID,
                club_name: "Hammarby IF",
                title: "Ungdomstränare U12",
                category: Category::Coaching,
                type_label: "Tränarroll",
                description: "Träna och utveckla våra unga spelare i åldrarna 10-12 år. Vi söker en engagerad tränare med UEFA C-licens eller motsvarande som vill vara med och forma framtidens Hammarby-spelare.",
                location: "Årsta IP, Stockholm",
                city: "Stockholm",
                time_commitment: "3 träningar/vecka + match",
                start_date: "2025-10-15",
            },
            "Deltid",
            "8 000 kr/mån",
            2,
            2,
        ),
        (
            Listing {
                id: "opp_4",
                club_id: DEMO_CLUB_ID,
                club_name: "Hammarby IF",
                title: "Matchdagsvärdar",
                category: Category::Matchday,
                type_label: "Matchdagsuppdrag",
                description: "Välkomna fans, svara på frågor och skapa en fantastisk atmosfär på Tele2 Arena. Perfekt för dig som älskar fotboll och att möta människor.",
                location: "Tele2 Arena, Stockholm",
                city: "Stockholm",
                time_commitment: "4 timmar per matchdag",
                start_date: "2025-10-15",
            },
            "Timanställning",
            "180 kr/timme",
            8,
            1,
        ),
        (
            Listing {
                id: "opp_5",
                club_id: DEMO_CLUB_ID,
                club_name: "Hammarby IF",
                title: "Sponsoransvarig",
                category: Category::Sponsorship,
                type_label: "Sponsring & Partnerskap",
                description: "Ansvarig för att hitta och vårda sponsorrelationer. Arbeta med företag som vill associeras med Hammarby IF och skapa värdefulla partnerskap.",
                location: "Tele2 Arena, Stockholm",
                city: "Stockholm",
                time_commitment: "Heltid",
                start_date: "2025-11-15",
            },
            "Heltid",
            "35 000-45 000 kr/mån + provision",
            1,
            1,
        ),
        (
            Listing {
                id: "opp_6",
                club_id: DEMO_CLUB_ID,
                club_name: "Hammarby IF",
                title: "Volontär - Supporteraktiviteter",
                category: Category::Volunteer,
                type_label: "Volontär",
                description: "Hjälp till med att organisera supporterevent, tifon och andra aktiviteter. Var med och bygga den starkaste supporterkulturen i Sverige!",
                location: "Tele2 Arena, Stockholm",
                city: "Stockholm",
                time_commitment: "Flexibelt, ca 5-10 tim/mån",
                start_date: "2025-10-10",
            },
            "Volontär",
            "Volontär",
            5,
            1,
        ),
    ];

    rows.into_iter()
        .map(
            |(listing, employment_type, compensation, spots, applicants)| {
                let mut opp = listing.into_opportunity();
                opp.employment_type = Some(employment_type.to_string());
                opp.compensation = Some(compensation.to_string());
                opp.spots = Some(spots);
                opp.applicant_count = applicants;
                opp
            },
        )
        .collect()
}

/// Seven applications against the demo club's listings: 4 pending, 1 reviewed, 2 accepted.
pub fn demo_applications() -> Vec<Application> {
    let rows = [
        ("app_1", "opp_1", "Lars Eriksson", ApplicationStatus::Pending, at(2025, 10, 2, 8, 30)),
        ("app_2", "opp_2", "Sofia Bergman", ApplicationStatus::Pending, at(2025, 10, 2, 10, 15)),
        ("app_3", "opp_3", "Johan Andersson", ApplicationStatus::Reviewed, at(2025, 10, 1, 14, 20)),
        ("app_4", "opp_4", "Emma Karlsson", ApplicationStatus::Pending, at(2025, 10, 1, 16, 45)),
        ("app_5", "opp_3", "Michael Johansson", ApplicationStatus::Accepted, at(2025, 9, 30, 11, 15)),
        ("app_6", "opp_5", "Anna Lindström", ApplicationStatus::Pending, at(2025, 10, 2, 9, 0)),
        ("app_7", "opp_6", "David Nilsson", ApplicationStatus::Accepted, at(2025, 9, 29, 13, 30)),
    ];

    rows.into_iter()
        .map(|(id, opportunity_id, name, status, applied_at)| Application {
            id: id.to_string(),
            opportunity_id: opportunity_id.to_string(),
            applicant_name: name.to_string(),
            talent_id: None,
            status,
            applied_at,
        })
        .collect()
}
