pub mod application;
pub mod opportunity;
pub mod profile;

pub use application::{Application, ApplicationStatus, ReviewDecision};
pub use opportunity::{Category, Opportunity, OpportunityStatus};
pub use profile::{
    Availability, ClubProfile, Division, ExperienceLevel, ProfileDetails, TalentProfile,
    UserKind, UserProfile,
};
