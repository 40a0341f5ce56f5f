//! Values known to exist in the fixture seed set.
//!
//! Integration tests look records up by these identifiers after seeding, so every constant
//! here must match `fixtures/db_seed_data/giveth`. The status enums are re-exported from the
//! `entity` crate; their string forms are the literals the backend stores.

mod payload;

use std::sync::LazyLock;

pub use entity::sea_orm_active_enums::{
    CampaignStatus, DacStatus, DonationStatus, EventStatus, MilestoneStatus,
};
pub use payload::{
    create_campaign_data, create_dac_data, create_milestone_data, CreateCampaignData,
    CreateDacData, CreateMilestoneData, MilestoneOwner, MilestoneToken,
};

use crate::random::generate_random_ethereum_address;

/// Address of the seeded giver, also the default identity of issued tokens.
pub const USER_ADDRESS: &str = "0x90F8bf6A479f320ead074411a4B0e7944Ea8c9C1";

pub const USER_GIVER_ID: i64 = 1;

pub const SECOND_USER_ADDRESS: &str = "0xFFcf8FDEE72ac11b5c542428B35EEF5769C409f0";

pub const MILESTONE_ID: &str = "5fd3424c3e403d0c0f9e4487";

/// Campaign owned and reviewed by [`USER_ADDRESS`].
pub const CAMPAIGN_ID: &str = "5fd3412e3e403d0c0f9e4463";

pub const DAC_ID: &str = "5fd339eaa5ffa2a6198ecd70";

pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Token address the backend uses to mean "any token".
pub const ANY_TOKEN_ADDRESS: &str = "0xFFfFfFffFFfffFFfFFfFFFFFffFFFffffFfFFFfF";

static FAKE_USER_ADDRESS: LazyLock<String> = LazyLock::new(generate_random_ethereum_address);

/// Address with no user record, generated once per test process.
pub fn fake_user_address() -> &'static str {
    FAKE_USER_ADDRESS.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_user_address_is_stable_within_process() {
        assert_eq!(fake_user_address(), fake_user_address());
        assert_ne!(fake_user_address(), USER_ADDRESS);
        assert_eq!(fake_user_address().len(), 42);
    }

    #[test]
    fn statuses_display_as_stored_literals() {
        assert_eq!(MilestoneStatus::InProgress.to_string(), "InProgress");
        assert_eq!(MilestoneStatus::NeedsReview.to_string(), "NeedsReview");
        assert_eq!(DonationStatus::ToApprove.to_string(), "ToApprove");
        assert_eq!(EventStatus::Processed.to_string(), "Processed");
        assert_eq!(CampaignStatus::Active.to_string(), "Active");
        assert_eq!(DacStatus::Canceled.to_string(), "Canceled");
    }

    #[test]
    fn statuses_serialize_as_stored_literals() {
        assert_eq!(
            serde_json::to_string(&DonationStatus::Committed).unwrap(),
            "\"Committed\""
        );
        let status: MilestoneStatus = serde_json::from_str("\"Archived\"").unwrap();
        assert_eq!(status, MilestoneStatus::Archived);
    }
}
