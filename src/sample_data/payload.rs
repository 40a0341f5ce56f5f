//! Request bodies for creating milestones, campaigns and DACs.
//!
//! Each body references seeded records, so a create request built from these succeeds against
//! a freshly seeded backend. Campaign and DAC bodies draw a new transaction hash per call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    CampaignStatus, DacStatus, MilestoneStatus, ANY_TOKEN_ADDRESS, CAMPAIGN_ID, USER_ADDRESS,
    ZERO_ADDRESS,
};
use crate::random::generate_random_transaction_hash;

const MILESTONE_PLUGIN_ADDRESS: &str = "0x0000000000000000000000000000000000000001";
const MILESTONE_TX_HASH: &str =
    "0x8b0abaa5f5d3cc87c3d52362ef147b8a0fd4ccb02757f5f48b6048aa2e9d86c0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneToken {
    pub name: String,
    pub address: String,
    pub foreign_address: String,
    pub symbol: String,
    pub decimals: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneOwner {
    pub address: String,
    pub created_at: String,
    pub updated_at: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMilestoneData {
    pub fully_funded: bool,
    pub mined: bool,
    pub title: String,
    pub description: String,
    pub image: String,
    pub reviewer_address: String,
    pub dac_id: i64,
    pub date: String,
    pub recipient_address: String,
    pub plugin_address: String,
    pub campaign_id: String,
    pub status: MilestoneStatus,
    pub items: Vec<Value>,
    pub token: MilestoneToken,
    pub owner: MilestoneOwner,
    #[serde(rename = "type")]
    pub milestone_type: String,
    pub max_amount: Option<String>,
    pub tx_hash: String,
    pub proof_items: Vec<Value>,
    pub pending_recipient_address: String,
    pub people_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignData {
    pub title: String,
    pub project_id: i64,
    pub image: String,
    pub mined: bool,
    pub reviewer_address: String,
    pub owner_address: String,
    pub status: CampaignStatus,
    pub tx_hash: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDacData {
    pub title: String,
    pub description: String,
    pub status: DacStatus,
    pub tx_hash: String,
    pub owner_address: String,
}

/// Uncapped bridged milestone in the seeded campaign, reviewed and owned by [`USER_ADDRESS`].
pub fn create_milestone_data() -> CreateMilestoneData {
    CreateMilestoneData {
        fully_funded: false,
        mined: true,
        title: "test-milestone".to_string(),
        description: "<p>give money for god sake</p>".to_string(),
        image: String::new(),
        reviewer_address: USER_ADDRESS.to_string(),
        dac_id: 0,
        date: "2020-11-10T00:00:00.000Z".to_string(),
        recipient_address: ZERO_ADDRESS.to_string(),
        plugin_address: MILESTONE_PLUGIN_ADDRESS.to_string(),
        campaign_id: CAMPAIGN_ID.to_string(),
        status: MilestoneStatus::InProgress,
        items: Vec::new(),
        token: MilestoneToken {
            name: "ANY_TOKEN".to_string(),
            address: ANY_TOKEN_ADDRESS.to_string(),
            foreign_address: ANY_TOKEN_ADDRESS.to_string(),
            symbol: "ANY_TOKEN".to_string(),
            decimals: "1".to_string(),
        },
        owner: MilestoneOwner {
            address: USER_ADDRESS.to_string(),
            created_at: "2018-08-22T00:34:52.691Z".to_string(),
            updated_at: "2020-10-22T00:16:39.775Z".to_string(),
            email: "test@giveth.io".to_string(),
        },
        milestone_type: "BridgedMilestone".to_string(),
        max_amount: None,
        tx_hash: MILESTONE_TX_HASH.to_string(),
        proof_items: Vec::new(),
        pending_recipient_address: USER_ADDRESS.to_string(),
        people_count: 3,
    }
}

pub fn create_campaign_data() -> CreateCampaignData {
    CreateCampaignData {
        title: "Hello I;m new Campaign".to_string(),
        project_id: 10,
        image: "This should be image :))".to_string(),
        mined: false,
        reviewer_address: USER_ADDRESS.to_string(),
        owner_address: USER_ADDRESS.to_string(),
        status: CampaignStatus::Pending,
        tx_hash: generate_random_transaction_hash(),
        description: "test description for campaign".to_string(),
    }
}

pub fn create_dac_data() -> CreateDacData {
    CreateDacData {
        title: "test dac title".to_string(),
        description: "test dac description".to_string(),
        status: DacStatus::Pending,
        tx_hash: generate_random_transaction_hash(),
        owner_address: USER_ADDRESS.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn milestone_body_uses_backend_field_names() {
        let body = serde_json::to_value(create_milestone_data()).unwrap();

        assert_eq!(body["type"], "BridgedMilestone");
        assert_eq!(body["status"], "InProgress");
        assert_eq!(body["campaignId"], CAMPAIGN_ID);
        assert_eq!(body["maxAmount"], Value::Null);
        assert_eq!(body["peopleCount"], 3);
        assert_eq!(body["token"]["foreignAddress"], ANY_TOKEN_ADDRESS);
        assert_eq!(body["owner"]["email"], "test@giveth.io");
        assert_eq!(body["proofItems"], json!([]));
    }

    #[test]
    fn campaign_and_dac_bodies_get_fresh_hashes() {
        let first = create_campaign_data();
        let second = create_campaign_data();
        assert_ne!(first.tx_hash, second.tx_hash);
        assert_eq!(first.tx_hash.len(), 64);

        let dac = serde_json::to_value(create_dac_data()).unwrap();
        assert_eq!(dac["status"], "Pending");
        assert_eq!(dac["ownerAddress"], USER_ADDRESS);
        assert!(dac["txHash"].as_str().unwrap().starts_with("0x"));
    }
}
