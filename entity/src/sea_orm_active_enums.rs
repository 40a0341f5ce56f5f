//! Lifecycle status enums stored as plain strings.
//!
//! The string value of every variant is exactly the literal the donation backend writes,
//! e.g. `MilestoneStatus::InProgress` is stored and serialized as `"InProgress"`.

use std::fmt;

use sea_orm::entity::prelude::*;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum MilestoneStatus {
    #[sea_orm(string_value = "Proposed")]
    Proposed,
    #[sea_orm(string_value = "Rejected")]
    Rejected,
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "InProgress")]
    InProgress,
    #[sea_orm(string_value = "NeedsReview")]
    NeedsReview,
    #[sea_orm(string_value = "Completed")]
    Completed,
    #[sea_orm(string_value = "Canceled")]
    Canceled,
    #[sea_orm(string_value = "Paying")]
    Paying,
    #[sea_orm(string_value = "Paid")]
    Paid,
    #[sea_orm(string_value = "Failed")]
    Failed,
    #[sea_orm(string_value = "Archived")]
    Archived,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum DonationStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Paying")]
    Paying,
    #[sea_orm(string_value = "Paid")]
    Paid,
    #[sea_orm(string_value = "ToApprove")]
    ToApprove,
    #[sea_orm(string_value = "Waiting")]
    Waiting,
    #[sea_orm(string_value = "Committed")]
    Committed,
    #[sea_orm(string_value = "Canceled")]
    Canceled,
    #[sea_orm(string_value = "Rejected")]
    Rejected,
    #[sea_orm(string_value = "Failed")]
    Failed,
}

/// Processing state of a blockchain event picked up by the backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum EventStatus {
    /// Seen by the websocket subscription, not yet at the required confirmation count.
    #[sea_orm(string_value = "Pending")]
    Pending,
    /// Seen by polling with enough confirmations, ready to process.
    #[sea_orm(string_value = "Waiting")]
    Waiting,
    #[sea_orm(string_value = "Processing")]
    Processing,
    #[sea_orm(string_value = "Processed")]
    Processed,
    #[sea_orm(string_value = "Failed")]
    Failed,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum CampaignStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Canceled")]
    Canceled,
    #[sea_orm(string_value = "Failed")]
    Failed,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum DacStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Canceled")]
    Canceled,
    #[sea_orm(string_value = "Failed")]
    Failed,
}

macro_rules! display_as_db_value {
    ($($status:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $status {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.to_value())
                }
            }
        )+
    };
}

display_as_db_value!(
    MilestoneStatus,
    DonationStatus,
    EventStatus,
    CampaignStatus,
    DacStatus
);
