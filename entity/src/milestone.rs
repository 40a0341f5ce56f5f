use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::MilestoneStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "milestones")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub status: MilestoneStatus,
    pub campaign_id: String,
    pub dac_id: i64,
    pub owner_address: String,
    pub reviewer_address: String,
    pub recipient_address: Option<String>,
    /// Wei amount as a decimal string; `None` for uncapped milestones.
    pub max_amount: Option<String>,
    pub token_symbol: String,
    pub mined: bool,
    pub tx_hash: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
