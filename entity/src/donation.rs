use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::DonationStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "donations")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: String,
    /// Wei amount as a decimal string.
    pub amount: String,
    pub giver_address: String,
    /// One of `giver`, `dac`, `campaign` or `milestone`.
    pub owner_type: String,
    pub owner_type_id: String,
    pub status: DonationStatus,
    pub token_address: String,
    pub mined: bool,
    pub tx_hash: Option<String>,
    pub home_tx_hash: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
