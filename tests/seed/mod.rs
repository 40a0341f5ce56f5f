//! Tests for restoring the fixture seed set.
//!
//! These verify that every record the sample data table names can be looked up after seeding,
//! and that seeding again resets the database to the fixture contents.

use entity::{
    prelude::*,
    sea_orm_active_enums::{CampaignStatus, MilestoneStatus},
};
use giveth_test_utils::{
    config::TestConfig,
    sample_data::{
        create_milestone_data, fake_user_address, CAMPAIGN_ID, DAC_ID, MILESTONE_ID,
        SECOND_USER_ADDRESS, USER_ADDRESS, USER_GIVER_ID,
    },
    seed::{seed_data, seed_from_config},
    TestBuilder, TestError,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
};

/// Tests that the seeded users match the sample data table.
///
/// Expected: both known users exist, the random fake user does not
#[tokio::test]
async fn seeds_known_users() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seed_data().build().await?;

    let user = User::find_by_id(USER_ADDRESS)
        .one(&test.db)
        .await?
        .expect("seeded user");
    assert_eq!(user.giver_id, Some(USER_GIVER_ID));

    let second = User::find_by_id(SECOND_USER_ADDRESS).one(&test.db).await?;
    assert!(second.is_some());

    let fake = User::find_by_id(fake_user_address()).one(&test.db).await?;
    assert!(fake.is_none());

    Ok(())
}

/// Tests that the seeded campaign, milestone and DAC match the sample data table.
///
/// Expected: all three exist and the milestone belongs to the campaign
#[tokio::test]
async fn seeds_known_campaign_milestone_and_dac() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seed_data().build().await?;

    let campaign = Campaign::find_by_id(CAMPAIGN_ID)
        .one(&test.db)
        .await?
        .expect("seeded campaign");
    assert_eq!(campaign.owner_address, USER_ADDRESS);
    assert_eq!(campaign.status, CampaignStatus::Active);

    let milestone = Milestone::find_by_id(MILESTONE_ID)
        .one(&test.db)
        .await?
        .expect("seeded milestone");
    assert_eq!(milestone.campaign_id, CAMPAIGN_ID);
    assert_eq!(milestone.status, MilestoneStatus::InProgress);

    let dac = Dac::find_by_id(DAC_ID).one(&test.db).await?;
    assert!(dac.is_some());

    Ok(())
}

/// Tests that the milestone create body points at seeded records.
///
/// Expected: the referenced campaign and reviewer exist
#[tokio::test]
async fn milestone_body_references_seeded_records() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seed_data().build().await?;
    let body = create_milestone_data();

    assert!(Campaign::find_by_id(body.campaign_id.as_str())
        .one(&test.db)
        .await?
        .is_some());
    assert!(User::find_by_id(body.reviewer_address.as_str())
        .one(&test.db)
        .await?
        .is_some());

    Ok(())
}

/// Tests that seeding drops rows added after a previous seed.
///
/// Expected: the extra campaign is gone and counts match the report again
#[tokio::test]
async fn reseeding_resets_collections() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seed_data().build().await?;
    let seeded_campaigns = Campaign::find().count(&test.db).await?;

    let mut extra = Campaign::find_by_id(CAMPAIGN_ID)
        .one(&test.db)
        .await?
        .expect("seeded campaign");
    extra.id = giveth_test_utils::random::generate_random_mongo_id().to_hex();
    let extra_id = extra.id.clone();
    extra.into_active_model().reset_all().insert(&test.db).await?;
    assert_eq!(
        Campaign::find().count(&test.db).await?,
        seeded_campaigns + 1
    );

    let report = seed_data(&test.db).await?;

    assert_eq!(Campaign::find().count(&test.db).await?, seeded_campaigns);
    assert_eq!(report.records_for("campaigns"), Some(seeded_campaigns as usize));
    assert!(Campaign::find_by_id(extra_id).one(&test.db).await?.is_none());

    Ok(())
}

/// Tests seeding straight from a configuration.
///
/// Expected: donations owned by the seeded campaign are queryable
#[tokio::test]
async fn seeds_from_config() -> Result<(), TestError> {
    let (db, report) = seed_from_config(&TestConfig::local()).await?;

    let donations = Donation::find()
        .filter(entity::donation::Column::OwnerTypeId.eq(CAMPAIGN_ID))
        .all(&db)
        .await?;
    assert!(!donations.is_empty());
    assert_eq!(
        report.records_for("donations"),
        Some(Donation::find().count(&db).await? as usize)
    );

    Ok(())
}
