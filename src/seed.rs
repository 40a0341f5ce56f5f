//! Restore the fixture seed set into a database.
//!
//! The seed set is a directory holding one JSON array per collection, named
//! `<collection>.json`. Restoring a collection creates its table when missing, drops every
//! existing row and inserts the fixture records, so running the seeder twice leaves the same
//! data behind.
//!
//! Seeding the same database from several tasks at once is not coordinated.

use std::path::{Path, PathBuf};

use dioxus_logger::tracing;
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    IntoActiveModel, Schema,
};
use serde::de::DeserializeOwned;

use crate::{config::TestConfig, error::TestError};

/// Fixture directory shipped with this crate.
pub const DEFAULT_SEED_ROOT: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/db_seed_data/giveth");

/// Number of records restored into one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRestore {
    pub collection: &'static str,
    pub records: usize,
}

/// Outcome of a seed run, in restore order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub collections: Vec<CollectionRestore>,
}

impl SeedReport {
    pub fn total_records(&self) -> usize {
        self.collections.iter().map(|c| c.records).sum()
    }

    pub fn records_for(&self, collection: &str) -> Option<usize> {
        self.collections
            .iter()
            .find(|c| c.collection == collection)
            .map(|c| c.records)
    }
}

#[derive(Debug, Clone)]
pub struct Seeder {
    root: PathBuf,
}

impl Default for Seeder {
    fn default() -> Self {
        Self::new(DEFAULT_SEED_ROOT)
    }
}

impl Seeder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Restore every collection of the seed set into `db`.
    ///
    /// Collections are restored in a fixed order: users, dacs, campaigns, milestones,
    /// donations, events. The first failure stops the run and is returned unchanged;
    /// collections restored before it keep their new contents.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to restore into
    ///
    /// # Returns
    /// - `Ok(SeedReport)` - Record count per restored collection
    /// - `Err(TestError::IoError)` - A collection file is missing or unreadable
    /// - `Err(TestError::FixtureError)` - A collection file does not parse
    /// - `Err(TestError::DbErr)` - Creating, clearing or filling a table failed
    pub async fn restore<C>(&self, db: &C) -> Result<SeedReport, TestError>
    where
        C: ConnectionTrait,
    {
        let collections = vec![
            self.restore_collection(db, entity::prelude::User, "users")
                .await?,
            self.restore_collection(db, entity::prelude::Dac, "dacs")
                .await?,
            self.restore_collection(db, entity::prelude::Campaign, "campaigns")
                .await?,
            self.restore_collection(db, entity::prelude::Milestone, "milestones")
                .await?,
            self.restore_collection(db, entity::prelude::Donation, "donations")
                .await?,
            self.restore_collection(db, entity::prelude::Event, "events")
                .await?,
        ];

        let report = SeedReport { collections };

        tracing::info!(
            "Restored {} records into {} collections from {}",
            report.total_records(),
            report.collections.len(),
            self.root.display()
        );

        Ok(report)
    }

    async fn restore_collection<C, E>(
        &self,
        db: &C,
        entity: E,
        collection: &'static str,
    ) -> Result<CollectionRestore, TestError>
    where
        C: ConnectionTrait,
        E: EntityTrait,
        E::Model: DeserializeOwned + IntoActiveModel<E::ActiveModel>,
        E::ActiveModel: ActiveModelTrait<Entity = E> + Send,
    {
        let records: Vec<E::Model> = self.read_collection(collection).await?;

        let schema = Schema::new(db.get_database_backend());
        let mut create_table = schema.create_table_from_entity(entity);
        create_table.if_not_exists();
        db.execute(&create_table).await?;

        let dropped = E::delete_many().exec(db).await?.rows_affected;

        let count = records.len();
        if count > 0 {
            let models = records.into_iter().map(|model| {
                IntoActiveModel::<E::ActiveModel>::into_active_model(model).reset_all()
            });
            E::insert_many(models).exec_without_returning(db).await?;
        }

        tracing::debug!(
            collection,
            dropped,
            records = count,
            "Restored fixture collection"
        );

        Ok(CollectionRestore {
            collection,
            records: count,
        })
    }

    async fn read_collection<M>(&self, collection: &str) -> Result<Vec<M>, TestError>
    where
        M: DeserializeOwned,
    {
        let path = self.root.join(format!("{collection}.json"));
        let contents = tokio::fs::read_to_string(&path).await?;

        serde_json::from_str(&contents).map_err(|source| TestError::FixtureError { path, source })
    }
}

/// Restore the default seed set into `db`.
pub async fn seed_data<C>(db: &C) -> Result<SeedReport, TestError>
where
    C: ConnectionTrait,
{
    Seeder::default().restore(db).await
}

/// Connect to the configured database and restore the default seed set into it.
///
/// # Returns
/// - `Ok((DatabaseConnection, SeedReport))` - Open connection to the seeded database
/// - `Err(TestError)` - Connection or restore failed
pub async fn seed_from_config(
    config: &TestConfig,
) -> Result<(DatabaseConnection, SeedReport), TestError> {
    let db = connect(config).await?;
    let report = seed_data(&db).await?;

    Ok((db, report))
}

pub(crate) async fn connect(config: &TestConfig) -> Result<DatabaseConnection, TestError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    Ok(Database::connect(opt).await?)
}
