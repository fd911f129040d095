use sea_orm::DatabaseConnection;

use crate::{
    ArticleSeq, CategoryTotals, DailyExpenditures, DailyTotals, FeedResolver, ResultEngine,
    StatisticsEngine, UserSeq,
};

mod profile;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    calendar_days: bool,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Feed resolver reading from the engine's database.
    pub fn feed(&self) -> FeedResolver<&DatabaseConnection> {
        FeedResolver::new(&self.database)
    }

    /// Statistics reading from the engine's database.
    pub fn statistics(&self) -> StatisticsEngine<&DatabaseConnection> {
        StatisticsEngine::builder(&self.database)
            .calendar_days(self.calendar_days)
            .build()
    }

    /// Ids of the articles in `viewer`'s feed, newest first.
    pub async fn resolve_feed(&self, viewer: UserSeq) -> ResultEngine<Vec<ArticleSeq>> {
        self.feed().resolve_feed(viewer).await
    }

    pub async fn daily_expenditures(
        &self,
        user_seq: UserSeq,
        year: i32,
        month: u32,
    ) -> ResultEngine<DailyExpenditures> {
        self.statistics()
            .daily_expenditures(user_seq, year, month)
            .await
    }

    pub async fn daily_totals(
        &self,
        user_seq: UserSeq,
        year: i32,
        month: u32,
    ) -> ResultEngine<DailyTotals> {
        self.statistics().daily_totals(user_seq, year, month).await
    }

    pub async fn category_totals(
        &self,
        user_seq: UserSeq,
        year: i32,
        month: u32,
    ) -> ResultEngine<CategoryTotals> {
        self.statistics()
            .category_totals(user_seq, year, month)
            .await
    }

    pub async fn month_total(
        &self,
        user_seq: UserSeq,
        year: i32,
        month: u32,
    ) -> ResultEngine<Option<i64>> {
        self.statistics().month_total(user_seq, year, month).await
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
    calendar_days: bool,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Only report days that exist in the month in the daily statistics.
    pub fn calendar_days(mut self, enabled: bool) -> EngineBuilder {
        self.calendar_days = enabled;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        self.database.ping().await?;
        Ok(Engine {
            database: self.database,
            calendar_days: self.calendar_days,
        })
    }
}
