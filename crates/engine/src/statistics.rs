//! Monthly expenditure statistics.
//!
//! Daily views visit days `1..=MAX_DAY_OF_MONTH` whatever the length of the
//! month. A day that does not exist in the month (the 30th of February)
//! resolves to "no data" without querying the store, unless the engine is
//! built with [`calendar_days`](StatisticsEngineBuilder::calendar_days), in
//! which case such days are left out of the map.
//!
//! Sums over no rows are reported as `None`, keeping "nothing recorded"
//! distinct from a recorded total of zero.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{
    Article, ArticleStore, ExpenditureCategory, ExpenditureView, MAX_DAY_OF_MONTH, MonthRange,
    ResultEngine, UserSeq,
};

/// Expenditure records per day of month.
pub type DailyExpenditures = BTreeMap<u32, Vec<ExpenditureView>>;
/// Total spent per day of month.
pub type DailyTotals = BTreeMap<u32, Option<i64>>;
/// Total spent per category over a month.
pub type CategoryTotals = BTreeMap<ExpenditureCategory, Option<i64>>;

#[derive(Clone, Debug)]
pub struct StatisticsEngine<S> {
    store: S,
    calendar_days: bool,
}

impl<S: ArticleStore> StatisticsEngine<S> {
    pub fn new(store: S) -> Self {
        Self::builder(store).build()
    }

    /// Return a builder for `StatisticsEngine`.
    pub fn builder(store: S) -> StatisticsEngineBuilder<S> {
        StatisticsEngineBuilder {
            store,
            calendar_days: false,
        }
    }

    /// Days to report for `range`, each paired with its date when the month
    /// has that day.
    fn days(&self, range: &MonthRange) -> impl Iterator<Item = (u32, Option<NaiveDate>)> {
        let last = if self.calendar_days {
            range.days_in_month()
        } else {
            MAX_DAY_OF_MONTH
        };
        (1..=last).map(move |day| (day, range.day(day)))
    }

    /// Expenditure records of `user_seq` for every day of the month.
    pub async fn daily_expenditures(
        &self,
        user_seq: UserSeq,
        year: i32,
        month: u32,
    ) -> ResultEngine<DailyExpenditures> {
        let range = MonthRange::new(year, month)?;
        let mut out = DailyExpenditures::new();
        for (day, date) in self.days(&range) {
            let views = match date {
                Some(date) => self
                    .store
                    .expenditures_on(user_seq, date)
                    .await?
                    .iter()
                    .filter_map(Article::expenditure_view)
                    .collect(),
                None => Vec::new(),
            };
            out.insert(day, views);
        }
        tracing::debug!(user_seq, year, month, "daily expenditures computed");
        Ok(out)
    }

    /// Amount spent by `user_seq` on every day of the month.
    pub async fn daily_totals(
        &self,
        user_seq: UserSeq,
        year: i32,
        month: u32,
    ) -> ResultEngine<DailyTotals> {
        let range = MonthRange::new(year, month)?;
        let mut out = DailyTotals::new();
        for (day, date) in self.days(&range) {
            let total = match date {
                Some(date) => self.store.sum_amount_on(user_seq, date).await?,
                None => None,
            };
            out.insert(day, total);
        }
        tracing::debug!(user_seq, year, month, "daily totals computed");
        Ok(out)
    }

    /// Amount spent by `user_seq` in each category over the month.
    pub async fn category_totals(
        &self,
        user_seq: UserSeq,
        year: i32,
        month: u32,
    ) -> ResultEngine<CategoryTotals> {
        let range = MonthRange::new(year, month)?;
        let mut out = CategoryTotals::new();
        for category in ExpenditureCategory::all() {
            let total = self
                .store
                .sum_amount_between(user_seq, range, Some(category))
                .await?;
            out.insert(category, total);
        }
        tracing::debug!(user_seq, year, month, "category totals computed");
        Ok(out)
    }

    /// Amount spent by `user_seq` over the month, all categories together.
    pub async fn month_total(
        &self,
        user_seq: UserSeq,
        year: i32,
        month: u32,
    ) -> ResultEngine<Option<i64>> {
        let range = MonthRange::new(year, month)?;
        self.store.sum_amount_between(user_seq, range, None).await
    }
}

/// The builder for `StatisticsEngine`
pub struct StatisticsEngineBuilder<S> {
    store: S,
    calendar_days: bool,
}

impl<S: ArticleStore> StatisticsEngineBuilder<S> {
    /// Report only the days that exist in the requested month instead of
    /// `1..=MAX_DAY_OF_MONTH`.
    pub fn calendar_days(mut self, enabled: bool) -> Self {
        self.calendar_days = enabled;
        self
    }

    /// Construct `StatisticsEngine`
    pub fn build(self) -> StatisticsEngine<S> {
        StatisticsEngine {
            store: self.store,
            calendar_days: self.calendar_days,
        }
    }
}
