//! Read-side queries the feed and statistics components are built on.
//!
//! The components never hold a graph of follow edges or a cache of articles:
//! every resolution asks the store again. Implementations must be free of
//! side effects.

use std::future::Future;

use chrono::NaiveDate;
use sea_orm::{
    DatabaseConnection, QueryFilter, QueryOrder, QuerySelect, Select, prelude::*, sea_query::Expr,
};

use crate::{
    Article, ArticleKind, ExpenditureCategory, MonthRange, ResultEngine, UserSeq, articles,
    followings,
};

pub trait ArticleStore {
    /// Articles written by `user_seq`, newest first (ties by descending seq).
    fn articles_by_author(
        &self,
        user_seq: UserSeq,
    ) -> impl Future<Output = ResultEngine<Vec<Article>>> + Send;

    /// Users `user_seq` follows.
    fn followees(&self, user_seq: UserSeq)
    -> impl Future<Output = ResultEngine<Vec<UserSeq>>> + Send;

    /// Whether `from` follows `to`.
    fn has_follow_edge(
        &self,
        from: UserSeq,
        to: UserSeq,
    ) -> impl Future<Output = ResultEngine<bool>> + Send;

    /// Expenditure articles of `user_seq` consumed on `date`.
    fn expenditures_on(
        &self,
        user_seq: UserSeq,
        date: NaiveDate,
    ) -> impl Future<Output = ResultEngine<Vec<Article>>> + Send;

    /// Sum of expenditure amounts on `date`, `None` when nothing was spent.
    fn sum_amount_on(
        &self,
        user_seq: UserSeq,
        date: NaiveDate,
    ) -> impl Future<Output = ResultEngine<Option<i64>>> + Send;

    /// Sum of expenditure amounts inside `range`, optionally restricted to one
    /// category. `None` when no expenditure matches.
    fn sum_amount_between(
        &self,
        user_seq: UserSeq,
        range: MonthRange,
        category: Option<ExpenditureCategory>,
    ) -> impl Future<Output = ResultEngine<Option<i64>>> + Send;
}

impl<S> ArticleStore for &S
where
    S: ArticleStore + Sync,
{
    fn articles_by_author(
        &self,
        user_seq: UserSeq,
    ) -> impl Future<Output = ResultEngine<Vec<Article>>> + Send {
        (**self).articles_by_author(user_seq)
    }

    fn followees(
        &self,
        user_seq: UserSeq,
    ) -> impl Future<Output = ResultEngine<Vec<UserSeq>>> + Send {
        (**self).followees(user_seq)
    }

    fn has_follow_edge(
        &self,
        from: UserSeq,
        to: UserSeq,
    ) -> impl Future<Output = ResultEngine<bool>> + Send {
        (**self).has_follow_edge(from, to)
    }

    fn expenditures_on(
        &self,
        user_seq: UserSeq,
        date: NaiveDate,
    ) -> impl Future<Output = ResultEngine<Vec<Article>>> + Send {
        (**self).expenditures_on(user_seq, date)
    }

    fn sum_amount_on(
        &self,
        user_seq: UserSeq,
        date: NaiveDate,
    ) -> impl Future<Output = ResultEngine<Option<i64>>> + Send {
        (**self).sum_amount_on(user_seq, date)
    }

    fn sum_amount_between(
        &self,
        user_seq: UserSeq,
        range: MonthRange,
        category: Option<ExpenditureCategory>,
    ) -> impl Future<Output = ResultEngine<Option<i64>>> + Send {
        (**self).sum_amount_between(user_seq, range, category)
    }
}

/// Expenditure rows of `user_seq` whose spending data is usable: the same
/// rows that convert into an [`Article`] with `expenditure` set. Every
/// statistic reads from this selection so sums and listings agree.
fn expenditures_of(user_seq: UserSeq) -> Select<articles::Entity> {
    articles::Entity::find()
        .filter(articles::Column::UserSeq.eq(user_seq))
        .filter(articles::Column::ArticleType.eq(ArticleKind::EXPENDITURE_CODE))
        .filter(
            articles::Column::ExpenditureCategory
                .between(1, i32::from(ExpenditureCategory::COUNT)),
        )
        .filter(articles::Column::Amount.is_not_null())
        .filter(articles::Column::Amount.gte(0))
        .filter(articles::Column::ConsumptionDate.is_not_null())
}

async fn sum_amount(
    db: &DatabaseConnection,
    query: Select<articles::Entity>,
) -> ResultEngine<Option<i64>> {
    let total: Option<Option<i64>> = query
        .select_only()
        .column_as(Expr::col(articles::Column::Amount).sum(), "total")
        .into_tuple()
        .one(db)
        .await?;
    Ok(total.flatten())
}

fn into_articles(models: Vec<articles::Model>) -> Vec<Article> {
    models.into_iter().map(Article::from).collect()
}

impl ArticleStore for DatabaseConnection {
    async fn articles_by_author(&self, user_seq: UserSeq) -> ResultEngine<Vec<Article>> {
        let models = articles::Entity::find()
            .filter(articles::Column::UserSeq.eq(user_seq))
            .order_by_desc(articles::Column::WrittenAt)
            .order_by_desc(articles::Column::ArticleSeq)
            .all(self)
            .await?;
        Ok(into_articles(models))
    }

    async fn followees(&self, user_seq: UserSeq) -> ResultEngine<Vec<UserSeq>> {
        let followees: Vec<i64> = followings::Entity::find()
            .select_only()
            .column(followings::Column::FollowingUserSeq)
            .filter(followings::Column::UserSeq.eq(user_seq))
            .order_by_asc(followings::Column::FollowingUserSeq)
            .into_tuple()
            .all(self)
            .await?;
        Ok(followees)
    }

    async fn has_follow_edge(&self, from: UserSeq, to: UserSeq) -> ResultEngine<bool> {
        let edge = followings::Entity::find_by_id((from, to)).one(self).await?;
        Ok(edge.is_some())
    }

    async fn expenditures_on(
        &self,
        user_seq: UserSeq,
        date: NaiveDate,
    ) -> ResultEngine<Vec<Article>> {
        let models = expenditures_of(user_seq)
            .filter(articles::Column::ConsumptionDate.eq(date))
            .order_by_asc(articles::Column::ArticleSeq)
            .all(self)
            .await?;
        Ok(into_articles(models))
    }

    async fn sum_amount_on(&self, user_seq: UserSeq, date: NaiveDate) -> ResultEngine<Option<i64>> {
        sum_amount(
            self,
            expenditures_of(user_seq).filter(articles::Column::ConsumptionDate.eq(date)),
        )
        .await
    }

    async fn sum_amount_between(
        &self,
        user_seq: UserSeq,
        range: MonthRange,
        category: Option<ExpenditureCategory>,
    ) -> ResultEngine<Option<i64>> {
        let mut query = expenditures_of(user_seq)
            .filter(articles::Column::ConsumptionDate.gte(range.start()))
            .filter(articles::Column::ConsumptionDate.lt(range.end()));
        if let Some(category) = category {
            query = query.filter(articles::Column::ExpenditureCategory.eq(i32::from(category)));
        }
        sum_amount(self, query).await
    }
}
