use sea_orm::{QueryFilter, QueryOrder, QuerySelect, prelude::*};

use crate::{
    Article, ArticleSeq, ArticleStore, ResultEngine, UserSeq, articles, followings, users,
};

use super::Engine;

impl Engine {
    /// Articles of the user logging in as `user_id`, newest first.
    ///
    /// An unknown login has no articles.
    pub async fn articles_by_login(&self, user_id: &str) -> ResultEngine<Vec<Article>> {
        let models = articles::Entity::find()
            .inner_join(users::Entity)
            .filter(users::Column::UserId.eq(user_id))
            .order_by_desc(articles::Column::WrittenAt)
            .order_by_desc(articles::Column::ArticleSeq)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Article::from).collect())
    }

    /// Ids of the articles whose body contains `needle`, newest first.
    ///
    /// A blank needle matches nothing.
    pub async fn search_articles(&self, needle: &str) -> ResultEngine<Vec<ArticleSeq>> {
        let needle = needle.trim();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = articles::Entity::find()
            .select_only()
            .column(articles::Column::ArticleSeq)
            .filter(articles::Column::ArticleText.contains(needle))
            .order_by_desc(articles::Column::WrittenAt)
            .order_by_desc(articles::Column::ArticleSeq)
            .into_tuple()
            .all(&self.database)
            .await?;
        Ok(ids)
    }

    /// Users `user_seq` follows, ascending.
    pub async fn following(&self, user_seq: UserSeq) -> ResultEngine<Vec<UserSeq>> {
        self.database.followees(user_seq).await
    }

    /// Users following `user_seq`, ascending.
    pub async fn followers(&self, user_seq: UserSeq) -> ResultEngine<Vec<UserSeq>> {
        let ids: Vec<i64> = followings::Entity::find()
            .select_only()
            .column(followings::Column::UserSeq)
            .filter(followings::Column::FollowingUserSeq.eq(user_seq))
            .order_by_asc(followings::Column::UserSeq)
            .into_tuple()
            .all(&self.database)
            .await?;
        Ok(ids)
    }
}
