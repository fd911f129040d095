//! Feed visibility resolution.
//!
//! An article written by `author` is visible to `viewer` when:
//!
//! 1. `author == viewer`, whatever its status;
//! 2. `viewer` follows `author` and the article is public;
//! 3. `viewer` and `author` follow each other and the article is mutual-only.
//!
//! Rules are evaluated one by one and their results merged by article id.

use std::collections::{BTreeSet, HashMap};

use crate::{Article, ArticleSeq, ArticleStatus, ArticleStore, ResultEngine, UserSeq};

/// Visibility granted to `viewer` over one author's articles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Audience {
    Owner,
    Follower,
    Mutual,
}

impl Audience {
    fn sees(self, status: ArticleStatus) -> bool {
        match self {
            Self::Owner => true,
            Self::Follower => status == ArticleStatus::Public,
            Self::Mutual => matches!(status, ArticleStatus::Public | ArticleStatus::MutualOnly),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FeedResolver<S> {
    store: S,
}

impl<S: ArticleStore> FeedResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the ids of the articles visible to `viewer`, newest first.
    ///
    /// Ties on `written_at` are broken by descending id. An unknown viewer
    /// has no articles and no follow edges, so its feed is empty.
    pub async fn resolve_feed(&self, viewer: UserSeq) -> ResultEngine<Vec<ArticleSeq>> {
        let articles = self.visible_articles(viewer).await?;
        Ok(articles.into_iter().map(|article| article.seq).collect())
    }

    /// Same as [`resolve_feed`](Self::resolve_feed) but keeps the articles.
    pub async fn visible_articles(&self, viewer: UserSeq) -> ResultEngine<Vec<Article>> {
        let mut visible: HashMap<ArticleSeq, Article> = HashMap::new();
        self.collect(&mut visible, viewer, Audience::Owner).await?;

        // A self-edge adds nothing: the viewer's articles are already in.
        let followees: BTreeSet<UserSeq> = self
            .store
            .followees(viewer)
            .await?
            .into_iter()
            .filter(|author| *author != viewer)
            .collect();

        for author in followees {
            let audience = if self.store.has_follow_edge(author, viewer).await? {
                Audience::Mutual
            } else {
                Audience::Follower
            };
            self.collect(&mut visible, author, audience).await?;
        }

        let mut feed: Vec<Article> = visible.into_values().collect();
        feed.sort_by(|a, b| {
            b.written_at
                .cmp(&a.written_at)
                .then_with(|| b.seq.cmp(&a.seq))
        });

        tracing::debug!(viewer, articles = feed.len(), "feed resolved");
        Ok(feed)
    }

    async fn collect(
        &self,
        visible: &mut HashMap<ArticleSeq, Article>,
        author: UserSeq,
        audience: Audience,
    ) -> ResultEngine<()> {
        for article in self.store.articles_by_author(author).await? {
            if audience.sees(article.status) {
                visible.entry(article.seq).or_insert(article);
            }
        }
        Ok(())
    }
}
