//! Read-side core of the journaling backend.
//!
//! - [`FeedResolver`] computes which articles a user sees in their feed.
//! - [`StatisticsEngine`] aggregates a user's expenditure articles over a
//!   calendar month.
//! - [`MonthRange`] bounds one calendar month.
//!
//! Both components only talk to storage through [`ArticleStore`], which is
//! implemented for `sea_orm::DatabaseConnection`. [`Engine`] bundles them on
//! top of a connection.

pub use articles::{
    Article, ArticleKind, ArticleStatus, Expenditure, ExpenditureCategory, ExpenditureView,
};
pub use error::EngineError;
pub use feed::FeedResolver;
pub use month_range::{MAX_DAY_OF_MONTH, MonthRange};
pub use ops::{Engine, EngineBuilder};
pub use statistics::{
    CategoryTotals, DailyExpenditures, DailyTotals, StatisticsEngine, StatisticsEngineBuilder,
};
pub use store::ArticleStore;

pub mod articles;
mod error;
mod feed;
pub mod followings;
mod month_range;
mod ops;
mod statistics;
mod store;
pub mod users;

/// Opaque sequence id of a user.
pub type UserSeq = i64;
/// Opaque sequence id of an article.
pub type ArticleSeq = i64;

type ResultEngine<T> = Result<T, EngineError>;
