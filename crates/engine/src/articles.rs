//! Article primitives.
//!
//! An `Article` is a diary entry written by one user. Expenditure articles
//! additionally record what was spent, in which category and on which day.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{ArticleSeq, EngineError, UserSeq};

/// Who may see an article in their feed, besides its author.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    /// Any follower.
    Public,
    /// Only users the author follows back.
    MutualOnly,
    /// Nobody but the author.
    Private,
}

impl ArticleStatus {
    pub const PUBLIC_CODE: i32 = 1;
    pub const MUTUAL_ONLY_CODE: i32 = 2;

    /// Stored status codes other than public/mutual-only are private.
    pub fn from_code(code: i32) -> Self {
        match code {
            Self::PUBLIC_CODE => Self::Public,
            Self::MUTUAL_ONLY_CODE => Self::MutualOnly,
            _ => Self::Private,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Public => Self::PUBLIC_CODE,
            Self::MutualOnly => Self::MUTUAL_ONLY_CODE,
            Self::Private => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleKind {
    Diary,
    Expenditure,
}

impl ArticleKind {
    pub const EXPENDITURE_CODE: i32 = 1;

    pub fn from_code(code: i32) -> Self {
        if code == Self::EXPENDITURE_CODE {
            Self::Expenditure
        } else {
            Self::Diary
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Diary => 0,
            Self::Expenditure => Self::EXPENDITURE_CODE,
        }
    }
}

/// Spending category, numbered `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct ExpenditureCategory(u8);

impl ExpenditureCategory {
    pub const COUNT: u8 = 6;

    /// Every category in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=Self::COUNT).map(Self)
    }

    pub fn code(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for ExpenditureCategory {
    type Error = EngineError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|code| (1..=Self::COUNT).contains(code))
            .map(Self)
            .ok_or_else(|| {
                EngineError::CorruptRecord(format!("invalid expenditure category: {value}"))
            })
    }
}

impl From<ExpenditureCategory> for i32 {
    fn from(category: ExpenditureCategory) -> Self {
        i32::from(category.0)
    }
}

/// Spending data carried by an expenditure article.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expenditure {
    pub category: ExpenditureCategory,
    /// Minor currency units, never negative.
    pub amount: i64,
    /// Day the money was spent, independent of when the article was written.
    pub consumption_date: NaiveDate,
}

impl Expenditure {
    /// Spending data from the stored columns. Missing columns, a category
    /// outside `1..=6` or a negative amount give `None`.
    fn from_columns(
        category: Option<i32>,
        amount: Option<i64>,
        consumption_date: Option<NaiveDate>,
    ) -> Option<Self> {
        Some(Self {
            category: ExpenditureCategory::try_from(category?).ok()?,
            amount: amount.filter(|amount| *amount >= 0)?,
            consumption_date: consumption_date?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub seq: ArticleSeq,
    pub author_seq: UserSeq,
    pub written_at: DateTime<Utc>,
    pub text: String,
    pub financial_text: Option<String>,
    pub status: ArticleStatus,
    pub kind: ArticleKind,
    /// Present only for expenditure articles with complete, valid spending
    /// data. Rows failing that check are kept as plain articles.
    pub expenditure: Option<Expenditure>,
}

impl Article {
    /// Whether the article counts as spending: an expenditure article whose
    /// category, amount and consumption date are all valid.
    pub fn is_expenditure(&self) -> bool {
        self.kind == ArticleKind::Expenditure && self.expenditure.is_some()
    }

    /// Text shown next to an expenditure: the financial note when it is
    /// non-empty, the article body otherwise.
    pub fn context(&self) -> &str {
        match self.financial_text.as_deref() {
            Some(note) if !note.is_empty() => note,
            _ => &self.text,
        }
    }

    /// Builds the statistics view of an expenditure article, `None` when the
    /// article carries no usable spending data.
    pub fn expenditure_view(&self) -> Option<ExpenditureView> {
        let expenditure = self.expenditure?;
        Some(ExpenditureView {
            category: expenditure.category,
            context: self.context().to_string(),
            amount: expenditure.amount,
            article_seq: self.seq,
            consumption_date: expenditure.consumption_date,
        })
    }
}

/// One expenditure record as listed in the daily statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenditureView {
    pub category: ExpenditureCategory,
    pub context: String,
    pub amount: i64,
    pub article_seq: ArticleSeq,
    pub consumption_date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub article_seq: i64,
    pub user_seq: i64,
    pub written_at: DateTimeUtc,
    pub article_text: String,
    pub financial_text: Option<String>,
    pub status: i32,
    pub article_type: i32,
    pub expenditure_category: Option<i32>,
    pub amount: Option<i64>,
    pub consumption_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserSeq",
        to = "super::users::Column::UserSeq",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Article {
    fn from(model: Model) -> Self {
        let kind = ArticleKind::from_code(model.article_type);
        let expenditure = match kind {
            ArticleKind::Expenditure => {
                let expenditure = Expenditure::from_columns(
                    model.expenditure_category,
                    model.amount,
                    model.consumption_date,
                );
                if expenditure.is_none() {
                    tracing::warn!(
                        article_seq = model.article_seq,
                        "expenditure article without valid spending data"
                    );
                }
                expenditure
            }
            ArticleKind::Diary => None,
        };

        Self {
            seq: model.article_seq,
            author_seq: model.user_seq,
            written_at: model.written_at,
            text: model.article_text,
            financial_text: model.financial_text,
            status: ArticleStatus::from_code(model.status),
            kind,
            expenditure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expenditure_model(financial_text: Option<&str>, article_text: &str) -> Model {
        Model {
            article_seq: 7,
            user_seq: 1,
            written_at: DateTime::<Utc>::UNIX_EPOCH,
            article_text: article_text.to_string(),
            financial_text: financial_text.map(ToString::to_string),
            status: ArticleStatus::PUBLIC_CODE,
            article_type: ArticleKind::EXPENDITURE_CODE,
            expenditure_category: Some(3),
            amount: Some(12000),
            consumption_date: NaiveDate::from_ymd_opt(2024, 3, 5),
        }
    }

    #[test]
    fn empty_note_falls_back_to_body() {
        let article = Article::from(expenditure_model(Some(""), "lunch 12000"));
        assert_eq!(article.context(), "lunch 12000");

        let article = Article::from(expenditure_model(None, "lunch 12000"));
        assert_eq!(article.context(), "lunch 12000");
    }

    #[test]
    fn non_empty_note_wins_over_body() {
        let article = Article::from(expenditure_model(Some("coffee"), "random text"));
        assert_eq!(article.context(), "coffee");

        let view = article.expenditure_view().unwrap();
        assert_eq!(view.context, "coffee");
        assert_eq!(view.amount, 12000);
        assert_eq!(view.article_seq, 7);
        assert_eq!(view.category.code(), 3);
        assert_eq!(view.consumption_date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn unknown_status_codes_are_private() {
        assert_eq!(ArticleStatus::from_code(1), ArticleStatus::Public);
        assert_eq!(ArticleStatus::from_code(2), ArticleStatus::MutualOnly);
        assert_eq!(ArticleStatus::from_code(0), ArticleStatus::Private);
        assert_eq!(ArticleStatus::from_code(9), ArticleStatus::Private);
    }

    #[test]
    fn category_codes_are_one_to_six() {
        assert!(matches!(
            ExpenditureCategory::try_from(7),
            Err(EngineError::CorruptRecord(_))
        ));
        assert!(ExpenditureCategory::try_from(0).is_err());
        assert_eq!(
            ExpenditureCategory::all().map(|c| c.code()).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn invalid_spending_data_keeps_the_article_without_expenditure() {
        let broken: [fn(&mut Model); 5] = [
            |m| m.expenditure_category = Some(7),
            |m| m.expenditure_category = None,
            |m| m.amount = Some(-1),
            |m| m.amount = None,
            |m| m.consumption_date = None,
        ];
        for breakage in broken {
            let mut model = expenditure_model(None, "bus");
            breakage(&mut model);
            let article = Article::from(model);
            assert_eq!(article.kind, ArticleKind::Expenditure);
            assert_eq!(article.expenditure, None);
            assert!(!article.is_expenditure());
            assert_eq!(article.expenditure_view(), None);
            assert_eq!(article.text, "bus");
        }
    }

    #[test]
    fn zero_amount_is_valid_spending() {
        let mut model = expenditure_model(None, "free sample");
        model.amount = Some(0);
        let article = Article::from(model);
        assert!(article.is_expenditure());
        assert_eq!(article.expenditure_view().map(|v| v.amount), Some(0));
    }

    #[test]
    fn diary_articles_carry_no_expenditure() {
        let mut model = expenditure_model(None, "a quiet day");
        model.article_type = 0;
        let article = Article::from(model);
        assert!(!article.is_expenditure());
        assert_eq!(article.expenditure, None);
        assert_eq!(article.expenditure_view(), None);
    }
}
