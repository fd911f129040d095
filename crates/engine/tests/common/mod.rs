#![allow(dead_code)]

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, Database, DatabaseConnection};

use engine::{ArticleKind, ArticleStatus, Engine, articles, followings, users};
use migration::MigratorTrait;

pub async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

pub fn at(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn user(db: &DatabaseConnection, login: &str) -> i64 {
    users::ActiveModel {
        user_seq: ActiveValue::NotSet,
        user_id: ActiveValue::Set(login.to_string()),
    }
    .insert(db)
    .await
    .unwrap()
    .user_seq
}

pub async fn follow(db: &DatabaseConnection, from: i64, to: i64) {
    followings::ActiveModel {
        user_seq: ActiveValue::Set(from),
        following_user_seq: ActiveValue::Set(to),
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn post(
    db: &DatabaseConnection,
    author: i64,
    status: ArticleStatus,
    written_at: DateTime<Utc>,
    text: &str,
) -> i64 {
    articles::ActiveModel {
        article_seq: ActiveValue::NotSet,
        user_seq: ActiveValue::Set(author),
        written_at: ActiveValue::Set(written_at),
        article_text: ActiveValue::Set(text.to_string()),
        financial_text: ActiveValue::Set(None),
        status: ActiveValue::Set(status.code()),
        article_type: ActiveValue::Set(ArticleKind::Diary.code()),
        expenditure_category: ActiveValue::Set(None),
        amount: ActiveValue::Set(None),
        consumption_date: ActiveValue::Set(None),
    }
    .insert(db)
    .await
    .unwrap()
    .article_seq
}

pub struct Spend<'a> {
    pub author: i64,
    pub category: i32,
    pub amount: i64,
    pub on: NaiveDate,
    pub note: Option<&'a str>,
    pub text: &'a str,
}

pub async fn spend(db: &DatabaseConnection, spend: Spend<'_>) -> i64 {
    articles::ActiveModel {
        article_seq: ActiveValue::NotSet,
        user_seq: ActiveValue::Set(spend.author),
        written_at: ActiveValue::Set(at(0)),
        article_text: ActiveValue::Set(spend.text.to_string()),
        financial_text: ActiveValue::Set(spend.note.map(ToString::to_string)),
        status: ActiveValue::Set(ArticleStatus::Private.code()),
        article_type: ActiveValue::Set(ArticleKind::Expenditure.code()),
        expenditure_category: ActiveValue::Set(Some(spend.category)),
        amount: ActiveValue::Set(Some(spend.amount)),
        consumption_date: ActiveValue::Set(Some(spend.on)),
    }
    .insert(db)
    .await
    .unwrap()
    .article_seq
}

/// Shorthand for an expenditure with no note and a generic body.
pub async fn spend_simple(
    db: &DatabaseConnection,
    author: i64,
    category: i32,
    amount: i64,
    on: NaiveDate,
) -> i64 {
    spend(
        db,
        Spend {
            author,
            category,
            amount,
            on,
            note: None,
            text: "spent",
        },
    )
    .await
}

/// Expenditure-typed row with arbitrary, possibly invalid, spending columns.
pub async fn raw_spend(
    db: &DatabaseConnection,
    author: i64,
    status: ArticleStatus,
    category: Option<i32>,
    amount: Option<i64>,
    on: Option<NaiveDate>,
) -> i64 {
    articles::ActiveModel {
        article_seq: ActiveValue::NotSet,
        user_seq: ActiveValue::Set(author),
        written_at: ActiveValue::Set(at(0)),
        article_text: ActiveValue::Set("unreadable receipt".to_string()),
        financial_text: ActiveValue::Set(None),
        status: ActiveValue::Set(status.code()),
        article_type: ActiveValue::Set(ArticleKind::Expenditure.code()),
        expenditure_category: ActiveValue::Set(category),
        amount: ActiveValue::Set(amount),
        consumption_date: ActiveValue::Set(on),
    }
    .insert(db)
    .await
    .unwrap()
    .article_seq
}
