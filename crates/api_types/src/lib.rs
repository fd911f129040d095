use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub mod feed {
    use super::*;

    /// Article ids visible to the viewer, newest first.
    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct FeedResponse {
        pub user_seq: i64,
        pub article_seqs: Vec<i64>,
    }
}

pub mod article {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ArticleStatus {
        Public,
        MutualOnly,
        Private,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ArticleView {
        pub article_seq: i64,
        pub user_seq: i64,
        pub written_at: DateTime<Utc>,
        pub article_text: String,
        pub financial_text: Option<String>,
        pub status: ArticleStatus,
        pub expenditure: bool,
        pub expenditure_category: Option<u8>,
        pub amount: Option<i64>,
        pub consumption_date: Option<NaiveDate>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ArticleList {
        pub articles: Vec<ArticleView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ArticleSearch {
        pub needle: String,
        pub article_seqs: Vec<i64>,
    }
}

pub mod stats {
    use super::*;

    /// One expenditure record of a day.
    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ExpenditureView {
        pub expenditure_category: u8,
        /// Financial note, or the article body when the note is empty.
        pub context: String,
        pub amount: i64,
        pub article_seq: i64,
        pub consumption_date: NaiveDate,
    }

    /// Expenditure records keyed by day of month.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct DailyExpenditures {
        pub year: i32,
        pub month: u32,
        pub days: BTreeMap<u32, Vec<ExpenditureView>>,
    }

    /// Amount spent keyed by day of month. `null` means nothing recorded.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Calendar {
        pub year: i32,
        pub month: u32,
        pub days: BTreeMap<u32, Option<i64>>,
    }

    /// Amount spent keyed by category code. `null` means nothing recorded.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Chart {
        pub year: i32,
        pub month: u32,
        pub categories: BTreeMap<u8, Option<i64>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MonthTotal {
        pub year: i32,
        pub month: u32,
        pub total: Option<i64>,
    }
}

pub mod profile {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct FollowList {
        pub user_seq: i64,
        pub users: Vec<i64>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_days_serialize_in_ascending_order_with_nulls() {
        let calendar = stats::Calendar {
            year: 2024,
            month: 3,
            days: [(20, Some(3000)), (5, Some(5000)), (1, None)]
                .into_iter()
                .collect(),
        };
        let json = serde_json::to_string(&calendar).unwrap();
        assert_eq!(
            json,
            r#"{"year":2024,"month":3,"days":{"1":null,"5":5000,"20":3000}}"#
        );
    }

    #[test]
    fn status_is_snake_case() {
        let json = serde_json::to_string(&article::ArticleStatus::MutualOnly).unwrap();
        assert_eq!(json, r#""mutual_only""#);
    }
}
