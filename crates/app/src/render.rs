//! Conversions from engine values to the JSON shapes in `api_types`.

use api_types::{article, stats};
use engine::{Article, ArticleStatus, CategoryTotals, DailyExpenditures, DailyTotals};

fn status(status: ArticleStatus) -> article::ArticleStatus {
    match status {
        ArticleStatus::Public => article::ArticleStatus::Public,
        ArticleStatus::MutualOnly => article::ArticleStatus::MutualOnly,
        ArticleStatus::Private => article::ArticleStatus::Private,
    }
}

pub fn article_view(article: Article) -> article::ArticleView {
    let expenditure = article.expenditure;
    article::ArticleView {
        article_seq: article.seq,
        user_seq: article.author_seq,
        written_at: article.written_at,
        expenditure: article.is_expenditure(),
        article_text: article.text,
        financial_text: article.financial_text,
        status: status(article.status),
        expenditure_category: expenditure.map(|e| e.category.code()),
        amount: expenditure.map(|e| e.amount),
        consumption_date: expenditure.map(|e| e.consumption_date),
    }
}

pub fn daily_expenditures(year: i32, month: u32, days: DailyExpenditures) -> stats::DailyExpenditures {
    let days = days
        .into_iter()
        .map(|(day, views)| {
            let views = views
                .into_iter()
                .map(|view| stats::ExpenditureView {
                    expenditure_category: view.category.code(),
                    context: view.context,
                    amount: view.amount,
                    article_seq: view.article_seq,
                    consumption_date: view.consumption_date,
                })
                .collect();
            (day, views)
        })
        .collect();
    stats::DailyExpenditures { year, month, days }
}

pub fn calendar(year: i32, month: u32, days: DailyTotals) -> stats::Calendar {
    stats::Calendar { year, month, days }
}

pub fn chart(year: i32, month: u32, totals: CategoryTotals) -> stats::Chart {
    let categories = totals
        .into_iter()
        .map(|(category, total)| (category.code(), total))
        .collect();
    stats::Chart {
        year,
        month,
        categories,
    }
}
