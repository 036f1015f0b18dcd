//! Royal updates: the paginated bulletin feed and the homepage digest.

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::db::{Database, Session};
use crate::errors::AppError;
use crate::models::pagination::{PageDefaults, PaginationMeta, Window};
use crate::models::update::{
    Decree, ListUpdatesRequest, NewsItem, RoyalDigest, UpdateCategory, UpdateItem, UpdateRow,
    UpdatesPage,
};
use crate::services::listing::{self, ListQuery, Listing, Predicate};
use crate::services::normalize;

const DECREE_LIMIT: i64 = 10;
const NEWS_LIMIT: i64 = 4;

pub struct UpdateListing;

impl Listing for UpdateListing {
    type Row = UpdateRow;
    type Filter = UpdateCategory;

    const TABLE: &'static str = "app_updates";
    const COLUMNS: &'static str =
        "id, category, title, content, published_at, action_link, action_text";
    const FILTER_COLUMN: &'static str = "category";
    const ORDER_BY: &'static str = "published_at DESC, id DESC";
    const ACTIVE_COLUMN: Option<&'static str> = Some("is_active");
}

pub fn resolve(request: &ListUpdatesRequest) -> Result<ListQuery<UpdateCategory>, AppError> {
    let predicate = match UpdateCategory::parse_filter(request.category.as_deref())? {
        Some(category) => Predicate::any_of(vec![category]),
        None => Predicate::unrestricted(),
    };
    Ok(ListQuery {
        predicate,
        window: request.page_params().resolve(PageDefaults::UPDATES),
    })
}

pub fn to_item(row: UpdateRow, now: DateTime<Utc>) -> UpdateItem {
    UpdateItem {
        id: row.id,
        category: row.category,
        display_date: normalize::display_date(row.published_at, true),
        is_new: normalize::is_new(row.published_at, now),
        title: row.title,
        body: row.content,
        action_link: row.action_link,
        action_label: row.action_text,
    }
}

/// List active updates, optionally restricted to one category.
pub async fn list(
    db: &Database,
    clock: &dyn Clock,
    request: &ListUpdatesRequest,
) -> Result<UpdatesPage, AppError> {
    let resolved = resolve(request)?;
    let session = db.session()?;
    let page = listing::fetch_page::<UpdateListing>(&session, &resolved).await?;

    let now = clock.now();
    Ok(UpdatesPage {
        pagination: PaginationMeta::new(page.window, page.total),
        data: page.rows.into_iter().map(|row| to_item(row, now)).collect(),
    })
}

pub fn to_decree(row: UpdateRow, now: DateTime<Utc>) -> Decree {
    let text = row
        .content
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(row.title);
    Decree {
        id: row.id,
        date: normalize::display_date(row.published_at, false),
        is_new: normalize::is_new(row.published_at, now),
        text,
    }
}

pub fn to_news(row: UpdateRow) -> NewsItem {
    NewsItem {
        id: row.id,
        category: row.category,
        date: normalize::display_date(row.published_at, false),
        excerpt: normalize::excerpt(row.content.as_deref()),
        read_time: normalize::read_time(row.content.as_deref()),
        title: row.title,
        link: row.action_link,
    }
}

/// Latest announcements and news for the homepage. Never fails: a datastore
/// problem yields an empty digest so the page can still render.
pub async fn digest(db: &Database, clock: &dyn Clock) -> RoyalDigest {
    let loaded = async {
        let session = db.session()?;
        load_digest(&session, clock).await
    };
    loaded.await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to load royal updates digest");
        RoyalDigest::default()
    })
}

/// Both digest queries run concurrently under the one admitted session.
pub async fn load_digest(
    session: &Session<'_>,
    clock: &dyn Clock,
) -> Result<RoyalDigest, AppError> {
    let decrees_query = ListQuery {
        predicate: Predicate::any_of(vec![UpdateCategory::Announcement]),
        window: Window::first(DECREE_LIMIT),
    };
    let news_query = ListQuery {
        predicate: Predicate::any_of(vec![
            UpdateCategory::Honours,
            UpdateCategory::Statements,
            UpdateCategory::Trust,
        ]),
        window: Window::first(NEWS_LIMIT),
    };

    let (decrees, news) = tokio::try_join!(
        listing::fetch_rows::<UpdateListing>(session, &decrees_query),
        listing::fetch_rows::<UpdateListing>(session, &news_query),
    )?;

    let now = clock.now();
    Ok(RoyalDigest {
        decrees: decrees.into_iter().map(|row| to_decree(row, now)).collect(),
        news: news.into_iter().map(to_news).collect(),
    })
}
