//! Royal updates (announcements, honours, statements, trust news).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;
use crate::models::pagination::{deserialize_lenient, PageParams, PaginationMeta};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "update_category")]
pub enum UpdateCategory {
    Announcement,
    Honours,
    Statements,
    Trust,
}

impl UpdateCategory {
    pub const ALL: [UpdateCategory; 4] = [
        Self::Announcement,
        Self::Honours,
        Self::Statements,
        Self::Trust,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Announcement => "Announcement",
            Self::Honours => "Honours",
            Self::Statements => "Statements",
            Self::Trust => "Trust",
        }
    }

    /// Resolve a category filter. `None`, empty and `"All"` select every
    /// category; an unknown literal is rejected rather than replaced.
    pub fn parse_filter(raw: Option<&str>) -> Result<Option<Self>, AppError> {
        let raw = match raw.map(str::trim) {
            None | Some("") | Some("All") => return Ok(None),
            Some(raw) => raw,
        };
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == raw)
            .map(Some)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Unknown update type '{raw}'; expected All, Announcement, Honours, Statements or Trust"
                ))
            })
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct UpdateRow {
    pub id: i64,
    pub category: UpdateCategory,
    pub title: String,
    pub content: Option<String>,
    pub published_at: DateTime<Utc>,
    pub action_link: Option<String>,
    pub action_text: Option<String>,
}

/// `POST /api/royal-updates` body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUpdatesRequest {
    #[serde(default, rename = "type")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub limit: Option<i64>,
}

impl ListUpdatesRequest {
    pub fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Update as served to the bulletin feed.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    pub id: i64,
    pub category: UpdateCategory,
    pub title: String,
    pub body: Option<String>,
    pub display_date: String,
    pub is_new: bool,
    pub action_link: Option<String>,
    pub action_label: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdatesPage {
    pub data: Vec<UpdateItem>,
    pub pagination: PaginationMeta,
}

/// Short decree line for the homepage ticker.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Decree {
    pub id: i64,
    pub date: String,
    pub text: String,
    pub is_new: bool,
}

/// News card for the homepage chronicle.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: i64,
    pub category: UpdateCategory,
    pub date: String,
    pub title: String,
    pub excerpt: String,
    pub read_time: String,
    pub link: Option<String>,
}

/// `GET /api/royal-updates/digest` response.
#[derive(Debug, Default, Serialize)]
pub struct RoyalDigest {
    pub decrees: Vec<Decree>,
    pub news: Vec<NewsItem>,
}
