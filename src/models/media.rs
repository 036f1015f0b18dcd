//! Gallery media model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "media_kind", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaKind {
    FeaturedImage,
    FeaturedVideo,
    Image,
    Video,
}

impl MediaKind {
    pub fn is_video(self) -> bool {
        matches!(self, Self::Video | Self::FeaturedVideo)
    }

    pub fn is_featured(self) -> bool {
        matches!(self, Self::FeaturedImage | Self::FeaturedVideo)
    }
}

/// Requested media class. Each class expands to a set of kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaClass {
    Image,
    Video,
    Featured,
}

impl MediaClass {
    /// Unrecognized or missing values yield `None`, meaning every kind is
    /// eligible.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw?.trim().to_ascii_lowercase().as_str() {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            "featured" => Some(Self::Featured),
            _ => None,
        }
    }

    pub fn kinds(self) -> Vec<MediaKind> {
        match self {
            Self::Image => vec![MediaKind::Image, MediaKind::FeaturedImage],
            Self::Video => vec![MediaKind::Video, MediaKind::FeaturedVideo],
            Self::Featured => vec![MediaKind::FeaturedImage, MediaKind::FeaturedVideo],
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct MediaRow {
    pub id: i64,
    pub file_type: MediaKind,
    pub file_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Gallery item as served to widgets.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MediaItem {
    pub id: i64,
    pub file_type: MediaKind,
    pub file_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_video: bool,
    pub is_featured: bool,
}

impl From<MediaRow> for MediaItem {
    fn from(row: MediaRow) -> Self {
        Self {
            id: row.id,
            is_video: row.file_type.is_video(),
            is_featured: row.file_type.is_featured(),
            file_type: row.file_type,
            file_url: row.file_url,
            title: row.title,
            description: row.description,
        }
    }
}

/// `GET /api/gallery` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPage {
    pub data: Vec<MediaItem>,
    pub has_more: bool,
    pub page: i64,
}
