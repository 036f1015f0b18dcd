//! Gallery media listing.

use serde::Deserialize;

use crate::db::Database;
use crate::errors::AppError;
use crate::models::media::{MediaClass, MediaItem, MediaKind, MediaPage, MediaRow};
use crate::models::pagination::{parse_lenient, PageDefaults, PageParams};
use crate::services::listing::{self, ListQuery, Listing, Predicate};

pub struct MediaListing;

impl Listing for MediaListing {
    type Row = MediaRow;
    type Filter = MediaKind;

    const TABLE: &'static str = "media_files";
    const COLUMNS: &'static str = "id, file_type, file_url, title, description";
    const FILTER_COLUMN: &'static str = "file_type";
    const ORDER_BY: &'static str = "file_type ASC, id DESC";
}

/// Query string of `GET /api/gallery`. Kept as raw text so malformed
/// numbers fall back to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
}

pub fn resolve(query: &GalleryQuery) -> ListQuery<MediaKind> {
    let params = PageParams {
        page: query.page.as_deref().and_then(parse_lenient),
        limit: query.limit.as_deref().and_then(parse_lenient),
    };
    let predicate = match MediaClass::parse(query.media_type.as_deref()) {
        Some(class) => Predicate::any_of(class.kinds()),
        None => Predicate::unrestricted(),
    };
    ListQuery {
        predicate,
        window: params.resolve(PageDefaults::MEDIA),
    }
}

pub async fn list(db: &Database, query: &GalleryQuery) -> Result<MediaPage, AppError> {
    let resolved = resolve(query);
    let session = db.session()?;
    let page = listing::fetch_page::<MediaListing>(&session, &resolved).await?;

    Ok(MediaPage {
        has_more: page.has_more(),
        page: page.window.page,
        data: page.rows.into_iter().map(MediaItem::from).collect(),
    })
}
