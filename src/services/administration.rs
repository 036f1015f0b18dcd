//! Administration roster grouped by category.

use crate::db::Database;
use crate::models::administration::{AdminCategory, AdminMember, AdminRow, Roster};
use crate::models::pagination::Window;
use crate::services::listing::{self, ListQuery, Listing, Predicate};

pub struct RosterListing;

impl Listing for RosterListing {
    type Row = AdminRow;
    type Filter = AdminCategory;

    const TABLE: &'static str = "royal_administration";
    const COLUMNS: &'static str =
        "id, name, role_title, category, display_order, bio, image_url";
    const FILTER_COLUMN: &'static str = "category";
    const ORDER_BY: &'static str = "category ASC, display_order ASC, id ASC";
    const ACTIVE_COLUMN: Option<&'static str> = Some("is_active");
}

pub fn to_member(row: AdminRow) -> AdminMember {
    let bio = row
        .bio
        .filter(|b| !b.trim().is_empty())
        .unwrap_or_else(|| row.category.fallback_bio().to_string());
    AdminMember {
        id: row.id,
        name: row.name,
        role_title: row.role_title,
        category: row.category,
        display_order: row.display_order,
        bio,
        image_url: row.image_url,
    }
}

/// Split rows into the three category buckets, each ordered by
/// `display_order`.
pub fn group(rows: Vec<AdminRow>) -> Roster {
    let mut roster = Roster::default();
    for row in rows {
        let member = to_member(row);
        match member.category {
            AdminCategory::Officer => roster.officers.push(member),
            AdminCategory::Advisor => roster.advisors.push(member),
            AdminCategory::Delegate => roster.delegates.push(member),
        }
    }
    for bucket in [
        &mut roster.officers,
        &mut roster.advisors,
        &mut roster.delegates,
    ] {
        bucket.sort_by_key(|m| (m.display_order, m.id));
    }
    roster
}

/// Every active member, up to `limit`. A datastore failure yields an empty
/// roster rather than an error so the page can show its placeholder.
pub async fn roster(db: &Database, limit: i64) -> Roster {
    let query = ListQuery {
        predicate: Predicate::unrestricted(),
        window: Window::first(limit),
    };
    let fetched = async {
        let session = db.session()?;
        listing::fetch_rows::<RosterListing>(&session, &query).await
    };
    match fetched.await {
        Ok(rows) => group(rows),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load administration roster");
            Roster::default()
        }
    }
}
