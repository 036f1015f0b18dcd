//! Administration roster: officers, advisors and delegates.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "admin_category", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminCategory {
    Officer,
    Advisor,
    Delegate,
}

impl AdminCategory {
    /// Biography shown when a member has none on record.
    pub fn fallback_bio(self) -> &'static str {
        match self {
            Self::Officer => "Officer of the Royal Household.",
            Self::Advisor => "Royal Advisor.",
            Self::Delegate => "International Representative of the Royal House.",
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct AdminRow {
    pub id: i64,
    pub name: String,
    pub role_title: String,
    pub category: AdminCategory,
    pub display_order: i32,
    pub bio: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AdminMember {
    pub id: i64,
    pub name: String,
    pub role_title: String,
    pub category: AdminCategory,
    pub display_order: i32,
    pub bio: String,
    pub image_url: Option<String>,
}

/// `GET /api/administration` response.
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct Roster {
    pub officers: Vec<AdminMember>,
    pub advisors: Vec<AdminMember>,
    pub delegates: Vec<AdminMember>,
}

impl Roster {
    pub fn is_empty(&self) -> bool {
        self.officers.is_empty() && self.advisors.is_empty() && self.delegates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_bios() {
        assert_eq!(
            AdminCategory::Officer.fallback_bio(),
            "Officer of the Royal Household."
        );
        assert_eq!(AdminCategory::Advisor.fallback_bio(), "Royal Advisor.");
        assert_eq!(
            AdminCategory::Delegate.fallback_bio(),
            "International Representative of the Royal House."
        );
    }

    #[test]
    fn empty_roster_serializes_three_arrays() {
        let json = serde_json::to_value(Roster::default()).unwrap();
        assert_eq!(json["officers"], serde_json::json!([]));
        assert_eq!(json["advisors"], serde_json::json!([]));
        assert_eq!(json["delegates"], serde_json::json!([]));
    }
}
