//! Pagination primitives shared across all list endpoints.

use serde::{Deserialize, Deserializer, Serialize};

/// Per-endpoint paging defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDefaults {
    pub limit: i64,
    pub max_limit: i64,
}

impl PageDefaults {
    /// Gallery widgets show four cards unless told otherwise.
    pub const MEDIA: Self = Self {
        limit: 4,
        max_limit: 100,
    };

    pub const UPDATES: Self = Self {
        limit: 10,
        max_limit: 100,
    };
}

/// Raw, untrusted page parameters as they arrive from a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    /// Resolve into a bounded window. Missing values take the defaults;
    /// anything below 1 is raised to 1 and `limit` is capped.
    pub fn resolve(&self, defaults: PageDefaults) -> Window {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self
            .limit
            .unwrap_or(defaults.limit)
            .clamp(1, defaults.max_limit.max(1));
        Window { page, limit }
    }
}

/// A validated page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub page: i64,
    pub limit: i64,
}

impl Window {
    /// First page holding up to `limit` rows.
    pub fn first(limit: i64) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn has_more(&self, total: i64) -> bool {
        self.offset().saturating_add(self.limit) < total
    }

    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        (total + self.limit - 1) / self.limit
    }
}

/// Pagination metadata attached to update listings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub limit: i64,
}

impl PaginationMeta {
    pub fn new(window: Window, total: i64) -> Self {
        Self {
            current_page: window.page,
            total_pages: window.total_pages(total),
            total_items: total,
            limit: window.limit,
        }
    }
}

/// Parse an integer the forgiving way: surrounding whitespace is ignored and
/// only the leading run of digits counts, so `"3abc"` is 3 and `"2.5"` is 2.
/// Returns `None` when no digits lead the string.
pub fn parse_lenient(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Overlong digit runs saturate rather than fail.
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Accepts numbers, numeric strings, `null` or anything else in a JSON body.
/// Values that do not read as an integer become `None`.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Int(i64),
        Float(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Int(n)) => Some(n),
        Some(Loose::Float(f)) if f.is_finite() => Some(f.trunc() as i64),
        Some(Loose::Text(s)) => parse_lenient(&s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_defaults() {
        let w = PageParams::default().resolve(PageDefaults::MEDIA);
        assert_eq!(w.limit, 4);
        assert_eq!(w.offset(), 0);
        assert_eq!(w.page, 1);
    }

    #[test]
    fn update_defaults() {
        let w = PageParams::default().resolve(PageDefaults::UPDATES);
        assert_eq!(w.limit, 10);
        assert_eq!(w.page, 1);
    }

    #[test]
    fn clamps_low_and_high_values() {
        let p = PageParams {
            page: Some(0),
            limit: Some(-3),
        };
        let w = p.resolve(PageDefaults::UPDATES);
        assert_eq!(w.page, 1);
        assert_eq!(w.limit, 1);

        let p = PageParams {
            page: Some(2),
            limit: Some(500),
        };
        assert_eq!(p.resolve(PageDefaults::MEDIA).limit, 100);
    }

    #[test]
    fn offset_calculation() {
        let w = Window { page: 3, limit: 10 };
        assert_eq!(w.offset(), 20);
    }

    #[test]
    fn has_more_follows_offset_plus_limit() {
        let page1 = Window { page: 1, limit: 4 };
        let page2 = Window { page: 2, limit: 4 };
        let page3 = Window { page: 3, limit: 4 };
        assert!(page1.has_more(10));
        assert!(page2.has_more(10));
        assert!(!page3.has_more(10));
        assert!(!Window { page: 2, limit: 5 }.has_more(10));
    }

    #[test]
    fn total_pages_rounds_up() {
        let w = Window { page: 1, limit: 5 };
        assert_eq!(w.total_pages(12), 3);
        assert_eq!(w.total_pages(10), 2);
        assert_eq!(w.total_pages(0), 0);
    }

    #[test]
    fn pagination_meta_for_second_page() {
        let meta = PaginationMeta::new(Window { page: 2, limit: 5 }, 12);
        assert_eq!(
            meta,
            PaginationMeta {
                current_page: 2,
                total_pages: 3,
                total_items: 12,
                limit: 5,
            }
        );
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["totalItems"], 12);
    }

    #[test]
    fn lenient_parsing() {
        assert_eq!(parse_lenient("7"), Some(7));
        assert_eq!(parse_lenient(" 12 "), Some(12));
        assert_eq!(parse_lenient("3abc"), Some(3));
        assert_eq!(parse_lenient("2.9"), Some(2));
        assert_eq!(parse_lenient("-4"), Some(-4));
        assert_eq!(parse_lenient("abc"), None);
        assert_eq!(parse_lenient(""), None);
        assert_eq!(parse_lenient("-"), None);
    }

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "deserialize_lenient")]
        page: Option<i64>,
    }

    #[test]
    fn lenient_json_values() {
        let parse = |body: &str| serde_json::from_str::<Probe>(body).unwrap().page;
        assert_eq!(parse(r#"{"page": 2}"#), Some(2));
        assert_eq!(parse(r#"{"page": "4"}"#), Some(4));
        assert_eq!(parse(r#"{"page": 2.7}"#), Some(2));
        assert_eq!(parse(r#"{"page": "two"}"#), None);
        assert_eq!(parse(r#"{"page": null}"#), None);
        assert_eq!(parse(r#"{"page": [1]}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }
}
