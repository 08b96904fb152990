//! Pagination primitives shared across all list endpoints.

use serde::{Deserialize, Deserializer, Serialize};

/// Pagination query parameters as they arrive on the wire.
///
/// Derivation never fails: missing, non-numeric, or out-of-range values
/// degrade to the defaults rather than rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
}

impl PageQuery {
    /// Maximum items per page.
    pub const MAX_LIMIT: i64 = 100;

    /// Default items per page.
    pub const DEFAULT_LIMIT: i64 = 10;

    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Requested page size. Zero, negative, and missing values all fall back
    /// to the default; oversized values clamp to the maximum.
    pub fn limit(&self) -> i64 {
        match self.limit {
            Some(v) if v > 0 => v.min(Self::MAX_LIMIT),
            _ => Self::DEFAULT_LIMIT,
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}

/// Query parameters arrive as strings; anything that does not parse as an
/// integer falls back to `None` so the defaults apply.
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse::<i64>().ok()))
}

/// Pagination metadata attached to every list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<serde_json::Value>,
}

/// Paged result envelope returned by list endpoints: `{data, meta}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEnvelope<T: Serialize> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T: Serialize> PageEnvelope<T> {
    /// Wrap an already-fetched page slice.
    ///
    /// Pure arithmetic over `(items, total, page, limit)`; the caller is
    /// responsible for having applied LIMIT/OFFSET upstream. Requires
    /// `limit >= 1`, which [`PageQuery::limit`] guarantees.
    pub fn new(items: Vec<T>, total: i64, page: i64, limit: i64) -> Self {
        let total_pages = (total + limit - 1) / limit;
        Self {
            data: items,
            meta: PageMeta {
                total,
                page,
                limit,
                total_pages,
                has_next_page: page < total_pages,
                has_previous_page: page > 1,
                stats: None,
            },
        }
    }

    /// Wrap a page slice using the derived values of a [`PageQuery`].
    pub fn from_query(items: Vec<T>, total: i64, query: &PageQuery) -> Self {
        Self::new(items, total, query.page(), query.limit())
    }

    /// Attach a domain aggregate to `meta.stats`.
    pub fn with_stats(mut self, stats: serde_json::Value) -> Self {
        self.meta.stats = Some(stats);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<i64>, limit: Option<i64>) -> PageQuery {
        PageQuery { page, limit }
    }

    #[test]
    fn defaults_when_absent() {
        let q = query(None, None);
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), 10);
        assert_eq!(q.offset(), 0);
    }

    #[test]
    fn limit_clamps_to_bounds() {
        assert_eq!(query(None, Some(500)).limit(), 100);
        assert_eq!(query(None, Some(0)).limit(), 10);
        assert_eq!(query(None, Some(-3)).limit(), 10);
        assert_eq!(query(None, Some(100)).limit(), 100);
        assert_eq!(query(None, Some(1)).limit(), 1);
    }

    #[test]
    fn page_floors_at_one() {
        assert_eq!(query(Some(0), None).page(), 1);
        assert_eq!(query(Some(-7), None).page(), 1);
    }

    #[test]
    fn offset_derivation() {
        let q = query(Some(3), Some(10));
        assert_eq!(q.offset(), 20);
        // Invariant: offset = (page - 1) * limit, always >= 0.
        for (p, l) in [(None, None), (Some(-1), Some(0)), (Some(7), Some(25))] {
            let q = query(p, l);
            assert_eq!(q.offset(), (q.page() - 1) * q.limit());
            assert!(q.offset() >= 0);
        }
    }

    #[test]
    fn non_numeric_values_fall_back_to_defaults() {
        let q: PageQuery = serde_urlencoded::from_str("page=abc&limit=ten").unwrap();
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), 10);

        let q: PageQuery = serde_urlencoded::from_str("page=2&limit=5").unwrap();
        assert_eq!(q.page(), 2);
        assert_eq!(q.limit(), 5);
    }

    #[test]
    fn envelope_arithmetic() {
        let env = PageEnvelope::new(vec![1, 2, 3], 25, 1, 10);
        assert_eq!(env.meta.total_pages, 3);
        assert!(env.meta.has_next_page);
        assert!(!env.meta.has_previous_page);

        let env = PageEnvelope::new(vec![1], 25, 3, 10);
        assert!(!env.meta.has_next_page);
        assert!(env.meta.has_previous_page);
    }

    #[test]
    fn envelope_empty_result() {
        let env: PageEnvelope<i32> = PageEnvelope::new(vec![], 0, 1, 10);
        assert_eq!(env.meta.total_pages, 0);
        assert!(!env.meta.has_next_page);
        assert!(!env.meta.has_previous_page);
    }

    #[test]
    fn envelope_is_deterministic() {
        let a = PageEnvelope::new(vec![1, 2], 12, 2, 5);
        let b = PageEnvelope::new(vec![1, 2], 12, 2, 5);
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[test]
    fn envelope_serializes_camel_case() {
        let env = PageEnvelope::new(vec![1], 1, 1, 10);
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["meta"]["totalPages"], 1);
        assert_eq!(json["meta"]["hasNextPage"], false);
        assert_eq!(json["meta"]["hasPreviousPage"], false);
        assert!(json["meta"].get("stats").is_none());
    }

    #[test]
    fn envelope_with_stats() {
        let env = PageEnvelope::new(vec![1], 1, 1, 10)
            .with_stats(serde_json::json!({"totalValue": 42}));
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["meta"]["stats"]["totalValue"], 42);
    }
}
