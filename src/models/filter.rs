//! Declarative filter builder shared by the list queries.
//!
//! Collects `(column, operator, value)` clauses and renders one parameterized
//! `WHERE` fragment with ordered `$n` placeholders, so the COUNT query and the
//! page SELECT bind the same values in the same order.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

/// A value to bind for one placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Bool(bool),
}

/// Ordered set of filter clauses joined with `AND`.
#[derive(Debug, Default)]
pub struct FilterSet {
    clauses: Vec<String>,
    binds: Vec<BindValue>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match across a fixed set of text columns.
    ///
    /// Renders `(a ILIKE $n OR b ILIKE $n)` with a single `%term%` bind.
    pub fn search(&mut self, columns: &[&str], term: &str) -> &mut Self {
        let n = self.binds.len() + 1;
        let group = columns
            .iter()
            .map(|c| format!("{c} ILIKE ${n}"))
            .collect::<Vec<_>>()
            .join(" OR ");
        self.clauses.push(format!("({group})"));
        self.binds.push(BindValue::Text(format!("%{term}%")));
        self
    }

    /// Exact text equality.
    pub fn eq_text(&mut self, column: &str, value: &str) -> &mut Self {
        let n = self.binds.len() + 1;
        self.clauses.push(format!("{column} = ${n}"));
        self.binds.push(BindValue::Text(value.to_string()));
        self
    }

    /// Equality against a Postgres enum column; the text bind is cast on the
    /// database side.
    pub fn eq_enum(&mut self, column: &str, pg_type: &str, value: &str) -> &mut Self {
        let n = self.binds.len() + 1;
        self.clauses.push(format!("{column} = ${n}::{pg_type}"));
        self.binds.push(BindValue::Text(value.to_string()));
        self
    }

    /// Boolean equality.
    pub fn eq_bool(&mut self, column: &str, value: bool) -> &mut Self {
        let n = self.binds.len() + 1;
        self.clauses.push(format!("{column} = ${n}"));
        self.binds.push(BindValue::Bool(value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Render the `WHERE ...` fragment, or an empty string when no clause
    /// was added.
    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.clauses.join(" AND "))
        }
    }

    /// Run a COUNT query with the collected values bound in order.
    pub async fn fetch_count(&self, pool: &PgPool, count_sql: &str) -> sqlx::Result<i64> {
        let mut query = sqlx::query_scalar(count_sql);
        for bind in &self.binds {
            query = match bind {
                BindValue::Text(s) => query.bind(s),
                BindValue::Bool(b) => query.bind(b),
            };
        }
        query.fetch_one(pool).await
    }

    /// Run the page SELECT with the same values bound in the same order.
    pub async fn fetch_rows<T>(&self, pool: &PgPool, data_sql: &str) -> sqlx::Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut query = sqlx::query_as(data_sql);
        for bind in &self.binds {
            query = match bind {
                BindValue::Text(s) => query.bind(s),
                BindValue::Bool(b) => query.bind(b),
            };
        }
        query.fetch_all(pool).await
    }

    #[cfg(test)]
    fn binds(&self) -> &[BindValue] {
        &self.binds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_renders_nothing() {
        let f = FilterSet::new();
        assert!(f.is_empty());
        assert_eq!(f.where_clause(), "");
        assert!(f.binds().is_empty());
    }

    #[test]
    fn search_groups_columns_with_one_bind() {
        let mut f = FilterSet::new();
        f.search(&["name", "email", "role"], "tom");
        assert_eq!(
            f.where_clause(),
            "WHERE (name ILIKE $1 OR email ILIKE $1 OR role ILIKE $1)"
        );
        assert_eq!(f.binds(), &[BindValue::Text("%tom%".to_string())]);
    }

    #[test]
    fn placeholders_number_in_bind_order() {
        let mut f = FilterSet::new();
        f.search(&["name", "email"], "acme")
            .eq_enum("status", "client_status", "active")
            .eq_bool("online", true);
        assert_eq!(
            f.where_clause(),
            "WHERE (name ILIKE $1 OR email ILIKE $1) AND status = $2::client_status AND online = $3"
        );
        assert_eq!(
            f.binds(),
            &[
                BindValue::Text("%acme%".to_string()),
                BindValue::Text("active".to_string()),
                BindValue::Bool(true),
            ]
        );
    }

    #[test]
    fn eq_text_renders_plain_equality() {
        let mut f = FilterSet::new();
        f.eq_text("email", "a@b.com");
        assert_eq!(f.where_clause(), "WHERE email = $1");
    }
}
