//! Read-only query repository
//!
//! Listing, filtering, and pagination never go through the unit of work;
//! they are plain non-tracking queries. Filters follow the sparse pattern:
//! each optional field contributes an AND condition only when a value is
//! present, so an empty filter is equivalent to an unfiltered query.

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{FromRow, PgPool, Postgres};
use uuid::Uuid;

use super::StoreError;

type PgScalar<'q, T> = sqlx::query::QueryScalar<'q, Postgres, T, PgArguments>;
type PgQueryAs<'q, T> = sqlx::query::QueryAs<'q, Postgres, T, PgArguments>;

/// A value bound into a sparse filter condition
#[derive(Debug, Clone)]
enum Bind {
    Text(String),
    Int(i64),
    Bool(bool),
    Uuid(Uuid),
    Timestamp(DateTime<Utc>),
}

/// Sparse filter: AND-composed optional conditions
///
/// Builder methods take `Option`s and contribute nothing when the value is
/// absent. Column and operator fragments come from code, never from user
/// input; only the bound values are caller-supplied.
#[derive(Debug, Clone, Default)]
pub struct SqlFilter {
    conditions: Vec<String>,
    binds: Vec<Bind>,
}

impl SqlFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Number of placeholders consumed so far; the next free one is `$len+1`
    pub fn len(&self) -> usize {
        self.binds.len()
    }

    pub fn eq_text(self, column: &str, value: Option<String>) -> Self {
        match value {
            Some(v) => self.condition(column, "=", Bind::Text(v)),
            None => self,
        }
    }

    pub fn eq_i64(self, column: &str, value: Option<i64>) -> Self {
        match value {
            Some(v) => self.condition(column, "=", Bind::Int(v)),
            None => self,
        }
    }

    pub fn eq_bool(self, column: &str, value: Option<bool>) -> Self {
        match value {
            Some(v) => self.condition(column, "=", Bind::Bool(v)),
            None => self,
        }
    }

    pub fn eq_uuid(self, column: &str, value: Option<Uuid>) -> Self {
        match value {
            Some(v) => self.condition(column, "=", Bind::Uuid(v)),
            None => self,
        }
    }

    pub fn ge_i64(self, column: &str, value: Option<i64>) -> Self {
        match value {
            Some(v) => self.condition(column, ">=", Bind::Int(v)),
            None => self,
        }
    }

    pub fn le_i64(self, column: &str, value: Option<i64>) -> Self {
        match value {
            Some(v) => self.condition(column, "<=", Bind::Int(v)),
            None => self,
        }
    }

    pub fn since(self, column: &str, value: Option<DateTime<Utc>>) -> Self {
        match value {
            Some(v) => self.condition(column, ">=", Bind::Timestamp(v)),
            None => self,
        }
    }

    pub fn until(self, column: &str, value: Option<DateTime<Utc>>) -> Self {
        match value {
            Some(v) => self.condition(column, "<=", Bind::Timestamp(v)),
            None => self,
        }
    }

    /// Case-insensitive substring match
    pub fn contains(self, column: &str, value: Option<String>) -> Self {
        match value {
            Some(v) => self.condition(column, "ILIKE", Bind::Text(format!("%{}%", v))),
            None => self,
        }
    }

    /// The WHERE clause with numbered placeholders, or empty when no
    /// condition applies
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    fn condition(mut self, column: &str, op: &str, bind: Bind) -> Self {
        self.binds.push(bind);
        self.conditions
            .push(format!("{} {} ${}", column, op, self.binds.len()));
        self
    }

    fn bind_scalar<'q, T>(&self, mut query: PgScalar<'q, T>) -> PgScalar<'q, T> {
        for bind in &self.binds {
            query = match bind {
                Bind::Text(v) => query.bind(v.clone()),
                Bind::Int(v) => query.bind(*v),
                Bind::Bool(v) => query.bind(*v),
                Bind::Uuid(v) => query.bind(*v),
                Bind::Timestamp(v) => query.bind(*v),
            };
        }
        query
    }

    fn bind_rows<'q, T>(&self, mut query: PgQueryAs<'q, T>) -> PgQueryAs<'q, T> {
        for bind in &self.binds {
            query = match bind {
                Bind::Text(v) => query.bind(v.clone()),
                Bind::Int(v) => query.bind(*v),
                Bind::Bool(v) => query.bind(*v),
                Bind::Uuid(v) => query.bind(*v),
                Bind::Timestamp(v) => query.bind(*v),
            };
        }
        query
    }
}

/// Read-only, non-tracking data accessor
///
/// Cheap to clone; wraps the shared connection pool.
#[derive(Clone)]
pub struct QueryRepository {
    pool: PgPool,
}

impl QueryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count rows matching the filter, before any pagination
    pub async fn count(&self, from: &str, filter: &SqlFilter) -> Result<i64, StoreError> {
        let sql = format!("SELECT COUNT(*) FROM {}{}", from, filter.where_clause());
        let query = filter.bind_scalar(sqlx::query_scalar::<_, i64>(&sql));
        Ok(query.fetch_one(&self.pool).await?)
    }

    /// Fetch one page of rows
    ///
    /// `from` may include joins for eager-loading related data; `order_by`
    /// and `columns` are code-supplied fragments.
    pub async fn page<T>(
        &self,
        from: &str,
        columns: &str,
        filter: &SqlFilter,
        order_by: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<T>, StoreError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let next = filter.len();
        let sql = format!(
            "SELECT {} FROM {}{} ORDER BY {} LIMIT ${} OFFSET ${}",
            columns,
            from,
            filter.where_clause(),
            order_by,
            next + 1,
            next + 2,
        );
        let query = filter
            .bind_rows(sqlx::query_as::<_, T>(&sql))
            .bind(limit)
            .bind(offset);
        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Fetch a single row matching the filter, if any
    pub async fn one<T>(
        &self,
        from: &str,
        columns: &str,
        filter: &SqlFilter,
    ) -> Result<Option<T>, StoreError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql = format!(
            "SELECT {} FROM {}{}",
            columns,
            from,
            filter.where_clause()
        );
        let query = filter.bind_rows(sqlx::query_as::<_, T>(&sql));
        Ok(query.fetch_optional(&self.pool).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_has_no_where_clause() {
        let filter = SqlFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.where_clause(), "");
    }

    #[test]
    fn test_unset_fields_contribute_nothing() {
        let filter = SqlFilter::new()
            .eq_text("city", None)
            .ge_i64("price", None)
            .contains("title", None)
            .eq_bool("is_active", None);
        assert!(filter.is_empty());
        assert_eq!(filter.len(), 0);
    }

    #[test]
    fn test_conditions_are_and_composed_in_order() {
        let filter = SqlFilter::new()
            .eq_text("city", Some("Amman".to_string()))
            .ge_i64("price", Some(100))
            .le_i64("price", Some(500));
        assert_eq!(
            filter.where_clause(),
            " WHERE city = $1 AND price >= $2 AND price <= $3"
        );
        assert_eq!(filter.len(), 3);
    }

    #[test]
    fn test_placeholders_skip_unset_fields() {
        let filter = SqlFilter::new()
            .eq_text("city", None)
            .eq_text("status", Some("available".to_string()))
            .eq_bool("is_active", Some(true));
        assert_eq!(filter.where_clause(), " WHERE status = $1 AND is_active = $2");
    }

    #[test]
    fn test_contains_builds_ilike_pattern() {
        let filter = SqlFilter::new().contains("title", Some("villa".to_string()));
        assert_eq!(filter.where_clause(), " WHERE title ILIKE $1");
    }

    #[test]
    fn test_time_range_conditions() {
        let now = Utc::now();
        let filter = SqlFilter::new()
            .since("timestamp", Some(now))
            .until("timestamp", Some(now));
        assert_eq!(
            filter.where_clause(),
            " WHERE timestamp >= $1 AND timestamp <= $2"
        );
    }
}
