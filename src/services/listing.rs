//! Generic paginated listing over a single table.
//!
//! Each resource describes its table through [`Listing`]; the page query and
//! the count query are both generated from the same [`Predicate`], so the
//! reported totals always agree with the returned page.

use std::future::Future;

use sqlx::postgres::PgRow;
use sqlx::{Encode, FromRow, Postgres, QueryBuilder, Type};

use crate::db::Session;
use crate::errors::AppError;
use crate::models::pagination::Window;

/// SQLSTATE raised when `statement_timeout` cancels a query.
const QUERY_CANCELED: &str = "57014";

/// Static description of a listable table.
pub trait Listing {
    type Row: for<'r> FromRow<'r, PgRow> + Send + Unpin;
    /// Value type of the filterable kind/category column.
    type Filter: for<'q> Encode<'q, Postgres> + Type<Postgres> + Copy + Send + Sync + 'static;

    const TABLE: &'static str;
    const COLUMNS: &'static str;
    const FILTER_COLUMN: &'static str;
    const ORDER_BY: &'static str;
    /// Rows with this flag unset are never listed.
    const ACTIVE_COLUMN: Option<&'static str> = None;
}

/// Row-selection conditions beyond the listing's active flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate<F> {
    /// Restrict the filter column to these values. `None` means unrestricted.
    pub any_of: Option<Vec<F>>,
}

impl<F> Predicate<F> {
    pub fn unrestricted() -> Self {
        Self { any_of: None }
    }

    pub fn any_of(values: Vec<F>) -> Self {
        Self {
            any_of: Some(values),
        }
    }
}

/// A resolved, bounded listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<F> {
    pub predicate: Predicate<F>,
    pub window: Window,
}

/// One page of rows plus the total matching the same predicate.
#[derive(Debug)]
pub struct Page<R> {
    pub rows: Vec<R>,
    pub total: i64,
    pub window: Window,
}

impl<R> Page<R> {
    pub fn has_more(&self) -> bool {
        self.window.has_more(self.total)
    }
}

fn push_predicate<L: Listing>(qb: &mut QueryBuilder<'static, Postgres>, predicate: &Predicate<L::Filter>) {
    let mut joiner = " WHERE ";

    if let Some(column) = L::ACTIVE_COLUMN {
        qb.push(joiner).push(column).push(" = TRUE");
        joiner = " AND ";
    }

    if let Some(values) = &predicate.any_of {
        qb.push(joiner);
        if values.is_empty() {
            qb.push("FALSE");
        } else {
            qb.push(L::FILTER_COLUMN).push(" IN (");
            let mut separated = qb.separated(", ");
            for value in values {
                separated.push_bind(*value);
            }
            separated.push_unseparated(")");
        }
    }
}

fn page_query<L: Listing>(query: &ListQuery<L::Filter>) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {} FROM {}", L::COLUMNS, L::TABLE));
    push_predicate::<L>(&mut qb, &query.predicate);
    qb.push(" ORDER BY ").push(L::ORDER_BY);
    qb.push(" LIMIT ")
        .push_bind(query.window.limit)
        .push(" OFFSET ")
        .push_bind(query.window.offset());
    qb
}

fn count_query<L: Listing>(predicate: &Predicate<L::Filter>) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", L::TABLE));
    push_predicate::<L>(&mut qb, predicate);
    qb
}

/// Fetch one page and the total count concurrently.
pub async fn fetch_page<L: Listing>(
    session: &Session<'_>,
    query: &ListQuery<L::Filter>,
) -> Result<Page<L::Row>, AppError> {
    let pool = session.pool();

    let mut rows_qb = page_query::<L>(query);
    let mut count_qb = count_query::<L>(&query.predicate);

    let (rows, total) = bounded(session, async {
        tokio::try_join!(
            rows_qb.build_query_as::<L::Row>().fetch_all(pool),
            count_qb.build_query_scalar::<i64>().fetch_one(pool),
        )
    })
    .await?;

    tracing::debug!(
        table = L::TABLE,
        page = query.window.page,
        limit = query.window.limit,
        returned = rows.len(),
        total,
        "Listed page"
    );

    Ok(Page {
        rows,
        total,
        window: query.window,
    })
}

/// Fetch one window of rows without counting.
pub async fn fetch_rows<L: Listing>(
    session: &Session<'_>,
    query: &ListQuery<L::Filter>,
) -> Result<Vec<L::Row>, AppError> {
    let pool = session.pool();

    let mut rows_qb = page_query::<L>(query);
    let rows = bounded(session, rows_qb.build_query_as::<L::Row>().fetch_all(pool)).await?;

    tracing::debug!(table = L::TABLE, returned = rows.len(), "Listed rows");
    Ok(rows)
}

/// Apply the configured query timeout and classify timeouts as retryable.
async fn bounded<T, F>(session: &Session<'_>, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    let limit = session.query_timeout();
    match tokio::time::timeout(limit, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) if is_timeout(&e) => Err(AppError::Timeout(limit.as_secs())),
        Ok(Err(e)) => Err(e.into()),
        Err(_) => Err(AppError::Timeout(limit.as_secs())),
    }
}

fn is_timeout(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::PoolTimedOut => true,
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(QUERY_CANCELED),
        _ => false,
    }
}
