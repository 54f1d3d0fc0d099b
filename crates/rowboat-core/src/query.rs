use crate::{Error, Result, Value};

use std::str::FromStr;

/// Options for a multi-row find: an optional filter with bind arguments, an
/// optional ordering, and an optional row limit.
///
/// Clause bodies are written without their leading keywords, e.g.
/// `blog_id = ?` or `created_at desc`.
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// WHERE clause body
    pub filter: Option<String>,
    /// Bind arguments for `filter`, in placeholder order
    pub args: Vec<Value>,
    /// ORDER BY clause body
    pub order_by: Option<String>,
    /// Row limit
    pub limit: Option<Limit>,
}

impl Query {
    pub fn new() -> Query {
        Query::default()
    }

    /// Sets the WHERE clause body.
    pub fn filter(mut self, clause: impl Into<String>) -> Query {
        self.filter = Some(clause.into());
        self
    }

    /// Appends a bind argument for the filter clause.
    pub fn bind(mut self, value: impl Into<Value>) -> Query {
        self.args.push(value.into());
        self
    }

    /// Sets the ORDER BY clause body.
    pub fn order_by(mut self, clause: impl Into<String>) -> Query {
        self.order_by = Some(clause.into());
        self
    }

    /// Caps the rows returned.
    pub fn limit(mut self, limit: impl Into<Limit>) -> Query {
        self.limit = Some(limit.into());
        self
    }
}

/// A row limit: a plain count, or an offset and a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// `LIMIT count`
    Count(u64),
    /// `LIMIT offset, count`
    OffsetCount { offset: u64, count: u64 },
}

impl From<u64> for Limit {
    fn from(count: u64) -> Limit {
        Limit::Count(count)
    }
}

impl From<(u64, u64)> for Limit {
    fn from((offset, count): (u64, u64)) -> Limit {
        Limit::OffsetCount { offset, count }
    }
}

impl FromStr for Limit {
    type Err = Error;

    /// Parses `"N"` or `"N,M"`, the forms a request query string carries.
    ///
    /// Anything else fails validation here, before any SQL is built or
    /// executed.
    fn from_str(s: &str) -> Result<Limit> {
        let invalid =
            || Error::validation(format!("invalid limit {s:?}: expected count or offset,count"));

        match s.split_once(',') {
            None => {
                let count = s.trim().parse().map_err(|_| invalid())?;
                Ok(Limit::Count(count))
            }
            Some((offset, count)) => {
                let offset = offset.trim().parse().map_err(|_| invalid())?;
                let count = count.trim().parse().map_err(|_| invalid())?;
                Ok(Limit::OffsetCount { offset, count })
            }
        }
    }
}
