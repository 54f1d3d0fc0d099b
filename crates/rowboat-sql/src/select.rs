use crate::writer::Writer;

use rowboat_core::{Flavor, Limit, Query, Value};

/// Narrows a base select template to a single row by key.
pub fn select_by_key(select: &str, key_column: &str, flavor: Flavor) -> String {
    let mut w = Writer::new(flavor);
    w.push(select);
    w.push(" WHERE ");
    w.ident(key_column);
    w.push(" = ");
    w.placeholder();
    w.into_sql()
}

/// Assembles a find-all statement from a base select template and query
/// options, returning the statement and its full bind argument list.
///
/// The filter's `?` marks are rewritten for the dialect, and limit values
/// are bound as arguments rather than spliced into the SQL.
pub fn select_all(select: &str, query: &Query, flavor: Flavor) -> (String, Vec<Value>) {
    let mut w = Writer::new(flavor);
    w.push(select);
    let mut args = query.args.clone();

    if let Some(filter) = &query.filter {
        w.push(" WHERE ");
        w.fragment(filter);
    }

    if let Some(order_by) = &query.order_by {
        w.push(" ORDER BY ");
        w.push(order_by);
    }

    match query.limit {
        None => {}
        Some(Limit::Count(count)) => {
            w.push(" LIMIT ");
            w.placeholder();
            args.push(Value::I64(count as i64));
        }
        Some(Limit::OffsetCount { offset, count }) => match flavor {
            Flavor::MySql | Flavor::Sqlite => {
                w.push(" LIMIT ");
                w.placeholder();
                w.push(", ");
                w.placeholder();
                args.push(Value::I64(offset as i64));
                args.push(Value::I64(count as i64));
            }
            // PostgreSQL has no comma form; OFFSET binds after LIMIT.
            Flavor::PostgreSql => {
                w.push(" LIMIT ");
                w.placeholder();
                args.push(Value::I64(count as i64));
                w.push(" OFFSET ");
                w.placeholder();
                args.push(Value::I64(offset as i64));
            }
        },
    }

    (w.into_sql(), args)
}
