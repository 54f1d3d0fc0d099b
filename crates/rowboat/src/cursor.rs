use crate::{Model, Result};
use rowboat_core::Row;

/// Rows fetched by a query, rehydrated into model instances one at a time.
///
/// Rehydration is deferred to [`next`], so a row that fails to load only
/// fails the instance it belongs to.
///
/// [`next`]: Cursor::next
pub struct Cursor<M> {
    rows: std::vec::IntoIter<Row>,
    _p: std::marker::PhantomData<M>,
}

pub trait FromCursor<A>: Extend<A> + Default {}

impl<A, T: Extend<A> + Default> FromCursor<A> for T {}

impl<M: Model> Cursor<M> {
    pub(crate) fn new(rows: Vec<Row>) -> Self {
        Self {
            rows: rows.into_iter(),
            _p: std::marker::PhantomData,
        }
    }

    pub async fn next(&mut self) -> Option<Result<M>> {
        let row = self.rows.next()?;
        Some(M::load(&row))
    }

    /// Collect all values
    pub async fn collect<B>(mut self) -> Result<B>
    where
        B: FromCursor<M>,
    {
        let mut ret = B::default();

        while let Some(res) = self.next().await {
            ret.extend(Some(res?));
        }

        Ok(ret)
    }

    /// Number of rows not yet rehydrated.
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}
