//! Sort keys with direction.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// A single sort key with direction.
///
/// Multiple clauses on one specification apply in list order: a later clause
/// only decides between entities the earlier clauses consider equal.
pub struct OrderClause<T> {
    compare: Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>,
    direction: Direction,
}

impl<T> Clone for OrderClause<T> {
    fn clone(&self) -> Self {
        Self {
            compare: Arc::clone(&self.compare),
            direction: self.direction,
        }
    }
}

impl<T> fmt::Debug for OrderClause<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderClause")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

impl<T> OrderClause<T> {
    /// Ascending sort on an `Ord` key selector.
    pub fn asc<K: Ord>(key: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        Self::by(key, Direction::Asc)
    }

    /// Descending sort on an `Ord` key selector.
    pub fn desc<K: Ord>(key: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        Self::by(key, Direction::Desc)
    }

    /// Sort on an `Ord` key selector with an explicit direction.
    pub fn by<K: Ord>(
        key: impl Fn(&T) -> K + Send + Sync + 'static,
        direction: Direction,
    ) -> Self {
        Self {
            compare: Arc::new(move |a, b| key(a).cmp(&key(b))),
            direction,
        }
    }

    /// Sort on a custom comparator (e.g. `f64::total_cmp` for prices).
    ///
    /// The comparator expresses the ascending order; `direction` reverses it.
    pub fn by_cmp(
        compare: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
        direction: Direction,
    ) -> Self {
        Self {
            compare: Arc::new(compare),
            direction,
        }
    }

    /// The configured direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Compares two entities under this clause, direction applied.
    pub fn ordering(&self, a: &T, b: &T) -> Ordering {
        let ord = (self.compare)(a, b);
        match self.direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    }
}
