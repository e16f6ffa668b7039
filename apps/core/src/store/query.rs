//! Query descriptions for the document-store boundary: conjunctive
//! predicates, an optional ordering, and an optional result limit. Mirrors
//! the equality-filter/order-by/limit surface of the backing store.

use std::cmp::Ordering;
use std::sync::Arc;

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;
type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

pub struct Query<T> {
    predicates: Vec<Predicate<T>>,
    order: Option<Comparator<T>>,
    limit: Option<usize>,
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
            order: self.order.clone(),
            limit: self.limit,
        }
    }
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
            order: None,
            limit: None,
        }
    }
}

impl<T> Query<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a predicate. Predicates are conjunctive: a document must satisfy
    /// every one to appear in the result sequence.
    pub fn filter(mut self, pred: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.predicates.push(Arc::new(pred));
        self
    }

    pub fn order_by_asc<K: Ord>(mut self, key: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        self.order = Some(Arc::new(move |a, b| key(a).cmp(&key(b))));
        self
    }

    pub fn order_by_desc<K: Ord>(mut self, key: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        self.order = Some(Arc::new(move |a, b| key(b).cmp(&key(a))));
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Evaluates the query against an insertion-ordered snapshot. The sort
    /// is stable, so unordered queries and ties keep insertion order.
    pub(crate) fn apply(&self, docs: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        let mut out: Vec<T> = docs
            .iter()
            .filter(|d| self.predicates.iter().all(|p| p(d)))
            .cloned()
            .collect();
        if let Some(cmp) = &self.order {
            out.sort_by(|a, b| cmp(a, b));
        }
        if let Some(n) = self.limit {
            out.truncate(n);
        }
        out
    }
}
