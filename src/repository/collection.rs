//! Ordered in-memory collection guarded by an async read/write lock

use std::sync::Arc;
use tokio::sync::RwLock;

/// Ordered sequence of records living for the whole process.
///
/// Each method takes the lock exactly once, so every call is one atomic step.
/// Lookups scan in insertion order and the first match wins.
#[derive(Debug)]
pub struct Collection<T> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T: Clone> Collection<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Copy of every record, in store order
    pub async fn all(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    /// Records satisfying `pred`, in store order
    pub async fn filter<F>(&self, pred: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows
            .read()
            .await
            .iter()
            .filter(|row| pred(*row))
            .cloned()
            .collect()
    }

    /// First record satisfying `pred`
    pub async fn find<F>(&self, pred: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows.read().await.iter().find(|row| pred(*row)).cloned()
    }

    /// Append the record built by `build`, which sees the current contents
    pub async fn push_with<F>(&self, build: F) -> T
    where
        F: FnOnce(&[T]) -> T,
    {
        let mut rows = self.rows.write().await;
        let row = build(&rows);
        rows.push(row.clone());
        row
    }

    /// Replace the first record satisfying `pred`
    pub async fn replace_first<F>(&self, pred: F, value: T) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        let mut rows = self.rows.write().await;
        let slot = rows.iter_mut().find(|row| pred(&**row))?;
        *slot = value;
        Some(slot.clone())
    }

    /// Replace every record satisfying `pred`, returning how many were replaced
    pub async fn replace_all<F>(&self, pred: F, value: T) -> usize
    where
        F: Fn(&T) -> bool,
    {
        let mut rows = self.rows.write().await;
        let mut replaced = 0;
        for slot in rows.iter_mut().filter(|row| pred(&**row)) {
            *slot = value.clone();
            replaced += 1;
        }
        replaced
    }

    /// Mutate the first record satisfying `pred` in place
    pub async fn update_first<F, U>(&self, pred: F, update: U) -> Option<T>
    where
        F: Fn(&T) -> bool,
        U: FnOnce(&mut T),
    {
        let mut rows = self.rows.write().await;
        let slot = rows.iter_mut().find(|row| pred(&**row))?;
        update(slot);
        Some(slot.clone())
    }

    /// Remove the first record satisfying `pred`
    pub async fn remove_first<F>(&self, pred: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        let mut rows = self.rows.write().await;
        let index = rows.iter().position(|row| pred(row))?;
        Some(rows.remove(index))
    }
}
