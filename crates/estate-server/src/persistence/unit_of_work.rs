//! Unit of work
//!
//! Batches entity mutations behind one atomic commit. Repository handles
//! only enqueue; nothing reaches the store before `save_changes`, which runs
//! every pending write plus the matching audit rows inside a single
//! transaction. A failed commit leaves no partial writes behind.

use std::marker::PhantomData;

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use super::audit;
use super::entity::{ChangeState, Entity, PendingChange};
use super::StoreError;

/// Handle to an entity enqueued in a [`UnitOfWork`]
///
/// After a successful commit the entity (with its assigned identity) can be
/// read back through [`UnitOfWork::entity`].
pub struct Tracked<T> {
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Tracked<T> {}

/// A scope batching entity mutations into one atomic commit
///
/// Each inbound request gets its own instance; there is no shared mutable
/// state between units of work.
pub struct UnitOfWork {
    pool: PgPool,
    actor: Option<Uuid>,
    changes: Vec<PendingChange>,
    first_uncommitted: usize,
}

impl UnitOfWork {
    /// Create a unit of work acting on behalf of `actor` (None = anonymous)
    pub fn new(pool: PgPool, actor: Option<Uuid>) -> Self {
        Self {
            pool,
            actor,
            changes: Vec::new(),
            first_uncommitted: 0,
        }
    }

    /// Tracked repository handle for entity type `T`
    pub fn repository<T: Entity>(&mut self) -> Repository<'_, T> {
        Repository {
            uow: self,
            _marker: PhantomData,
        }
    }

    /// Whether any enqueued change has not been committed yet
    pub fn has_pending_changes(&self) -> bool {
        self.first_uncommitted < self.changes.len()
    }

    /// Read back a tracked entity
    ///
    /// # Panics
    ///
    /// Panics if the handle was issued by a different unit of work.
    pub fn entity<T: Entity>(&self, tracked: Tracked<T>) -> &T {
        match self.changes[tracked.index].entity.as_any().downcast_ref::<T>() {
            Some(entity) => entity,
            None => unreachable!("tracked handle does not belong to this unit of work"),
        }
    }

    /// Commit all pending changes as one transaction
    ///
    /// Executes every pending write, captures one audit record per effective
    /// change, appends the audit rows, and commits. Any failure aborts the
    /// whole transaction. Returns the number of entity writes performed
    /// (no-op modifications are skipped).
    ///
    /// Concurrency conflicts surface as [`StoreError::Conflict`] so callers
    /// can decide between retrying and failing.
    pub async fn save_changes(&mut self) -> Result<usize, StoreError> {
        if !self.has_pending_changes() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;

        let mut written = 0;
        for change in self.changes[self.first_uncommitted..].iter_mut() {
            if change.is_unchanged() {
                continue;
            }
            match change.state {
                ChangeState::Added => change.entity.insert(&mut *tx).await?,
                ChangeState::Modified { .. } => change.entity.update(&mut *tx).await?,
                ChangeState::Deleted { .. } => change.entity.delete(&mut *tx).await?,
            }
            written += 1;
        }

        // Audit capture runs after the writes so store-assigned identities
        // are present in key values, but inside the same transaction.
        let records = audit::capture(&self.changes[self.first_uncommitted..], self.actor);
        for record in &records {
            audit::append(&mut *tx, record).await?;
        }

        tx.commit().await?;
        self.first_uncommitted = self.changes.len();

        debug!(written, audited = records.len(), "unit of work committed");
        Ok(written)
    }
}

/// Tracked mutation handle for one entity type
///
/// Operations enqueue only; nothing is persisted until the owning unit of
/// work commits.
pub struct Repository<'u, T: Entity> {
    uow: &'u mut UnitOfWork,
    _marker: PhantomData<fn() -> T>,
}

impl<'u, T: Entity> Repository<'u, T> {
    /// Enqueue a new entity for insertion
    pub fn add(&mut self, entity: T) -> Tracked<T> {
        self.push(Box::new(entity), ChangeState::Added)
    }

    /// Enqueue an update, capturing the original's scalar snapshot for the
    /// audit trail
    pub fn update(&mut self, original: &T, updated: T) -> Tracked<T> {
        let original = original.audit_snapshot();
        self.push(Box::new(updated), ChangeState::Modified { original })
    }

    /// Enqueue a deletion
    pub fn delete(&mut self, entity: T) -> Tracked<T> {
        let original = entity.audit_snapshot();
        self.push(Box::new(entity), ChangeState::Deleted { original })
    }

    fn push(&mut self, entity: Box<dyn Entity>, state: ChangeState) -> Tracked<T> {
        let index = self.uow.changes.len();
        self.uow.changes.push(PendingChange { entity, state });
        Tracked {
            index,
            _marker: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Property;

    fn sample_property(title: &str, price: i64) -> Property {
        Property::new(
            title.to_string(),
            None,
            price,
            "Amman".to_string(),
            None,
            3,
            2,
            None,
            "available".to_string(),
        )
    }

    #[sqlx::test]
    async fn test_commit_assigns_identity(pool: PgPool) -> Result<(), StoreError> {
        let mut uow = UnitOfWork::new(pool, None);
        let tracked = uow.repository::<Property>().add(sample_property("A", 100));

        let written = uow.save_changes().await?;

        assert_eq!(written, 1);
        assert!(uow.entity(tracked).id > 0);
        assert!(!uow.has_pending_changes());
        Ok(())
    }

    #[sqlx::test]
    async fn test_commit_writes_one_audit_row_per_change(pool: PgPool) -> Result<(), StoreError> {
        let mut uow = UnitOfWork::new(pool.clone(), None);
        {
            let mut properties = uow.repository::<Property>();
            properties.add(sample_property("A", 100));
            properties.add(sample_property("B", 200));
            properties.add(sample_property("C", 300));
        }
        uow.save_changes().await?;

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM audit_logs WHERE table_name = 'properties' AND action = 'Created'",
        )
        .fetch_one(&pool)
        .await?;
        assert_eq!(count, 3);
        Ok(())
    }

    #[sqlx::test]
    async fn test_unchanged_update_is_skipped(pool: PgPool) -> Result<(), StoreError> {
        let mut uow = UnitOfWork::new(pool.clone(), None);
        let tracked = uow.repository::<Property>().add(sample_property("A", 100));
        uow.save_changes().await?;

        let original = uow.entity(tracked).clone();
        let unchanged = original.clone();
        uow.repository::<Property>().update(&original, unchanged);
        let written = uow.save_changes().await?;

        assert_eq!(written, 0);
        let audits: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM audit_logs WHERE table_name = 'properties' AND action = 'Updated'",
        )
        .fetch_one(&pool)
        .await?;
        assert_eq!(audits, 0);
        Ok(())
    }

    #[sqlx::test]
    async fn test_empty_commit_is_a_no_op(pool: PgPool) -> Result<(), StoreError> {
        let mut uow = UnitOfWork::new(pool, None);
        assert_eq!(uow.save_changes().await?, 0);
        Ok(())
    }
}
