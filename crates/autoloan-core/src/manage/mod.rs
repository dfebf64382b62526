//! Loan record management: a draft/approve workflow over a pluggable store.
//!
//! [`LoanManager`] is the service front: saving a spec computes and caches
//! its schedule summary, updates recompute it, and approval is a status-only
//! transition. The store behind it is a trait so tests and embedders can
//! substitute their own persistence.

pub mod records;
pub mod store;

pub use records::{LoanRecord, LoanStatus};
pub use store::{InMemoryLoanStore, LoanStore};

use uuid::Uuid;

use crate::amortization::{compute_schedule, LoanSpec};
use crate::{AutoLoanError, AutoLoanResult};

pub struct LoanManager<S: LoanStore = InMemoryLoanStore> {
    pub store: S,
}

impl Default for LoanManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LoanManager {
    pub fn new() -> Self {
        Self {
            store: InMemoryLoanStore::new(),
        }
    }
}

impl<S: LoanStore> LoanManager<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Save a new record: fresh id, current timestamp, `Draft` status, and
    /// the schedule summary computed from the spec and cached alongside it.
    pub fn create(&mut self, spec: LoanSpec) -> LoanRecord {
        let summary = compute_schedule(&spec).result;
        let record = LoanRecord::new(spec, Some(summary));
        self.store.insert(record.clone());
        record
    }

    /// Replace the spec of an existing record and recompute its cached
    /// summary. Id, creation time, and status are preserved.
    pub fn update(&mut self, id: &Uuid, spec: LoanSpec) -> AutoLoanResult<LoanRecord> {
        let record = self
            .store
            .get_mut(id)
            .ok_or(AutoLoanError::RecordNotFound { id: *id })?;
        let summary = compute_schedule(&spec).result;
        record.spec = spec;
        record.summary = Some(summary);
        Ok(record.clone())
    }

    /// Remove a record, returning it.
    pub fn delete(&mut self, id: &Uuid) -> AutoLoanResult<LoanRecord> {
        self.store
            .remove(id)
            .ok_or(AutoLoanError::RecordNotFound { id: *id })
    }

    pub fn get(&self, id: &Uuid) -> AutoLoanResult<&LoanRecord> {
        self.store
            .get(id)
            .ok_or(AutoLoanError::RecordNotFound { id: *id })
    }

    /// All records, newest first.
    pub fn list(&self) -> Vec<&LoanRecord> {
        self.store.list()
    }

    /// Status-only transition to `Approved`. Idempotent.
    pub fn approve(&mut self, id: &Uuid) -> AutoLoanResult<LoanRecord> {
        let record = self
            .store
            .get_mut(id)
            .ok_or(AutoLoanError::RecordNotFound { id: *id })?;
        record.status = LoanStatus::Approved;
        Ok(record.clone())
    }
}
