//! Storage abstraction for loan records.
//!
//! The trait keeps the management layer independent of any persistence
//! engine. The in-memory implementation is the default backing store; its
//! JSON snapshot form is what the CLI writes between invocations.

use std::collections::HashMap;

use uuid::Uuid;

use super::records::LoanRecord;
use crate::AutoLoanResult;

pub trait LoanStore {
    fn insert(&mut self, record: LoanRecord);
    fn get(&self, id: &Uuid) -> Option<&LoanRecord>;
    fn get_mut(&mut self, id: &Uuid) -> Option<&mut LoanRecord>;
    fn remove(&mut self, id: &Uuid) -> Option<LoanRecord>;
    /// All records, newest first by creation time.
    fn list(&self) -> Vec<&LoanRecord>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct InMemoryLoanStore {
    records: HashMap<Uuid, LoanRecord>,
}

impl InMemoryLoanStore {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Serialize every record, oldest first, as a pretty-printed JSON array.
    pub fn to_json(&self) -> AutoLoanResult<String> {
        let mut records: Vec<&LoanRecord> = self.records.values().collect();
        records.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(serde_json::to_string_pretty(&records)?)
    }

    /// Rebuild a store from a snapshot produced by [`Self::to_json`].
    pub fn from_json(json: &str) -> AutoLoanResult<Self> {
        let records: Vec<LoanRecord> = serde_json::from_str(json)?;
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        Ok(store)
    }
}

impl Default for InMemoryLoanStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LoanStore for InMemoryLoanStore {
    fn insert(&mut self, record: LoanRecord) {
        self.records.insert(record.id, record);
    }

    fn get(&self, id: &Uuid) -> Option<&LoanRecord> {
        self.records.get(id)
    }

    fn get_mut(&mut self, id: &Uuid) -> Option<&mut LoanRecord> {
        self.records.get_mut(id)
    }

    fn remove(&mut self, id: &Uuid) -> Option<LoanRecord> {
        self.records.remove(id)
    }

    fn list(&self) -> Vec<&LoanRecord> {
        let mut records: Vec<&LoanRecord> = self.records.values().collect();
        // Ties on created_at fall back to id so the listing is reproducible.
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        records
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::LoanSpec;
    use crate::types::FuelType;
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn sample_spec() -> LoanSpec {
        LoanSpec {
            vehicle_price: dec!(25_000_000),
            down_payment: dec!(5_000_000),
            engine_displacement_cc: 1600,
            fuel_type: FuelType::Gasoline,
            env_charge_semi_annual: Decimal::ZERO,
            loan_amount: dec!(20_000_000),
            annual_rate_pct: dec!(4.5),
            term_months: 36,
            start_date: None,
        }
    }

    fn record_created_at(ts: DateTime<Utc>) -> LoanRecord {
        let mut record = LoanRecord::new(sample_spec(), None);
        record.created_at = ts;
        record
    }

    #[test]
    fn test_insert_and_retrieve() {
        let mut store = InMemoryLoanStore::new();
        let record = LoanRecord::new(sample_spec(), None);
        let id = record.id;

        store.insert(record);

        let stored = store.get(&id);
        assert!(stored.is_some(), "record should be found");
        assert_eq!(stored.unwrap().id, id);

        assert!(
            store.get(&Uuid::new_v4()).is_none(),
            "unknown id should return None"
        );
    }

    #[test]
    fn test_remove() {
        let mut store = InMemoryLoanStore::new();
        let record = LoanRecord::new(sample_spec(), None);
        let id = record.id;
        store.insert(record);
        assert_eq!(store.len(), 1);

        let removed = store.remove(&id);
        assert!(removed.is_some());
        assert!(store.is_empty());
        assert!(store.remove(&id).is_none());
    }

    #[test]
    fn test_list_newest_first() {
        let mut store = InMemoryLoanStore::new();
        let old = record_created_at(Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap());
        let mid = record_created_at(Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap());
        let new = record_created_at(Utc.with_ymd_and_hms(2024, 6, 20, 9, 0, 0).unwrap());
        let (old_id, mid_id, new_id) = (old.id, mid.id, new.id);

        store.insert(mid);
        store.insert(new);
        store.insert(old);

        let ids: Vec<Uuid> = store.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![new_id, mid_id, old_id]);
    }

    #[test]
    fn test_json_snapshot_restores_records() {
        let mut store = InMemoryLoanStore::new();
        let record = record_created_at(Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap());
        let id = record.id;
        store.insert(record);
        store.insert(record_created_at(
            Utc.with_ymd_and_hms(2024, 2, 2, 12, 0, 0).unwrap(),
        ));

        let snapshot = store.to_json().unwrap();
        let restored = InMemoryLoanStore::from_json(&snapshot).unwrap();

        assert_eq!(restored.len(), 2);
        let back = restored.get(&id).unwrap();
        assert_eq!(back.spec.loan_amount, dec!(20_000_000));
        assert_eq!(back.created_at, Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(InMemoryLoanStore::from_json("not json").is_err());
        assert!(InMemoryLoanStore::from_json("{\"records\": 1}").is_err());
    }
}
