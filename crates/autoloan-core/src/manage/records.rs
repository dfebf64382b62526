//! Stored loan record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::amortization::{LoanSpec, LoanSummary};

/// Lifecycle status of a stored loan record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    /// Saved but not yet signed off.
    #[serde(rename = "DRAFT")]
    Draft,
    /// Approved by review; edits do not revert the status.
    #[serde(rename = "APPROVED")]
    Approved,
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanStatus::Draft => write!(f, "DRAFT"),
            LoanStatus::Approved => write!(f, "APPROVED"),
        }
    }
}

/// A saved loan application: the immutable input spec plus a cached
/// computation summary and workflow bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub status: LoanStatus,
    pub spec: LoanSpec,
    /// Schedule summary computed when the record was saved or last updated.
    /// `None` only for records imported without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<LoanSummary>,
}

impl LoanRecord {
    /// Fresh record in `Draft` status with a random id and the current
    /// timestamp.
    pub fn new(spec: LoanSpec, summary: Option<LoanSummary>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            status: LoanStatus::Draft,
            spec,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FuelType;
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

    #[test]
    fn test_new_record_defaults() {
        let record = LoanRecord::new(sample_spec(), None);
        assert_eq!(record.status, LoanStatus::Draft);
        assert!(record.summary.is_none());
    }

    #[test]
    fn test_status_wire_form() {
        assert_eq!(
            serde_json::to_string(&LoanStatus::Draft).unwrap(),
            "\"DRAFT\""
        );
        assert_eq!(
            serde_json::to_string(&LoanStatus::Approved).unwrap(),
            "\"APPROVED\""
        );
        let status: LoanStatus = serde_json::from_str("\"APPROVED\"").unwrap();
        assert_eq!(status, LoanStatus::Approved);
    }

    #[test]
    fn test_status_display_matches_wire_form() {
        assert_eq!(LoanStatus::Draft.to_string(), "DRAFT");
        assert_eq!(LoanStatus::Approved.to_string(), "APPROVED");
    }
}
