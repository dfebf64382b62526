pub mod amortization;
pub mod error;
pub mod tax;
pub mod types;

#[cfg(feature = "manage")]
pub mod manage;

pub use amortization::{compute_schedule, LoanSpec, LoanSummary, ScheduleItem};
pub use error::AutoLoanError;
pub use types::*;

/// Standard result type for all vehicle-financing operations
pub type AutoLoanResult<T> = Result<T, AutoLoanError>;
