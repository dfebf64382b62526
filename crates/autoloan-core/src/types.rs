use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
/// Amounts are KRW and integer-valued by convention (원 단위 절사): any
/// step that produces a sub-won fraction floors it away.
pub type Money = Decimal;

/// Interest rates as quoted annual percentages (5.5 = 5.5% p.a.).
/// The amortization engine converts to a monthly decimal rate internally.
pub type Rate = Decimal;

/// Fuel type of the financed vehicle.
///
/// Drives the environmental improvement charge gate: only diesel vehicles
/// owe the charge. Wire forms match the original form codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    #[serde(rename = "diesel")]
    Diesel,
    #[default]
    #[serde(rename = "gasoline")]
    Gasoline,
    #[serde(rename = "hybrid")]
    Hybrid,
    #[serde(rename = "electric")]
    Electric,
}

impl FuelType {
    /// Whether the environmental improvement charge applies at all.
    pub fn owes_env_charge(&self) -> bool {
        matches!(self, FuelType::Diesel)
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
