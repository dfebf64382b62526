use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use autoloan_core::amortization::{compute_schedule, LoanSpec};
use autoloan_core::types::FuelType;

use crate::input;

/// Fuel type flag; mirrors the wire form used in loan spec files.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FuelArg {
    Diesel,
    Gasoline,
    Hybrid,
    Electric,
}

impl From<FuelArg> for FuelType {
    fn from(value: FuelArg) -> Self {
        match value {
            FuelArg::Diesel => FuelType::Diesel,
            FuelArg::Gasoline => FuelType::Gasoline,
            FuelArg::Hybrid => FuelType::Hybrid,
            FuelArg::Electric => FuelType::Electric,
        }
    }
}

/// Arguments for the repayment schedule calculation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScheduleArgs {
    /// Vehicle purchase price in KRW
    #[arg(long)]
    pub vehicle_price: Option<Decimal>,

    /// Down payment in KRW
    #[arg(long)]
    pub down_payment: Option<Decimal>,

    /// Engine displacement in cc (0 = no auto tax)
    #[arg(long, default_value = "0")]
    pub displacement: u32,

    /// Fuel type
    #[arg(long, value_enum, default_value = "gasoline")]
    pub fuel: FuelArg,

    /// Semi-annual environmental improvement charge in KRW (diesel only)
    #[arg(long)]
    pub env_charge: Option<Decimal>,

    /// Loan principal in KRW; defaults to vehicle price minus down payment
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Annual interest rate in percent (5.5 = 5.5% p.a.)
    #[arg(long, alias = "apr")]
    pub rate: Option<Decimal>,

    /// Repayment term in months
    #[arg(long)]
    pub term: Option<u32>,

    /// Disbursement date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Path to a JSON or YAML loan spec file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Resolve a loan spec from file, piped stdin, or flags, in that order.
pub fn resolve_spec(args: &ScheduleArgs) -> Result<LoanSpec, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_spec(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let vehicle_price = args.vehicle_price.unwrap_or(dec!(0));
    let down_payment = args.down_payment.unwrap_or(dec!(0));
    let loan_amount = match args.loan_amount {
        Some(amount) => amount,
        None => LoanSpec::financed_amount(vehicle_price, down_payment),
    };

    Ok(LoanSpec {
        vehicle_price,
        down_payment,
        engine_displacement_cc: args.displacement,
        fuel_type: args.fuel.into(),
        env_charge_semi_annual: args.env_charge.unwrap_or(dec!(0)),
        loan_amount,
        annual_rate_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
        term_months: args.term.ok_or("--term is required (or provide --input)")?,
        start_date: args.start_date,
    })
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let spec = resolve_spec(&args)?;
    let output = compute_schedule(&spec);
    Ok(serde_json::to_value(output)?)
}
