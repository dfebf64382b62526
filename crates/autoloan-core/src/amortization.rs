//! Equal-payment amortization for vehicle financing.
//!
//! One fixed monthly payment covers a shrinking interest portion and a
//! growing principal portion until the balance reaches exactly zero at term
//! end. Korean won convention: every derived amount is floored to whole won,
//! and the final installment sweeps the remaining balance so cumulative
//! flooring drift never leaves a residue.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use chrono::{Local, Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::tax;
use crate::types::{with_metadata, ComputationOutput, FuelType, Money, Rate};

/// Input for one schedule computation. Immutable for the duration of the
/// calculation; vehicle price and down payment are informational and do not
/// enter the payment formula.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSpec {
    #[serde(default)]
    pub vehicle_price: Money,
    #[serde(default)]
    pub down_payment: Money,
    #[serde(default)]
    pub engine_displacement_cc: u32,
    #[serde(default)]
    pub fuel_type: FuelType,
    /// Environmental improvement charge as billed per half-year. Only
    /// meaningful for diesel vehicles.
    #[serde(default)]
    pub env_charge_semi_annual: Money,
    /// Principal to amortize. Non-positive values degrade to an empty
    /// schedule.
    pub loan_amount: Money,
    /// Quoted annual rate in percent (5.5 = 5.5% p.a.). Zero is a valid
    /// interest-free loan.
    pub annual_rate_pct: Rate,
    pub term_months: u32,
    /// Disbursement date; payment dates advance from it one whole calendar
    /// month per round. Defaults to the current date when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

impl LoanSpec {
    /// Principal implied by the vehicle purchase: price minus down payment,
    /// never negative. The loan form derives its default this way.
    pub fn financed_amount(vehicle_price: Money, down_payment: Money) -> Money {
        (vehicle_price - down_payment).max(Decimal::ZERO)
    }
}

/// One repayment period. Rounds are 1-based and the sequence is a time
/// series ordered by round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub round: u32,
    pub payment_date: NaiveDate,
    pub monthly_payment: Money,
    pub principal_payment: Money,
    pub interest_payment: Money,
    /// Balance after this round's principal, clamped at zero.
    pub remaining_balance: Money,
    pub monthly_tax: Money,
    pub monthly_env_charge: Money,
    /// Payment plus the flat monthly tax and environmental charge.
    pub total_monthly_outflow: Money,
}

/// Full result of a schedule computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSummary {
    pub vehicle_price: Money,
    pub down_payment: Money,
    pub auto_tax_annual: Money,
    pub auto_tax_monthly: Money,
    pub env_charge_semi_annual: Money,
    pub env_charge_monthly: Money,
    pub total_interest: Money,
    pub total_payment: Money,
    /// Empty when the input is not amortizable.
    pub schedule: Vec<ScheduleItem>,
}

/// Compute the full equal-payment repayment schedule for a loan.
///
/// Total by contract: non-positive `loan_amount` or `term_months` produce a
/// well-formed summary with an empty schedule (tax figures still populated
/// when applicable) instead of an error.
pub fn compute_schedule(spec: &LoanSpec) -> ComputationOutput<LoanSummary> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // Flat monthly columns, fixed once before the period loop.
    let (auto_tax_annual, auto_tax_monthly) = if spec.engine_displacement_cc > 0 {
        (
            tax::annual_auto_tax(spec.engine_displacement_cc),
            tax::monthly_auto_tax(spec.engine_displacement_cc),
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    let env_charge_applies =
        spec.fuel_type.owes_env_charge() && spec.env_charge_semi_annual > Decimal::ZERO;
    let (env_charge_semi_annual, env_charge_monthly) = if env_charge_applies {
        (
            spec.env_charge_semi_annual,
            tax::monthly_env_charge(spec.env_charge_semi_annual),
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };
    if spec.env_charge_semi_annual > Decimal::ZERO && !spec.fuel_type.owes_env_charge() {
        warnings.push(format!(
            "env_charge_semi_annual ignored: fuel type {:?} owes no environmental charge",
            spec.fuel_type
        ));
    }

    let mut summary = LoanSummary {
        vehicle_price: spec.vehicle_price,
        down_payment: spec.down_payment,
        auto_tax_annual,
        auto_tax_monthly,
        env_charge_semi_annual,
        env_charge_monthly,
        total_interest: Decimal::ZERO,
        total_payment: Decimal::ZERO,
        schedule: Vec::new(),
    };

    if spec.loan_amount > Decimal::ZERO && spec.term_months > 0 {
        // Monthly decimal rate from the quoted annual percentage.
        let monthly_rate = spec.annual_rate_pct / dec!(100) / dec!(12);

        let raw_payment = if monthly_rate.is_zero() {
            spec.loan_amount / Decimal::from(spec.term_months)
        } else {
            // Annuity formula: P * r * (1+r)^n / ((1+r)^n - 1)
            let growth = (Decimal::ONE + monthly_rate).powd(Decimal::from(spec.term_months));
            spec.loan_amount * monthly_rate * growth / (growth - Decimal::ONE)
        };
        // Floored to whole won, permanently for every period but possibly
        // the last.
        let fixed_payment = raw_payment.floor();

        let base_date = spec.start_date.unwrap_or_else(|| Local::now().date_naive());

        let mut balance = spec.loan_amount;
        let mut total_interest = Decimal::ZERO;
        let mut schedule = Vec::with_capacity(spec.term_months as usize);

        for round in 1..=spec.term_months {
            let interest_payment = (balance * monthly_rate).floor();

            let (principal_payment, monthly_payment) = if round == spec.term_months {
                // Final-period correction: sweep the entire remaining
                // balance so flooring drift cannot leave a residue.
                (balance, balance + interest_payment)
            } else {
                (fixed_payment - interest_payment, fixed_payment)
            };

            balance -= principal_payment;
            total_interest += interest_payment;

            // chrono clamps the day-of-month, so Jan 31 + 1 month lands on
            // Feb 28/29.
            let payment_date = base_date
                .checked_add_months(Months::new(round))
                .unwrap_or(base_date);

            schedule.push(ScheduleItem {
                round,
                payment_date,
                monthly_payment,
                principal_payment,
                interest_payment,
                remaining_balance: balance.max(Decimal::ZERO),
                monthly_tax: auto_tax_monthly,
                monthly_env_charge: env_charge_monthly,
                total_monthly_outflow: monthly_payment + auto_tax_monthly + env_charge_monthly,
            });
        }

        summary.schedule = schedule;
        summary.total_interest = total_interest;
        summary.total_payment = spec.loan_amount + total_interest;
    } else {
        warnings.push(
            "loan_amount and term_months must both be positive; returning an empty schedule"
                .into(),
        );
    }

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Equal-Payment Amortization",
        &serde_json::json!({
            "loan_amount": spec.loan_amount.to_string(),
            "annual_rate_pct": spec.annual_rate_pct.to_string(),
            "term_months": spec.term_months,
            "engine_displacement_cc": spec.engine_displacement_cc,
            "fuel_type": spec.fuel_type,
            "rounding": "floor to whole KRW",
        }),
        warnings,
        elapsed,
        summary,
    )
}
