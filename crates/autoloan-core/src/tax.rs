use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::Money;

/// Displacement ceiling of the small-engine tier (cc).
const TIER_SMALL_MAX_CC: u32 = 1000;
/// Displacement ceiling of the mid-engine tier (cc).
const TIER_MEDIUM_MAX_CC: u32 = 1600;

/// Per-cc annual tax rates (KRW) by tier.
const RATE_SMALL_PER_CC: Decimal = dec!(80);
const RATE_MEDIUM_PER_CC: Decimal = dec!(140);
const RATE_LARGE_PER_CC: Decimal = dec!(200);

/// Local education surtax applied on top of the base auto tax.
const EDUCATION_TAX_RATE: Decimal = dec!(0.3);

const MONTHS_PER_YEAR: Decimal = dec!(12);
const MONTHS_PER_HALF_YEAR: Decimal = dec!(6);

/// Annual vehicle tax for a given engine displacement.
///
/// The tier is cliff-edged: the entire displacement is taxed at the rate of
/// the bracket it lands in, not blended marginally across brackets. The 30%
/// local education surtax is added and the total floored to whole won.
/// Zero displacement means the tax is not applicable and yields zero.
pub fn annual_auto_tax(displacement_cc: u32) -> Money {
    if displacement_cc == 0 {
        return Decimal::ZERO;
    }

    let per_cc = if displacement_cc <= TIER_SMALL_MAX_CC {
        RATE_SMALL_PER_CC
    } else if displacement_cc <= TIER_MEDIUM_MAX_CC {
        RATE_MEDIUM_PER_CC
    } else {
        RATE_LARGE_PER_CC
    };

    let base_tax = Decimal::from(displacement_cc) * per_cc;
    let education_tax = base_tax * EDUCATION_TAX_RATE;
    (base_tax + education_tax).floor()
}

/// Monthly-equivalent auto tax: the annual figure split over 12 months,
/// floored to whole won.
pub fn monthly_auto_tax(displacement_cc: u32) -> Money {
    (annual_auto_tax(displacement_cc) / MONTHS_PER_YEAR).floor()
}

/// Monthly-equivalent environmental improvement charge from the semi-annual
/// billed amount, floored to whole won.
///
/// Applies no fuel-type logic of its own; callers gate the charge to diesel
/// vehicles.
pub fn monthly_env_charge(semi_annual: Money) -> Money {
    (semi_annual / MONTHS_PER_HALF_YEAR).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_tier_boundary() {
        // 1000cc is still the 80/cc tier: 1000 * 80 = 80_000, +30% = 104_000
        assert_eq!(annual_auto_tax(1000), dec!(104_000));
        // 1001cc tips into 140/cc: 1001 * 140 = 140_140, +30% = 182_182
        assert_eq!(annual_auto_tax(1001), dec!(182_182));
    }

    #[test]
    fn test_medium_tier_boundary() {
        // 1600cc at 140/cc: 224_000 * 1.3 = 291_200
        assert_eq!(annual_auto_tax(1600), dec!(291_200));
        // 1601cc at 200/cc: 320_200 * 1.3 = 416_260
        assert_eq!(annual_auto_tax(1601), dec!(416_260));
    }

    #[test]
    fn test_annual_tax_1500cc() {
        // 1500 * 140 = 210_000; surtax 63_000; total 273_000
        assert_eq!(annual_auto_tax(1500), dec!(273_000));
    }

    #[test]
    fn test_monthly_tax_floors() {
        // 273_000 / 12 = 22_750 exactly
        assert_eq!(monthly_auto_tax(1500), dec!(22_750));
        // 104_000 / 12 = 8_666.67 -> 8_666
        assert_eq!(monthly_auto_tax(1000), dec!(8_666));
    }

    #[test]
    fn test_surtax_is_floored() {
        // 999 * 80 = 79_920; surtax 23_976; total 103_896 (integral already)
        assert_eq!(annual_auto_tax(999), dec!(103_896));
        // 1cc: 80 * 1.3 = 104
        assert_eq!(annual_auto_tax(1), dec!(104));
    }

    #[test]
    fn test_zero_displacement_is_untaxed() {
        assert_eq!(annual_auto_tax(0), Decimal::ZERO);
        assert_eq!(monthly_auto_tax(0), Decimal::ZERO);
    }

    #[test]
    fn test_env_charge_semi_annual_to_monthly() {
        assert_eq!(monthly_env_charge(dec!(60_000)), dec!(10_000));
        // 50_000 / 6 = 8_333.33 -> 8_333
        assert_eq!(monthly_env_charge(dec!(50_000)), dec!(8_333));
        assert_eq!(monthly_env_charge(Decimal::ZERO), Decimal::ZERO);
    }
}
