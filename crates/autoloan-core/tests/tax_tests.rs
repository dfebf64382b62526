use autoloan_core::tax;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Vehicle tax property sweeps — band structure and flooring across the
// realistic displacement range (exact figures live with the calculator)
// ===========================================================================

#[test]
fn test_annual_tax_never_falls_as_displacement_grows() {
    let mut previous = Decimal::ZERO;
    for cc in 0..=3500 {
        let annual = tax::annual_auto_tax(cc);
        assert!(annual >= previous, "tax fell at {}cc", cc);
        previous = annual;
    }
}

#[test]
fn test_per_cc_step_is_constant_inside_each_band() {
    // Whole-band pricing at 80/140/200 per cc plus the 30% surtax makes
    // every in-band cc worth exactly 104, 182, or 260.
    for cc in 1..1000 {
        let step = tax::annual_auto_tax(cc + 1) - tax::annual_auto_tax(cc);
        assert_eq!(step, dec!(104), "small band step at {}cc", cc);
    }
    for cc in 1001..1600 {
        let step = tax::annual_auto_tax(cc + 1) - tax::annual_auto_tax(cc);
        assert_eq!(step, dec!(182), "mid band step at {}cc", cc);
    }
    for cc in 1601..3000 {
        let step = tax::annual_auto_tax(cc + 1) - tax::annual_auto_tax(cc);
        assert_eq!(step, dec!(260), "large band step at {}cc", cc);
    }
}

#[test]
fn test_band_boundaries_reprice_the_whole_displacement() {
    // One extra cc across a boundary re-rates every cc below it, so the
    // jump dwarfs an in-band step.
    let small_to_mid = tax::annual_auto_tax(1001) - tax::annual_auto_tax(1000);
    assert_eq!(small_to_mid, dec!(78_182));
    let mid_to_large = tax::annual_auto_tax(1601) - tax::annual_auto_tax(1600);
    assert_eq!(mid_to_large, dec!(125_060));
}

#[test]
fn test_monthly_tax_is_the_floored_twelfth() {
    for cc in [1u32, 500, 999, 1000, 1001, 1234, 1500, 1600, 1601, 1995, 2500, 3342] {
        let annual = tax::annual_auto_tax(cc);
        let monthly = tax::monthly_auto_tax(cc);
        assert!(monthly * dec!(12) <= annual, "{}cc monthly overshoots", cc);
        assert!(
            annual - monthly * dec!(12) < dec!(12),
            "{}cc drops more than the flooring remainder",
            cc
        );
    }
}

#[test]
fn test_env_charge_is_the_floored_sixth() {
    let amounts = [
        dec!(1),
        dec!(5),
        dec!(5_999),
        dec!(6_000),
        dec!(60_000),
        dec!(100_000),
        dec!(123_457),
    ];
    for semi_annual in amounts {
        let monthly = tax::monthly_env_charge(semi_annual);
        assert!(monthly * dec!(6) <= semi_annual);
        assert!(semi_annual - monthly * dec!(6) < dec!(6));
    }
}
