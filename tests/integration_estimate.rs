//! Integration tests for the estimate contract across the full input domain.

mod common;

use home_footprint::comparison::{AverageComparison, reference_bands};
use home_footprint::estimator::{Category, DwellingSize, Estimate};
use home_footprint::io::export::write_csv;

#[test]
fn sum_invariant_holds_across_full_domain() {
    for dwelling in common::all_dwellings() {
        for flags in 0_u8..8 {
            for days in 28..=31 {
                let h = common::household(
                    dwelling,
                    flags & 1 != 0,
                    flags & 2 != 0,
                    flags & 4 != 0,
                    days,
                );
                let est = Estimate::for_household(&h);
                let sum: f32 = est.breakdown.iter().map(|&(_, kg)| kg).sum();
                assert_eq!(est.total_kg, sum, "total != breakdown sum for {h:?}");
            }
        }
    }
}

#[test]
fn base_entry_present_across_full_domain() {
    for dwelling in common::all_dwellings() {
        for flags in 0_u8..8 {
            let h = common::household(dwelling, flags & 1 != 0, flags & 2 != 0, flags & 4 != 0, 30);
            let est = Estimate::for_household(&h);
            assert_eq!(
                est.breakdown.first().map(|&(c, _)| c),
                Some(Category::LightingBasic),
                "base entry must lead the breakdown for {h:?}"
            );
        }
    }
}

#[test]
fn breakdown_order_is_fixed() {
    let h = common::household(Some(DwellingSize::TwoRoom), true, true, true, 30);
    let est = Estimate::for_household(&h);
    let order: Vec<Category> = est.breakdown.iter().map(|&(c, _)| c).collect();
    assert_eq!(
        order,
        vec![
            Category::LightingBasic,
            Category::AirConditioner,
            Category::Refrigerator,
            Category::WashingMachine,
        ]
    );
}

#[test]
fn appliance_subsets_never_reorder_entries() {
    // fridge + washer without AC must keep fridge before washer
    let h = common::household(Some(DwellingSize::OneRoom), false, true, true, 29);
    let est = Estimate::for_household(&h);
    let order: Vec<Category> = est.breakdown.iter().map(|&(c, _)| c).collect();
    assert_eq!(
        order,
        vec![
            Category::LightingBasic,
            Category::Refrigerator,
            Category::WashingMachine,
        ]
    );
}

#[test]
fn one_room_bare_household_totals() {
    let est = Estimate::for_household(&common::household(
        Some(DwellingSize::OneRoom),
        false,
        false,
        false,
        30,
    ));
    assert!((est.total_kg - 72.0).abs() < 1e-3);
    assert_eq!(est.breakdown.len(), 1);
}

#[test]
fn two_room_full_household_totals() {
    let est = Estimate::for_household(&common::household(
        Some(DwellingSize::TwoRoom),
        true,
        true,
        true,
        30,
    ));
    assert!((est.total_kg - 378.0).abs() < 1e-3);
}

#[test]
fn three_room_fridge_only_totals() {
    let est = Estimate::for_household(&common::household(
        Some(DwellingSize::ThreeRoom),
        false,
        true,
        false,
        31,
    ));
    assert!((est.total_kg - 272.8).abs() < 1e-3);
}

#[test]
fn degraded_dwelling_yields_zero_total_with_base_entry() {
    let est = Estimate::for_household(&common::household(None, false, false, false, 30));
    assert_eq!(est.total_kg, 0.0);
    assert_eq!(est.breakdown, vec![(Category::LightingBasic, 0.0)]);
}

#[test]
fn monotonicity_each_appliance_adds_exactly_one_entry() {
    for dwelling in common::all_dwellings() {
        for days in 28..=31 {
            let bare = common::household(dwelling, false, false, false, days);
            let bare_est = Estimate::for_household(&bare);

            let with_ac = common::household(dwelling, true, false, false, days);
            let ac_est = Estimate::for_household(&with_ac);
            assert!(ac_est.total_kg > bare_est.total_kg);
            assert_eq!(ac_est.breakdown.len(), bare_est.breakdown.len() + 1);
        }
    }
}

#[test]
fn end_to_end_report_pipeline_is_deterministic() {
    let h = common::household(Some(DwellingSize::ThreeRoom), true, true, false, 31);

    let est1 = Estimate::for_household(&h);
    let est2 = Estimate::for_household(&h);
    assert_eq!(est1, est2);

    let mut csv1 = Vec::new();
    let mut csv2 = Vec::new();
    write_csv(&est1, &mut csv1).ok();
    write_csv(&est2, &mut csv2).ok();
    assert_eq!(csv1, csv2);

    let bands1 = reference_bands(&est1);
    let bands2 = reference_bands(&est2);
    assert_eq!(bands1, bands2);
}

#[test]
fn comparison_uses_bracket_average_with_default_fallback() {
    let est = Estimate::for_household(&common::household(None, true, true, true, 30));
    let cmp = AverageComparison::for_estimate(&est, None);
    assert_eq!(cmp.average_kg, 200.0);
    // 90 + 120 + 60 = 270 total, 70 above the default average
    assert!((cmp.delta_kg - 70.0).abs() < 1e-3);
    assert!(cmp.is_above_average());
}
