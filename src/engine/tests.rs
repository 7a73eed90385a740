use crate::cities::{AuxZone, City, DEFAULT_AUX_ZONES, DEFAULT_CITIES};
use crate::engine::{
    city_local_hour, classify, find_optimal_window, find_optimal_window_with, normalize_hour, overlap_counts,
};
use crate::{AuxWindow, HourStatus};

fn cities(offsets: &[f64]) -> Vec<City> {
    offsets.iter().enumerate().map(|(idx, offset)| City::new(format!("C{idx}"), format!("C{idx}"), *offset)).collect()
}

/// Straightforward re-derivation used to cross-check the sweep.
fn brute_force_best_hour(offsets: &[i64]) -> (u32, usize) {
    let counts: Vec<usize> = (0..24i64)
        .map(|utc| {
            offsets
                .iter()
                .filter(|offset| {
                    let mut local = utc + **offset;
                    while local < 0 {
                        local += 24;
                    }
                    while local >= 24 {
                        local -= 24;
                    }
                    (9..18).contains(&local)
                })
                .count()
        })
        .collect();
    let max = counts.iter().copied().max().unwrap_or(0);
    let hour = counts.iter().position(|c| *c == max).unwrap_or(0);
    (hour as u32, max)
}

#[test]
fn normalize_is_in_range_and_periodic() {
    let mut h = -75.0;
    while h <= 75.0 {
        let base = normalize_hour(h);
        assert!(base < 24, "h={h} gave {base}");
        for k in -3..=3 {
            assert_eq!(normalize_hour(h + 24.0 * k as f64), base, "h={h} k={k}");
        }
        h += 0.5;
    }
}

#[test]
fn city_local_hour_matches_definition() {
    for axis in 0..24u32 {
        for reference in -12..=14 {
            for city in -12..=14 {
                let expected = normalize_hour(axis as f64 - reference as f64 + city as f64);
                assert_eq!(city_local_hour(axis, reference as f64, city as f64), expected);
            }
        }
    }
}

#[test]
fn out_of_range_offsets_still_wrap() {
    assert_eq!(city_local_hour(0, 25.0, 0.0), 23);
    assert_eq!(city_local_hour(0, -25.0, 0.0), 1);
    assert_eq!(city_local_hour(23, -12.0, 12.0), 23);
}

#[test]
fn classify_table() {
    let cases: Vec<(u32, bool, HourStatus)> = vec![
        (0, false, HourStatus::Off),
        (7, false, HourStatus::Off),
        (8, false, HourStatus::Shoulder),
        (9, false, HourStatus::Working),
        (12, false, HourStatus::Working),
        (17, false, HourStatus::Working),
        (18, false, HourStatus::Shoulder),
        (19, false, HourStatus::Off),
        (23, false, HourStatus::Off),
        (7, true, HourStatus::CurrentLight),
        (8, true, HourStatus::Current),
        (13, true, HourStatus::Current),
        (18, true, HourStatus::Current),
        (19, true, HourStatus::CurrentLight),
        (0, true, HourStatus::CurrentLight),
    ];

    for (hour, current, expected) in cases {
        assert_eq!(classify(hour, current), expected, "classify({hour}, {current})");
    }
}

#[test]
fn default_deployment_matches_brute_force() {
    let window = find_optimal_window(&DEFAULT_CITIES);
    let (hour, max) = brute_force_best_hour(&[-8, -5, 1, 2]);

    assert_eq!(window.start_hour_utc, hour);
    assert_eq!(window.overlap, max);
    assert_eq!(window.end_hour_utc, hour + 1);
    // NYC, WRO and LVI overlap from 14:00 UTC; LAX is still asleep.
    assert_eq!((window.start_hour_utc, window.overlap), (14, 3));
}

#[test]
fn default_deployment_at_17_utc() {
    let counts = overlap_counts(&DEFAULT_CITIES);
    let statuses: Vec<HourStatus> =
        DEFAULT_CITIES.iter().map(|c| classify(city_local_hour(17, 0.0, c.utc_offset), false)).collect();

    assert_eq!(statuses, vec![HourStatus::Working, HourStatus::Working, HourStatus::Shoulder, HourStatus::Off]);
    assert_eq!(counts[17], 2);
}

#[test]
fn sweep_matches_brute_force_for_synthetic_tables() {
    let tables: Vec<Vec<i64>> = vec![
        vec![0],
        vec![-12, 12],
        vec![-8, -5, 1, 2],
        vec![9, 10, -3],
        vec![5, 5, 5],
        vec![-11, -2, 3, 8, 13],
        vec![14, -12],
    ];

    for offsets in tables {
        let table = cities(&offsets.iter().map(|o| *o as f64).collect::<Vec<_>>());
        let window = find_optimal_window(&table);
        assert_eq!((window.start_hour_utc, window.overlap), brute_force_best_hour(&offsets), "offsets {offsets:?}");
    }
}

#[test]
fn ties_resolve_to_lowest_hour() {
    // Two separate blocks of two: UTC 1..10 and UTC 11..20.
    let table = cities(&[-2.0, -2.0, 8.0, 8.0]);
    let counts = overlap_counts(&table);
    assert_eq!(counts[1], 2);
    assert_eq!(counts[11], 2);

    let window = find_optimal_window(&table);
    assert_eq!(window.start_hour_utc, 1);
    assert_eq!(window.overlap, 2);
}

#[test]
fn ties_inside_one_block_pick_its_start() {
    let table = cities(&[0.0, -3.0]);
    assert_eq!(find_optimal_window(&table).start_hour_utc, 12);
}

#[test]
fn empty_table_selects_midnight() {
    let window = find_optimal_window(&[]);
    assert_eq!(window.start_hour_utc, 0);
    assert_eq!(window.end_hour_utc, 1);
    assert_eq!(window.overlap, 0);
    assert_eq!(window.to_string(), "0:00 - 1:00 UTC (19:00 - 20:00 EST / 1:00 - 2:00 CET)");
}

#[test]
fn aux_zones_are_fixed_offset_translations() {
    let window = find_optimal_window(&DEFAULT_CITIES);
    let start = window.start_hour_utc;

    assert_eq!(window.aux.len(), DEFAULT_AUX_ZONES.len());
    for (aux, zone) in window.aux.iter().zip(DEFAULT_AUX_ZONES.iter()) {
        assert_eq!(aux.label, zone.label);
        assert_eq!(aux.start_local, normalize_hour(start as f64 + zone.utc_offset));
        assert_eq!(aux.end_local, normalize_hour(start as f64 + 1.0 + zone.utc_offset));
        assert!(aux.start_local < 24 && aux.end_local < 24);
    }

    assert_eq!(
        window.aux,
        vec![
            AuxWindow { label: "EST".into(), start_local: 9, end_local: 10 },
            AuxWindow { label: "CET".into(), start_local: 15, end_local: 16 },
        ]
    );
}

#[test]
fn late_window_wraps_aux_end_but_not_utc_end() {
    // UTC-14 works 23:00..08:00 UTC and UTC-6 works 15:00..00:00 UTC; they
    // only meet at 23:00.
    let table = cities(&[-14.0, -6.0]);
    let counts = overlap_counts(&table);
    assert_eq!(counts[23], 2);
    assert_eq!(counts[0], 1);

    let window = find_optimal_window_with(&table, &[AuxZone::new("CET", 1.0)]);
    assert_eq!(window.start_hour_utc, 23);
    assert_eq!(window.end_hour_utc, 24);
    assert_eq!(window.aux[0], AuxWindow { label: "CET".into(), start_local: 0, end_local: 1 });
    assert_eq!(window.to_string(), "23:00 - 24:00 UTC (0:00 - 1:00 CET)");
}

#[test]
fn fractional_offsets_classify_on_the_floor() {
    // UTC+5:30 at 03:30 UTC is 09:00 local; at 03:00 UTC it is 08:30, a shoulder hour.
    let india = City::new("BLR (IST)", "BLR", 5.5);
    assert_eq!(classify(city_local_hour(3, 0.0, india.utc_offset), false), HourStatus::Shoulder);
    assert_eq!(classify(city_local_hour(4, 0.0, india.utc_offset), false), HourStatus::Working);
    assert_eq!(overlap_counts(&[india]).iter().sum::<usize>(), 9);
}
