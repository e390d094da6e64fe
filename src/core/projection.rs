use super::types::{Allocation, MonthlyPoint, YearlyPoint};

/// Annual nominal rates for the fixed-contribution projection.
pub const SIP_ANNUAL_RATE: f64 = 0.12;
pub const RD_ANNUAL_RATE: f64 = 0.065;
pub const FD_ANNUAL_RATE: f64 = 0.06;

pub const DEFAULT_HORIZON_YEARS: u32 = 10;

/// Annual returns used by the variable-income projector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableRates {
    pub sip: f64,
    pub rd: f64,
    pub fd: f64,
}

impl Default for VariableRates {
    fn default() -> Self {
        Self {
            sip: 0.12,
            rd: 0.06,
            fd: 0.05,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Year-by-year compounded balances for fixed monthly contributions.
///
/// SIP and RD grow as monthly annuities-due; FD accumulates 12x the monthly
/// amount once a year, compounded annually. Balances are carried at full
/// precision and rounded to 2 decimals only at emission.
pub fn fixed_projection(
    sip_monthly: f64,
    rd_monthly: f64,
    fd_monthly: f64,
    years: u32,
) -> Vec<YearlyPoint> {
    let sip_r = SIP_ANNUAL_RATE / 12.0;
    let rd_r = RD_ANNUAL_RATE / 12.0;

    let mut points = Vec::with_capacity(years as usize);
    for year in 1..=years {
        let m = (year * 12) as i32;

        let sip = sip_monthly * (((1.0 + sip_r).powi(m) - 1.0) / sip_r) * (1.0 + sip_r);
        let rd = rd_monthly * (((1.0 + rd_r).powi(m) - 1.0) / rd_r) * (1.0 + rd_r);
        let fd = fd_monthly * 12.0 * (((1.0 + FD_ANNUAL_RATE).powi(year as i32) - 1.0) / FD_ANNUAL_RATE);

        points.push(YearlyPoint {
            year,
            sip: round2(sip),
            rd: round2(rd),
            fd: round2(fd),
        });
    }
    points
}

/// One year of monthly income: a leading run of zero months, then peak and
/// lean income alternating (peak on even month indices).
///
/// `zero_months` above 12 zeroes the whole year; zero or negative means no
/// interruption. Range validation belongs to the caller.
pub fn income_schedule(peak_income: u32, lean_income: u32, zero_months: i32) -> Vec<u32> {
    (0..12_i32)
        .map(|i| {
            if i < zero_months {
                0
            } else if i % 2 == 0 {
                peak_income
            } else {
                lean_income
            }
        })
        .collect()
}

/// Month-by-month compounded balances over a repeating income schedule.
///
/// The schedule is cycled `years` times with a cumulative month counter.
/// Deficit months (income below expenses) contribute nothing; standing
/// balances keep compounding and are never drawn down. `total` is computed
/// from the full-precision balances and rounded independently of the three
/// emitted components, so it can differ from their sum by a few cents.
/// Downstream consumers rely on these exact figures.
pub fn variable_projection(
    schedule: &[u32],
    expenses: f64,
    alloc: Allocation,
    rates: VariableRates,
    years: u32,
) -> Vec<MonthlyPoint> {
    let sip_r = rates.sip / 12.0;
    let rd_r = rates.rd / 12.0;
    let fd_r = rates.fd / 12.0;

    let mut sip = 0.0_f64;
    let mut rd = 0.0_f64;
    let mut fd = 0.0_f64;

    let mut points = Vec::with_capacity(years as usize * schedule.len());
    let mut month = 0_u32;

    for _ in 0..years {
        for &income in schedule {
            let savings = (income as f64 - expenses).max(0.0);

            sip = sip * (1.0 + sip_r) + savings * alloc.sip_pct as f64 / 100.0;
            rd = rd * (1.0 + rd_r) + savings * alloc.rd_pct as f64 / 100.0;
            fd = fd * (1.0 + fd_r) + savings * alloc.fd_pct as f64 / 100.0;

            month += 1;
            points.push(MonthlyPoint {
                month,
                sip: round2(sip),
                rd: round2(rd),
                fd: round2(fd),
                total: round2(sip + rd + fd),
            });
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    #[test]
    fn fixed_projection_zero_contributions_is_all_zero() {
        let points = fixed_projection(0.0, 0.0, 0.0, DEFAULT_HORIZON_YEARS);
        assert_eq!(points.len(), 10);
        for (idx, point) in points.iter().enumerate() {
            assert_eq!(point.year, idx as u32 + 1);
            assert_eq!(point.sip, 0.0);
            assert_eq!(point.rd, 0.0);
            assert_eq!(point.fd, 0.0);
        }
    }

    #[test]
    fn fixed_projection_sip_one_year_matches_annuity_due() {
        // 1000 * (((1.01)^12 - 1) / 0.01) * 1.01
        let points = fixed_projection(1000.0, 0.0, 0.0, 1);
        assert_eq!(points.len(), 1);
        assert_approx(points[0].sip, 12809.33, 0.01);
        assert_eq!(points[0].rd, 0.0);
        assert_eq!(points[0].fd, 0.0);
    }

    #[test]
    fn fixed_projection_fd_first_year_is_plain_principal() {
        // ((1.06)^1 - 1) / 0.06 == 1, so year one holds exactly 12 deposits.
        let points = fixed_projection(0.0, 0.0, 300.0, 2);
        assert_approx(points[0].fd, 3600.0, 0.01);
        // Year two: 300*12*(((1.06)^2 - 1)/0.06) = 7416.
        assert_approx(points[1].fd, 7416.0, 0.01);
    }

    #[test]
    fn fixed_projection_emits_requested_horizon() {
        let points = fixed_projection(100.0, 100.0, 100.0, 25);
        assert_eq!(points.len(), 25);
        assert_eq!(points[0].year, 1);
        assert_eq!(points[24].year, 25);
    }

    #[test]
    fn income_schedule_alternates_after_zero_run() {
        assert_eq!(
            income_schedule(1000, 200, 3),
            vec![0, 0, 0, 1000, 200, 1000, 200, 1000, 200, 1000, 200, 1000]
        );
    }

    #[test]
    fn income_schedule_without_interruption_starts_on_peak() {
        assert_eq!(
            income_schedule(900, 100, 0),
            vec![900, 100, 900, 100, 900, 100, 900, 100, 900, 100, 900, 100]
        );
    }

    #[test]
    fn income_schedule_clamps_extremes() {
        assert_eq!(income_schedule(900, 100, 15), vec![0; 12]);
        assert_eq!(income_schedule(900, 100, -4), income_schedule(900, 100, 0));
    }

    #[test]
    fn variable_projection_zero_income_stays_zero() {
        let points = variable_projection(
            &[0; 12],
            5000.0,
            Allocation::new(50, 25, 25),
            VariableRates::default(),
            3,
        );
        assert_eq!(points.len(), 36);
        for point in &points {
            assert_eq!(point.sip, 0.0);
            assert_eq!(point.rd, 0.0);
            assert_eq!(point.fd, 0.0);
            assert_eq!(point.total, 0.0);
        }
    }

    #[test]
    fn variable_projection_first_month_is_the_allocated_savings() {
        let points = variable_projection(
            &[30000; 12],
            20000.0,
            Allocation::new(60, 30, 10),
            VariableRates::default(),
            1,
        );
        // Zero starting balances, so month one is the split contribution.
        assert_approx(points[0].sip, 6000.0, 1e-9);
        assert_approx(points[0].rd, 3000.0, 1e-9);
        assert_approx(points[0].fd, 1000.0, 1e-9);
        assert_approx(points[0].total, 10000.0, 1e-9);
    }

    #[test]
    fn variable_projection_deficit_months_never_shrink_balances() {
        // Income alternates above and below expenses; balances must be
        // non-decreasing since deficits contribute zero and rates are positive.
        let schedule = income_schedule(25000, 1000, 0);
        let points = variable_projection(
            &schedule,
            10000.0,
            Allocation::new(50, 25, 25),
            VariableRates::default(),
            2,
        );
        assert_eq!(points.len(), 24);
        for pair in points.windows(2) {
            assert!(pair[1].total >= pair[0].total);
        }
    }

    #[test]
    fn variable_projection_month_counter_spans_cycles() {
        let points = variable_projection(
            &[10000; 12],
            4000.0,
            Allocation::new(50, 25, 25),
            VariableRates::default(),
            10,
        );
        assert_eq!(points.len(), 120);
        assert_eq!(points[0].month, 1);
        assert_eq!(points[119].month, 120);
    }

    #[test]
    fn variable_projection_total_tracks_full_precision_sum() {
        let points = variable_projection(
            &[33333; 12],
            11111.0,
            Allocation::new(70, 20, 10),
            VariableRates::default(),
            5,
        );
        for point in &points {
            // Independent rounding of total vs. components: at most four
            // half-cents of drift.
            let component_sum = point.sip + point.rd + point.fd;
            assert!((point.total - component_sum).abs() <= 0.02 + 1e-9);
        }
    }

    proptest! {
        #[test]
        fn fixed_projection_is_non_negative_and_monotone(
            sip in 0.0_f64..50_000.0,
            rd in 0.0_f64..50_000.0,
            fd in 0.0_f64..50_000.0,
            years in 1_u32..30,
        ) {
            let points = fixed_projection(sip, rd, fd, years);
            prop_assert!(points.len() == years as usize);
            let mut prev = (0.0, 0.0, 0.0);
            for point in &points {
                prop_assert!(point.sip >= prev.0);
                prop_assert!(point.rd >= prev.1);
                prop_assert!(point.fd >= prev.2);
                prev = (point.sip, point.rd, point.fd);
            }
        }

        #[test]
        fn projections_are_referentially_transparent(
            sip in 0.0_f64..50_000.0,
            peak in 0_u32..100_000,
            lean in 0_u32..100_000,
            zero_months in -2_i32..15,
            expenses in 0.0_f64..50_000.0,
        ) {
            let a = fixed_projection(sip, sip, sip, 5);
            let b = fixed_projection(sip, sip, sip, 5);
            prop_assert!(a == b);

            let schedule = income_schedule(peak, lean, zero_months);
            prop_assert!(schedule == income_schedule(peak, lean, zero_months));

            let alloc = Allocation::new(50, 25, 25);
            let x = variable_projection(&schedule, expenses, alloc, VariableRates::default(), 2);
            let y = variable_projection(&schedule, expenses, alloc, VariableRates::default(), 2);
            prop_assert!(x == y);
        }

        #[test]
        fn schedule_is_twelve_non_negative_months(
            peak in 0_u32..1_000_000,
            lean in 0_u32..1_000_000,
            zero_months in -24_i32..24,
        ) {
            let schedule = income_schedule(peak, lean, zero_months);
            prop_assert!(schedule.len() == 12);
            for (i, income) in schedule.iter().enumerate() {
                if (i as i32) < zero_months {
                    prop_assert!(*income == 0);
                } else if i % 2 == 0 {
                    prop_assert!(*income == peak);
                } else {
                    prop_assert!(*income == lean);
                }
            }
        }
    }
}
