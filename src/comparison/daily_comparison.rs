//! Pairs daily station data with daily gridMET data for the matched cell and
//! summarises each month of a year, variable by variable.
//!
//! The results feed the comparison plots: a time series of both sources and a
//! station-vs-gridMET scatter with a regression line forced through zero.

use crate::comparison::error::ComparisonError;
use crate::comparison::variable::ComparisonVariable;
use crate::types::daily::{GridmetDay, StationDay};
use chrono::{Datelike, NaiveDate};
use log::info;
use ordered_float::OrderedFloat;
use std::collections::HashMap;

/// A month needs more than this many paired days to be compared.
pub const MIN_DAYS_PER_MONTH: usize = 5;

const VARIABLE_COUNT: usize = ComparisonVariable::ALL.len();

/// A day where every compared variable is present on both sides.
///
/// Values are indexed like [`ComparisonVariable::ALL`].
#[derive(Debug, Clone, PartialEq)]
pub struct PairedDay {
    pub date: NaiveDate,
    pub station: [f64; VARIABLE_COUNT],
    pub gridmet: [f64; VARIABLE_COUNT],
}

/// Comparison of one variable over one month.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableComparison {
    pub variable: ComparisonVariable,
    /// Slope `m` of `gridmet = m * station`.
    pub slope_through_zero: f64,
    /// Integer range covering both series with some padding, used for the 1:1 and
    /// regression lines of the scatter plot.
    pub axis_range: (i64, i64),
}

/// Comparison of all variables over one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyComparison {
    pub year: i32,
    pub month: u32,
    pub days: Vec<PairedDay>,
    pub variables: Vec<VariableComparison>,
}

/// Joins the two series on date, keeping station order.
///
/// A day is dropped unless it exists in both series and every variable has a finite
/// value on both sides.
pub fn pair_days(station_days: &[StationDay], gridmet_days: &[GridmetDay]) -> Vec<PairedDay> {
    let gridmet_by_date: HashMap<NaiveDate, &GridmetDay> =
        gridmet_days.iter().map(|day| (day.date, day)).collect();

    station_days
        .iter()
        .filter_map(|station_day| {
            let gridmet_day = gridmet_by_date.get(&station_day.date)?;
            let mut station = [0.0; VARIABLE_COUNT];
            let mut gridmet = [0.0; VARIABLE_COUNT];
            for (i, variable) in ComparisonVariable::ALL.iter().enumerate() {
                station[i] = finite(variable.station_value(station_day))?;
                gridmet[i] = finite(variable.gridmet_value(gridmet_day))?;
            }
            Some(PairedDay {
                date: station_day.date,
                station,
                gridmet,
            })
        })
        .collect()
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Least squares slope of `y = m * x` (no intercept): `m = Σxy / Σx²`.
pub fn slope_through_zero(
    variable: ComparisonVariable,
    month: u32,
    x: &[f64],
    y: &[f64],
) -> Result<f64, ComparisonError> {
    if x.len() != y.len() {
        return Err(ComparisonError::LengthMismatch {
            variable: variable.title(),
            station: x.len(),
            gridmet: y.len(),
        });
    }
    let sum_xx: f64 = x.iter().map(|v| v * v).sum();
    if sum_xx == 0.0 {
        return Err(ComparisonError::DegenerateRegression {
            variable: variable.title(),
            month,
        });
    }
    let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();
    Ok(sum_xy / sum_xx)
}

/// `(trunc(min - 2), trunc(max + 3))` over both series.
fn axis_range(x: &[f64], y: &[f64]) -> (i64, i64) {
    let values = || x.iter().chain(y).copied().map(OrderedFloat);
    let min = values().min().map_or(0.0, |v| v.into_inner());
    let max = values().max().map_or(0.0, |v| v.into_inner());
    ((min - 2.0).trunc() as i64, (max + 3.0).trunc() as i64)
}

fn compare_month(
    year: i32,
    month: u32,
    days: Vec<PairedDay>,
) -> Result<MonthlyComparison, ComparisonError> {
    let variables = ComparisonVariable::ALL
        .iter()
        .enumerate()
        .map(|(i, &variable)| {
            let x: Vec<f64> = days.iter().map(|d| d.station[i]).collect();
            let y: Vec<f64> = days.iter().map(|d| d.gridmet[i]).collect();
            Ok(VariableComparison {
                variable,
                slope_through_zero: slope_through_zero(variable, month, &x, &y)?,
                axis_range: axis_range(&x, &y),
            })
        })
        .collect::<Result<Vec<_>, ComparisonError>>()?;
    Ok(MonthlyComparison {
        year,
        month,
        days,
        variables,
    })
}

/// Compares a station with its gridMET cell for every month of `year`.
///
/// Months with [`MIN_DAYS_PER_MONTH`] or fewer paired days are skipped. The result is
/// ordered by month.
pub fn compare_year(
    station_days: &[StationDay],
    gridmet_days: &[GridmetDay],
    year: i32,
) -> Result<Vec<MonthlyComparison>, ComparisonError> {
    info!("Processing year: {}", year);
    let mut by_month: Vec<Vec<PairedDay>> = vec![Vec::new(); 12];
    for day in pair_days(station_days, gridmet_days) {
        if day.date.year() == year {
            by_month[day.date.month0() as usize].push(day);
        }
    }

    let mut months = Vec::new();
    for (month0, days) in by_month.into_iter().enumerate() {
        let month = month0 as u32 + 1;
        if days.len() <= MIN_DAYS_PER_MONTH {
            info!(
                "Skipping month {}: {} paired days, need more than {}",
                month,
                days.len(),
                MIN_DAYS_PER_MONTH
            );
            continue;
        }
        months.push(compare_month(year, month, days)?);
    }
    Ok(months)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn station_day(date: NaiveDate, base: f64) -> StationDay {
        StationDay {
            date,
            tmin_c: Some(base),
            tmax_c: Some(base + 15.0),
            tdew_c: Some(base - 4.0),
            rs_wm2: Some(250.0 + base),
            ws_2m_ms: Some(2.0 + base / 10.0),
            vapor_pressure_kpa: Some(1.0 + base / 100.0),
            eto_mm: Some(4.0 + base / 5.0),
            etr_mm: Some(5.0 + base / 5.0),
        }
    }

    // gridMET reads exactly `factor` times the station for everything but Ko.
    fn gridmet_day(date: NaiveDate, base: f64, factor: f64) -> GridmetDay {
        GridmetDay {
            date,
            tmin_c: Some(base * factor),
            tmax_c: Some((base + 15.0) * factor),
            srad_wm2: Some((250.0 + base) * factor),
            u2_ms: Some((2.0 + base / 10.0) * factor),
            ea_kpa: Some((1.0 + base / 100.0) * factor),
            eto_mm: Some((4.0 + base / 5.0) * factor),
            etr_mm: Some((5.0 + base / 5.0) * factor),
        }
    }

    #[test]
    fn test_slope_through_zero_on_proportional_data() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [1.5, 3.0, 4.5, 6.0];
        let m = slope_through_zero(ComparisonVariable::TMin, 1, &x, &y).unwrap();
        assert!((m - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_slope_through_zero_least_squares() {
        // Σxy = 1*1 + 2*3 = 7, Σx² = 5
        let m = slope_through_zero(ComparisonVariable::TMin, 1, &[1.0, 2.0], &[1.0, 3.0]).unwrap();
        assert!((m - 1.4).abs() < 1e-12);
    }

    #[test]
    fn test_slope_through_zero_degenerate() {
        let err = slope_through_zero(ComparisonVariable::WindSpeed, 3, &[0.0, 0.0], &[1.0, 2.0])
            .unwrap_err();
        assert_eq!(
            err,
            ComparisonError::DegenerateRegression {
                variable: "WS 2m",
                month: 3
            }
        );
    }

    #[test]
    fn test_axis_range_truncates_toward_zero() {
        assert_eq!(axis_range(&[-0.5, 4.2], &[1.0, 7.9]), (-2, 10));
        assert_eq!(axis_range(&[3.5], &[5.5]), (1, 8));
    }

    #[test]
    fn test_pair_days_inner_joins_and_drops_incomplete() {
        let station = vec![
            station_day(date(2016, 1, 1), 1.0),
            StationDay {
                rs_wm2: None,
                ..station_day(date(2016, 1, 2), 2.0)
            },
            station_day(date(2016, 1, 3), 3.0),
            station_day(date(2016, 1, 4), 4.0),
        ];
        let gridmet = vec![
            gridmet_day(date(2016, 1, 1), 1.0, 1.0),
            gridmet_day(date(2016, 1, 2), 2.0, 1.0),
            GridmetDay {
                ea_kpa: Some(0.0),
                ..gridmet_day(date(2016, 1, 3), 3.0, 1.0)
            },
        ];

        let paired = pair_days(&station, &gridmet);
        let dates: Vec<NaiveDate> = paired.iter().map(|d| d.date).collect();
        // Jan 2 lacks Rs, Jan 3 has no dew point, Jan 4 has no gridMET row.
        assert_eq!(dates, vec![date(2016, 1, 1)]);
        assert_eq!(paired[0].station[0], 1.0);
        assert_eq!(paired[0].station[2], 4.0);
    }

    #[test]
    fn test_paired_values_follow_variable_order() {
        let paired = pair_days(
            &[station_day(date(2016, 3, 1), 10.0)],
            &[gridmet_day(date(2016, 3, 1), 10.0, 2.0)],
        );
        assert_eq!(paired[0].station.len(), ComparisonVariable::ALL.len());
        for (i, variable) in ComparisonVariable::ALL.iter().enumerate() {
            assert_eq!(
                Some(paired[0].station[i]),
                variable.station_value(&station_day(date(2016, 3, 1), 10.0))
            );
            assert_eq!(
                Some(paired[0].gridmet[i]),
                variable.gridmet_value(&gridmet_day(date(2016, 3, 1), 10.0, 2.0))
            );
        }
    }

    #[test]
    fn test_compare_year_skips_sparse_months() {
        let mut station = Vec::new();
        let mut gridmet = Vec::new();
        // March: 10 days, April: 5 days, May: 6 days, and some days from another year.
        for (month, days) in [(3, 10), (4, 5), (5, 6)] {
            for d in 1..=days {
                let base = d as f64;
                station.push(station_day(date(2016, month, d), base));
                gridmet.push(gridmet_day(date(2016, month, d), base, 1.1));
            }
        }
        for d in 1..=10 {
            station.push(station_day(date(2015, 6, d), d as f64));
            gridmet.push(gridmet_day(date(2015, 6, d), d as f64, 1.1));
        }

        let months = compare_year(&station, &gridmet, 2016).unwrap();
        let month_numbers: Vec<u32> = months.iter().map(|m| m.month).collect();
        assert_eq!(month_numbers, vec![3, 5]);
        assert_eq!(months[0].days.len(), 10);
        assert_eq!(months[0].year, 2016);
        assert_eq!(months[0].variables.len(), 8);

        for comparison in &months[0].variables {
            if comparison.variable == ComparisonVariable::Ko {
                continue;
            }
            assert!(
                (comparison.slope_through_zero - 1.1).abs() < 1e-9,
                "{} slope was {}",
                comparison.variable,
                comparison.slope_through_zero
            );
        }
    }

    #[test]
    fn test_compare_year_without_data_is_empty() {
        let months = compare_year(&[], &[], 2016).unwrap();
        assert!(months.is_empty());
    }
}
