//! Conversion of daily station and gridMET time series into [`StationDay`] and
//! [`GridmetDay`] records.

use crate::tables::csv_io::{float_values, required, string_values};
use crate::tables::error::TableError;
use crate::types::daily::{GridmetDay, StationDay};
use chrono::NaiveDate;
use polars::prelude::DataFrame;

const STATION_TABLE: &str = "station daily";
const GRIDMET_TABLE: &str = "gridMET daily";

pub const DATE: &str = "date";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub const STATION_TMIN: &str = "TMin (C)";
pub const STATION_TMAX: &str = "TMax (C)";
pub const STATION_TDEW: &str = "TDew (C)";
pub const STATION_RS: &str = "Rs (w/m2)";
pub const STATION_WS_2M: &str = "ws_2m (m/s)";
pub const STATION_VAPOR_PRESSURE: &str = "Vapor Pres (kPa)";
pub const STATION_ETO: &str = "Calc_ETo (mm)";
pub const STATION_ETR: &str = "Calc_ETr (mm)";

pub const GRIDMET_TMIN: &str = "tmin_c";
pub const GRIDMET_TMAX: &str = "tmax_c";
pub const GRIDMET_SRAD: &str = "srad_wm2";
pub const GRIDMET_U2: &str = "u2_ms";
pub const GRIDMET_EA: &str = "ea_kpa";
pub const GRIDMET_ETO: &str = "eto_mm";
pub const GRIDMET_ETR: &str = "etr_mm";

fn dates(df: &DataFrame, table: &'static str) -> Result<Vec<NaiveDate>, TableError> {
    string_values(df, table, DATE)?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            let value = required(value, table, DATE, row)?;
            NaiveDate::parse_from_str(&value, DATE_FORMAT).map_err(|source| {
                TableError::InvalidDate {
                    table,
                    row,
                    value,
                    source,
                }
            })
        })
        .collect()
}

/// Builds station days from a frame with a `date` column (`YYYY-MM-DD`) and the
/// station variable columns. Null values stay `None`.
pub fn station_days_from_frame(df: &DataFrame) -> Result<Vec<StationDay>, TableError> {
    let column = |name| float_values(df, STATION_TABLE, name);
    let tmin = column(STATION_TMIN)?;
    let tmax = column(STATION_TMAX)?;
    let tdew = column(STATION_TDEW)?;
    let rs = column(STATION_RS)?;
    let ws = column(STATION_WS_2M)?;
    let ea = column(STATION_VAPOR_PRESSURE)?;
    let eto = column(STATION_ETO)?;
    let etr = column(STATION_ETR)?;

    Ok(dates(df, STATION_TABLE)?
        .into_iter()
        .enumerate()
        .map(|(row, date)| StationDay {
            date,
            tmin_c: tmin[row],
            tmax_c: tmax[row],
            tdew_c: tdew[row],
            rs_wm2: rs[row],
            ws_2m_ms: ws[row],
            vapor_pressure_kpa: ea[row],
            eto_mm: eto[row],
            etr_mm: etr[row],
        })
        .collect())
}

/// Builds gridMET days from a frame with a `date` column (`YYYY-MM-DD`) and the
/// gridMET variable columns. Null values stay `None`.
pub fn gridmet_days_from_frame(df: &DataFrame) -> Result<Vec<GridmetDay>, TableError> {
    let column = |name| float_values(df, GRIDMET_TABLE, name);
    let tmin = column(GRIDMET_TMIN)?;
    let tmax = column(GRIDMET_TMAX)?;
    let srad = column(GRIDMET_SRAD)?;
    let u2 = column(GRIDMET_U2)?;
    let ea = column(GRIDMET_EA)?;
    let eto = column(GRIDMET_ETO)?;
    let etr = column(GRIDMET_ETR)?;

    Ok(dates(df, GRIDMET_TABLE)?
        .into_iter()
        .enumerate()
        .map(|(row, date)| GridmetDay {
            date,
            tmin_c: tmin[row],
            tmax_c: tmax[row],
            srad_wm2: srad[row],
            u2_ms: u2[row],
            ea_kpa: ea[row],
            eto_mm: eto[row],
            etr_mm: etr[row],
        })
        .collect())
}
