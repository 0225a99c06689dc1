//! Daily observation records compared between a station and its gridMET cell.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of QA/QC'd climate station data. Any value may be missing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct StationDay {
    pub date: NaiveDate,
    pub tmin_c: Option<f64>,
    pub tmax_c: Option<f64>,
    pub tdew_c: Option<f64>,
    pub rs_wm2: Option<f64>,
    pub ws_2m_ms: Option<f64>,
    pub vapor_pressure_kpa: Option<f64>,
    pub eto_mm: Option<f64>,
    pub etr_mm: Option<f64>,
}

/// One day of gridMET data for a single cell. Any value may be missing.
///
/// gridMET has no dew point; it is derived from `ea_kpa` when needed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct GridmetDay {
    pub date: NaiveDate,
    pub tmin_c: Option<f64>,
    pub tmax_c: Option<f64>,
    pub srad_wm2: Option<f64>,
    pub u2_ms: Option<f64>,
    pub ea_kpa: Option<f64>,
    pub eto_mm: Option<f64>,
    pub etr_mm: Option<f64>,
}
