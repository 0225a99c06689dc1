//! The variables compared between station and gridMET daily data, with the
//! source column names and the labels used when plotting them.

use crate::types::daily::{GridmetDay, StationDay};
use std::fmt;

/// A variable present in both the station and gridMET daily series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonVariable {
    /// Minimum air temperature.
    TMin,
    /// Maximum air temperature.
    TMax,
    /// Dew point depression, minimum temperature minus dew point.
    Ko,
    /// Incoming shortwave radiation.
    Rs,
    /// Wind speed at 2 m.
    WindSpeed,
    /// Actual vapor pressure.
    VaporPressure,
    /// ASCE grass reference evapotranspiration.
    ETo,
    /// ASCE alfalfa reference evapotranspiration.
    ETr,
}

impl ComparisonVariable {
    /// Every variable, in plotting order.
    pub const ALL: [ComparisonVariable; 8] = [
        ComparisonVariable::TMin,
        ComparisonVariable::TMax,
        ComparisonVariable::Ko,
        ComparisonVariable::Rs,
        ComparisonVariable::WindSpeed,
        ComparisonVariable::VaporPressure,
        ComparisonVariable::ETo,
        ComparisonVariable::ETr,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ComparisonVariable::TMin => "TMin",
            ComparisonVariable::TMax => "TMax",
            ComparisonVariable::Ko => "Ko",
            ComparisonVariable::Rs => "Rs",
            ComparisonVariable::WindSpeed => "WS 2m",
            ComparisonVariable::VaporPressure => "ea",
            ComparisonVariable::ETo => "ETo",
            ComparisonVariable::ETr => "ETr",
        }
    }

    pub fn units(&self) -> &'static str {
        match self {
            ComparisonVariable::TMin | ComparisonVariable::TMax | ComparisonVariable::Ko => "C",
            ComparisonVariable::Rs => "w/m2",
            ComparisonVariable::WindSpeed => "m/s",
            ComparisonVariable::VaporPressure => "kPa",
            ComparisonVariable::ETo | ComparisonVariable::ETr => "mm",
        }
    }

    /// Name of the column holding this variable in the station comparison data.
    pub fn station_column(&self) -> &'static str {
        match self {
            ComparisonVariable::TMin => "TMin (C)",
            ComparisonVariable::TMax => "TMax (C)",
            ComparisonVariable::Ko => "wx_Ko_c",
            ComparisonVariable::Rs => "Rs (w/m2)",
            ComparisonVariable::WindSpeed => "ws_2m (m/s)",
            ComparisonVariable::VaporPressure => "Vapor Pres (kPa)",
            ComparisonVariable::ETo => "Calc_ETo (mm)",
            ComparisonVariable::ETr => "Calc_ETr (mm)",
        }
    }

    /// Name of the column holding this variable in the gridMET comparison data.
    pub fn gridmet_column(&self) -> &'static str {
        match self {
            ComparisonVariable::TMin => "tmin_c",
            ComparisonVariable::TMax => "tmax_c",
            ComparisonVariable::Ko => "grid_Ko_c",
            ComparisonVariable::Rs => "srad_wm2",
            ComparisonVariable::WindSpeed => "u2_ms",
            ComparisonVariable::VaporPressure => "ea_kpa",
            ComparisonVariable::ETo => "eto_mm",
            ComparisonVariable::ETr => "etr_mm",
        }
    }

    /// Y axis label of the time series plot, e.g. `WS 2m (m/s)`.
    pub fn timeseries_label(&self) -> String {
        format!("{} ({})", self.title(), self.units())
    }

    /// X axis label of the scatter plot.
    pub fn station_label(&self) -> String {
        format!("Station {}", self.timeseries_label())
    }

    /// Y axis label of the scatter plot.
    pub fn gridmet_label(&self) -> String {
        format!("gridMET {}", self.timeseries_label())
    }

    pub fn station_value(&self, day: &StationDay) -> Option<f64> {
        match self {
            ComparisonVariable::TMin => day.tmin_c,
            ComparisonVariable::TMax => day.tmax_c,
            ComparisonVariable::Ko => Some(day.tmin_c? - day.tdew_c?),
            ComparisonVariable::Rs => day.rs_wm2,
            ComparisonVariable::WindSpeed => day.ws_2m_ms,
            ComparisonVariable::VaporPressure => day.vapor_pressure_kpa,
            ComparisonVariable::ETo => day.eto_mm,
            ComparisonVariable::ETr => day.etr_mm,
        }
    }

    pub fn gridmet_value(&self, day: &GridmetDay) -> Option<f64> {
        match self {
            ComparisonVariable::TMin => day.tmin_c,
            ComparisonVariable::TMax => day.tmax_c,
            ComparisonVariable::Ko => Some(day.tmin_c? - dew_point_c(day.ea_kpa?)),
            ComparisonVariable::Rs => day.srad_wm2,
            ComparisonVariable::WindSpeed => day.u2_ms,
            ComparisonVariable::VaporPressure => day.ea_kpa,
            ComparisonVariable::ETo => day.eto_mm,
            ComparisonVariable::ETr => day.etr_mm,
        }
    }
}

impl fmt::Display for ComparisonVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Dew point temperature (C) from actual vapor pressure (kPa), Tetens' equation as
/// given in ASCE standardized reference ET, appendix 2-1.
///
/// Not finite for `ea_kpa <= 0`.
pub fn dew_point_c(ea_kpa: f64) -> f64 {
    let ln_ea = ea_kpa.ln();
    (116.91 + 237.3 * ln_ea) / (16.78 - ln_ea)
}
