use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComparisonError {
    #[error("Cannot fit slope through zero for {variable} in month {month}: all station values are zero")]
    DegenerateRegression { variable: &'static str, month: u32 },

    #[error("Cannot fit slope through zero for {variable}: station and gridMET series differ in length ({station} vs {gridmet})")]
    LengthMismatch {
        variable: &'static str,
        station: usize,
        gridmet: usize,
    },
}
