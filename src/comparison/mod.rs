pub mod daily_comparison;
pub mod error;
pub mod variable;
