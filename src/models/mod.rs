pub mod balance;
pub mod balance_config;
pub mod day_summary;
pub mod record;
pub mod record_type;

pub use balance::{DailyBalance, DayBalance, MonthlyAggregate, TimeBank};
pub use balance_config::BalanceConfig;
pub use day_summary::DaySummary;
pub use record::Record;
pub use record_type::RecordType;
