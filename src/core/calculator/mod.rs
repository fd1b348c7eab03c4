pub mod balance;
pub mod intervals;
pub mod month;

pub use balance::{calculate_hour_balance, daily_balance};
pub use intervals::{Interval, IntervalExit, WorkedTime, calculate_total_hours_worked, pair_intervals};
pub use month::{month_aggregate, month_daily_balances, time_bank};
