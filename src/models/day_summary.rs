use crate::core::calculator::intervals::WorkedTime;
use crate::models::{DailyBalance, Record};

/// Everything the day view shows for one date.
#[derive(Debug, Default, Clone)]
pub struct DaySummary {
    pub date: String,
    /// Punches by minute (stable), then absences in stored order.
    pub records: Vec<Record>,
    pub worked: WorkedTime,
    /// `None` while no configuration is available.
    pub balance: Option<DailyBalance>,
}
