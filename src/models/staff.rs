use serde::{Deserialize, Serialize};

/// One working day in a staff member's week. `day` counts from Sunday = 0,
/// the convention of the staff endpoint (branch opening hours count from
/// Monday — the resolvers convert, nothing else should).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHoursEntry {
    pub day: u8,
    #[serde(alias = "startTime")]
    pub start_time: String,
    #[serde(alias = "endTime")]
    pub end_time: String,
    #[serde(default = "default_is_working", alias = "isWorking")]
    pub is_working: bool,
}

fn default_is_working() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "workingHours")]
    pub working_hours: Vec<WorkingHoursEntry>,
}
