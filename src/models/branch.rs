use serde::{Deserialize, Serialize};

/// One line of a branch's weekly opening-hours table. `day` is either a
/// single day name ("Monday", "tue") or an inclusive range ("Monday - Friday",
/// "sat to sun"); `from`/`to` are wall-clock strings like "9:00 am".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningHoursEntry {
    pub day: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "openingHours")]
    pub opening_hours: Vec<OpeningHoursEntry>,
}
