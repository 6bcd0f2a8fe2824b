use serde::{Deserialize, Serialize};

/// Catalog entry for a bookable service. `price` is in minor currency units.
/// An empty `staff_ids` means any staff member can perform it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(alias = "duration", alias = "durationMinutes")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub price: i64,
    #[serde(default, alias = "staffIds")]
    pub staff_ids: Vec<String>,
}

impl Service {
    pub fn performable_by(&self, staff_id: &str) -> bool {
        self.staff_ids.is_empty() || self.staff_ids.iter().any(|id| id == staff_id)
    }
}
