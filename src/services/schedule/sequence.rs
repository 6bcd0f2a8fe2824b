use serde::{Deserialize, Serialize};

/// A service picked in the add-booking flow, in selection order. The order
/// is significant: sub-appointments chain in exactly this order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedService {
    pub service_id: String,
    #[serde(default)]
    pub staff_id: Option<String>,
    pub duration_minutes: u32,
    #[serde(default)]
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubAppointment {
    pub service_id: String,
    pub staff_id: Option<String>,
    pub start_minutes: u32,
    pub duration_minutes: u32,
}

/// Chain the selected services into back-to-back sub-appointments: service
/// *i* starts at the booking start plus the summed durations of everything
/// before it.
pub fn sequence(services: &[SelectedService], start_minutes: u32) -> Vec<SubAppointment> {
    let mut elapsed = 0;
    services
        .iter()
        .map(|service| {
            let sub = SubAppointment {
                service_id: service.service_id.clone(),
                staff_id: service.staff_id.clone(),
                start_minutes: start_minutes + elapsed,
                duration_minutes: service.duration_minutes,
            };
            elapsed += service.duration_minutes;
            sub
        })
        .collect()
}

pub fn total_duration(services: &[SelectedService]) -> u32 {
    services.iter().map(|s| s.duration_minutes).sum()
}

pub fn total_price(services: &[SelectedService]) -> i64 {
    services.iter().map(|s| s.price).sum()
}
