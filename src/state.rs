use crate::config::AppConfig;
use crate::services::platform::PlatformApi;
use crate::services::roster::ScheduleCache;

pub struct AppState {
    pub config: AppConfig,
    pub platform: Box<dyn PlatformApi>,
    pub schedule: ScheduleCache,
}
