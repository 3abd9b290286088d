use chrono::{DateTime, Utc};

/// 进程启动时间，作为 app_data 注入
#[derive(Debug, Clone, Copy)]
pub struct AppStartTime {
    pub start_datetime: DateTime<Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.start_datetime).num_seconds().max(0)
    }
}
