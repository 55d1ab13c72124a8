use serde::Serialize;

#[derive(Serialize, Debug, Clone, Default)]
pub struct StatsResponse {
    pub subscribers: usize,
    pub uptime: u64,
}
