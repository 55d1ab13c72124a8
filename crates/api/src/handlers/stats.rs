use crate::{dto::StatsResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, error, instrument};

#[instrument(skip(state), name = "api_get_stats")]
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let uptime = state.started_at.elapsed().as_secs();

    match state.hub.subscriber_count().await {
        Ok(subscribers) => {
            debug!(subscribers, uptime, "Statistics retrieved successfully");
            Json(StatsResponse {
                subscribers,
                uptime,
            })
        }
        Err(e) => {
            error!(error = %e, "Failed to retrieve statistics");
            Json(StatsResponse {
                subscribers: 0,
                uptime,
            })
        }
    }
}
