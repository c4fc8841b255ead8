use common::{SimulateRequest, SimulationResponse};

use crate::api_client;

/// Run a what-if simulation on the remote model.
pub async fn run_simulation(request: &SimulateRequest) -> Result<SimulationResponse, String> {
    log::debug!(
        "Running remote simulation for {} with {} overrides",
        request.commodity,
        request.feature_overrides.len()
    );
    let result = api_client::post::<SimulationResponse, _>("/simulate", request).await;
    match &result {
        Ok(resp) => log::info!(
            "Remote simulation: {} -> {} ({} impacts)",
            resp.original_forecast,
            resp.simulated_forecast,
            resp.feature_impacts.len()
        ),
        Err(e) => log::warn!("Remote simulation failed: {}", e),
    }
    result
}
