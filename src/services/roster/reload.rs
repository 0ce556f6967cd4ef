use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RosterService;
use super::load::{force_reload_roster, roster_error_code};
use crate::models::roster::responses::RosterReloadResponse;
use crate::models::ApiResponse;

pub async fn reload_roster(
    service: &RosterService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);

    match force_reload_roster(&storage, &cache).await {
        Ok(roster) => {
            let response = RosterReloadResponse {
                total: roster.len(),
                loaded_at: chrono::Utc::now(),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Roster reloaded")))
        }
        Err(e) => {
            tracing::error!("Roster reload failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    roster_error_code(&e),
                    format!("Roster reload failed: {e}"),
                )),
            )
        }
    }
}
