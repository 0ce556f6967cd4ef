use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RosterService;
use super::load::{get_or_load_roster, roster_error_code};
use crate::models::roster::requests::StudentLookupRequest;
use crate::models::roster::responses::StudentProfile;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate_email;

pub async fn lookup_student(
    service: &RosterService,
    request: &HttpRequest,
    body: StudentLookupRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_email(&body.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidEmail, msg)));
    }

    let storage = service.get_storage(request);
    let cache = service.get_cache(request);

    let roster = match get_or_load_roster(&storage, &cache).await {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("{}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    roster_error_code(&e),
                    "花名册暂不可用，请稍后再试",
                )),
            );
        }
    };

    // 大小写不敏感精确匹配，重复邮箱时第一条记录生效
    match roster.find_by_email(&body.email) {
        Some(entry) => {
            let profile = StudentProfile {
                email: entry.email.clone(),
                name: entry.name.clone(),
                class_name: entry.class_name.clone(),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(profile, "Student record found")))
        }
        None => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "邮箱不在花名册中，请联系老师核对",
        ))),
    }
}
