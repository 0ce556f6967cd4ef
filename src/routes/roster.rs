use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::roster::requests::StudentLookupRequest;
use crate::services::RosterService;

// 懒加载的全局 RosterService 实例
static ROSTER_SERVICE: Lazy<RosterService> = Lazy::new(RosterService::new_lazy);

// 学生登录：按邮箱查询花名册
pub async fn lookup_student(
    req: HttpRequest,
    body: web::Json<StudentLookupRequest>,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE.lookup_student(&req, body.into_inner()).await
}

// 显式刷新花名册缓存
pub async fn reload_roster(req: HttpRequest) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE.reload_roster(&req).await
}

// 配置路由
pub fn configure_roster_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RateLimit::lookup())
            .route("/lookup", web::post().to(lookup_student)),
    );
    cfg.service(
        web::scope("/api/v1/roster")
            .wrap(middlewares::RateLimit::roster_reload())
            .route("/reload", web::post().to(reload_roster)),
    );
}
