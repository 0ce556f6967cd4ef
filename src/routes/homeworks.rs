use actix_web::{HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::models::homeworks::requests::HomeworkQuery;
use crate::services::HomeworkService;

// 懒加载的全局 HomeworkService 实例
static HOMEWORK_SERVICE: Lazy<HomeworkService> = Lazy::new(HomeworkService::new_lazy);

// 下载指定班级与日期的作业
pub async fn download_homework(query: web::Query<HomeworkQuery>) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.download_homework(query.into_inner()).await
}

// 查询作业是否已发布
pub async fn homework_status(query: web::Query<HomeworkQuery>) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.homework_status(query.into_inner()).await
}

// 配置路由
pub fn configure_homeworks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/homeworks")
            .wrap(middleware::Compress::default())
            .route("/download", web::get().to(download_homework))
            .route("/status", web::get().to(homework_status)),
    );
}
