use actix_web::{HttpResponse, Result as ActixResult};
use std::path::Path;

use super::HomeworkService;
use crate::config::AppConfig;
use crate::models::homeworks::requests::HomeworkQuery;
use crate::models::homeworks::responses::HomeworkStatusResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::{homework_file_name, homework_file_path, validate_path_component};

/// 检查指定班级与日期的作业是否已发布
///
/// 供前端在不触发下载的情况下渲染「暂无作业」提示
pub async fn homework_status(
    _service: &HomeworkService,
    query: HomeworkQuery,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_path_component(&query.class) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidClassLabel, msg)));
    }

    let config = AppConfig::get();
    let date = query.effective_date();
    let class_name = query.class.trim().to_string();
    let file_path = homework_file_path(
        Path::new(&config.homework.dir),
        &class_name,
        date,
        &config.homework.extension,
    );

    let available = file_path.exists();
    let response = HomeworkStatusResponse {
        class_name,
        date,
        available,
        file_name: available.then(|| homework_file_name(date, &config.homework.extension)),
    };

    let message = if available {
        "Homework available"
    } else {
        "Homework not yet uploaded"
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, message)))
}
