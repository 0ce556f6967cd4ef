use actix_web::{HttpResponse, Result as ActixResult, http::header};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::HomeworkService;
use crate::config::AppConfig;
use crate::errors::TuitionHubError;
use crate::models::homeworks::requests::HomeworkQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::{homework_file_name, homework_file_path, validate_path_component};

pub async fn download_homework(
    _service: &HomeworkService,
    query: HomeworkQuery,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_path_component(&query.class) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidClassLabel, msg)));
    }

    let config = AppConfig::get();
    let date = query.effective_date();
    let file_path = homework_file_path(
        Path::new(&config.homework.dir),
        query.class.trim(),
        date,
        &config.homework.extension,
    );

    // 路径是 (class, date) 的纯函数，存在性单独检查
    if !file_path.exists() {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::HomeworkNotFound,
            format!("{} 班 {} 的作业尚未上传", query.class.trim(), date),
        )));
    }

    let mut file = match File::open(&file_path) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!("{:?}", TuitionHubError::file_operation(format!("{e:?}")));
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "File open failed",
                )),
            );
        }
    };

    let mut buf = Vec::new();
    if file.read_to_end(&mut buf).is_err() {
        tracing::error!("{:?}", TuitionHubError::file_operation("File read failed"));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "File read failed",
            )),
        );
    }

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "application/octet-stream"))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"{}\"",
                homework_file_name(date, &config.homework.extension)
            ),
        ))
        .body(buf))
}
