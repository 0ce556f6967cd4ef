use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::{fs::File, path::Path};
use uuid::Uuid;

use super::SubmissionService;
use crate::config::AppConfig;
use crate::errors::TuitionHubError;
use crate::models::submissions::requests::SubmissionParams;
use crate::models::submissions::responses::SubmissionReceipt;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::roster::load::{get_or_load_roster, roster_error_code};
use crate::utils::{
    sanitize_file_name, submission_dir, validate_email, validate_magic_bytes,
    validate_path_component,
};

pub async fn handle_upload(
    service: &SubmissionService,
    req: &HttpRequest,
    params: SubmissionParams,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_email(&params.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidEmail, msg)));
    }

    // 先按邮箱定位学生，存储目录使用花名册中的姓名
    let storage = service.get_storage(req);
    let cache = service.get_cache(req);
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

    let entry = match roster.find_by_email(&params.email) {
        Some(entry) => entry.clone(),
        None => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "邮箱不在花名册中，请联系老师核对",
            )));
        }
    };

    if let Err(msg) = validate_path_component(&entry.name) {
        tracing::error!(
            "Roster name '{}' is not usable as a directory: {}",
            entry.name,
            msg
        );
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::FileUploadFailed,
                "花名册中的学生姓名无法用作存储目录",
            )),
        );
    }

    // 获取配置
    let config = AppConfig::get();
    let max_size = config.upload.max_size;
    let allowed_types = &config.upload.allowed_types;

    let date = params.effective_date();
    let target_dir = submission_dir(Path::new(&config.upload.dir), &entry.name, date);

    // 确保目标目录存在（create_dir_all 幂等，目录已存在不报错）
    if let Err(e) = fs::create_dir_all(&target_dir) {
        tracing::error!("{}", TuitionHubError::file_operation(format!("{e}")));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::FileUploadFailed,
                "创建上传目录失败",
            )),
        );
    }

    // 文件相关信息
    let mut original_name = String::new();
    let mut file_size: i64 = 0;
    let mut file_uploaded = false;
    let mut stored_path = String::new();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name == "file" {
            if file_uploaded {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::MultifileUploadNotAllowed,
                    "Only one file can be uploaded at a time",
                )));
            }
            file_uploaded = true;

            // 先获取并清理原始文件名
            let client_name = content_disposition
                .and_then(|cd| cd.get_filename())
                .map(|s| s.to_string())
                .unwrap_or_default();
            original_name = match sanitize_file_name(&client_name) {
                Some(name) => name,
                None => {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileUploadFailed,
                        "Upload is missing a usable file name",
                    )));
                }
            };

            // 提取扩展名并校验
            let extension = Path::new(&original_name)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| format!(".{}", ext.to_lowercase()))
                .unwrap_or_default();

            if !allowed_types.iter().any(|t| t.to_lowercase() == extension) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileTypeNotAllowed,
                    "File type not allowed",
                )));
            }

            // 同名文件直接覆盖，不做版本管理
            let file_path = target_dir.join(&original_name);
            let mut f = match File::create(&file_path) {
                Ok(file) => file,
                Err(e) => {
                    tracing::error!("{}", TuitionHubError::file_operation(format!("{e}")));
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::<()>::error_empty(ErrorCode::FileUploadFailed, "文件创建失败"),
                    ));
                }
            };

            let mut total_size: usize = 0;
            let mut first_chunk = true;
            while let Some(chunk) = field.next().await {
                let data = chunk?;

                // 第一个 chunk 时验证魔术字节
                if first_chunk {
                    first_chunk = false;
                    if !validate_magic_bytes(&data, &extension) {
                        let _ = fs::remove_file(&file_path);
                        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::FileTypeNotAllowed,
                            "文件内容与扩展名不匹配",
                        )));
                    }
                }

                total_size += data.len();
                // 校验大小
                if total_size > max_size {
                    let _ = fs::remove_file(&file_path);
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileSizeExceeded,
                        "File size exceeds the limit",
                    )));
                }
                if let Err(e) = f.write_all(&data) {
                    let _ = fs::remove_file(&file_path);
                    tracing::error!("{}", TuitionHubError::file_operation(format!("{e}")));
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::<()>::error_empty(ErrorCode::FileUploadFailed, "文件写入失败"),
                    ));
                }
            }
            file_size = total_size as i64;
            stored_path = file_path.to_string_lossy().to_string();
        }
    }

    if !file_uploaded {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "No file found in upload payload",
        )));
    }

    let receipt = SubmissionReceipt {
        receipt_id: Uuid::new_v4().to_string(),
        student: entry.name.clone(),
        date,
        file_name: original_name,
        stored_path,
        size: file_size,
        uploaded_at: chrono::Utc::now(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(receipt, "Submission stored successfully")))
}

#[cfg(test)]
mod tests {
    use crate::utils::submission_dir;
    use std::fs;
    use std::io::Write as _;
    use std::path::PathBuf;

    fn temp_root(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tuitionhub-upload-{}-{}", tag, std::process::id()))
    }

    fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_submission_write_and_read_back() {
        let root = temp_root("write");
        let dir = submission_dir(&root, "Asha", date(2024, 5, 1));
        fs::create_dir_all(&dir).unwrap();

        let path = dir.join("page1.jpg");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(b"\xFF\xD8\xFF\xE0jpeg-bytes").unwrap();
        drop(f);

        assert!(path.ends_with("Asha/2024-05-01/page1.jpg"));
        assert_eq!(fs::read(&path).unwrap(), b"\xFF\xD8\xFF\xE0jpeg-bytes");

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_target_dir_creation_is_idempotent() {
        let root = temp_root("idempotent");
        let dir = submission_dir(&root, "Asha", date(2024, 5, 1));

        // 目录已存在时再次创建不应报错
        fs::create_dir_all(&dir).unwrap();
        fs::create_dir_all(&dir).unwrap();

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_same_name_upload_overwrites() {
        let root = temp_root("overwrite");
        let dir = submission_dir(&root, "Asha", date(2024, 5, 1));
        fs::create_dir_all(&dir).unwrap();

        let path = dir.join("page1.jpg");
        fs::write(&path, b"first").unwrap();
        fs::write(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");

        fs::remove_dir_all(&root).unwrap();
    }
}
