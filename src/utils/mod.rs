pub mod file_magic;
pub mod parameter_error_handler;
pub mod paths;
pub mod validate;

pub use file_magic::validate_magic_bytes;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use paths::{homework_file_name, homework_file_path, sanitize_file_name, submission_dir};
pub use validate::{validate_email, validate_path_component};
