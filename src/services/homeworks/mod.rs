pub mod download;
pub mod status;

use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::homeworks::requests::HomeworkQuery;

pub struct HomeworkService;

impl HomeworkService {
    pub fn new_lazy() -> Self {
        Self
    }

    // Handle homework download
    pub async fn download_homework(&self, query: HomeworkQuery) -> ActixResult<HttpResponse> {
        download::download_homework(self, query).await
    }

    // Handle homework availability check
    pub async fn homework_status(&self, query: HomeworkQuery) -> ActixResult<HttpResponse> {
        status::homework_status(self, query).await
    }
}
