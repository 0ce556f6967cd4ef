pub mod load;
pub mod lookup;
pub mod reload;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::models::roster::requests::StudentLookupRequest;
use crate::storage::RosterStore;

pub struct RosterService {
    storage: Option<Arc<dyn RosterStore>>,
}

impl RosterService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn RosterStore> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn RosterStore>>>()
                .expect("Roster store not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_cache(&self, request: &HttpRequest) -> Arc<dyn ObjectCache> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
            .expect("Object cache not found in app data")
            .get_ref()
            .clone()
    }

    // Handle student lookup by email
    pub async fn lookup_student(
        &self,
        request: &HttpRequest,
        body: StudentLookupRequest,
    ) -> ActixResult<HttpResponse> {
        lookup::lookup_student(self, request, body).await
    }

    // Handle explicit roster reload
    pub async fn reload_roster(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        reload::reload_roster(self, request).await
    }
}
