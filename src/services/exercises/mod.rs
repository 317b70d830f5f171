pub mod create;
pub mod delete;
pub mod detail;
pub mod import;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::exercises::requests::{
    CreateExerciseRequest, ImportExerciseRequest, UpdateExerciseRequest,
};
use crate::storage::Storage;

pub struct ExerciseService {
    storage: Option<Arc<dyn Storage>>,
}

impl ExerciseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_exercise(
        &self,
        request: &HttpRequest,
        lesson_id: i64,
        created_by: i64,
        req: CreateExerciseRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_exercise(self, request, lesson_id, created_by, req).await
    }

    pub async fn import_exercise(
        &self,
        request: &HttpRequest,
        lesson_id: i64,
        created_by: i64,
        req: ImportExerciseRequest,
    ) -> ActixResult<HttpResponse> {
        import::import_exercise(self, request, lesson_id, created_by, req).await
    }

    pub async fn get_exercise(
        &self,
        request: &HttpRequest,
        exercise_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_exercise(self, request, exercise_id).await
    }

    pub async fn list_exercises(
        &self,
        request: &HttpRequest,
        lesson_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_exercises(self, request, lesson_id).await
    }

    pub async fn update_exercise(
        &self,
        request: &HttpRequest,
        exercise_id: i64,
        req: UpdateExerciseRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_exercise(self, request, exercise_id, req).await
    }

    pub async fn delete_exercise(
        &self,
        request: &HttpRequest,
        exercise_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_exercise(self, request, exercise_id).await
    }
}
