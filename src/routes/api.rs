use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::services::{ServiceError, api as api_service};

#[get("/v1/insights")]
pub async fn api_v1_insights() -> impl Responder {
    HttpResponse::Ok().json(api_service::list_insights())
}

#[get("/v1/insights/{slug}")]
pub async fn api_v1_insight(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::run_insight(repo.get_ref(), &slug) {
        Ok(table) => HttpResponse::Ok().json(table),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to serve insight {slug}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
