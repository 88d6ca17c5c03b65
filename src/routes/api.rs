use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::dto::api::{ErrorResponse, MemberSearchParams};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::member::{search_members, search_members_page, search_members_page_exact};

fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::InvalidPagination(message) => {
            HttpResponse::BadRequest().json(ErrorResponse { error: message })
        }
        err => {
            error!("Failed to search members: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal server error".to_string(),
            })
        }
    }
}

#[get("/v1/members")]
pub async fn api_v1_members(
    params: web::Query<MemberSearchParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match search_members(repo.get_ref(), &params.condition()) {
        Ok(members) => HttpResponse::Ok().json(members),
        Err(err) => error_response(err),
    }
}

#[get("/v1/members/page")]
pub async fn api_v1_members_page(
    params: web::Query<MemberSearchParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let result = params
        .page_request()
        .map_err(ServiceError::from)
        .and_then(|request| search_members_page(repo.get_ref(), &params.condition(), request));

    match result {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err),
    }
}

#[get("/v1/members/page/exact")]
pub async fn api_v1_members_page_exact(
    params: web::Query<MemberSearchParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let result = params
        .page_request()
        .map_err(ServiceError::from)
        .and_then(|request| {
            search_members_page_exact(repo.get_ref(), &params.condition(), request)
        });

    match result {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err),
    }
}
