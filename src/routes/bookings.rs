use crate::handlers::booking::{AppState, start_booking};
use crate::handlers::jobs::{all_jobs, get_job};
use crate::models::booking_config::BookingConfig;
use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::json;
use uuid::Uuid;

#[post("/run")]
async fn run(state: web::Data<AppState>, body: web::Json<BookingConfig>) -> impl Responder {
    match start_booking(state.into_inner(), body.into_inner()).await {
        Ok(id) => HttpResponse::Accepted().json(json!({ "id": id })),
        Err(e) => {
            tracing::error!("Failed to start booking: {:?}", e);
            HttpResponse::BadRequest().json(json!({ "success": false, "error": e.to_string() }))
        }
    }
}

#[get("/all")]
async fn all() -> impl Responder {
    HttpResponse::Ok().json(all_jobs().await)
}

#[get("/{id}")]
async fn status(path: web::Path<Uuid>) -> impl Responder {
    match get_job(path.into_inner()).await {
        Some(job) => HttpResponse::Ok().json(job),
        None => HttpResponse::NotFound().body("No such booking job."),
    }
}

// "/all" is registered before "/{id}" so it is not parsed as an id
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(run).service(all).service(status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::credentials::Credentials;
    use crate::settings::Cli;
    use actix_web::{App, http::StatusCode, test};
    use clap::Parser;

    #[actix_web::test]
    async fn unknown_job_is_not_found() {
        let app = test::init_service(App::new().service(web::scope("/bookings").configure(init))).await;
        let req = test::TestRequest::get()
            .uri(&format!("/bookings/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn listing_jobs_returns_json_array() {
        let app = test::init_service(App::new().service(web::scope("/bookings").configure(init))).await;
        let req = test::TestRequest::get().uri("/bookings/all").to_request();
        let jobs: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(jobs.is_array());
    }

    #[actix_web::test]
    async fn inverted_time_range_is_rejected_before_launching_a_browser() {
        let settings = Cli::try_parse_from(["study_room_booker", "catalog"])
            .unwrap()
            .settings;
        let state = web::Data::new(AppState::new(settings, Credentials::default()));
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/bookings").configure(init)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/bookings/run")
            .set_json(json!({
                "area": 6,
                "room": 17,
                "date": "2025-03-25",
                "start_time": "10:00",
                "end_time": "08:00"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
