use actix_web::{web, App, HttpServer, HttpResponse, Result as ActixResult};
use actix_cors::Cors;
use dishx_core::{Error, PreferenceFilter};
use dishx_service::{
    catalog_view, cost_histogram, filter_by, options, similar, CatalogManager, DEFAULT_HISTOGRAM_BINS,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Deserialize)]
struct CostStatsQuery {
    bins: Option<usize>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        manager: Arc<CatalogManager>,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(manager.clone()))
                .configure(configure)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Register every route on an app
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/restaurants", web::get().to(list_restaurants))
        .route("/restaurants/filter", web::post().to(filter_restaurants))
        .route("/restaurants/{name}/similar", web::get().to(similar_restaurants))
        .route("/options", web::get().to(get_options))
        .route("/stats/cost", web::get().to(cost_stats));
}

fn error_response(err: &Error) -> HttpResponse {
    let mut builder = match err {
        Error::NotFound(_) => HttpResponse::NotFound(),
        Error::NotReady => HttpResponse::ServiceUnavailable(),
        Error::InvalidConfig(_) => HttpResponse::BadRequest(),
        _ => HttpResponse::InternalServerError(),
    };
    builder.json(serde_json::json!({
        "error": err.to_string()
    }))
}

async fn list_restaurants(
    manager: web::Data<Arc<CatalogManager>>,
) -> ActixResult<HttpResponse> {
    let handle = match manager.handle() {
        Ok(h) => h,
        Err(e) => return Ok(error_response(&e)),
    };
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": catalog_view(&handle)
    })))
}

async fn filter_restaurants(
    manager: web::Data<Arc<CatalogManager>>,
    req: web::Json<PreferenceFilter>,
) -> ActixResult<HttpResponse> {
    let handle = match manager.handle() {
        Ok(h) => h,
        Err(e) => return Ok(error_response(&e)),
    };
    let matches = filter_by(&handle, &req.into_inner());
    debug!(matches = matches.len(), "filter query");
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": matches
    })))
}

async fn similar_restaurants(
    manager: web::Data<Arc<CatalogManager>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let name = path.into_inner();
    let handle = match manager.handle() {
        Ok(h) => h,
        Err(e) => return Ok(error_response(&e)),
    };
    match similar(&handle, &name) {
        Ok(results) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": results
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn get_options(
    manager: web::Data<Arc<CatalogManager>>,
) -> ActixResult<HttpResponse> {
    match manager.handle() {
        Ok(handle) => Ok(HttpResponse::Ok().json(options(&handle))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn cost_stats(
    manager: web::Data<Arc<CatalogManager>>,
    query: web::Query<CostStatsQuery>,
) -> ActixResult<HttpResponse> {
    let bins = query.bins.unwrap_or(DEFAULT_HISTOGRAM_BINS);
    let result = manager.handle().and_then(|handle| cost_histogram(&handle, bins));
    match result {
        Ok(histogram) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": histogram
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}
