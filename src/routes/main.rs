use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::domain::traffic_stop::TrafficStop;
use crate::domain::types::{Gender, StopDurationBucket};
use crate::dto::dashboard::DashboardQuery;
use crate::dto::prediction::PredictionPageData;
use crate::forms::prediction::PoliceLogForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::dashboard::{insight_menu, load_dashboard, resolve_insight};
use crate::services::{ServiceError, prediction as prediction_service};

#[derive(Deserialize)]
pub struct IndexQueryParams {
    pub insight: Option<String>,
}

/// Builds the dashboard context. A database failure is rendered on the page
/// instead of failing the request, so the prediction form stays usable.
fn dashboard_context(
    repo: &DieselRepository,
    server_config: &ServerConfig,
    flash_messages: &IncomingFlashMessages,
    insight: Option<String>,
) -> Context {
    let mut context = base_context(flash_messages, "index");
    context.insert("preview_columns", &TrafficStop::PREVIEW_COLUMNS);
    context.insert("genders", &Gender::ALL.map(Gender::as_str));
    context.insert("durations", &StopDurationBucket::ALL.map(StopDurationBucket::as_str));

    let requested = insight.clone();
    let query = DashboardQuery {
        insight,
        preview_limit: server_config.preview_limit,
    };

    match load_dashboard(repo, query) {
        Ok(data) => {
            let preview_rows: Vec<Vec<String>> =
                data.preview.iter().map(TrafficStop::preview_cells).collect();
            context.insert("preview_rows", &preview_rows);
            context.insert("violation_counts", &data.violation_counts);
            context.insert("insights", &data.insights);
            context.insert("selected_insight", data.selected.slug());
            context.insert("table", &data.table);
        }
        Err(err) => {
            context.insert("db_error", &format!("Database connection failed: {err}"));
            context.insert("insights", &insight_menu());
            context.insert(
                "selected_insight",
                resolve_insight(requested.as_deref()).slug(),
            );
        }
    }

    context
}

#[get("/")]
pub async fn show_index(
    params: web::Query<IndexQueryParams>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = dashboard_context(
        repo.get_ref(),
        server_config.get_ref(),
        &flash_messages,
        params.into_inner().insight,
    );

    render_template(&tera, "main/index.html", &context)
}

#[post("/predict")]
pub async fn predict_stop(
    params: web::Query<IndexQueryParams>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<PoliceLogForm>,
) -> impl Responder {
    let insight = params.into_inner().insight;

    match prediction_service::predict_stop(form, &mut rand::rng()) {
        Ok(PredictionPageData { entry, prediction }) => {
            let mut context = dashboard_context(
                repo.get_ref(),
                server_config.get_ref(),
                &flash_messages,
                insight,
            );
            context.insert("entry", &entry);
            context.insert("prediction", &prediction);

            render_template(&tera, "main/index.html", &context)
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            let selected = resolve_insight(insight.as_deref());
            redirect(&format!("/?insight={}", selected.slug()))
        }
        Err(err) => {
            log::error!("Failed to predict stop outcome: {err}");
            FlashMessage::error("Prediction failed.").send();
            redirect("/")
        }
    }
}
