use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use anyhow::Context;

use crate::domain::{Greeting, GreetingService};
use crate::hal::HAL_JSON;
use crate::routes::GreetingAssembler;

// -----------------------------------------------------------------------------
// handlers

#[tracing::instrument(name = "Greeting the world", skip(req, service))]
pub async fn hello_world_default(
    req: HttpRequest,
    service: web::Data<GreetingService>,
) -> Result<HttpResponse, GreetError> {
    let greeting = service.build(None);
    created(&req, greeting)
}

#[tracing::instrument(
    name = "Greeting by name",
    skip(req, query, service),
    fields(name = tracing::field::Empty)
)]
pub async fn hello_world(
    req: HttpRequest,
    //a bad query string falls back to the default name instead of a 400
    query: Option<web::Query<Vec<(String, String)>>>,
    service: web::Data<GreetingService>,
) -> Result<HttpResponse, GreetError> {
    let name = query.and_then(|q| name_from_query(&q));
    let greeting = service.build(name.as_deref());
    tracing::Span::current().record("name", greeting.name.as_str());
    created(&req, greeting)
}

// -----------------------------------------------------------------------------
// helper functions

fn created(req: &HttpRequest, greeting: Greeting) -> Result<HttpResponse, GreetError> {
    tracing::info!("{}", greeting);

    let assembler = GreetingAssembler::new(base_url(req));
    let model = assembler.to_model(greeting);
    let location = model
        .self_link()
        .context("greeting resource has no self link")?
        .href
        .clone();
    let body = serde_json::to_string(&model).context("failed to serialize greeting")?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .content_type(HAL_JSON)
        .body(body))
}

/// Every `name` value in the query, joined with `,`. `None` when no `name` was sent.
pub fn name_from_query(pairs: &[(String, String)]) -> Option<String> {
    let names: Vec<&str> = pairs
        .iter()
        .filter(|(key, _)| key == "name")
        .map(|(_, value)| value.as_str())
        .collect();
    if names.is_empty() {
        None
    } else {
        Some(names.join(","))
    }
}

//links follow whatever host the client reached us on
fn base_url(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}

// -----------------------------------------------------------------------------
// errors

#[derive(thiserror::Error)]
pub enum GreetError {
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

//default status code is a 500, which is what we want
impl ResponseError for GreetError {}

impl std::fmt::Debug for GreetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by: \n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
