use actix_web::{get, HttpResponse, Responder};
use email_address::EmailAddress;
use serde::Serialize;

use crate::content::adapter::outgoing::SITE_CONTENT;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    email: &'static str,
    routes: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - Touches no content
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Forces the registry build and runs the content sanity checks
#[get("/ready")]
pub async fn readiness() -> impl Responder {
    let site = &*SITE_CONTENT;

    let email_status = if EmailAddress::is_valid(&site.person.email) {
        "ok"
    } else {
        "unhealthy"
    };

    let routes_status = if site
        .section_paths()
        .iter()
        .all(|path| path.starts_with('/'))
    {
        "ok"
    } else {
        "unhealthy"
    };

    let overall_status = if email_status == "ok" && routes_status == "ok" {
        "ok"
    } else {
        "unhealthy"
    };

    if overall_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            email: email_status,
            routes: routes_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            email: email_status,
            routes: routes_status,
        })
    }
}
