//! Root endpoint serving static service metadata.

use actix_web::{HttpResponse, get};
use serde::Serialize;
use utoipa::ToSchema;

/// Static service description returned at `/`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub nombre: &'static str,
    pub version: &'static str,
    pub descripcion: &'static str,
    pub librerias: &'static [&'static str],
}

const DESCRIPTION: &str = "API que genera datos aleatorios útiles para pruebas, simulaciones y \
     desarrollo: números, lanzamientos de moneda, selecciones de listas, coordenadas, fechas, \
     contraseñas, colores hexadecimales y más.";

const LIBRARIES: &[&str] = &[
    "actix-web",
    "rand",
    "chrono",
    "serde",
    "utoipa",
    "tracing",
];

/// Service metadata: name, version, and dependency list.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Static service metadata", body = ServiceInfo)
    ),
    tags = ["info"]
)]
#[get("/")]
pub async fn service_info() -> HttpResponse {
    HttpResponse::Ok().json(ServiceInfo {
        nombre: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        descripcion: DESCRIPTION,
        librerias: LIBRARIES,
    })
}
