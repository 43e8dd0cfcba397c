//! # Endpoints de Cálculo
//! src/handlers/compute.rs
//!
//! - `calculate-next?num=N` → `N+1`
//! - `calculate-area?height=H&width=W` → área del triángulo `H*W/2`
//!
//! Cualquier parámetro ausente o no entero termina en 400.

use crate::http::{QueryParams, Response, StatusCode};
use crate::router::ComputeKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("Missing required parameter: {0}")]
    Missing(&'static str),

    #[error("Parameter '{name}' is not an integer: {value}")]
    NotAnInteger { name: &'static str, value: String },

    #[error("Result does not fit in a 64-bit integer")]
    Overflow,
}

/// Despacha al endpoint de cálculo correspondiente
pub fn handle(kind: ComputeKind, params: &QueryParams) -> Response {
    match kind {
        ComputeKind::Next => calculate_next(params),
        ComputeKind::Area => calculate_area(params),
    }
}

/// Handler para /calculate-next?num=N
pub fn calculate_next(params: &QueryParams) -> Response {
    let result = integer_param(params, "num")
        .and_then(|num| num.checked_add(1).ok_or(ParamError::Overflow));

    respond(result.map(|next| next.to_string()))
}

/// Handler para /calculate-area?height=H&width=W
///
/// La división es real: `height=3&width=5` da `7.5`.
pub fn calculate_area(params: &QueryParams) -> Response {
    let result = integer_param(params, "height").and_then(|height| {
        let width = integer_param(params, "width")?;
        Ok(triangle_area(height, width))
    });

    respond(result.map(format_real))
}

fn triangle_area(height: i64, width: i64) -> f64 {
    (height as i128 * width as i128) as f64 / 2.0
}

/// Formato de número real con al menos un decimal (`25.0`, `7.5`)
fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Lee el primer valor de `name` como entero (admite espacios y signo)
fn integer_param(params: &QueryParams, name: &'static str) -> Result<i64, ParamError> {
    let raw = params.first(name).ok_or(ParamError::Missing(name))?;
    raw.trim().parse().map_err(|_| ParamError::NotAnInteger {
        name,
        value: raw.to_string(),
    })
}

fn respond(result: Result<String, ParamError>) -> Response {
    match result {
        Ok(body) => Response::plain(&body),
        Err(e) => {
            log::warn!("{}", e);
            Response::error(StatusCode::BadRequest, "Bad Request")
        }
    }
}
