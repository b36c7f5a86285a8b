//! REST API for vecmat.
//!
//! Provides a stateless HTTP server with JSON endpoints for the vector and
//! matrix operations. Every endpoint is independent: operands arrive in the
//! request body, the result (or an `error` message) comes back in the
//! response body, and nothing is kept between requests.
//!
//! ## Endpoints
//!
//! - `POST /unit_vector` - Normalize a vector to unit length
//! - `POST /angle_between` - Angle between two vectors, in degrees
//! - `POST /orthogonality` - Orthogonality check plus the dot product
//! - `POST /parallelism` - Parallelism check plus the cross product
//! - `POST /linear_combination` - Weighted sum of a sequence of vectors
//! - `POST /solve_system` - Solve the linear system A x = b
//! - `POST /matrix_transpose` - Transpose a matrix
//! - `POST /matrix_multiply` - Multiply two matrices
//!
//! ## Usage
//!
//! ```rust,no_run
//! use actix_web::{App, HttpServer};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     HttpServer::new(|| App::new().configure(vecmat::server::config))
//!         .bind("0.0.0.0:7878")?
//!         .run()
//!         .await
//! }
//! ```

use actix_web::{web, HttpResponse, Responder};
use serde::{Serialize, Deserialize};
use crate::ops;
use crate::ops::OpError;


// --- Request structs ---

#[derive(Deserialize)]
struct VectorRequest {
    vector: Vec<f64>,
}

#[derive(Deserialize)]
struct VectorPairRequest {
    v1: Vec<f64>,
    v2: Vec<f64>,
}

#[derive(Deserialize)]
struct LinearCombinationRequest {
    vectors: Vec<Vec<f64>>,
    coefficients: Vec<f64>,
}

#[derive(Deserialize)]
struct SolveSystemRequest {
    #[serde(rename = "A")]
    a: Vec<Vec<f64>>,
    b: Vec<f64>,
}

#[derive(Deserialize)]
struct MatrixRequest {
    matrix: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct MatrixPairRequest {
    m1: Vec<Vec<f64>>,
    m2: Vec<Vec<f64>>,
}

// --- Response structs ---

#[derive(Serialize)]
struct UnitVectorResponse {
    unit_vector: Vec<f64>,
}

#[derive(Serialize)]
struct AngleResponse {
    angle: f64,
}

#[derive(Serialize)]
struct OrthogonalityResponse {
    orthogonal: bool,
    dot_product: f64,
}

#[derive(Serialize)]
struct ParallelismResponse {
    parallel: bool,
    cross_product: Vec<f64>,
}

#[derive(Serialize)]
struct LinearCombinationResponse {
    result: Vec<f64>,
}

#[derive(Serialize)]
struct SolveSystemResponse {
    solution: Vec<f64>,
}

#[derive(Serialize)]
struct TransposeResponse {
    transpose: Vec<Vec<f64>>,
}

#[derive(Serialize)]
struct MultiplyResponse {
    product: Vec<Vec<f64>>,
}


/// Operation failures answer 200 with a single `error` field; clients
/// branch on its presence rather than on the status code
fn error_body(e: OpError) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"error": e.to_string()}))
}

// --- Handlers ---

async fn unit_vector_handler(body: web::Json<VectorRequest>) -> impl Responder {
    match ops::unit_vector(&body.vector) {
        Ok(unit_vector) => HttpResponse::Ok().json(UnitVectorResponse { unit_vector }),
        Err(e) => error_body(e),
    }
}

async fn angle_between_handler(body: web::Json<VectorPairRequest>) -> impl Responder {
    match ops::angle_between(&body.v1, &body.v2) {
        Ok(angle) => HttpResponse::Ok().json(AngleResponse { angle }),
        Err(e) => error_body(e),
    }
}

async fn orthogonality_handler(body: web::Json<VectorPairRequest>) -> impl Responder {
    match ops::orthogonality(&body.v1, &body.v2) {
        Ok((orthogonal, dot_product)) => HttpResponse::Ok().json(OrthogonalityResponse {
            orthogonal,
            dot_product,
        }),
        Err(e) => error_body(e),
    }
}

async fn parallelism_handler(body: web::Json<VectorPairRequest>) -> impl Responder {
    match ops::parallelism(&body.v1, &body.v2) {
        Ok((parallel, cross_product)) => HttpResponse::Ok().json(ParallelismResponse {
            parallel,
            cross_product,
        }),
        Err(e) => error_body(e),
    }
}

async fn linear_combination_handler(body: web::Json<LinearCombinationRequest>) -> impl Responder {
    match ops::linear_combination(&body.vectors, &body.coefficients) {
        Ok(result) => HttpResponse::Ok().json(LinearCombinationResponse { result }),
        Err(e) => error_body(e),
    }
}

async fn solve_system_handler(body: web::Json<SolveSystemRequest>) -> impl Responder {
    match ops::solve_system(&body.a, &body.b) {
        Ok(solution) => HttpResponse::Ok().json(SolveSystemResponse { solution }),
        Err(e) => error_body(e),
    }
}

async fn matrix_transpose_handler(body: web::Json<MatrixRequest>) -> impl Responder {
    match ops::matrix_transpose(&body.matrix) {
        Ok(transpose) => HttpResponse::Ok().json(TransposeResponse { transpose }),
        Err(e) => error_body(e),
    }
}

async fn matrix_multiply_handler(body: web::Json<MatrixPairRequest>) -> impl Responder {
    match ops::matrix_multiply(&body.m1, &body.m2) {
        Ok(product) => HttpResponse::Ok().json(MultiplyResponse { product }),
        Err(e) => error_body(e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/unit_vector").route(web::post().to(unit_vector_handler)))
       .service(web::resource("/angle_between").route(web::post().to(angle_between_handler)))
       .service(web::resource("/orthogonality").route(web::post().to(orthogonality_handler)))
       .service(web::resource("/parallelism").route(web::post().to(parallelism_handler)))
       .service(web::resource("/linear_combination").route(web::post().to(linear_combination_handler)))
       .service(web::resource("/solve_system").route(web::post().to(solve_system_handler)))
       .service(web::resource("/matrix_transpose").route(web::post().to(matrix_transpose_handler)))
       .service(web::resource("/matrix_multiply").route(web::post().to(matrix_multiply_handler)));
}
