use crate::{
    error::ImagenError,
    models::{ErrorResponse, GenerateRequest, GenerateResponse, HealthResponse},
    upstream::ImageGenerator,
};
use actix_web::{http::StatusCode, web, HttpResponse};
use uuid::Uuid;

pub async fn generate(
    generator: web::Data<dyn ImageGenerator>,
    body: web::Json<GenerateRequest>,
) -> HttpResponse {
    let prompt = body.prompt.trim();

    if prompt.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Prompt is required",
            "Request body must include a non-empty prompt",
        ));
    }

    let request_id = Uuid::new_v4();
    log::info!("[{}] Generating image for prompt: \"{}\"", request_id, prompt);

    match generator.generate(prompt).await {
        Ok(image_url) => {
            log::info!("[{}] Image generated successfully: {}", request_id, image_url);
            HttpResponse::Ok().json(GenerateResponse { image_url })
        }
        Err(err) => {
            log::error!("[{}] Generation failed: {}", request_id, err);
            error_response(err)
        }
    }
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::ok())
}

/// Map a classified failure to its HTTP status and stable JSON error body.
/// Every mapping is terminal; nothing here retries.
fn error_response(err: ImagenError) -> HttpResponse {
    match err {
        ImagenError::Timeout => HttpResponse::RequestTimeout()
            .json(ErrorResponse::new("Request timeout", "Request timed out.")),
        ImagenError::Unavailable(_) => HttpResponse::ServiceUnavailable().json(ErrorResponse::new(
            "Service unavailable",
            "The image generation service is not responding. Please try again later.",
        )),
        ImagenError::Upstream { status, message } => {
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status)
                .json(ErrorResponse::new("Failed to generate image", message))
        }
        ImagenError::BadResponse => HttpResponse::InternalServerError().json(ErrorResponse::new(
            "No image URL returned",
            "The API response did not contain an image URL",
        )),
        other => HttpResponse::InternalServerError()
            .json(ErrorResponse::new("Internal server error", other.to_string())),
    }
}
