use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::query::DestinationQuery;
use crate::services::itinerary_coordinator::ItineraryCoordinator;

pub async fn generate(
    coordinator: web::Data<ItineraryCoordinator>,
    body: web::Json<DestinationQuery>,
) -> impl Responder {
    let query = body.into_inner();

    if query.destination.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "destination must not be empty"}));
    }
    if query.days == 0 {
        return HttpResponse::BadRequest().json(json!({"error": "days must be at least 1"}));
    }

    let itinerary = coordinator.generate_itinerary(&query).await;
    HttpResponse::Ok().json(itinerary)
}
