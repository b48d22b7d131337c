use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::services::itinerary_coordinator::ItineraryCoordinator;

#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
}

/// Route lookup is total: bad addresses or an unreachable directions API
/// still produce a well-formed (fallback) route set.
pub async fn get_routes(
    coordinator: web::Data<ItineraryCoordinator>,
    body: web::Json<RouteRequest>,
) -> impl Responder {
    let request = body.into_inner();
    let routes = coordinator
        .get_routes(&request.origin, &request.destination)
        .await;

    HttpResponse::Ok().json(routes)
}
