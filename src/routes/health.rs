use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check() -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let huggingface_result = check_credential("HUGGINGFACEHUB_API_TOKEN", "HuggingFace API token");
    health
        .services
        .insert("huggingface".to_string(), huggingface_result.clone());

    let google_maps_result = check_credential("GOOGLE_MAPS_API_KEY", "Google Maps API key");
    health
        .services
        .insert("google_maps".to_string(), google_maps_result.clone());

    // Degraded means the server is up but aggregation will lean on fallback
    // data until credentials are supplied.
    if huggingface_result.status != "ok" || google_maps_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_credential(var: &str, label: &str) -> ServiceStatus {
    match env::var(var) {
        Ok(value) => {
            let masked = if value.len() > 8 {
                format!("{}***{}", &value[0..4], &value[value.len() - 4..])
            } else {
                "***".to_string()
            };

            ServiceStatus {
                status: "ok".to_string(),
                details: Some(format!("{} configured ({})", label, masked)),
            }
        }
        Err(_) => ServiceStatus {
            status: "error".to_string(),
            details: Some(format!("{} not configured", var)),
        },
    }
}
