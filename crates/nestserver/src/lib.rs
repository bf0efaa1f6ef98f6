//! HTTP surface for the nested-node extension
//!
//! Two data operations: fetch every stored definition, and persist one.
//! They are exposed as a [`configure`] function so an embedding host mounts
//! them onto its own router; the host's original routes install unaffected.

use actix_web::{get, post, web, HttpResponse, Responder};
use nestcore::{NestError, NodeDefinition};
use nestruntime::DefinitionRegistry;
use serde::Serialize;
use tracing::{error, info};

/// Application state shared across handlers
pub struct AppState {
    pub registry: DefinitionRegistry,
}

/// Error response
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Return every stored definition as a name -> definition object.
///
/// Loads from the store on every request; nothing is cached, so a save is
/// visible to the next read.
#[get("/nested_node_defs")]
async fn get_nested_node_defs(data: web::Data<AppState>) -> impl Responder {
    match data.registry.load_all() {
        Ok(defs) => HttpResponse::Ok().json(defs),
        Err(e) => {
            error!("Failed to load nested node definitions: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

/// Persist one definition document.
#[post("/nested_node_defs")]
async fn save_nested_node_def(
    data: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    let definition = match NodeDefinition::from_document(body.into_inner()) {
        Ok(def) => def,
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    };

    match data.registry.store().save(&definition) {
        Ok(()) => {
            info!("Saved nested node definition: {}", definition.name);
            HttpResponse::Ok().json(serde_json::json!({
                "message": "definition saved"
            }))
        }
        Err(NestError::Definition(e)) => HttpResponse::BadRequest().json(ErrorResponse {
            error: e.to_string(),
        }),
        Err(e) => {
            error!("Failed to save definition {}: {}", definition.name, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

/// Register the definition routes with an externally supplied router.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_nested_node_defs)
        .service(save_nested_node_def);
}
