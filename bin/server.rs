// POS Navigation Shell - Web Server
// REST API exposing resolved navigation to the rendering layer

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use posnav::{
    catalog_for, group_order_for, BusinessType, ConfigValidator, Destination,
    NavigationEntry, NavigationResolver, PermissionTable, ResolvedNavigation, Role,
};

/// Shared application state
///
/// The resolver reads only immutable tables and returns a fresh value per
/// call, so it is shared without locking.
#[derive(Clone)]
struct AppState {
    resolver: Arc<NavigationResolver>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    fn err(data: T, error: String) -> Self {
        Self {
            success: false,
            data,
            error: Some(error),
        }
    }
}

/// Navigation response with the inputs echoed back
#[derive(Serialize)]
struct NavigationResponse {
    business: &'static str,
    role: &'static str,
    navigation: ResolvedNavigation,
}

/// Catalog response: the vertical's raw table, before any permission filter
#[derive(Serialize)]
struct CatalogResponse {
    business: &'static str,
    group_order: Vec<&'static str>,
    entries: Vec<NavigationEntry>,
}

#[derive(Serialize)]
struct RoleResponse {
    name: &'static str,
    superuser: bool,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/navigation/:business/:role - Resolved navigation for one user
async fn get_navigation(
    State(state): State<AppState>,
    Path((business, role)): Path<(String, String)>,
) -> impl IntoResponse {
    // Decode URL-encoded segments ("Non-Teaching" arrives encoded)
    let business = urlencoding::decode(&business)
        .unwrap_or_else(|_| business.clone().into())
        .into_owned();
    let role_raw = urlencoding::decode(&role)
        .unwrap_or_else(|_| role.clone().into())
        .into_owned();

    // Unmapped business types fall back to General by policy;
    // an unknown role is a client error.
    let business = BusinessType::from_param(&business);
    let role: Role = match role_raw.parse() {
        Ok(role) => role,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::err((), e.to_string())),
            )
                .into_response()
        }
    };

    let navigation = state.resolver.resolve(business, role);
    let response = NavigationResponse {
        business: business.as_str(),
        role: role.as_str(),
        navigation,
    };

    (StatusCode::OK, Json(ApiResponse::ok(response))).into_response()
}

/// GET /api/catalog/:business - Raw catalog and group order for a vertical
async fn get_catalog(Path(business): Path<String>) -> impl IntoResponse {
    let business = urlencoding::decode(&business)
        .unwrap_or_else(|_| business.clone().into())
        .into_owned();

    let business = BusinessType::from_param(&business);
    let response = CatalogResponse {
        business: business.as_str(),
        group_order: group_order_for(business).to_vec(),
        entries: catalog_for(business).to_vec(),
    };

    (StatusCode::OK, Json(ApiResponse::ok(response))).into_response()
}

/// GET /api/roles - All roles
async fn get_roles() -> impl IntoResponse {
    let roles: Vec<RoleResponse> = Role::ALL
        .iter()
        .map(|role| RoleResponse {
            name: role.as_str(),
            superuser: role.is_superuser(),
        })
        .collect();

    Json(ApiResponse::ok(roles))
}

/// GET /api/businesses - All business types
async fn get_businesses() -> impl IntoResponse {
    let businesses: Vec<&'static str> =
        BusinessType::ALL.iter().map(|b| b.as_str()).collect();

    Json(ApiResponse::ok(businesses))
}

/// GET /api/destinations - Every navigable screen
async fn get_destinations() -> impl IntoResponse {
    Json(ApiResponse::ok(destination_identifiers()))
}

fn destination_identifiers() -> Vec<&'static str> {
    Destination::ALL.iter().map(|d| d.as_str()).collect()
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🌐 POS Navigation Shell - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Refuse to serve a defective configuration
    let table = PermissionTable::new();
    if let Err(errors) = ConfigValidator::new(&table).validate_all() {
        for error in &errors {
            eprintln!("❌ {}", error);
        }
        eprintln!("   Fix the navigation tables and restart.");
        std::process::exit(1);
    }
    println!("✓ Configuration audit passed");

    // Create shared state
    let state = AppState {
        resolver: Arc::new(NavigationResolver::with_permissions(table)),
    };

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/navigation/:business/:role", get(get_navigation))
        .route("/catalog/:business", get(get_catalog))
        .route("/roles", get(get_roles))
        .route("/businesses", get(get_businesses))
        .route("/destinations", get(get_destinations))
        .with_state(state.clone());

    // Build main router
    let app = Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive());

    // Start server
    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:3000");
    println!("   Try: http://localhost:3000/api/navigation/lpg-station/attendant");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_listing_covers_the_full_enumeration() {
        let ids = destination_identifiers();
        assert_eq!(ids.len(), Destination::ALL.len());
        assert!(ids.contains(&"point-of-sale"));
        assert!(ids.contains(&"change-password"));
    }
}
