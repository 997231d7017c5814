mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚌 Bus Booking Platform - API de administración");
    info!("===============================================");

    let env_config = EnvironmentConfig::from_env()?;

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = database::run_migrations(&pool).await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }
    info!("✅ Migraciones aplicadas");

    // CORS: permisivo en desarrollo, orígenes explícitos en producción
    let cors = if env_config.is_development() || env_config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&env_config.cors_origins)
    };

    // Crear router de la API
    let app_state = AppState::new(pool, env_config.clone());

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .nest("/api/cities", routes::city_routes::create_city_router())
        .nest(
            "/api/routes",
            routes::route_routes::create_route_router(app_state.clone()),
        )
        .nest(
            "/api/trips",
            routes::trip_routes::create_trip_router(app_state.clone()),
        )
        .nest("/api/fares", routes::trip_routes::create_fare_router())
        .nest(
            "/api/companies",
            routes::company_routes::create_company_router(app_state.clone()),
        )
        .nest(
            "/api/bookings",
            routes::booking_routes::create_booking_router(app_state.clone()),
        )
        .nest(
            "/api/stations",
            routes::reference_routes::create_station_router(),
        )
        .nest(
            "/api/transport-types",
            routes::reference_routes::create_transport_type_router(),
        )
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", env_config.host, env_config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔑 Auth:");
    info!("   POST /api/auth/login - Login del panel");
    info!("🏙  Ciudades:");
    info!("   GET  /api/cities - Listar ciudades");
    info!("   GET  /api/cities/match - Autocompletado (alias árabe/inglés)");
    info!("🛣  Rutas:");
    info!("   GET  /api/routes - Listar rutas");
    info!("   POST /api/routes - Resolver o crear ruta de un par de ciudades");
    info!("🚌 Viajes:");
    info!("   GET    /api/trips - Listado admin con filtros");
    info!("   GET    /api/trips/export - Export CSV del listado filtrado");
    info!("   GET    /api/trips/:id - Detalle con ruta y tarifa");
    info!("   POST   /api/trips - Crear viaje (+ tarifa)");
    info!("   PATCH  /api/trips/:id - Actualizar viaje");
    info!("   PATCH  /api/trips/:id/deactivate - Desactivar viaje");
    info!("   DELETE /api/trips/:id - Borrado permanente");
    info!("   GET    /api/fares - Tarifas de un viaje");
    info!("🏢 Empresas:");
    info!("   GET/POST /api/companies - Listar / crear");
    info!("   GET/PUT/DELETE /api/companies/:id - Detalle / editar / baja");
    info!("🎫 Reservas:");
    info!("   GET   /api/bookings - Listado admin");
    info!("   PATCH /api/bookings/:id/status - Cambiar estado");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de health check
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "bus-booking",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
