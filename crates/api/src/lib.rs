//! # Scheduler API
//!
//! The API crate provides the web server for the scheduler. It exposes the
//! availability and booking endpoints and wires them to the calendar and
//! notification providers.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Provide cross-cutting concerns like validation and error handling
//! - **Config**: Handle environment and application configuration
//!
//! The providers sit behind traits from `scheduler-integrations`, so a real
//! calendar backend can replace the fixture one without touching this crate.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for validation and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, header},
};
use eyre::Result;
use scheduler_integrations::{
    CalendarProvider, FixtureCalendar, FixtureMailer, NotificationProvider,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{Level, Span, debug, info, info_span};
use tracing_subscriber::FmtSubscriber;

use crate::config::AppConfig;

/// Shared application state that is accessible to all request handlers
///
/// Everything in here is read-only; handlers never coordinate through it.
pub struct ApiState {
    /// Configuration resolved at startup
    pub config: Arc<AppConfig>,
    /// Source of free slots and sink for bookings
    pub calendar: Arc<dyn CalendarProvider>,
    /// Mailer used for booking notifications
    pub notifier: Arc<dyn NotificationProvider>,
}

impl ApiState {
    pub fn new(
        config: Arc<AppConfig>,
        calendar: Arc<dyn CalendarProvider>,
        notifier: Arc<dyn NotificationProvider>,
    ) -> Self {
        Self {
            config,
            calendar,
            notifier,
        }
    }

    /// State backed by the fixture calendar and mailer
    pub fn with_fixtures(config: Arc<AppConfig>) -> Self {
        Self::new(
            config,
            Arc::new(FixtureCalendar::new()),
            Arc::new(FixtureMailer::new()),
        )
    }
}

/// Builds the application router with all routes and middleware
///
/// # Example
///
/// ```rust,ignore
/// let state = Arc::new(ApiState::with_fixtures(Arc::new(config)));
/// let app = scheduler_api::app(state);
/// ```
pub fn app(state: Arc<ApiState>) -> Router {
    let config = state.config.clone();

    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot listing endpoints
        .merge(routes::availability::routes())
        // Booking endpoints
        .merge(routes::booking::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = config.cors_origins() {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(origins.to_vec())
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Request tracing and timeout
    let app_name = config.app_name().to_string();
    app.layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(move |request: &Request<Body>| request_span(&app_name, request)),
            )
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout()))),
    )
}

/// Root span of one HTTP request, named after the running application
fn request_span(app_name: &str, request: &Request<Body>) -> Span {
    info_span!(
        "http.request",
        service.name = %app_name,
        http.method = %request.method(),
        http.uri = %request.uri(),
    )
}

/// Installs the global tracing subscriber at the given level
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Starts the API server with the provided state
///
/// Sets up logging at the configured level, binds the configured address and
/// serves until the process is stopped.
///
/// # Example
///
/// ```rust,ignore
/// let config = Arc::new(AppConfig::from_env()?);
/// start_server(ApiState::with_fixtures(config)).await?;
/// ```
pub async fn start_server(state: ApiState) -> Result<()> {
    let config = state.config.clone();

    init_tracing(config.log_level())?;
    info!("Starting {} v{}", config.app_name(), config.version());
    info!("Environment: {}", config.environment());
    debug!("Resolved configuration: {:?}", config);

    let app = app(Arc::new(state));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, sync::Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_request_span_records_app_name() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = FmtSubscriber::builder()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let request = Request::builder()
            .method(Method::GET)
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        tracing::subscriber::with_default(subscriber, || {
            let span = request_span("Calendly Clone", &request);
            let _entered = span.enter();
            info!("handled");
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("service.name=Calendly Clone"), "{output}");
        assert!(output.contains("http.method=GET"), "{output}");
        assert!(output.contains("http.uri=/health"), "{output}");
    }
}
