use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    config::ToursBackend,
    handlers::{auth, content, editor, health, settings, telegram, tour_types, tours, upload},
    state::AppState,
    utils::session::session_middleware,
};

// Multipart framing on top of the 5MB image limit
const UPLOAD_BODY_LIMIT: usize = upload::MAX_IMAGE_BYTES + 1024 * 1024;

pub fn create_routes(state: AppState) -> Router {
    // 1. Session and health
    let auth_routes = Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/auth/login", post(auth::login_handler))
        .route("/api/auth/logout", post(auth::logout_handler));

    // 2. Proxied to the public site API
    let site_routes = Router::new()
        .route(
            "/api/site/tours",
            get(tours::list_tours_handler)
                .post(tours::create_tour_handler)
                .put(tours::update_tour_handler)
                .delete(tours::delete_tour_handler),
        )
        .route("/api/site/tours/:id/edit", get(tours::edit_form_handler))
        .route(
            "/api/site/tour-types",
            get(tour_types::list_tour_types_handler)
                .post(tour_types::create_tour_type_handler)
                .put(tour_types::update_tour_type_handler)
                .delete(tour_types::delete_tour_type_handler),
        )
        .route(
            "/api/site/content",
            get(content::get_content_handler).put(content::replace_content_handler),
        )
        .route("/api/site/content/:lang", put(content::update_section_handler))
        .route(
            "/api/site/upload",
            post(upload::upload_image_handler).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route(
            "/api/site/telegram",
            get(telegram::get_telegram_handler)
                .put(telegram::update_telegram_handler)
                .post(telegram::send_lead_handler),
        );

    // 3. Editor helpers and admin preferences
    let admin_routes = Router::new()
        .route(
            "/api/settings",
            get(settings::get_settings_handler).put(settings::update_settings_handler),
        )
        .route("/api/editor/calendar", get(editor::calendar_handler))
        .route("/api/editor/range/click", post(editor::range_click_handler));

    let mut router = Router::new()
        .merge(auth_routes)
        .merge(site_routes)
        .merge(admin_routes);

    // Uploads are only served from here when they are stored locally
    if state.config.tours_backend == ToursBackend::Local {
        router = router.nest_service("/uploads", ServeDir::new(&state.config.upload_dir));
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(middleware::from_fn(session_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
