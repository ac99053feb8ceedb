//! HTTP handlers and route configuration.

mod auth;
mod feed;
mod health;
mod likes;
mod posts;
mod preferences;
mod search;
mod shell;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/shell", web::get().to(shell::shell))
            .route("/feed", web::get().to(feed::home))
            .route("/feed/reconcile", web::post().to(feed::reconcile))
            .route("/search", web::get().to(search::search))
            .route("/search", web::post().to(search::dispatch))
            .route("/profile/{uid}", web::get().to(posts::profile))
            // Verses
            .route("/posts", web::post().to(posts::create))
            .route("/posts/{id}", web::get().to(posts::detail))
            .route("/posts/{id}", web::put().to(posts::edit))
            .route("/posts/{id}/like", web::post().to(likes::like))
            .route("/posts/{id}/like", web::delete().to(likes::unlike))
            .route("/private-verses", web::get().to(posts::private_verses))
            // Preferences
            .service(
                web::scope("/preferences")
                    .route("/theme", web::get().to(preferences::get_theme))
                    .route("/theme", web::put().to(preferences::set_theme))
                    .route("/theme/toggle", web::post().to(preferences::toggle_theme)),
            )
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/logout", web::post().to(auth::logout))
                    .route("/me", web::get().to(auth::me)),
            ),
    );
}
