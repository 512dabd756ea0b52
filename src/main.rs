#![warn(clippy::pedantic, clippy::all, clippy::nursery)]

use crate::{
    config::DbConfig,
    routes::{
        all_students::get_students,
        delete_student::{get_delete_student, post_delete_student},
        edit_student::{get_edit_student, post_edit_student},
        index::get_index_route,
        new_student::{get_new_student_form, post_new_student},
        student_in_detail::get_student,
    },
    state::RegistrarState,
};
use axum::{Router, routing::get};
use sqlx::postgres::PgPoolOptions;
use std::env;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod config;
mod data;
mod error;
mod maud_conveniences;
mod records;
mod routes;
mod state;
mod store;

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
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("signal received, starting graceful shutdown");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().expect("unable to load env vars");

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");

    let options = PgPoolOptions::new().max_connections(15);
    let config = DbConfig::new().expect("unable to create config");
    let state = RegistrarState::new(options, &config)
        .await
        .expect("unable to create state");

    let app = Router::new()
        .route("/", get(get_index_route))
        .route("/students", get(get_students))
        .route("/students/details/{id}", get(get_student))
        .route(
            "/students/create",
            get(get_new_student_form).post(post_new_student),
        )
        .route(
            "/students/edit/{id}",
            get(get_edit_student).post(post_edit_student),
        )
        .route(
            "/students/delete/{id}",
            get(get_delete_student).post(post_delete_student),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let server_ip =
        env::var("REGISTRAR_SERVER_IP").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = TcpListener::bind(&server_ip)
        .await
        .expect("unable to listen on server ip");

    info!(?server_ip, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("unable to serve app");
}
