use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skull_trainer::{config, state::AppState};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "skull_trainer=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let data_dir = config::load_data_dir();
  let state = AppState::new(data_dir);

  if let Err(e) = std::fs::create_dir_all(state.users_dir()) {
    tracing::warn!("Could not create users directory: {}", e);
  }

  let app = skull_trainer::app(state);

  let bind_addr = config::server_bind_addr();
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://localhost:{}", config::SERVER_PORT);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
