use std::sync::Arc;

use salvo::Listener;
use salvo::conn::TcpListener;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use courier_app::build_service;
use courier_core::config::{Settings, StoreBackend, load_config};
use courier_db::db::connection::create_pool;
use courier_db::db::migrations::run_migrations;
use courier_db::store::{ContactStore, MemoryContactStore, PgContactStore};
use courier_service::contact::ContactService;
use courier_service::notify::{DisabledNotifier, Notifier, SmtpNotifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Courier contact service");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let store = build_store(&config).await?;
    let notifier = build_notifier(&config)?;
    let contacts = Arc::new(ContactService::new(
        store,
        notifier,
        config.contacts.list_limit,
    ));

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let server = salvo::Server::new(acceptor);
    let handle = server.handle();
    tokio::spawn(async move {
        shutdown_signal().await;
        handle.stop_graceful(None);
    });

    tracing::info!("Server listening on {bind_addr}");

    server
        .serve(build_service(contacts, &config.server.cors_origins))
        .await;

    tracing::info!("Server stopped");

    Ok(())
}

/// ## Summary
/// Opens the configured contact store.
///
/// ## Errors
/// Returns an error if migrations fail or the pool cannot be created.
async fn build_store(config: &Settings) -> anyhow::Result<Arc<dyn ContactStore>> {
    match config.database.backend {
        StoreBackend::Postgres => {
            if config.database.run_migrations {
                run_migrations(&config.database.url).await?;
                tracing::info!("Database migrations applied");
            }

            let pool = create_pool(
                &config.database.url,
                u32::from(config.database.max_connections),
            )
            .await?;

            tracing::info!("Database connection pool created.");

            Ok(Arc::new(PgContactStore::new(pool)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory contact store; records are lost on restart");
            Ok(Arc::new(MemoryContactStore::new()))
        }
    }
}

/// ## Errors
/// Returns an error if the mail section names an invalid relay or address.
fn build_notifier(config: &Settings) -> anyhow::Result<Arc<dyn Notifier>> {
    if let Some(mail) = &config.mail {
        let notifier = SmtpNotifier::from_config(mail)?;
        tracing::info!(host = %mail.host, port = mail.port, "SMTP notifications enabled");
        Ok(Arc::new(notifier))
    } else {
        tracing::warn!("No mail configuration; contact notifications are disabled");
        Ok(Arc::new(DisabledNotifier))
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
