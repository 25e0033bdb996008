use std::sync::Arc;

use catalog_app::{
    app_bus::{AppBus, HandlerContext},
    config::Config,
    relay::{AmqpBroker, Broker, CommandConsumer, Dispatcher, MemoryBroker},
};
use catalog_db::{PostgresProductRepository, PostgresUserRepository, establish_connection_pool};
use catalog_types::{ApplicationError, Result};
use catalog_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

/// Everything the process owns, constructed once at startup. Teardown
/// mirrors construction order: the relay closes before the store pool.
struct AppContext {
    config: Arc<Config>,
    pool: sqlx::PgPool,
    app_bus: Arc<AppBus>,
    broker: Arc<dyn Broker>,
    consumer: Arc<CommandConsumer>,
}

impl AppContext {
    async fn close(&self) {
        self.consumer.close().await;
        self.broker.close().await;
        self.pool.close().await;
        tracing::info!("relay and store connections closed");
    }
}

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    setup_logging();
    let ctx = setup_app().await?;
    let state = AppState::new(ctx.app_bus.clone());

    ctx.consumer.start().await?;

    tokio::select! {
        res = WebRouter::serve(state, ctx.config.http_port) => res?,
        _ = tokio::signal::ctrl_c() => tracing::info!("shutdown signal received"),
    }

    ctx.close().await;
    Ok(())
}

async fn setup_app() -> Result<AppContext, ApplicationError> {
    let config = Arc::new(Config::from_env());
    let db_pool = establish_connection_pool().await?;

    sqlx::migrate!("../migrations")
        .run(&db_pool)
        .await
        .map_err(|e| ApplicationError::Unknown(e.to_string()))?;

    let handler_ctx = HandlerContext::new(
        Arc::new(PostgresProductRepository::new(db_pool.clone())),
        Arc::new(PostgresUserRepository::new(db_pool.clone())),
    );
    let app_bus = Arc::new(AppBus::new(handler_ctx));

    let broker: Arc<dyn Broker> = match &config.amqp_url {
        Some(url) => {
            tracing::info!("connecting to AMQP broker");
            Arc::new(AmqpBroker::connect(url).await?)
        }
        None => {
            tracing::info!("CATALOG_AMQP_URL not set, using the in-process broker");
            Arc::new(MemoryBroker::new())
        }
    };
    let consumer = Arc::new(
        CommandConsumer::new(
            broker.clone(),
            Dispatcher::new(app_bus.clone()),
            config.command_queue.clone(),
            config.result_queue.clone(),
        )
        .await?,
    );

    Ok(AppContext {
        config,
        pool: db_pool,
        app_bus,
        broker,
        consumer,
    })
}
