mod model;
mod server;

use std::sync::Arc;

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    bot::{self, correlator::ReplySessions, handler::Handler, messages},
    config::Config,
    error::{config::ConfigError, AppError},
    router, scheduler, startup,
    session::LoginSessionStore,
    state::AppState,
    translation::{CacheSettings, HttpTranslator, TranslationCache, SUPPORTED_LANGUAGES},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "proemoji=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let reply_sessions = ReplySessions::new();
    let login_sessions = LoginSessionStore::new(config.login_session_ttl);

    let translation = TranslationCache::new(
        HttpTranslator::new(http_client.clone(), config.translate_api_url.clone()),
        CacheSettings {
            source_language: config.default_language.clone(),
            timeout: config.translation_timeout,
            ceiling: config.translation_cache_ceiling,
            eviction_batch: config.translation_eviction_batch,
        },
    );

    let prewarm_languages = SUPPORTED_LANGUAGES
        .iter()
        .filter(|language| **language != config.default_language)
        .map(|language| language.to_string())
        .collect();
    translation.prewarm(messages::ALL, prewarm_languages);

    tracing::info!("Starting server");

    let handler = Handler::new(
        db.clone(),
        reply_sessions.clone(),
        translation.clone(),
        config.reply_session_ttl,
    );
    let bot_client = bot::start::init_bot(&config, handler).await?;

    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let _sweep = scheduler::sweep::start_scheduler(
        reply_sessions.clone(),
        login_sessions.clone(),
        config.session_sweep_interval,
    )
    .await?;

    let origin = config
        .app_url
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            value: config.app_url.clone(),
        })?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let app = router::router()
        .with_state(AppState {
            db,
            http_client,
            oauth_client,
            login_sessions,
            reply_sessions,
            translation,
            app_url: config.app_url.clone(),
            admin_discord_ids: Arc::from(config.admin_discord_ids.clone()),
            verification_days: config.verification_days,
        })
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
