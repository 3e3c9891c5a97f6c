use blog_buddy::{
    bot::{self, BotData},
    config,
    core::{
        article::{ArticleSource, GoBlogSource},
        cache::{self, ArticleCache},
    },
    errors::Result,
};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = Arc::new(config::blog::load_default_config()?);
    info!("Successfully processed application configuration.");

    // 4. Fetch the initial article list; the bot cannot start without it
    let source: Arc<dyn ArticleSource> = Arc::new(GoBlogSource::new(
        reqwest::Client::new(),
        app_config.blog.index_url.clone(),
    ));
    let articles = Arc::new(
        ArticleCache::load(source.as_ref())
            .await
            .inspect_err(|e| error!("Failed to load blog articles: {}", e))?,
    );

    // 5. Keep the snapshot fresh for the lifetime of the process
    let refresh_interval = app_config.blog.refresh_interval();
    let _refresher = cache::spawn_refresher(Arc::clone(&articles), source, refresh_interval);
    info!(
        "Blog articles refresh every {} hours.",
        app_config.blog.refresh_interval_hours
    );

    // 6. Run the bot
    let token = config::discord::get_bot_token()?;
    bot::run_bot(token, BotData::new(articles, app_config)).await?;

    Ok(())
}
