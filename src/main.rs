use anyhow::Context;
use hello_hal::config::get_config;
use hello_hal::startup::Application;
use hello_hal::telem::{get_subscriber, init_subscriber, DEFAULT_FILTER, SERVICE_NAME};

#[actix_web::main]
pub async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber(SERVICE_NAME, DEFAULT_FILTER, std::io::stdout);
    init_subscriber(subscriber);

    let config = get_config().context("failed to load config")?;
    let app = Application::build(config)
        .await
        .context("failed to start the server")?;
    app.run_until_stopped().await?;
    Ok(())
}
