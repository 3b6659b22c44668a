use anyhow::Result;
use weatherwise::{TipsAdvisor, WeatherWiseConfig, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = WeatherWiseConfig::load()?;
    logging::init(&config.logging)?;

    let advisor = TipsAdvisor::from_config(&config)?;
    web::run(&config, advisor).await
}
