use lib::directory::{
    api::Api,
    backend::HttpBackend,
    helpers::get_config,
    models::Args,
    prompt::Terminal,
    run_tool::run,
};

use std::error::Error;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config = get_config(&args)?;
    info!("Working with backend at {}", config.api_base_url);
    let api = Api::new(HttpBackend::new(&config.api_base_url));
    let prompt = Terminal::new(args.yes);

    /* Do what was asked and show where it left us */
    let page = run(&api, &prompt, args.command).await;
    println!("{}", page);

    Ok(())
}
