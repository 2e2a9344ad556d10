use ipv4_subnet_mask::config::Config;
use ipv4_subnet_mask::{render_report, report_from_config};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default())
        .map_err(|e| format!("Error initializing log4rs: {e}"))?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let config = Config::from_env()?;
    let report = report_from_config(&config)?;
    println!("{}", render_report(&report, config.output)?);

    Ok(())
}
