mod cli;

use clap::Parser;
use cli::Command;
use sanctum_trade::{QuoteMode, Result, SanctumClient, SanctumConfig};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _ = dotenvy::dotenv(); // load .env if present

    let api_key = match std::env::var("SANCTUM_API_KEY") {
        Ok(k) => k,
        Err(_) => {
            tracing::error!("SANCTUM_API_KEY environment variable is required");
            std::process::exit(1);
        }
    };

    let mut config = SanctumConfig::new(api_key);
    config.private_key = std::env::var("WALLET_PRIVATE_KEY").ok();
    if let Ok(network) = std::env::var("SOLANA_NETWORK") {
        config.network = network;
    }
    config.verbose_logging = cli.verbose;

    let client = match SanctumClient::new(config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to create client");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&client, cli.command).await {
        tracing::error!(error = %e, "command failed");
        std::process::exit(1);
    }
}

async fn run(client: &SanctumClient, command: Command) -> Result<()> {
    match command {
        Command::InfinityInfos => {
            let infos = client.get_infinity_infos().await?;
            println!("{}", serde_json::to_string_pretty(&infos)?);
        }

        Command::LstApy { token } => {
            let apy = client.get_lst_apy(&token, Default::default()).await?;
            println!("{apy}");
        }

        Command::LstSolValue { token } => {
            let sol_value = client.get_lst_sol_value(&token).await?;
            println!("{sol_value}");
        }

        Command::LstTvl { token } => {
            let tvl = client.get_lst_tvl(&token).await?;
            println!("{tvl}");
        }

        Command::LstInfos { token } => {
            let infos = client.get_lst_infos(&token).await?;
            println!("{}", serde_json::to_string_pretty(&infos)?);
        }

        Command::Price { token } => {
            let price = client.get_price(&token).await?;
            println!("{price}");
        }

        Command::Metadata { token } => {
            let metadata = client.get_metadata(&token).await?;
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }

        Command::Quote {
            token,
            quote_token,
            amount,
        } => {
            let quote = client
                .get_quote(&token, &quote_token, amount, QuoteMode::ExactIn, None)
                .await?;
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }
    }

    Ok(())
}
