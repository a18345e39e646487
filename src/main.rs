use std::process::exit;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use serde_json::Value;
use tokio::runtime::Builder;
use coherent_cache::cache::enums::key_ttl::KeyTtl;
use coherent_cache::cache::errors::CacheError;
use coherent_cache::cache::structs::cache_client::CacheClient;
use coherent_cache::config::structs::configuration::Configuration;
use coherent_cache::logging::setup_logging;
use coherent_cache::structs::{Cli, Command};

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config.log_level) {
        eprintln!("[ERROR] {}", e);
        exit(102);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let code = Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let client = match CacheClient::<Value>::redis(config.cache.clone()) {
                Ok(client) => client,
                Err(e) => {
                    error!("[CACHE] {}", e);
                    return 1;
                }
            };
            if let Err(e) = client.connect().await {
                error!("[CACHE] Unable to connect to {}: {}", config.cache.store_uri, e);
                let _ = client.close().await;
                return 1;
            }
            let result = run(&client, args.command).await;
            if let Err(e) = client.close().await {
                error!("[CACHE] Close failed: {}", e);
            }
            match result {
                Ok(()) => 0,
                Err(e) => {
                    error!("[CACHE] {}", e);
                    1
                }
            }
        });
    exit(code)
}

async fn run(client: &CacheClient<Value>, command: Command) -> Result<(), CacheError>
{
    match command {
        Command::Get { key } => {
            match client.get(&key).await? {
                Some(value) => println!("{}", value),
                None => println!("(nil)"),
            }
        }
        Command::Set { key, value, ttl } => {
            let value: Value = serde_json::from_str(&value)
                .map_err(|e| CacheError::SerializationError(e.to_string()))?;
            client.set(&key, value, ttl.map(Duration::from_secs)).await?;
            println!("OK");
        }
        Command::Del { keys } => {
            println!("{}", client.mdel(&keys).await?);
        }
        Command::Keys { pattern } => {
            for key in client.keys(pattern.as_deref()).await? {
                println!("{}", key);
            }
        }
        Command::Ttl { key } => {
            match client.ttl(&key).await? {
                KeyTtl::Missing => println!("-2"),
                KeyTtl::Persistent => println!("-1"),
                KeyTtl::Expires(remaining) => println!("{}", remaining.as_secs()),
            }
        }
        Command::Clear => {
            println!("{}", client.clear().await?);
        }
    }
    Ok(())
}
