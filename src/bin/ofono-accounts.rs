//! Inspects the accounts the ofono storage provider would hand to the
//! account manager, acting as a minimal host.

use std::{cell::RefCell, error::Error, path::PathBuf, process};

use clap::{Parser, Subcommand};
use ofono_accounts::{
    config::DiscoveryConfig,
    storage::{AccountManager, AccountStorage, OfonoAccountStorage},
    tracing_config,
};
use serde_json::{Map, Value, json};
use tracing::{Level, span};

#[derive(Parser)]
#[command(name = "ofono-accounts")]
#[command(about = "Inspect the ril modem accounts provided to telepathy-ofono")]
struct Cli {
    /// TOML configuration file; environment variables still take precedence
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List account names
    List,
    /// Show the parameters of an account, or a single parameter
    Get { account: String, key: Option<String> },
    /// Show the identifier of an account
    Identifier { account: String },
    /// Show the restriction flags of an account
    Restrictions { account: String },
    /// Show the provider identity
    Info,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Default)]
struct CollectingManager {
    values: RefCell<Vec<(String, Option<String>)>>,
}

impl AccountManager for CollectingManager {
    fn set_value(&self, _account: &str, key: &str, value: Option<&str>) {
        self.values
            .borrow_mut()
            .push((key.to_string(), value.map(str::to_string)));
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    tracing_config::init()?;
    let _span = span!(Level::INFO, "ofono_accounts").entered();

    let config = match &cli.config {
        Some(path) => DiscoveryConfig::load(path)?,
        None => DiscoveryConfig::from_env(),
    };
    let storage = OfonoAccountStorage::start(&config).await?;

    match run(&storage, cli.command, cli.json) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn run(storage: &dyn AccountStorage, command: Commands, json: bool) -> Result<String, CliError> {
    match command {
        Commands::List => {
            let accounts = storage.list();
            if json {
                Ok(serde_json::to_string_pretty(&accounts)?)
            } else {
                Ok(accounts.join("\n"))
            }
        }
        Commands::Get { account, key } => {
            let manager = CollectingManager::default();
            if !storage.get(&manager, &account, key.as_deref()) {
                return Err(CliError::AccountNotFound(account));
            }

            let values = manager.values.into_inner();
            if json {
                let map: Map<String, Value> = values
                    .into_iter()
                    .map(|(k, v)| (k, v.map_or(Value::Null, Value::String)))
                    .collect();
                Ok(serde_json::to_string_pretty(&map)?)
            } else {
                Ok(values
                    .iter()
                    .map(|(k, v)| format!("{k} = {}", v.as_deref().unwrap_or("(unset)")))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
        Commands::Identifier { account } => {
            let id = storage
                .get_identifier(&account)
                .ok_or_else(|| CliError::AccountNotFound(account.clone()))?;
            if json {
                Ok(serde_json::to_string(&json!({ "account": account, "identifier": id }))?)
            } else {
                Ok(id.to_string())
            }
        }
        Commands::Restrictions { account } => {
            let flags = storage.get_restrictions(&account);
            if json {
                let names: Vec<&str> = flags.iter_names().map(|(name, _)| name).collect();
                Ok(serde_json::to_string_pretty(
                    &json!({ "account": account, "bits": flags.bits(), "flags": names }),
                )?)
            } else {
                Ok(format!("{:#010x} {flags:?}", flags.bits()))
            }
        }
        Commands::Info => {
            let info = storage.info();
            if json {
                Ok(serde_json::to_string_pretty(&info)?)
            } else {
                Ok(format!(
                    "name: {}\ndescription: {}\npriority: {}\nprovider: {}",
                    info.name, info.description, info.priority, info.provider
                ))
            }
        }
    }
}
