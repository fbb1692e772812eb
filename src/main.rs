use clap::Parser;
use fivegc_sdk::config::cli::{Cli, Command};
use fivegc_sdk::models::registry;
use fivegc_sdk::services::nlmf::{NlmfServer, Unimplemented};
use fivegc_sdk::utils::logger;
use fivegc_sdk::{SdkConfig, SdkError};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    logger::init_logger(&config.logging, cli.verbose);
    tracing::info!("Starting fivegc {}", env!("CARGO_PKG_VERSION"));
    if cli.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    let result = match cli.command {
        Command::Serve {
            address,
            api_root,
            no_validate,
        } => serve(config, address, api_root, no_validate).await,
        Command::Validate { model, file } => validate_document(&model, &file),
        Command::Models => {
            for name in registry::model_names() {
                println!("{}", name);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

fn load_config(path: Option<&Path>) -> Result<SdkConfig, SdkError> {
    let config = match path {
        Some(path) => SdkConfig::from_file(path)?,
        None => SdkConfig::default(),
    };
    config.validate_config()?;
    Ok(config)
}

async fn serve(
    mut config: SdkConfig,
    address: Option<String>,
    api_root: Option<String>,
    no_validate: bool,
) -> Result<(), SdkError> {
    if let Some(address) = address {
        config.server.address = address;
    }
    if let Some(api_root) = api_root {
        config.server.api_root = api_root;
    }
    if no_validate {
        config.server.validate_requests = false;
    }
    config.validate_config()?;

    let mut server = NlmfServer::new(
        config.server.address.clone(),
        config.server.api_root.clone(),
        config.server.dispatch_options(),
    );
    server
        .attach_location(Arc::new(Unimplemented))
        .attach_broadcast(Arc::new(Unimplemented));

    let addr = server.start().await?;
    println!("🚀 Serving NLMF on http://{}", addr);

    let stop = server.stop_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("🛑 Ctrl-C received");
            stop.stop();
        }
    });

    server.wait().await
}

fn validate_document(model: &str, file: &Path) -> Result<(), SdkError> {
    let text = if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(file)?
    };

    match registry::validate_str(model, &text) {
        Ok(()) => {
            tracing::info!("✅ {} is a valid {}", file.display(), model);
            println!("✅ valid {}", model);
            Ok(())
        }
        Err(SdkError::ValidationError(errors)) => {
            for error in errors.errors() {
                eprintln!("  - {}", error);
            }
            Err(SdkError::ValidationError(errors))
        }
        Err(e) => Err(e),
    }
}
