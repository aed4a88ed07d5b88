use std::path::Path;
use std::process::ExitCode;

use configs::{AppConfig, LogFormat, LoggingConfig};
use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

/// config.toml (or `CONFIG_PATH`) when it exists, environment variables otherwise.
fn load_config() -> anyhow::Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        AppConfig::load_and_validate()
    } else {
        AppConfig::from_env()
    }
}

fn init_logging(cfg: Option<&LoggingConfig>) {
    match cfg {
        Some(LoggingConfig { format: LogFormat::Json, filter }) => {
            common::utils::logging::init_logging_json(filter.as_deref())
        }
        Some(LoggingConfig { format: LogFormat::Compact, filter }) => {
            common::utils::logging::init_logging_compact(filter.as_deref())
        }
        None => common::utils::logging::init_logging_default(),
    }
    info!(service = "server", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> ExitCode {
    // .env first so RUST_LOG and DATABASE_URL are visible
    dotenv().ok();

    let loaded = load_config();
    init_logging(loaded.as_ref().ok().map(|c| &c.logging));
    let cfg = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "server", event = "config_invalid", error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "server",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "library server starting"
    );

    // server::run drains connections on Ctrl+C and then returns
    rt.block_on(async move {
        match server::run(cfg).await {
            Ok(()) => {
                info!(service = "server", event = "stop", %service_id, pid, "server stopped normally");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "server", event = "run_failed", error = %e, "server::run returned error");
                ExitCode::FAILURE
            }
        }
    })
}
