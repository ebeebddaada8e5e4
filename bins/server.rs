use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // 提前加载 .env，使得 RUST_LOG / LOG_FORMAT 生效
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = "attendance", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "attendance",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    // config.toml 优先，其次环境变量
    let cfg = configs::AppConfig::load_or_env();

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(
                service = "attendance",
                event = "runtime_build_failed",
                error = %e,
                "failed to build tokio runtime"
            );
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "attendance",
        event = "start",
        %service_id,
        pid,
        version,
        threads = cfg.server.worker_threads.unwrap_or_default(),
        seed = cfg.store.seed_sample_data,
        "attendance service starting"
    );

    match rt.block_on(server::startup::run_with_config(cfg)) {
        Ok(()) => {
            info!(
                service = "attendance",
                event = "stop",
                %service_id,
                pid,
                "server stopped normally"
            );
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(
                service = "attendance",
                event = "run_failed",
                error = %e,
                "server returned error"
            );
            std::process::ExitCode::FAILURE
        }
    }
}
