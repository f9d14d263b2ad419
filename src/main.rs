use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use meetnote::application::{
    FlashNotifier, LoginUseCase, LogoutUseCase, MeetingNotesClient, ResolveSessionUseCase,
};
use meetnote::domain::ports::{NotificationSink, SchedulerPort};
use meetnote::infrastructure::{
    AppConfig, CliArgs, CompositeSink, DesktopNotificationService, FlashBoard, ReqwestHttpClient,
    StorageManager, TerminalFlashSink, TerminalNavigator, TokioScheduler, session_storage,
};
use meetnote::presentation::CommandRunner;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<(AppConfig, StorageManager)> {
    let storage = StorageManager::new()?;
    let mut config = storage
        .load_config(args.config.as_deref())
        .wrap_err("failed to load configuration")?;
    config.merge_with_args(args);
    Ok((config, storage))
}

fn notification_sink(config: &AppConfig) -> Arc<dyn NotificationSink> {
    let terminal = TerminalFlashSink::new(Arc::new(FlashBoard::new()), config.notifications.colored);
    let desktop = DesktopNotificationService::new(config.notifications.desktop);
    if desktop.is_enabled() {
        Arc::new(
            CompositeSink::new()
                .with(Arc::new(terminal))
                .with(Arc::new(desktop)),
        )
    } else {
        Arc::new(terminal)
    }
}

async fn build_runner(args: &CliArgs, config: &AppConfig, storage: StorageManager) -> Result<CommandRunner> {
    let session_store = session_storage(config.session.storage, &storage);
    let resolved = ResolveSessionUseCase::new(session_store.clone())
        .execute(args.session.clone())
        .await
        .wrap_err("failed to read stored session")?;
    if let Some(resolved) = &resolved {
        info!(source = %resolved.source, session = %resolved.session, "Session resolved");
    }

    let http = Arc::new(
        ReqwestHttpClient::new(
            &config.server.base_url,
            Duration::from_secs(config.server.timeout_secs),
        )?
        .with_session(resolved.map(|r| r.session)),
    );

    let scheduler: Arc<dyn SchedulerPort> = Arc::new(TokioScheduler::from_current()?);
    let notifier = FlashNotifier::new(notification_sink(config), scheduler.clone());
    let navigator = Arc::new(TerminalNavigator::new(&config.server.base_url));

    Ok(CommandRunner::new(
        MeetingNotesClient::new(http.clone(), notifier.clone()),
        LoginUseCase::new(http.clone(), session_store, notifier.clone()),
        LogoutUseCase::new(http, notifier, scheduler, navigator.clone()),
        navigator,
        storage,
    ))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    let (config, storage) = load_config(&args)?;

    init_logging(&config)?;

    info!(
        version = meetnote::VERSION,
        server = %config.server.base_url,
        "Starting meetnote"
    );

    let runner = build_runner(&args, &config, storage).await?;

    if runner.run(args.command).await {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
