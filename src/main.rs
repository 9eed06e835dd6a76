use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use nexus_ethics::config::AppConfig;
use nexus_ethics::error::AppError;
use nexus_ethics::ethics::{
    ethics_router, CasePayload, EthicsEngine, EthicsReport, EthicsService, InMemoryPolicyStore,
    PolicyConfig, StaticWatchlist,
};
use nexus_ethics::telemetry;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: Arc<PrometheusHandle>,
}

#[derive(Parser, Debug)]
#[command(
    name = "Nexus Ethics Screening Service",
    about = "Run the policy-aware ethics screening engine as a service or from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run the screening engine directly
    Ethics {
        #[command(subcommand)]
        command: EthicsCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum EthicsCommand {
    /// Evaluate a case payload and print the report
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Path to a JSON case payload
    #[arg(long)]
    case_file: PathBuf,
    /// Optional JSON policy document (defaults to the documented policy)
    #[arg(long)]
    policy_file: Option<PathBuf>,
    /// Emit the raw JSON report instead of the text summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Ethics {
            command: EthicsCommand::Evaluate(args),
        } => run_evaluate(args).await,
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let screening = Arc::new(StaticWatchlist::seeded());
    let policies = Arc::new(InMemoryPolicyStore::default());
    let service = Arc::new(EthicsService::new(
        screening,
        policies,
        config.engine.screening_timeout(),
    ));

    let app: Router = ethics_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "ethics screening service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.case_file)?;
    let payload: CasePayload = serde_json::from_str(&raw)?;

    let policy = match args.policy_file {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => PolicyConfig::default(),
    };

    let engine = EthicsEngine::new(Arc::new(StaticWatchlist::seeded()));
    let report = engine.evaluate(&payload, &policy).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn render_report(report: &EthicsReport) {
    println!("Ethics screening report ({})", report.version);
    println!(
        "Overall: {} -> {} (evaluated {})",
        report.overall_score,
        report.overall_flag.label(),
        report.timestamp.to_rfc3339()
    );

    println!("\nScore breakdown");
    let breakdown = &report.breakdown;
    println!("- sanctions: {}", breakdown.sanctions_score);
    println!("- pep: {}", breakdown.pep_score);
    println!("- corruption: {}", breakdown.corruption_score);
    println!("- environmental: {}", breakdown.env_score);
    println!("- human rights: {}", breakdown.human_rights_score);
    println!("- fraud: {}", breakdown.fraud_score);
    println!("- data privacy: {}", breakdown.data_privacy_score);
    println!("- other: {}", breakdown.other_score);

    if report.flags.is_empty() {
        println!("\nCategory flags: none");
    } else {
        println!("\nCategory flags");
        for flag in &report.flags {
            println!("- [{}] {}: {}", flag.flag.label(), flag.name, flag.reason);
            for line in &flag.evidence {
                println!("    {line}");
            }
        }
    }

    println!("\nMitigation plan");
    for step in &report.mitigation {
        println!("- {}: {}", step.step, step.detail);
    }
}
