mod adapters;
mod application;
mod auditing;
mod cli;
mod config;
mod ports;
mod shared;

use std::path::Path;
use std::process;
use std::str::FromStr;

use clap::Parser;

use adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
use adapters::outbound::kube::{create_client, ClusterConnectOptions, KubeRouteLister, KubeWorkloadLister};
use application::dto::{RouteAuditRequest, WorkloadAuditRequest};
use application::use_cases::{AuditRouteCertificatesUseCase, AuditWorkloadMetricsUseCase};
use cli::{Cli, Command, ConnectionArgs, MetricsAnnotationsArgs, OutputFormat, ValidateCertsArgs};
use config::ConfigFile;
use ports::outbound::{OutputPresenter, ProgressReporter};
use shared::error::{AuditError, ExitCode};
use shared::Result;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = config::discover_config(Path::new("."))?;

    match cli.command {
        Command::ValidateCerts(args) => run_validate_certs(args, config).await,
        Command::MetricsAnnotations(args) => run_metrics_annotations(args, config).await,
    }
}

/// Connection settings after merging CLI flags over config file values.
struct ResolvedConnection {
    options: ClusterConnectOptions,
    namespaces: Vec<String>,
    output: OutputFormat,
}

fn resolve_connection(
    args: &ConnectionArgs,
    config: Option<&ConfigFile>,
) -> Result<ResolvedConnection> {
    let server = args
        .server
        .clone()
        .or_else(|| config.and_then(|c| c.server.clone()));

    let namespaces = if args.namespaces.is_empty() {
        config
            .and_then(|c| c.namespaces.clone())
            .unwrap_or_default()
    } else {
        args.namespaces.clone()
    };
    if namespaces.is_empty() {
        return Err(AuditError::NoNamespaces.into());
    }

    let output = match args.output {
        Some(format) => format,
        None => config
            .and_then(|c| c.output.as_deref())
            .map(OutputFormat::from_str)
            .transpose()
            .map_err(|e| AuditError::Config { details: e })?
            .unwrap_or(OutputFormat::Table),
    };

    Ok(ResolvedConnection {
        options: ClusterConnectOptions {
            server,
            token: args.token.clone(),
        },
        namespaces,
        output,
    })
}

async fn run_validate_certs(args: ValidateCertsArgs, config: Option<ConfigFile>) -> Result<()> {
    let resolved = resolve_connection(&args.connection, config.as_ref())?;
    let client = create_client(&resolved.options).await?;

    let progress_reporter = StderrProgressReporter::new();
    progress_reporter.report(&format!(
        "Checking routes in namespaces: {}",
        resolved.namespaces.join(", ")
    ));

    let use_case =
        AuditRouteCertificatesUseCase::new(KubeRouteLister::new(client), progress_reporter);
    let routes = use_case
        .execute(RouteAuditRequest::new(
            resolved.namespaces,
            args.filter_no_cert,
        ))
        .await?;

    let renderer = resolved.output.create_renderer();
    let report = renderer.render_routes(&routes)?;
    StdoutPresenter::new().present(&report)
}

async fn run_metrics_annotations(
    args: MetricsAnnotationsArgs,
    config: Option<ConfigFile>,
) -> Result<()> {
    let resolved = resolve_connection(&args.connection, config.as_ref())?;
    let label_selector = args
        .label_selector
        .clone()
        .or_else(|| config.as_ref().and_then(|c| c.label_selector.clone()));
    let client = create_client(&resolved.options).await?;

    let progress_reporter = StderrProgressReporter::new();
    progress_reporter.report(&format!(
        "Checking workloads in namespaces: {}",
        resolved.namespaces.join(", ")
    ));

    let use_case =
        AuditWorkloadMetricsUseCase::new(KubeWorkloadLister::new(client), progress_reporter);
    let workloads = use_case
        .execute(WorkloadAuditRequest::new(
            resolved.namespaces,
            label_selector,
            args.only_no_metrics,
        ))
        .await?;

    let renderer = resolved.output.create_renderer();
    let report = renderer.render_workloads(&workloads)?;
    StdoutPresenter::new().present(&report)
}
