use clap::{Args, Parser, Subcommand};

use crate::adapters::outbound::renderers::{CsvRenderer, JsonRenderer, TableRenderer};
use crate::ports::outbound::ReportRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json', 'table' or 'csv'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a renderer instance for the specified output format
    pub fn create_renderer(&self) -> Box<dyn ReportRenderer> {
        match self {
            OutputFormat::Json => Box::new(JsonRenderer::new()),
            OutputFormat::Table => Box::new(TableRenderer::new()),
            OutputFormat::Csv => Box::new(CsvRenderer::new()),
        }
    }
}

/// Read-only audits for OpenShift routes and Kubernetes workloads
#[derive(Parser, Debug)]
#[command(name = "cluster-audit")]
#[command(version)]
#[command(
    about = "Read-only audits for OpenShift routes and Kubernetes workloads",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check OpenShift routes and their TLS certificates
    #[command(name = "validate-certs")]
    ValidateCerts(ValidateCertsArgs),

    /// Check deployments and stateful sets for Prometheus metrics annotations
    #[command(name = "metrics-annotations")]
    MetricsAnnotations(MetricsAnnotationsArgs),
}

/// Flags shared by both audit commands.
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Kubernetes API server URL (requires --token)
    #[arg(short, long)]
    pub server: Option<String>,

    /// Kubernetes API bearer token (requires --server)
    #[arg(short, long, env = "CLUSTER_AUDIT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Comma-separated list of namespaces
    #[arg(short, long, value_delimiter = ',')]
    pub namespaces: Vec<String>,

    /// Output format: json, table or csv (defaults to table)
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}

#[derive(Args, Debug)]
pub struct ValidateCertsArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Filter out routes without certificates
    #[arg(long = "filter-no-cert", default_value_t = false)]
    pub filter_no_cert: bool,
}

#[derive(Args, Debug)]
pub struct MetricsAnnotationsArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Label selector to filter workloads
    #[arg(short = 'l', long = "label-selector")]
    pub label_selector: Option<String>,

    /// Only show workloads without metrics annotations
    #[arg(long = "only-no-metrics", default_value_t = false)]
    pub only_no_metrics: bool,
}
