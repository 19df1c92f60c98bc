//! CLI Adapter.

mod prompts;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, GenerateOptions, RunConfigOverrides};
use crate::app::commands::generate::DEFAULT_KUBECTL_TIMEOUT;
use crate::domain::{AppError, Monitoring, SecretOrigin, ServiceDiscovery, ServiceType};
use crate::ports::Prompter;
use prompts::DialoguerPrompter;

#[derive(Parser)]
#[command(name = "kubegen")]
#[command(version)]
#[command(
    about = "Generate Kubernetes deployment manifests for JHipster applications",
    long_about = None
)]
struct Cli {
    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate manifests and the kubectl-apply.sh driver script
    #[clap(visible_alias = "g")]
    Generate(GenerateArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Output directory (defaults to the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Directory holding the application folders, relative to the output directory
    #[arg(long)]
    directory: Option<String>,
    /// Application folders, comma separated, in apply order
    #[arg(long, value_delimiter = ',')]
    apps: Option<Vec<String>>,
    /// Application folders whose database runs clustered, comma separated
    #[arg(long, value_delimiter = ',')]
    clustered_db: Option<Vec<String>>,
    /// Kubernetes namespace
    #[arg(short, long)]
    namespace: Option<String>,
    /// Service type for gateways and monoliths (ClusterIP, NodePort, LoadBalancer, Ingress)
    #[arg(long, value_parser = parse_service_type)]
    service_type: Option<ServiceType>,
    /// Root domain for ingress hosts
    #[arg(long)]
    ingress_domain: Option<String>,
    /// Image repository prefix, e.g. `registry.example.com/acme`
    #[arg(long)]
    repository: Option<String>,
    /// Command used to push images
    #[arg(long)]
    push_command: Option<String>,
    /// Tag appended to every image name
    #[arg(long)]
    image_tag: Option<String>,
    /// Enable Istio sidecar injection
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    istio: Option<bool>,
    /// Generate Istio gateway, virtual service and destination rule files
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    istio_route: Option<bool>,
    /// Service discovery backend (eureka, consul, none)
    #[arg(long, value_parser = parse_service_discovery)]
    service_discovery: Option<ServiceDiscovery>,
    /// Monitoring integration (none, prometheus)
    #[arg(long, value_parser = parse_monitoring)]
    monitoring: Option<Monitoring>,
    /// Discard the persisted shared secret and generate a new one
    #[arg(long)]
    reset_secret: bool,
    /// Skip the Jib cache and kubectl checks
    #[arg(long)]
    skip_checks: bool,
    /// Seconds to wait for `kubectl version --client`
    #[arg(long, default_value_t = DEFAULT_KUBECTL_TIMEOUT.as_secs())]
    kubectl_timeout: u64,
    /// Do not ask questions; use flags and saved settings
    #[arg(short = 'y', long)]
    yes: bool,
}

fn parse_service_type(value: &str) -> Result<ServiceType, String> {
    ServiceType::from_name(value).map_err(|err| err.to_string())
}

fn parse_service_discovery(value: &str) -> Result<ServiceDiscovery, String> {
    ServiceDiscovery::from_name(value).map_err(|err| err.to_string())
}

fn parse_monitoring(value: &str) -> Result<Monitoring, String> {
    Monitoring::from_name(value).map_err(|err| err.to_string())
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate(args) => run_generate(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let output = match &args.output {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };
    let interactive = !args.yes && std::io::stdin().is_terminal();
    let options = GenerateOptions {
        overrides: RunConfigOverrides {
            directory_path: args.directory,
            apps_folders: args.apps,
            clustered_db_apps: args.clustered_db,
            namespace: args.namespace,
            service_type: args.service_type,
            ingress_domain: args.ingress_domain,
            repository_name: args.repository,
            push_command: args.push_command,
            image_tag: args.image_tag,
            istio: args.istio,
            istio_route: args.istio_route,
            service_discovery: args.service_discovery,
            monitoring: args.monitoring,
        },
        reset_secret: args.reset_secret,
        skip_checks: args.skip_checks,
        kubectl_timeout: Duration::from_secs(args.kubectl_timeout),
    };

    let prompter = DialoguerPrompter;
    let prompter: Option<&dyn Prompter> = if interactive { Some(&prompter) } else { None };
    let outcome = api::generate_at(output, prompter, &options)?;

    if outcome.secret_origin == Some(SecretOrigin::Generated) {
        println!("🔑 Generated a new shared secret");
    }
    println!("Wrote {} file(s)", outcome.files.len());
    print!("{}", outcome.report);
    Ok(())
}
