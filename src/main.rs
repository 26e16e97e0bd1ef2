//! Audit mapper CLI.
//!
//! Runs the action classifier and target resolver against a single request
//! description, using the same audit map file the middleware loads.
//!
//! ```text
//! audit-mapper --config api_audit_map.conf action --method POST \
//!     --path /v2/tenant/servers/1/action --body '{"reboot": {"type": "SOFT"}}'
//! audit-mapper --config api_audit_map.conf target --path /v2/tenant/servers/1 \
//!     --host-url http://nova:8774 --catalog-file catalog.json
//! audit-mapper --config api_audit_map.conf inspect
//! ```

use std::path::PathBuf;

use axum::http::Method;
use clap::{Parser, Subcommand};

use audit_mapper::observability::logging::init_logging;
use audit_mapper::{AuditApi, AuditRequest};

#[derive(Parser)]
#[command(name = "audit-mapper")]
#[command(about = "Classify requests into audit actions and targets", long_about = None)]
struct Cli {
    /// Audit map file (ini). A missing file means an empty map.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the action for a request
    Action {
        #[arg(short, long, default_value = "GET")]
        method: String,
        #[arg(short, long)]
        path: String,
        /// Request body (only read for POST)
        #[arg(short, long)]
        body: Option<String>,
    },
    /// Print the target resource for a request as JSON
    Target {
        #[arg(short, long)]
        path: String,
        /// Request host URL, e.g. http://nova.example.com:8774
        #[arg(long)]
        host_url: String,
        /// Service catalog literal
        #[arg(long, conflicts_with = "catalog_file")]
        catalog: Option<String>,
        /// File holding the service catalog literal
        #[arg(long)]
        catalog_file: Option<PathBuf>,
    },
    /// Print the loaded audit map as JSON
    Inspect,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.json_logs);

    let api = AuditApi::from_config_file(cli.config.as_deref())?;

    match cli.command {
        Commands::Action { method, path, body } => {
            let method = Method::from_bytes(method.as_bytes())?;
            let mut req = AuditRequest::new(method, path, "");
            if let Some(body) = body {
                req = req.with_body(body);
            }
            println!("{}", api.get_action(&req));
        }
        Commands::Target {
            path,
            host_url,
            catalog,
            catalog_file,
        } => {
            let catalog = match catalog_file {
                Some(file) => Some(std::fs::read_to_string(file)?),
                None => catalog,
            };
            let mut req = AuditRequest::new(Method::GET, path, host_url);
            if let Some(catalog) = catalog {
                req = req.with_service_catalog(catalog.trim());
            }
            let target = api.get_target_resource(&req);
            println!("{}", serde_json::to_string_pretty(&target)?);
        }
        Commands::Inspect => {
            println!("{}", serde_json::to_string_pretty(api.map())?);
        }
    }

    Ok(())
}
