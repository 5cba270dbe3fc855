use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};

use mgmt_registrar::config::{DEFAULT_CONFIG_PATH, StaticConfig};
use mgmt_registrar::management::{ManagementServer, MonitoringRegistrar, ServerExporter};
use mgmt_registrar::system::{PROCESS_OBJECT_NAME, ProcessInfo, init_logging};

#[derive(Debug, Parser)]
#[command(name = "mgmt-registrar", version, about)]
struct Args {
    /// Configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Enable management export regardless of configuration
    #[arg(long)]
    management_remote: bool,

    /// Print the management server snapshot as JSON
    #[arg(long)]
    dump: bool,

    /// Print a sample configuration file and exit
    #[arg(long)]
    generate_config: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if args.generate_config {
        println!("{}", StaticConfig::generate_sample_config());
        return Ok(());
    }

    let mut config = StaticConfig::load_from(&args.config);
    if args.management_remote {
        config.management.remote = Some("cli".to_string());
    }

    let _guard = init_logging(&config.logging).map_err(|e| {
        eprintln!("{}", e.format_colored());
        e
    })?;

    // 保留导出器句柄，退出时统一撤销
    let exporter = config
        .management
        .is_enabled()
        .then(|| Arc::new(ServerExporter::new(ManagementServer::platform())));
    let registrar = match &exporter {
        Some(exporter) => MonitoringRegistrar::with_exporter(exporter.clone()),
        None => MonitoringRegistrar::disabled(),
    };
    info!(enabled = registrar.is_enabled(), "Monitoring registrar ready");

    registrar.register(PROCESS_OBJECT_NAME, Arc::new(ProcessInfo::capture()));

    if args.dump {
        let snapshot = if registrar.is_enabled() {
            ManagementServer::platform().snapshot()
        } else {
            serde_json::json!({})
        };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    registrar.unregister(PROCESS_OBJECT_NAME);
    if let Some(exporter) = exporter {
        for name in exporter.unexport_all() {
            warn!("{} was already gone from the management server", name);
        }
    }
    Ok(())
}
