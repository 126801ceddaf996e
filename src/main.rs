//! bootcheck-server: a minimal demo binary wiring the `bootcheck` engine
//! into a server's startup sequence. Parses config, resolves the bound
//! transport, runs every catalogue check before opening the listening
//! socket, then serves a trivial health endpoint.

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use bootcheck::checks::{
    ClientVmCheck, FdLimitCheck, G1GcVersionCheck, HeapSizeCheck, MaxAddressSpaceCheck,
    MaxMapCountCheck, MaxThreadsCheck, MemoryLockCheck, OnErrorForkRiskCheck,
    OnOutOfMemoryErrorForkRiskCheck, SerialGcCheck, SyscallFilterCheck,
};
use bootcheck::probes::host::RealHost;
use bootcheck::probes::process::LinuxProcessProbe;
use bootcheck::probes::runtime::FixedRuntimeProbe;
use bootcheck::probes::{HostDescriptor, ProcessProbe, RuntimeProbe};
use bootcheck::{engine, BoundTransport, Check, TracingLogger};
use clap::Parser;
use std::net::SocketAddr;
use std::rc::Rc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Pre-start environment validation engine for long-running server processes")]
struct Args {
    /// Address to bind the health server to.
    #[arg(long, env = "BOOTCHECK_BIND_ADDR", default_value = "127.0.0.1:9200")]
    bind_addr: SocketAddr,

    /// Address advertised to peers; defaults to the bind address.
    #[arg(long, env = "BOOTCHECK_PUBLISH_ADDR")]
    publish_addr: Option<SocketAddr>,

    /// Minimum acceptable open-file-descriptor limit.
    #[arg(long, env = "BOOTCHECK_FD_LIMIT", default_value_t = 65_536)]
    fd_limit: i64,

    /// Whether the embedding server requested locked memory (`mlockall`).
    #[arg(long, env = "BOOTCHECK_MLOCKALL_REQUESTED", default_value_t = false)]
    mlockall_requested: bool,

    /// Whether the embedding server requested a syscall filter (seccomp).
    #[arg(long, env = "BOOTCHECK_SYSCALL_FILTER_REQUESTED", default_value_t = false)]
    syscall_filter_requested: bool,
}

/// Assembles the full catalogue, sharing one probe instance per capability
/// across every check that needs it.
fn build_checks(
    args: &Args,
    process: Rc<dyn ProcessProbe>,
    runtime: Rc<dyn RuntimeProbe>,
    host: Rc<dyn HostDescriptor>,
) -> Result<Vec<Box<dyn Check>>> {
    let checks: Vec<Box<dyn Check>> = vec![
        Box::new(HeapSizeCheck::new(runtime.clone())),
        Box::new(FdLimitCheck::new(process.clone(), args.fd_limit)?),
        Box::new(MemoryLockCheck::new(
            process.clone(),
            args.mlockall_requested,
        )),
        Box::new(MaxThreadsCheck::new(process.clone())),
        Box::new(MaxAddressSpaceCheck::new(process.clone(), host.clone())),
        Box::new(MaxMapCountCheck::new(process.clone())),
        Box::new(ClientVmCheck::new(runtime.clone())),
        Box::new(SerialGcCheck::new(runtime.clone())),
        Box::new(SyscallFilterCheck::new(
            process.clone(),
            args.syscall_filter_requested,
        )),
        Box::new(OnErrorForkRiskCheck::new(process.clone(), runtime.clone())),
        Box::new(OnOutOfMemoryErrorForkRiskCheck::new(
            process.clone(),
            runtime.clone(),
        )),
        Box::new(G1GcVersionCheck::new(runtime)),
    ];
    Ok(checks)
}

async fn health() -> &'static str {
    "ok"
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bootcheck=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let publish_addr = args.publish_addr.unwrap_or(args.bind_addr);
    let transport = BoundTransport::new(vec![args.bind_addr], publish_addr);

    let process: Rc<dyn ProcessProbe> = Rc::new(LinuxProcessProbe);
    let runtime: Rc<dyn RuntimeProbe> = Rc::new(FixedRuntimeProbe::default());
    let host: Rc<dyn HostDescriptor> = Rc::new(RealHost);

    let checks = build_checks(&args, process, runtime, host)
        .context("failed to construct bootstrap check catalogue")?;
    let logger = TracingLogger;

    engine::run_for_transport(&transport, &checks, "bootcheck-server", &logger)
        .context("bootstrap checks failed, refusing to start")?;

    info!("bootstrap checks passed, starting server");

    let app = Router::new()
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(args.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", args.bind_addr))?;
    info!("listening on {}", args.bind_addr);

    axum::serve(listener, app)
        .await
        .context("server error")?;

    Ok(())
}
