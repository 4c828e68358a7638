//! Server initialization utilities
//!
//! Provides standardized tracing setup and the `serve_stdio!` macro
//! for consistent MCP server initialization across all servers.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging for MCP servers
///
/// Sets up logging to stderr (stdout is reserved for MCP protocol) with:
/// - Formatted output without ANSI colors (for clean logs)
/// - Environment-based filtering via RUST_LOG
/// - Default log level of `info` for the specified crate
///
/// Set `LOG_FORMAT=json` for structured JSON output (useful for production/log aggregation).
/// Default is human-readable text output.
///
/// # Arguments
///
/// * `crate_name` - The name of the MCP server crate (e.g., "slack_webhook_mcp")
///
/// # Example
///
/// ```rust,ignore
/// mcp_common::init_tracing("my_mcp");
/// ```
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let filter = env_filter(crate_name)?;
    let use_json = is_json_format(std::env::var("LOG_FORMAT").ok().as_deref());

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

fn env_filter(crate_name: &str) -> anyhow::Result<EnvFilter> {
    let directive = format!("{}=info", crate_name);
    Ok(EnvFilter::from_default_env().add_directive(directive.parse()?))
}

fn is_json_format(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("json"))
}

/// Macro for standardized MCP server initialization
///
/// Expands to a `#[tokio::main] async fn main()` that:
///
/// 1. Initializes tracing to stderr
/// 2. Builds the server with `<$server_type>::from_env()`, exiting with an
///    error before serving if the configuration is rejected
/// 3. Serves via stdio transport
/// 4. Waits for shutdown
///
/// # Arguments
///
/// * `$server_type` - The server struct type. It must provide
///   `fn from_env() -> Result<Self, E>` where `E: std::error::Error + Send + Sync + 'static`.
/// * `$crate_name` - String literal for the crate name (used in logging)
///
/// # Example
///
/// ```rust,ignore
/// use my_mcp::MyMcpServer;
///
/// mcp_common::serve_stdio!(MyMcpServer, "my_mcp");
/// ```
#[macro_export]
macro_rules! serve_stdio {
    ($server_type:ty, $crate_name:expr) => {
        #[tokio::main]
        async fn main() -> anyhow::Result<()> {
            use rmcp::ServiceExt;

            $crate::init_tracing($crate_name)?;

            tracing::info!(concat!("Starting ", $crate_name, " MCP Server"));

            let server = match <$server_type>::from_env() {
                Ok(server) => server,
                Err(e) => {
                    tracing::error!(error = %e, "Invalid configuration, refusing to start");
                    return Err(e.into());
                }
            };
            let service = server.serve(rmcp::transport::stdio()).await?;

            tracing::info!("Server running on stdio, waiting for requests...");

            service.waiting().await?;

            tracing::info!("Server shutting down");
            Ok(())
        }
    };
}
