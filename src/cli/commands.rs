use clap::{Parser, Subcommand};

/// Dependency discovery for application stacks
#[derive(Parser, Debug)]
#[command(
    name = "stackgraph",
    about = "Discovers and orders the dependency stack of a platform application",
    version,
    author,
    long_about = "stackgraph walks the service bindings of a root application, resolves \
                  hidden app-to-app dependencies expressed through user-provided service \
                  URLs, and returns every discovered component in dependency-first order. \
                  It can run as an HTTP service or perform a one-shot discovery."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Run the discovery HTTP service",
        long_about = "Starts the HTTP service exposing GET /v1/discover/{rootID} behind \
                      basic authentication. Platform connection and credentials come from \
                      the environment (CF_API_URL, CF_API_TOKEN, AUTH_USER, AUTH_PASS).\n\n\
                      Examples:\n  \
                      stackgraph serve\n  \
                      stackgraph serve --port 9090"
    )]
    Serve(ServeArgs),

    #[command(
        about = "Discover one application stack and print it as JSON",
        long_about = "Performs a single discovery against the configured platform and \
                      prints the dependency-first component list to stdout.\n\n\
                      Examples:\n  \
                      stackgraph discover 3f1d...\n  \
                      stackgraph discover 3f1d... --compact"
    )]
    Discover(DiscoverArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, value_name = "HOST", help = "Bind address (overrides HOST env var)")]
    pub host: Option<String>,

    #[arg(
        short = 'p',
        long,
        value_name = "PORT",
        help = "Bind port (overrides PORT env var)"
    )]
    pub port: Option<u16>,
}

#[derive(Parser, Debug, Clone)]
pub struct DiscoverArgs {
    #[arg(value_name = "ROOT_ID", help = "Platform identifier of the root application")]
    pub root_id: String,

    #[arg(long, help = "Print compact JSON instead of pretty-printed output")]
    pub compact: bool,
}
