use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gateway_auth_core::config::{ConfigKeys, DEFAULT_PUBLIC_MESSAGE, DEFAULT_SECURE_MESSAGE};
use gateway_auth_core::{HandlerConfig, PublicHandler, SecureHandler, TokenAuthorizer};
use gateway_functions::{gateway, lambda, GatewayState};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gateway-functions", version, about = "Gateway-fronted greeting, authorizer and protected functions")]
struct Cli {
    /// Message returned by the public endpoints
    #[arg(long, global = true, env = ConfigKeys::PUBLIC_MESSAGE, default_value = DEFAULT_PUBLIC_MESSAGE)]
    public_message: String,

    /// Message returned by the protected endpoint
    #[arg(long, global = true, env = ConfigKeys::SECURE_MESSAGE, default_value = DEFAULT_SECURE_MESSAGE)]
    secure_message: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve one function inside the Lambda runtime
    Lambda {
        #[arg(long, value_enum, env = ConfigKeys::FUNCTION)]
        function: Function,
    },
    /// Run all functions behind a local gateway emulator
    Serve {
        #[arg(long, env = ConfigKeys::BIND, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,

        #[arg(long, env = ConfigKeys::STAGE, default_value = "local")]
        stage: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Function {
    Authorizer,
    Public,
    Secure,
}

fn init_tracing(under_lambda: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // CloudWatch stamps every line itself and does not render colour codes.
    if under_lambda {
        builder.with_ansi(false).without_time().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(matches!(cli.command, Command::Lambda { .. }));

    let config = HandlerConfig::default()
        .with_public_message(cli.public_message)
        .with_secure_message(cli.secure_message);

    match cli.command {
        Command::Lambda { function } => {
            tracing::info!(?function, "starting lambda function");
            let outcome = match function {
                Function::Authorizer => lambda::run_authorizer(TokenAuthorizer::new()).await,
                Function::Public => lambda::run_function(PublicHandler::new(&config)?).await,
                Function::Secure => lambda::run_function(SecureHandler::new(&config)?).await,
            };
            outcome.map_err(|e| anyhow!(e))
        }
        Command::Serve { bind, stage } => {
            let state = GatewayState::new(&config, stage)?;
            let listener = tokio::net::TcpListener::bind(bind)
                .await
                .with_context(|| format!("failed to bind {bind}"))?;

            gateway::serve(listener, state, async {
                if let Err(err) = tokio::signal::ctrl_c().await {
                    tracing::error!("failed to listen for ctrl-c: {err}");
                }
                tracing::info!("Shutting down local gateway");
            })
            .await?;
            Ok(())
        }
    }
}
