use std::net::Ipv4Addr;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

use cheercast_core::net::{DEFAULT_GROUP, DEFAULT_PORT, DEFAULT_TTL};
use cheercast_core::{ChannelConfig, CheerMessage, MulticastChannel, RecvError};

#[derive(Parser, Debug)]
#[command(name = "cheercast")]
#[command(version)]
#[command(
    about = "Send and receive CheerLights colour events over UDP multicast.",
    long_about = None,
    after_help = "Examples:\n  cheercast send \"red sky at night\"\n  cheercast listen --json\n  cheercast send --group 224.1.1.1 --port 5123 \"go green\""
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct EndpointArgs {
    /// Multicast group address
    #[arg(long, default_value_t = DEFAULT_GROUP)]
    group: Ipv4Addr,

    /// UDP port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a colour from each message and transmit it on the group.
    Send {
        #[command(flatten)]
        endpoint: EndpointArgs,

        /// Router hops a datagram may cross
        #[arg(long, default_value_t = DEFAULT_TTL)]
        ttl: u32,

        /// Messages; the first recognized colour name in each is used
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Join the group and log every decoded message.
    Listen {
        #[command(flatten)]
        endpoint: EndpointArgs,

        /// Print one JSON object per message to stdout
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Send {
            endpoint,
            ttl,
            text,
        } => cmd_send(endpoint, ttl, text),
        Commands::Listen { endpoint, json } => cmd_listen(endpoint, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

fn cmd_send(endpoint: EndpointArgs, ttl: u32, text: Vec<String>) -> Result<(), CliError> {
    // Resolve every message before opening the socket so a colour-free
    // argument fails without sending anything.
    let mut messages = Vec::with_capacity(text.len());
    for entry in &text {
        let message = CheerMessage::from_text(entry).map_err(|err| {
            CliError::new(
                err.to_string(),
                Some("include one of the CheerLights colour names, e.g. red or oldlace".to_string()),
            )
        })?;
        messages.push(message);
    }

    let config = ChannelConfig {
        group: endpoint.group,
        port: endpoint.port,
        ttl,
    };
    let channel = result_context(
        MulticastChannel::connect(&config),
        "failed to open multicast sender",
    )?;

    for message in &messages {
        result_context(channel.send(message), "send failed")?;
        println!("{message}");
    }
    Ok(())
}

fn cmd_listen(endpoint: EndpointArgs, json: bool) -> Result<(), CliError> {
    let config = ChannelConfig {
        group: endpoint.group,
        port: endpoint.port,
        ttl: DEFAULT_TTL,
    };
    let mut channel = result_context(
        MulticastChannel::bind(&config),
        "failed to join multicast group",
    )?;

    info!("listening on {}:{}", config.group, config.port);
    loop {
        match channel.recv() {
            Ok((message, from)) => {
                if json {
                    println!(
                        "{}",
                        serde_json::json!({
                            "from": from.to_string(),
                            "colour": message.colour().packed(),
                            "text": message.text(),
                        })
                    );
                } else {
                    info!("{from}: {message}");
                }
            }
            Err(RecvError::Decode(err)) => warn!("dropping datagram: {err}"),
            Err(RecvError::Io(err)) => {
                return Err(anyhow::Error::new(err)
                    .context("receive failed")
                    .into());
            }
        }
    }
}

fn result_context<T, E>(result: Result<T, E>, context: &'static str) -> Result<T, CliError>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(context).map_err(Into::into)
}
