use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use cuecard_agent::{validate_script, AgentConfig, AgentOptions, AgentRegistry, ScriptedAgent};
use cuecard_core::{Action, EventSource, NoopLlm, State};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cuecard", version, about = "Inspect and replay scripted agents")]
struct Cli {
    /// JSON agent configuration file.
    #[arg(long, global = true, env = "CUECARD_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, global = true, env = "CUECARD_MAX_ITERATIONS")]
    max_iterations: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// List registered agents.
    List,
    /// Print an agent's script as JSON.
    Fixtures {
        agent: String,
        #[arg(long)]
        compact: bool,
    },
    /// Validate one agent's script, or every registered script.
    Check { agent: Option<String> },
    /// Evaluate a single step and print the resulting action.
    Step {
        agent: String,
        #[arg(long, default_value_t = 0)]
        iteration: u32,
        /// Latest user message.
        #[arg(long)]
        message: Option<String>,
    },
    /// Step from iteration 0 until a terminal action or the iteration limit.
    Walk {
        agent: String,
        #[arg(long)]
        message: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = AgentRegistry::builtin();

    match &cli.command {
        Command::List => {
            for name in registry.names() {
                println!("{name}");
            }
        }
        Command::Fixtures { agent, compact } => {
            let agent = build_agent(&registry, &cli, agent)?;
            let rendered = if *compact {
                serde_json::to_string(agent.script())?
            } else {
                serde_json::to_string_pretty(agent.script())?
            };
            println!("{rendered}");
        }
        Command::Check { agent } => {
            let names: Vec<String> = match agent {
                Some(name) => vec![name.clone()],
                None => registry.names().into_iter().map(str::to_string).collect(),
            };
            check(&registry, &cli, &names)?;
        }
        Command::Step {
            agent,
            iteration,
            message,
        } => {
            let agent = build_agent(&registry, &cli, agent)?;
            let state = initial_state(*iteration, message.as_deref());
            println!("{}", serde_json::to_string(&agent.step(&state))?);
        }
        Command::Walk { agent, message } => {
            let agent = build_agent(&registry, &cli, agent)?;
            let limit = agent.config().max_iterations;
            let taken = walk(agent.as_ref(), initial_state(0, message.as_deref()), limit);

            for (iteration, action) in &taken {
                println!("{}", json!({ "iteration": iteration, "action": action }));
            }
            if !taken.last().is_some_and(|(_, action)| action.is_terminal()) {
                tracing::warn!(limit, agent = agent.name(), "iteration limit reached");
            }
        }
    }

    Ok(())
}

/// Validates each named script, printing one report line per agent.
/// Fails if any script is inconsistent; otherwise returns how many were checked.
fn check(registry: &AgentRegistry, cli: &Cli, names: &[String]) -> Result<usize> {
    let mut failures = 0;
    for name in names {
        let agent = build_agent(registry, cli, name)?;
        match validate_script(agent.script()) {
            Ok(()) => println!("{name}: ok ({} steps)", agent.script().len()),
            Err(err) => {
                failures += 1;
                println!("{name}: {err}");
            }
        }
    }
    if failures > 0 {
        bail!("{failures} of {} scripts failed validation", names.len());
    }
    Ok(names.len())
}

/// Steps `agent` from `state` until it returns a terminal action or the
/// iteration reaches `limit`. The terminal action, if any, is the last entry.
fn walk(agent: &dyn ScriptedAgent, mut state: State, limit: u32) -> Vec<(u32, Action)> {
    let mut taken = Vec::new();

    while state.iteration < limit {
        let action = agent.step(&state);
        taken.push((state.iteration, action.clone()));

        let terminal = action.is_terminal();
        state.push_action(EventSource::Agent, action);
        if terminal {
            break;
        }
        state.advance();
    }

    taken
}

fn load_config(cli: &Cli, agent: Option<&str>) -> Result<AgentConfig> {
    let base = match &cli.config {
        Some(path) => AgentConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AgentConfig::default(),
    };
    let config = base.merge(&AgentOptions {
        agent: agent.map(str::to_string),
        max_iterations: cli.max_iterations,
        model: None,
    });
    config.validate()?;
    Ok(config)
}

fn build_agent(
    registry: &AgentRegistry,
    cli: &Cli,
    agent: &str,
) -> Result<Box<dyn ScriptedAgent>> {
    let config = load_config(cli, Some(agent))?;
    let name = config.agent.clone();
    registry
        .create(&name, Arc::new(NoopLlm), config)
        .with_context(|| format!("available agents: {}", registry.names().join(", ")))
}

fn initial_state(iteration: u32, message: Option<&str>) -> State {
    let mut state = State::new().with_iteration(iteration);
    if let Some(message) = message {
        state.push_user_message(message);
    }
    state
}
