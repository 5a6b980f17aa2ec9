//! `bmi-exchange`: run queries through a single-round tool-use exchange.
//!
//! Reads `.env`, then `ANTHROPIC_*` variables, then command-line flags.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use tool_exchange::capabilities::CapabilitySet;
use tool_exchange::client::AnthropicBuilder;
use tool_exchange::config::ExchangeConfig;
use tool_exchange::error::{ExchangeError, format_summary, summarize_error};
use tool_exchange::exchange::{ExchangeEvent, ExchangeOptions, ToolExchange};
use tool_exchange::telemetry;

const SAMPLE_QUERY: &str = "I weigh 75 kg and I'm 180 cm tall. What's my BMI?";

#[derive(Parser, Debug)]
#[command(author, version, about = "Ask the model, let it call the BMI calculator, print the answer")]
struct Cli {
    /// Queries to run, one exchange each
    #[arg(value_name = "QUERY")]
    queries: Vec<String>,

    /// Model identifier [overrides ANTHROPIC_MODEL]
    #[arg(long)]
    model: Option<String>,

    /// Output token cap per request [overrides ANTHROPIC_MAX_TOKENS]
    #[arg(long)]
    max_tokens: Option<u32>,

    /// API base URL [overrides ANTHROPIC_BASE_URL]
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds [overrides ANTHROPIC_TIMEOUT_SECS]
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print error details on failure
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Environment first, then flags on top.
    fn config(&self) -> Result<ExchangeConfig, ExchangeError> {
        self.overlay(ExchangeConfig::from_env()?)
    }

    fn overlay(&self, mut config: ExchangeConfig) -> Result<ExchangeConfig, ExchangeError> {
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(max_tokens) = self.max_tokens {
            config.max_tokens = max_tokens;
        }
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        config.validate()?;
        Ok(config)
    }

    fn queries(&self) -> Vec<String> {
        if self.queries.is_empty() {
            vec![SAMPLE_QUERY.to_string()]
        } else {
            self.queries.clone()
        }
    }
}

fn print_event(event: &ExchangeEvent) {
    match event {
        ExchangeEvent::QuerySent { user_message } => {
            println!("User: {user_message}");
            println!("-> sending query with tool declarations");
        }
        ExchangeEvent::StopReason { round, reason } => {
            println!("<- response {round}: stop_reason = {reason}");
        }
        ExchangeEvent::InvocationRequested {
            id,
            name,
            arguments,
        } => {
            println!("   tool requested: {name} ({id})");
            println!("   arguments: {arguments}");
        }
        ExchangeEvent::InvocationCompleted {
            payload, is_error, ..
        } => {
            let label = if *is_error { "error" } else { "result" };
            println!("   {label}: {payload}");
        }
        ExchangeEvent::ResultsSent { count } => {
            println!("-> sending {count} tool result(s)");
        }
        ExchangeEvent::FinalAnswer { .. } => {}
    }
}

fn report_failure(err: &ExchangeError, verbose: bool) {
    eprintln!("Error: {err}");
    eprint!("{}", format_summary(&summarize_error(err), verbose));
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let _guard = match telemetry::init_from_env() {
        Ok(guard) => guard,
        Err(e) => {
            report_failure(&e, cli.verbose);
            return ExitCode::FAILURE;
        }
    };

    let exchange = match build_exchange(&cli) {
        Ok(exchange) => exchange,
        Err(e) => {
            report_failure(&e, cli.verbose);
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;
    for query in cli.queries() {
        println!("{}", "=".repeat(60));
        match exchange.process_query(&query).await {
            Ok(answer) => println!("\nAssistant: {answer}\n"),
            Err(e) => {
                tracing::error!(error = %e, "exchange failed");
                report_failure(&e, cli.verbose);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn build_exchange(
    cli: &Cli,
) -> Result<ToolExchange<tool_exchange::client::AnthropicClient>, ExchangeError> {
    let config = cli.config()?;
    let client = AnthropicBuilder::from_config(&config).build()?;
    let capabilities = CapabilitySet::standard()?;
    tracing::info!(
        model = %config.model,
        capabilities = ?capabilities.names(),
        "exchange ready"
    );
    let options = ExchangeOptions::from_config(&config).with_observer(print_event);
    Ok(ToolExchange::new(
        Arc::new(client),
        Arc::new(capabilities),
        options,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "bmi-exchange",
            "--model",
            "claude-test",
            "--max-tokens",
            "256",
            "--timeout-secs",
            "5",
            "What is my BMI?",
        ])
        .unwrap();
        let config = cli.overlay(ExchangeConfig::default()).unwrap();
        assert_eq!(config.model, "claude-test");
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(cli.queries(), vec!["What is my BMI?".to_string()]);
    }

    #[test]
    fn sample_query_when_none_given() {
        let cli = Cli::try_parse_from(["bmi-exchange"]).unwrap();
        assert_eq!(cli.queries(), vec![SAMPLE_QUERY.to_string()]);
    }

    #[test]
    fn zero_max_tokens_is_rejected() {
        let cli = Cli::try_parse_from(["bmi-exchange", "--max-tokens", "0"]).unwrap();
        assert!(matches!(
            cli.overlay(ExchangeConfig::default()),
            Err(ExchangeError::ConfigurationError(_))
        ));
    }

    #[test]
    fn flags_win_over_environment_values() {
        let env = ExchangeConfig::from_lookup(|key| match key {
            "ANTHROPIC_MODEL" => Some("claude-from-env".to_string()),
            "ANTHROPIC_MAX_TOKENS" => Some("2048".to_string()),
            _ => None,
        })
        .unwrap();
        let cli = Cli::try_parse_from(["bmi-exchange", "--max-tokens", "128"]).unwrap();
        let config = cli.overlay(env).unwrap();
        assert_eq!(config.model, "claude-from-env");
        assert_eq!(config.max_tokens, 128);
    }

    #[test]
    fn bad_environment_value_is_a_configuration_error() {
        let err = ExchangeConfig::from_lookup(|key| {
            (key == "ANTHROPIC_MAX_TOKENS").then(|| "lots".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ExchangeError::ConfigurationError(_)));
        // the flag itself no longer reads the variable
        let cli = Cli::try_parse_from(["bmi-exchange"]).unwrap();
        assert!(cli.max_tokens.is_none());
    }
}
