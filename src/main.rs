use anyhow::Result;
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use speakdrill::app::{run_analyse_command, run_practice_command};
use speakdrill::cli::{Cli, Commands};
use speakdrill::config::Config;
use speakdrill::diagnostics::check_dependencies;
use speakdrill::topics::list_topics;
use std::io::IsTerminal;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let config = load_config(cli.config.as_deref())?;
            if std::io::stdin().is_terminal() {
                // Practice mode
                run_practice_command(
                    config,
                    cli.topic,
                    cli.duration,
                    cli.language,
                    cli.recognizer,
                    cli.quiet,
                    cli.verbose,
                    cli.once,
                )
                .await?;
            } else {
                // Pipe mode: stdin has a transcript to analyse
                run_analyse_command(config, None, false, false).await?;
            }
        }
        Some(Commands::Topics) => {
            list_topics_command();
        }
        Some(Commands::Analyse { file, html, json }) => {
            let config = load_config(cli.config.as_deref())?;
            run_analyse_command(config, file, html, json).await?;
        }
        Some(Commands::Check) => {
            let config = load_config(cli.config.as_deref())?;
            check_dependencies(&config);
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "speakdrill",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

/// Load configuration: an explicit path must exist; the default path may not.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(&Config::default_path()),
    };
    Ok(config.with_env_overrides())
}

fn list_topics_command() {
    for topic in list_topics() {
        println!("{}", topic.name.bold());
        println!("  {}", topic.question);
        println!("  {}", format!("Hint: {}", topic.hint).dimmed());
    }
}
