use anyhow::{Context, Result};
use bqcheck::cli::commands::check::{CheckCommand, CheckCommandHandler};
use bqcheck::cli::commands::ddl::{DdlCommand, DdlCommandHandler};
use bqcheck::cli::commands::init::{InitCommand, InitCommandHandler};
use bqcheck::cli::commands::validate::{ValidateCommand, ValidateCommandHandler};
use bqcheck::cli::{Cli, Commands};
use clap::Parser;
use std::env;
use std::process;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // CLIをパースして実行
    let cli = Cli::parse();

    // カラー出力の制御
    if cli.no_color {
        colored::control::set_override(false);
    }

    // ロギングを初期化（レポートはstdoutに出すため、ログはstderrへ）
    let filter = if cli.verbose {
        EnvFilter::new("bqcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // 非同期ランタイムを作成して実行
    let runtime = tokio::runtime::Runtime::new()
        .context("Failed to create Tokio runtime")
        .unwrap_or_else(|e| {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        });

    let result = runtime.block_on(run_command(cli));

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// コマンドを実行する
async fn run_command(cli: Cli) -> Result<String> {
    // プロジェクトのルートパスを取得
    let project_path = env::current_dir()?;

    match cli.command {
        Commands::Init { force } => {
            let handler = InitCommandHandler::new();
            let command = InitCommand {
                project_path,
                force,
            };
            handler.execute(&command)?;
            Ok("Project initialized.".to_string())
        }

        Commands::Validate { definitions } => {
            let handler = ValidateCommandHandler::new();
            let command = ValidateCommand {
                project_path,
                config_path: cli.config,
                definitions,
            };
            handler.execute(&command)
        }

        Commands::Check { definitions } => {
            let handler = CheckCommandHandler::new();
            let command = CheckCommand {
                project_path,
                config_path: cli.config,
                definitions,
            };
            handler.execute(&command).await
        }

        Commands::Ddl { definitions } => {
            let handler = DdlCommandHandler::new();
            let command = DdlCommand {
                project_path,
                config_path: cli.config,
                definitions,
            };
            handler.execute(&command)
        }
    }
}
