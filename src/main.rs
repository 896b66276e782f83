//! mcp-jira CLI entry point.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use mcp_jira::cli::Cli;
use mcp_jira::runner::ChecklistRunner;
use mcp_jira::shell::{interrupt, is_ci, SystemRunner};
use mcp_jira::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; the checklist owns stdout.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("mcp_jira=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mcp_jira=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("mcp-jira starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    interrupt::install_handler();

    let cwd = std::env::current_dir().unwrap_or_default();
    let settings = cli.settings(cwd);

    let is_interactive =
        !is_ci() && std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    let mut ui = create_ui(is_interactive, cli.output_mode());

    let runner = SystemRunner::with_cwd(settings.project_root());
    let checklist = ChecklistRunner::new(&settings, &runner).with_pull_policy(cli.pull_policy());

    match checklist.run(ui.as_mut()) {
        Ok(report) => ExitCode::from(report.exit_code()),
        Err(e) if e.is_interrupt() => {
            ui.error("Check cancelled by user");
            ExitCode::from(1)
        }
        Err(e) => {
            ui.error(&format!("Unexpected error: {}", e));
            ExitCode::from(1)
        }
    }
}
