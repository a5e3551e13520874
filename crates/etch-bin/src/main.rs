//! Etch entrypoint: reads protocol lines from stdin (or a script file) and
//! writes command output to stdout. All session state lives in the
//! interpreter; this binary only wires up logging, configuration, and I/O.

use anyhow::{Context, Result};
use clap::Parser;
use core_command::Interpreter;
use core_config::Config;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "etch", version, about = "Weighted-undo text buffer processor")]
struct Args {
    /// Optional command script; stdin is read when omitted.
    pub script: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `etch.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

fn configure_logging(config: &Config) -> Option<WorkerGuard> {
    let log_path = config.log_file();
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }
    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = log_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| core_config::DEFAULT_LOG_FILE.into());

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .try_init()
    {
        Ok(_) => Some(guard),
        Err(_err) => {
            // Global tracing subscriber already installed; drop guard so the
            // writer shuts down.
            None
        }
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

/// Drive the interpreter over a line stream, printing each output line.
fn run(input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut interpreter = Interpreter::new();
    let mut lines = 0u64;
    for line in input.lines() {
        let line = line?;
        lines += 1;
        if let Some(output) = interpreter.handle_line(&line) {
            writeln!(out, "{output}")?;
        }
    }
    debug!(target: "runtime", lines, "input_drained");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = core_config::load_from(args.config.clone())?;
    let _log_guard = configure_logging(&config);
    install_panic_hook();
    info!(target: "runtime", "startup");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.script.as_ref() {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("open script {}", path.display()))?;
            info!(target: "io", script = %path.display(), "script_input");
            run(BufReader::new(file), &mut out)?;
        }
        None => run(io::stdin().lock(), &mut out)?,
    }
    out.flush()?;

    info!(target: "runtime", "shutdown");
    Ok(())
}
