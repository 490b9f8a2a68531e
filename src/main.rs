//! gate-lab: an interactive truth-table workbench for boolean logic gates.
//!
//! ## Usage
//!
//! ```bash
//! gate-lab                        # interactive session
//! gate-lab --export-and-exit      # write truth_tables.txt and exit
//! gate-lab -o tables.txt          # override the export destination
//! ```

use clap::Parser;
use gate_lab::config::Config;
use gate_lab::gate::{Bit, GateKind};
use gate_lab::panel::GatePanel;
use gate_lab::workbench::Workbench;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "gate-lab", version, about = "Interactive truth-table workbench for boolean logic gates")]
struct Cli {
    /// Export destination (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the truth tables and exit without an interactive session
    #[arg(long)]
    export_and_exit: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(output) = &cli.output {
        // CLI wins over the config file
        config.output = output.clone();
    }

    let mut bench = Workbench::new();

    if cli.export_and_exit {
        bench.export_all(&config.output)?;
        println!("Truth tables saved as {}", config.output.display());
        return Ok(());
    }

    println!("gate-lab: type 'help' for commands");
    render_all(&bench);

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if !dispatch(&mut bench, &config, line.trim()) {
            break;
        }
    }
    Ok(())
}

/// Runs one command line against the workbench. Returns `false` to quit.
fn dispatch(bench: &mut Workbench, config: &Config, line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    match *words.as_slice() {
        [] => {}
        ["quit"] | ["exit"] => return false,
        ["help"] => print_help(),
        ["show"] => render_all(bench),
        ["reset"] => {
            bench.reset_all();
            println!("All gates reset");
            render_all(bench);
        }
        ["export"] => match bench.export_all(&config.output) {
            Ok(()) => println!("Truth tables saved as {}", config.output.display()),
            Err(e) => println!("Export failed: {e}"),
        },
        ["toggle", gate, pin] => with_panel(bench, gate, |panel| match pin.to_ascii_lowercase().as_str() {
            "a" => {
                panel.toggle_a();
                true
            }
            "b" => {
                panel.toggle_b();
                true
            }
            _ => {
                println!("No such input: {pin} (expected a or b)");
                false
            }
        }),
        ["set", gate, pin, value] => {
            let Some(value) = parse_bit(value) else {
                return true;
            };
            with_panel(bench, gate, |panel| match pin.to_ascii_lowercase().as_str() {
                "a" => {
                    panel.set_input_a(value);
                    true
                }
                "b" => {
                    panel.set_input_b(value);
                    true
                }
                _ => {
                    println!("No such input: {pin} (expected a or b)");
                    false
                }
            });
        }
        ["row", gate, a] => {
            if let Some(a) = parse_bit(a) {
                with_panel(bench, gate, |panel| {
                    panel.select_truth_row(a, 0);
                    true
                });
            }
        }
        ["row", gate, a, b] => {
            if let (Some(a), Some(b)) = (parse_bit(a), parse_bit(b)) {
                with_panel(bench, gate, |panel| {
                    panel.select_truth_row(a, b);
                    true
                });
            }
        }
        _ => println!("Unknown command; type 'help'"),
    }
    true
}

/// Looks up the named panel and runs `f` on it, re-rendering the panel when
/// `f` reports a state change.
fn with_panel(bench: &mut Workbench, gate: &str, f: impl FnOnce(&mut GatePanel) -> bool) {
    match gate.parse::<GateKind>() {
        Ok(kind) => {
            if f(bench.panel_mut(kind)) {
                print!("{}", render_panel(bench.panel(kind)));
            }
        }
        Err(e) => println!("{e}"),
    }
}

fn parse_bit(word: &str) -> Option<Bit> {
    match word {
        "0" => Some(0),
        "1" => Some(1),
        _ => {
            println!("Inputs must be 0 or 1, got: {word}");
            None
        }
    }
}

fn render_all(bench: &Workbench) {
    for panel in bench.panels() {
        print!("{}", render_panel(panel));
    }
}

/// Renders one panel: header with the LUT signature, the truth table with a
/// `>` marker on the highlighted row, and the live output indicator.
fn render_panel(panel: &GatePanel) -> String {
    let kind = panel.kind();
    let mut out = format!("{} Gate ({})\n", kind.name(), kind.init_literal());
    for (i, row) in panel.truth_rows().iter().enumerate() {
        let marker = if i == panel.highlighted_row() { '>' } else { ' ' };
        out.push_str(&format!("{marker} {row}\n"));
    }
    let lamp = if panel.output() != 0 { '*' } else { 'o' };
    if kind.is_unary() {
        out.push_str(&format!("A:{}  Output: {} {lamp}\n\n", panel.input_a(), panel.output()));
    } else {
        out.push_str(&format!(
            "A:{} B:{}  Output: {} {lamp}\n\n",
            panel.input_a(),
            panel.input_b(),
            panel.output()
        ));
    }
    out
}

fn print_help() {
    println!("Commands:");
    println!("  show                 render every gate panel");
    println!("  toggle <gate> a|b    flip an input (b is fixed for NOT)");
    println!("  set <gate> a|b 0|1   drive an input to a level");
    println!("  row <gate> a [b]     select a truth row directly");
    println!("  reset                reset every gate to (0, 0)");
    println!("  export               write all truth tables to the output file");
    println!("  quit                 leave the session");
}
