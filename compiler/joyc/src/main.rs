//! Joy command-line interpreter.
//!
//! `joy` with no arguments reads requests from stdin, one line at a time,
//! continuing a line until it forms complete requests.

use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::Once;

use joyc::{needs_more_input, Shell};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Only installs a subscriber when `JOY_LOG` (or `RUST_LOG`) is set, e.g.
/// `JOY_LOG=joy_eval=trace`. Nested replays render as an indented tree.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let directives = std::env::var("JOY_LOG").or_else(|_| std::env::var("RUST_LOG"));
        if let Ok(directives) = directives {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(EnvFilter::new(directives))
                .init();
        }
    });
}

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        repl();
        return;
    };

    match command.as_str() {
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: joy run <file.joy>");
                std::process::exit(1);
            };
            run_file(path);
        }
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: joy eval \"<program>\"");
                eprintln!("Example: joy eval \"2 3 + .\"");
                std::process::exit(1);
            }
            if !run_source(&args[2..].join(" ")) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Joy {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare path runs the file.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("joy"))
            {
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Joy interpreter");
    println!();
    println!("Usage: joy [command]");
    println!();
    println!("Commands:");
    println!("  (none)             Read requests from stdin");
    println!("  run <file.joy>     Run a source file");
    println!("  eval \"<program>\"   Run a program given on the command line");
    println!("  help               Show this message");
    println!("  version            Show version");
    println!();
    println!("Environment:");
    println!("  JOY_LOG            Tracing filter, e.g. joy_eval=trace");
}

fn run_file(path: &str) {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read '{path}': {err}");
            std::process::exit(1);
        }
    };
    if !run_source(&source) {
        std::process::exit(1);
    }
}

/// Runs one program in a fresh session. Returns `false` if it failed.
fn run_source(source: &str) -> bool {
    let mut shell = Shell::new();
    run_in(&mut shell, source)
}

fn run_in(shell: &mut Shell, source: &str) -> bool {
    match shell.run(source) {
        Ok(text) => {
            if !text.is_empty() {
                println!("{text}");
            }
            true
        }
        Err(err) => {
            print!("{}", shell.take_output());
            eprintln!("{}", err.render(source));
            false
        }
    }
}

fn repl() {
    let interactive = io::stdin().is_terminal();
    let mut shell = Shell::new();
    let mut pending = String::new();

    if interactive {
        prompt(&pending);
    }
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("error: {err}");
                break;
            }
        };
        if !pending.is_empty() {
            pending.push('\n');
        }
        pending.push_str(&line);

        if !needs_more_input(&pending) {
            let source = std::mem::take(&mut pending);
            run_in(&mut shell, &source);
        }
        if interactive {
            prompt(&pending);
        }
    }

    // Input ended mid-request; run it so the error is reported.
    if !pending.trim().is_empty() {
        run_in(&mut shell, &pending);
    }
}

fn prompt(pending: &str) {
    let marker = if pending.is_empty() { "> " } else { "| " };
    print!("{marker}");
    let _ = io::stdout().flush();
}
