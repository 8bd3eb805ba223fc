// nextr: NextR expression evaluator

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use nextr::config::{Config, Mode};
use nextr::pipeline::{self, RunOutcome};
use nextr::ui::App;

fn main() -> ExitCode {
    let config = Config::from_env();

    if let Err(e) = nextr::logging::init(&config.log_target, config.log_level) {
        eprintln!("Error: cannot initialize logging: {}", e);
        return ExitCode::FAILURE;
    }
    log::info!("starting in {:?} mode", config.mode);

    let status = match &config.mode {
        Mode::Once(expr) => run_once(&config, expr),
        Mode::Plain => run_plain(&config),
        Mode::Interactive => run_interactive(),
    };

    nextr::logging::flush();
    match status {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Print the optional token list and tree, then the report lines.
fn print_outcome(out: &mut impl Write, config: &Config, outcome: &RunOutcome) -> io::Result<()> {
    if config.show_tokens {
        for token in &outcome.tokens {
            writeln!(out, "  {}", token)?;
        }
    }
    if config.show_tree {
        write!(out, "{}", outcome.tree)?;
    }
    for line in outcome.report() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn run_once(config: &Config, expr: &str) -> io::Result<ExitCode> {
    let outcome = pipeline::run(expr);
    print_outcome(&mut io::stdout().lock(), config, &outcome)?;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_plain(config: &Config) -> io::Result<ExitCode> {
    let stdin = io::stdin();
    let show_prompt = stdin.is_terminal();
    let mut stdout = io::stdout().lock();

    loop {
        if show_prompt {
            write!(stdout, "{}", config.prompt)?;
            stdout.flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }

        let outcome = pipeline::run(line);
        print_outcome(&mut stdout, config, &outcome)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn run_interactive() -> io::Result<ExitCode> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map(|()| ExitCode::SUCCESS)
}
