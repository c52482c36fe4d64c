use std::io;
use std::thread;
use std::time::Duration;

use crossterm::{cursor, execute, terminal};

use lifesim::config::Params;
use lifesim::render;
use lifesim::sim::RunOutcome;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(42);
    let coverage_pct: f64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(75.0);

    // Fit the bordered rendering to the console: two columns per cell plus
    // the closing border, two rows per cell plus the status lines.
    let (term_cols, term_rows) = terminal::size().unwrap_or((80, 24));
    let fit_width = (term_cols as i32 - 1) / 2;
    let fit_height = (term_rows as i32 - 4) / 2;
    let width: i32 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(fit_width);
    let height: i32 = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(fit_height);
    let delay_ms: u64 = args.get(5).and_then(|s| s.parse().ok()).unwrap_or(200);

    let params = Params {
        coverage: coverage_pct / 100.0,
        ..Params::default()
    };

    eprintln!("Dimensions: {} x {}", width, height);
    eprintln!("Percent coverage: {}%", coverage_pct);
    eprintln!("Press RETURN to start the simulation");
    let mut line = String::new();
    io::stdin().read_line(&mut line).expect("failed to read stdin");

    let mut stdout = io::stdout();
    let delay = Duration::from_millis(delay_ms);

    let result = lifesim::simulate(seed, width, height, &params, |snapshot| {
        execute!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )
        .expect("terminal write failed");
        println!("{}", render::render_ansi(snapshot));
        println!("population: {}", snapshot.population());
        thread::sleep(delay);
        true
    });

    let (report, timings) = match result {
        Ok(ok) => ok,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    match report.outcome {
        RunOutcome::Stable => eprintln!(
            "Simulation complete: no more movement possible ({} generations)",
            report.generations
        ),
        RunOutcome::Halted => {
            eprintln!("Simulation halted after {} generations", report.generations)
        }
    }

    eprintln!("\nTimings:");
    for t in &timings {
        eprintln!("  {:10} {:8.1} ms", t.name, t.ms);
    }
}
