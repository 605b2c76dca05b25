use std::{thread, time::Instant};

use anyhow::Context;
use toruslife::{GameOfLife, RuleTable, Strategy};

mod console;
mod options;
mod stats;

use stats::{BenchReport, Throughput};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };

    // everything that can reject the configuration runs before a grid exists
    let dims = args.dimensions()?;
    let fill = args.fill(dims)?;
    let strategy = args.strategy()?;
    let steps = args.steps()?;
    let sleep = args.sleep()?;
    let rng_seed = args.rng_seed()?;
    let rule = RuleTable::from_spec(&args.rule());

    if let Some(threads) = args.threads()? {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads.get())
            .build_global()
            .context("build thread pool")?;
        log::debug!("rayon pool with {} threads", threads);
    }
    let threads = match strategy {
        Strategy::Sequential => 1,
        Strategy::Parallel { .. } => rayon::current_num_threads(),
    };
    log::info!(
        "rule {} on {}x{}, {:?}, {} thread(s)",
        rule,
        dims.width(),
        dims.height(),
        strategy,
        threads
    );

    let grid = fill.create(dims, rng_seed)?;
    let mut game = GameOfLife::new(grid, rule, strategy);
    println!("alive: {}", game.alive_count());

    // benchmark mode: no drawing and a fixed number of generations
    if let (false, Some(steps)) = (args.draw(), steps) {
        let start = Instant::now();
        game.advance(steps);
        let report = BenchReport {
            steps,
            dims,
            threads,
            elapsed: start.elapsed(),
        };
        println!("{}", report);
        return Ok(());
    }

    let mut console = if args.draw() {
        Some(console::ConsoleRender::new()?)
    } else {
        None
    };

    let mut stats = Throughput::new(game.alive_count());
    'generations: while steps.is_none_or(|steps| game.generation() < steps) {
        let frame_start = Instant::now();

        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                match cmd {
                    console::ConsoleCommand::Exit => break 'generations,
                    console::ConsoleCommand::Handled => {}
                }
            }
            console.render(game.current())?;
        }

        // report metrics every 500ms, in the footer when drawing
        if stats.has_report() {
            let report = stats.report();
            if let Some(ref mut console) = console {
                console.set_report(report);
            } else {
                println!("{}", report);
            }
        }

        game.next_generation();
        stats.record(game.generation(), game.alive_count());

        if let Some(interval) = sleep {
            if let Some(rest) = interval.checked_sub(frame_start.elapsed()) {
                thread::sleep(rest);
            }
        }
    }
    std::mem::drop(console);

    println!("generations: {}, alive: {}", game.generation(), game.alive_count());
    Ok(())
}
