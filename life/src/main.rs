use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{Simulation, TickRate};

mod args;

use args::Args;

/// Whether this binary was built with the graphical front-end
const GUI_AVAILABLE: bool = cfg!(feature = "gui");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Graphical,
    Text,
}

/// `--text` always wins; otherwise try the window when the build has one.
fn select_mode(args: &Args, gui_available: bool) -> Mode {
    if args.text {
        return Mode::Text;
    }
    if !gui_available {
        if args.gui {
            log::warn!("Graphical mode not available in this build. Falling back to text-only mode.");
        }
        return Mode::Text;
    }
    Mode::Graphical
}

fn new_simulation(args: &Args) -> Simulation {
    let rng = match args.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    Simulation::new(args.rows, args.cols, rng)
}

fn run_text(mut simulation: Simulation, args: &Args) -> anyhow::Result<()> {
    log::info!("Running in text-only mode.");
    simulation.set_tick_rate(TickRate::from_interval(args.speed));
    text::run(simulation).context("text interface failed")?;
    log::info!("Simulation ended.");
    Ok(())
}

/// Runs `gui`, handing the session to `text` when the window cannot be opened.
#[cfg_attr(not(feature = "gui"), allow(dead_code))]
fn run_with_fallback<G, E, T>(simulation: Simulation, gui: G, text: T) -> anyhow::Result<()>
where
    G: FnOnce(Simulation) -> Result<(), E>,
    E: std::fmt::Display,
    T: FnOnce(Simulation) -> anyhow::Result<()>,
{
    match gui(simulation.clone()) {
        Ok(()) => Ok(()),
        Err(err) => {
            log::error!("Failed to start graphical mode: {}", err);
            log::warn!("Falling back to text-only mode.");
            text(simulation)
        }
    }
}

#[cfg(feature = "gui")]
fn run_graphical(simulation: Simulation, args: &Args) -> anyhow::Result<()> {
    log::info!("Running in graphical mode.");
    run_with_fallback(
        simulation,
        |simulation| gui::run(simulation, args.cell_size),
        |simulation| run_text(simulation, args),
    )
}

#[cfg(not(feature = "gui"))]
fn run_graphical(simulation: Simulation, args: &Args) -> anyhow::Result<()> {
    run_text(simulation, args)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = args::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{}", args::USAGE);
        return Ok(());
    }

    log::info!("Grid size: {}x{}", args.rows, args.cols);
    let simulation = new_simulation(&args);

    match select_mode(&args, GUI_AVAILABLE) {
        Mode::Graphical => run_graphical(simulation, &args),
        Mode::Text => run_text(simulation, &args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(gui: bool, text: bool) -> Args {
        Args {
            gui,
            text,
            ..Args::default()
        }
    }

    #[test]
    fn test_text_flag_wins() {
        assert_eq!(select_mode(&args(false, true), true), Mode::Text);
        assert_eq!(select_mode(&args(true, true), true), Mode::Text);
    }

    #[test]
    fn test_graphical_when_available() {
        assert_eq!(select_mode(&args(false, false), true), Mode::Graphical);
        assert_eq!(select_mode(&args(true, false), true), Mode::Graphical);
    }

    #[test]
    fn test_text_when_gui_missing() {
        assert_eq!(select_mode(&args(false, false), false), Mode::Text);
        assert_eq!(select_mode(&args(true, false), false), Mode::Text);
    }

    #[test]
    fn test_gui_failure_falls_back_to_text() {
        let simulation = Simulation::seeded(7, 5, 3);
        let expected = simulation.grid().clone();
        let mut text_ran = false;

        run_with_fallback(
            simulation,
            |_| Err("no display available"),
            |fallback| {
                text_ran = true;
                assert_eq!(fallback.grid(), &expected);
                assert_eq!(fallback.generation(), 0);
                Ok(())
            },
        )
        .unwrap();
        assert!(text_ran);
    }

    #[test]
    fn test_gui_success_skips_text() {
        let simulation = Simulation::seeded(4, 4, 1);
        let mut text_ran = false;

        run_with_fallback(
            simulation,
            |_| Ok::<(), &str>(()),
            |_| {
                text_ran = true;
                Ok(())
            },
        )
        .unwrap();
        assert!(!text_ran);
    }

    #[test]
    fn test_text_error_after_fallback_is_reported() {
        let simulation = Simulation::seeded(4, 4, 1);
        let result = run_with_fallback(
            simulation,
            |_| Err("no display available"),
            |_| anyhow::bail!("not a terminal"),
        );
        assert_eq!(result.unwrap_err().to_string(), "not a terminal");
    }

    #[test]
    fn test_seeded_simulation_is_reproducible() {
        let args = Args {
            rows: 8,
            cols: 9,
            seed: Some(5),
            ..Args::default()
        };
        let a = new_simulation(&args);
        let b = new_simulation(&args);
        assert_eq!(a.grid(), b.grid());
        assert_eq!((a.grid().rows(), a.grid().cols()), (8, 9));
    }
}
