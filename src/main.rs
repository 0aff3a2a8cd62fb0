//! Bee Flap headless runner
//!
//! Drives the simulation without a renderer: the autopilot flaps, the frame
//! clock is a plain loop, and runs restart until the tick budget is spent.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use bee_flap::audio::LogSink;
    use bee_flap::persistence::{JsonFileStorage, MemoryStorage, Storage};
    use bee_flap::sim::autopilot;
    use bee_flap::{GameConfig, Platform, Profile, Session};

    /// Runner options
    #[derive(Debug, Clone)]
    struct RunConfig {
        ticks: u64,
        seed: u64,
        profile: Profile,
        width: f32,
        height: f32,
        store: Option<String>,
        autopilot: bool,
        quiet: bool,
    }

    impl Default for RunConfig {
        fn default() -> Self {
            Self {
                ticks: 36_000,
                seed: 42,
                profile: Platform::current().profile(),
                width: 1280.0,
                height: 720.0,
                store: None,
                autopilot: true,
                quiet: false,
            }
        }
    }

    fn parse_args() -> RunConfig {
        let args: Vec<String> = std::env::args().collect();
        let mut config = RunConfig::default();
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--ticks" => {
                    i += 1;
                    config.ticks = parse_value(&args, i, "--ticks");
                }
                "--seed" => {
                    i += 1;
                    config.seed = parse_value(&args, i, "--seed");
                }
                "--width" => {
                    i += 1;
                    config.width = parse_value(&args, i, "--width");
                }
                "--height" => {
                    i += 1;
                    config.height = parse_value(&args, i, "--height");
                }
                "--profile" => {
                    i += 1;
                    let name = args.get(i).map(String::as_str).unwrap_or("");
                    config.profile = Profile::from_str(name).unwrap_or_else(|| {
                        eprintln!("Unknown profile: {name}");
                        print_usage();
                        std::process::exit(1);
                    });
                }
                "--store" => {
                    i += 1;
                    config.store = args.get(i).cloned();
                }
                "--persist" => match JsonFileStorage::default_path() {
                    Ok(path) => config.store = Some(path.display().to_string()),
                    Err(e) => eprintln!("Cannot persist: {e}"),
                },
                "--no-autopilot" => config.autopilot = false,
                "--quiet" => config.quiet = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    eprintln!("Unknown argument: {other}");
                    print_usage();
                    std::process::exit(1);
                }
            }
            i += 1;
        }
        config
    }

    fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
        match args.get(i).and_then(|v| v.parse().ok()) {
            Some(value) => value,
            None => {
                eprintln!("{flag} requires a number");
                print_usage();
                std::process::exit(1);
            }
        }
    }

    fn print_usage() {
        eprintln!(
            "Bee Flap Headless Runner\n\
             \n\
             Usage: bee-flap [OPTIONS]\n\
             \n\
             Options:\n\
             \x20 --ticks N        Frames to simulate (default: 36000 = 10 min at 60 Hz)\n\
             \x20 --seed N         Obstacle RNG seed (default: 42)\n\
             \x20 --profile NAME   android | ios | desktop (default: this platform)\n\
             \x20 --width W        Play field width (default: 1280)\n\
             \x20 --height H       Play field height (default: 720)\n\
             \x20 --store FILE     Persist best score to a JSON file\n\
             \x20 --persist        Persist to the user config directory\n\
             \x20 --no-autopilot   Never flap (every run falls out)\n\
             \x20 --quiet          Only print the final summary\n\
             \x20 --help, -h       Show this help"
        );
    }

    /// Totals across all runs
    #[derive(Debug, Default)]
    struct RunStats {
        runs: u32,
        completed: u32,
        best_run: u32,
        highest_level: u32,
    }

    fn run<S: Storage>(config: &RunConfig, storage: S) -> RunStats {
        let game_config = GameConfig::new(config.profile, config.width, config.height);
        let mut session = Session::new(game_config, storage, config.seed).with_sound(LogSink);
        let mut stats = RunStats::default();

        session.start();
        for _ in 0..config.ticks {
            if config.autopilot && autopilot::should_jump(session.state(), session.config()) {
                session.jump();
            }
            let status = session.tick();
            session.drain_events();

            if status.is_finished() {
                let state = session.state();
                stats.runs += 1;
                stats.best_run = stats.best_run.max(state.score);
                stats.highest_level = stats.highest_level.max(state.level);
                if status == bee_flap::sim::GameStatus::Completed {
                    stats.completed += 1;
                }
                if !config.quiet {
                    println!(
                        "Run {:>4}: {:?} score={} level={} ticks={}",
                        stats.runs, status, state.score, state.level, state.time_ticks
                    );
                }
                session.restart();
            }
        }

        if !config.quiet {
            println!("Best score on record: {}", session.state().best_score);
        }
        stats
    }

    pub fn main() {
        env_logger::init();
        let config = parse_args();
        log::info!(
            "Bee Flap (native) starting: {} profile, {}x{}, {} ticks",
            config.profile.as_str(),
            config.width,
            config.height,
            config.ticks
        );

        let stats = match &config.store {
            Some(path) => match JsonFileStorage::open(path) {
                Ok(storage) => run(&config, storage),
                Err(e) => {
                    log::warn!("Could not open {}: {} - using memory store", path, e);
                    run(&config, MemoryStorage::new())
                }
            },
            None => run(&config, MemoryStorage::new()),
        };

        println!(
            "runs={} completed={} best_run={} highest_level={}",
            stats.runs, stats.completed, stats.best_run, stats.highest_level
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is bee_flap::web::wasm_start, this is just to satisfy the compiler
}
