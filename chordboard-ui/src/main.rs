mod input;
mod keymap;
mod midi;
mod runtime;

use std::fs::File;

use input::CrosstermInput;
use midi::MidiSink;

fn init_logging(verbose: bool) {
    use simplelog::*;

    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let log_path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("chordboard")
        .join("chordboard.log");

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = File::create(&log_path).unwrap_or_else(|_| {
        File::create("/tmp/chordboard.log").expect("Cannot create log file")
    });

    WriteLogger::init(log_level, Config::default(), log_file)
        .expect("Failed to initialize logger");

    log::info!("chordboard starting (log level: {:?})", log_level);
}

fn main() -> std::io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    init_logging(verbose);

    // Device failure is fatal and reported before the terminal is touched.
    let mut sink = match MidiSink::open(0) {
        Ok(sink) => sink,
        Err(err) => {
            log::error!("startup aborted: {err}");
            eprintln!("chordboard: {err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = sink.set_instrument(runtime::GUITAR_PROGRAM) {
        log::error!("startup aborted: {err}");
        eprintln!("chordboard: {err}");
        std::process::exit(1);
    }
    log::info!("instrument set on '{}'", sink.port_name());

    let mut backend = CrosstermInput::new();
    backend.start()?;
    let result = runtime::run(&mut backend, sink);
    backend.stop()?;
    result
}
