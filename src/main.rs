// std imports
use std::{
    fmt,
    io::{BufWriter, Write, stdout},
    process,
};

// third-party imports
use clap::{Parser, error::ErrorKind};
use env_logger::{self as logger};

// local imports
use class_finder::{
    App, CompiledPattern, Options, Settings, cli,
    error::*,
    input::InputReference,
};

const CLASS_FINDER_DEBUG_LOG: &str = "CLASS_FINDER_DEBUG_LOG";
const CLASS_FINDER_DEBUG_LOG_STYLE: &str = "CLASS_FINDER_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(CLASS_FINDER_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(CLASS_FINDER_DEBUG_LOG)
                .write_style(CLASS_FINDER_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run(opt: cli::Opt) -> Result<()> {
    let settings = Settings::load(opt.config.as_deref())?;
    log::debug!("settings: {settings:?}");

    let pattern = CompiledPattern::new(&opt.pattern)?;
    log::debug!(
        "compiled pattern {:?}: package={} class={} case-sensitive={}",
        opt.pattern,
        pattern.package_wildcard(),
        pattern.class_wildcard(),
        pattern.case_sensitive(),
    );

    let app = App::new(Options {
        pattern,
        sort: settings.sort && !opt.no_sort,
        limit: opt.limit.or(settings.limit),
        unique: opt.unique || settings.unique,
    });

    let input = InputReference::from(opt.names_file).open()?;
    let mut output = BufWriter::new(stdout().lock());

    log::debug!("run the app on {}", input.reference.description());

    match app.run(input.stream, &mut output) {
        Err(err) if err.is_broken_pipe() => Ok(()),
        result => result,
    }
}

fn main() {
    bootstrap();

    let opt = match cli::Opt::try_parse_from(wild::args()) {
        Ok(opt) => opt,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(err) => {
            log::debug!("invalid arguments: {err}");
            print_line(&mut stdout(), cli::USAGE);
            return;
        }
    };

    if let Err(err) = run(opt) {
        print_line(&mut stdout(), format_args!("Error: {}", err));
        process::exit(1);
    }
}

/// Writes a single line, ignoring failures such as a closed pipe.
fn print_line(output: &mut dyn Write, line: impl fmt::Display) {
    writeln!(output, "{}", line).ok();
}
