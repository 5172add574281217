use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Maps the CLI verbosity flags to a max log level.
pub fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::WARN;
    }
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

// Initializer for logger. Logs go to stderr so stdout stays for status lines.
pub fn init(level: Level) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0, false), Level::INFO);
        assert_eq!(level_for(1, false), Level::DEBUG);
        assert_eq!(level_for(4, false), Level::TRACE);
        assert_eq!(level_for(2, true), Level::WARN);
    }
}
