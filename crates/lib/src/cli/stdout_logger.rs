use log::{Level, Log};

pub(crate) struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if record.level() >= Level::Debug {
            println!(
                "{file}:{line}: {}: {}",
                record.level(),
                record.args(),
                file = record.file().unwrap_or_default(),
                line = record.line().unwrap_or_default()
            );
        } else {
            println!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}
