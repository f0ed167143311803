use log::{
    kv::{self, Key, Value, VisitSource},
    LevelFilter, Metadata, Record, SetLoggerError,
};
use std::fmt::Write;

struct BookstoreLogger;

struct Fields<'a>(&'a mut String);

impl<'kvs> VisitSource<'kvs> for Fields<'_> {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        let _ = write!(self.0, " {}={}", key, value);
        Ok(())
    }
}

impl log::Log for BookstoreLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut fields = String::new();
            let _ = record.key_values().visit(&mut Fields(&mut fields));
            eprintln!("{} - {}{}", record.level(), record.args(), fields);
        }
    }

    fn flush(&self) {}
}

static LOGGER: BookstoreLogger = BookstoreLogger;

/// Maps `-v` occurrences to a level; warnings only by default.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(7), LevelFilter::Trace);
    }
}
