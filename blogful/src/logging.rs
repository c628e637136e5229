use std::ffi::OsStr;
use std::path::PathBuf;
use syslog::{BasicLogger, Facility};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogTarget {
    Stderr,
    Syslog,
}

impl From<bool> for LogTarget {
    fn from(use_syslog: bool) -> Self {
        if use_syslog {
            LogTarget::Syslog
        } else {
            LogTarget::Stderr
        }
    }
}

pub fn init_tool_logging() {
    init_logging_env()
}

pub fn init_daemon_logging(target: LogTarget) {
    match target {
        LogTarget::Syslog => init_logging_syslog(),
        LogTarget::Stderr => init_tool_logging(),
    }
}

fn init_logging_syslog() {
    log
        ::set_boxed_logger(
            Box::new(
                BasicLogger::new(
                    syslog::unix(
                        syslog::Formatter3164 {
                            facility: Facility::LOG_USER,
                            hostname: None,
                            process: std::env::args()
                                .next()
                                .and_then(|name|
                                    PathBuf::from(name)
                                        .file_name()
                                        .map(|n|
                                            OsStr::to_string_lossy(n)
                                                .into_owned()
                                        )
                                )
                                .unwrap_or_default(),
                            pid: std::process::id(),
                        }
                    ).unwrap_or_else(|e| {
                        eprintln!("syslog initialization failed: {e}");
                        std::process::exit(1)
                    })
                )
            )
        )
        .map(|()| log::set_max_level(log::LevelFilter::Info))
        .unwrap_or_else(|e| {
            eprintln!("syslog initialization failed: {e}");
            std::process::exit(1)
        });
}

fn init_logging_env() {
    env_logger::builder()
        .filter_level(
            if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            }
        )
        .parse_default_env()
        .init()
}
