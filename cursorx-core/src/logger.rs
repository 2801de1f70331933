use log::LevelFilter;

/// Controls which cursor events are logged, and at what level.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct LogSettings {
    pub close_errors_level: LevelFilter,
    pub type_mismatch_level: LevelFilter,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            close_errors_level: LevelFilter::Warn,
            type_mismatch_level: LevelFilter::Debug,
        }
    }
}

impl LogSettings {
    /// Log errors that were swallowed while closing a wrapped cursor at the given level.
    pub fn log_close_errors(mut self, level: LevelFilter) -> Self {
        self.close_errors_level = level;
        self
    }

    /// Log reads that failed because the requested type did not match the stored value.
    pub fn log_type_mismatches(mut self, level: LevelFilter) -> Self {
        self.type_mismatch_level = level;
        self
    }

    /// Turn off all logging.
    pub fn disable(self) -> Self {
        self.log_close_errors(LevelFilter::Off)
            .log_type_mismatches(LevelFilter::Off)
    }
}

// Yes these look silly. `tracing` doesn't currently support dynamic levels
// https://github.com/tokio-rs/tracing/issues/372
#[doc(hidden)]
#[macro_export]
macro_rules! private_tracing_dynamic_enabled {
    (target: $target:expr, $level:expr) => {{
        use ::tracing::Level;

        match $level {
            Level::ERROR => ::tracing::enabled!(target: $target, Level::ERROR),
            Level::WARN => ::tracing::enabled!(target: $target, Level::WARN),
            Level::INFO => ::tracing::enabled!(target: $target, Level::INFO),
            Level::DEBUG => ::tracing::enabled!(target: $target, Level::DEBUG),
            Level::TRACE => ::tracing::enabled!(target: $target, Level::TRACE),
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! private_tracing_dynamic_event {
    (target: $target:expr, $level:expr, $($args:tt)*) => {{
        use ::tracing::Level;

        match $level {
            Level::ERROR => ::tracing::event!(target: $target, Level::ERROR, $($args)*),
            Level::WARN => ::tracing::event!(target: $target, Level::WARN, $($args)*),
            Level::INFO => ::tracing::event!(target: $target, Level::INFO, $($args)*),
            Level::DEBUG => ::tracing::event!(target: $target, Level::DEBUG, $($args)*),
            Level::TRACE => ::tracing::event!(target: $target, Level::TRACE, $($args)*),
        }
    }};
}

#[doc(hidden)]
pub fn private_level_filter_to_levels(
    filter: LevelFilter,
) -> Option<(tracing::Level, log::Level)> {
    let tracing_level = match filter {
        LevelFilter::Error => Some(tracing::Level::ERROR),
        LevelFilter::Warn => Some(tracing::Level::WARN),
        LevelFilter::Info => Some(tracing::Level::INFO),
        LevelFilter::Debug => Some(tracing::Level::DEBUG),
        LevelFilter::Trace => Some(tracing::Level::TRACE),
        LevelFilter::Off => None,
    };

    tracing_level.zip(filter.to_level())
}

/// Emit `message` on `target` at `filter`, through whichever of `log` or `tracing`
/// is listening.
macro_rules! log_at {
    (target: $target:literal, $filter:expr, $($args:tt)*) => {{
        if let Some((tracing_level, log_level)) =
            $crate::logger::private_level_filter_to_levels($filter)
        {
            // The enabled level could be set from either tracing world or log world, so check both
            // to see if logging should be enabled for our level
            let log_is_enabled = ::log::log_enabled!(target: $target, log_level)
                || $crate::private_tracing_dynamic_enabled!(target: $target, tracing_level);

            if log_is_enabled {
                $crate::private_tracing_dynamic_event!(
                    target: $target,
                    tracing_level,
                    $($args)*
                );
            }
        }
    }};
}
