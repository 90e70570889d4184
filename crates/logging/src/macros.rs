//! # Logging Macros
//!
//! Convenience macros for structured logging of data-layer activity.

/// Log a database operation with table name and duration.
///
/// # Example
///
/// ```rust
/// use logging::log_db_query;
///
/// let start = std::time::Instant::now();
/// log_db_query!("insert", "party_member", start.elapsed().as_millis());
/// ```
#[macro_export]
macro_rules! log_db_query {
    ($query:expr, $table:expr, $duration:expr) => {
        $crate::debug!(
            target: "database",
            query = %$query,
            table = %$table,
            duration_ms = %$duration,
            "Database query"
        )
    };
}

/// Log the resolution of a lazily loaded reference.
///
/// `$cached` tells whether the value was already resolved and no fetch happened.
#[macro_export]
macro_rules! log_lazy_load {
    ($entity:expr, $id:expr, $cached:expr) => {
        $crate::trace!(
            target: "database",
            entity = %$entity,
            id = %$id,
            cached = $cached,
            "Lazy reference resolved"
        )
    };
}

/// Measure and log the duration of a block of code.
///
/// # Example
///
/// ```rust
/// use logging::measure_duration;
///
/// let rows = measure_duration!("database", "party_member", {
///     vec![1, 2, 3]
/// });
/// assert_eq!(rows.len(), 3);
/// ```
#[macro_export]
macro_rules! measure_duration {
    ($target:expr, $context:expr, $block:block) => {{
        let start = std::time::Instant::now();
        let result = $block;
        let duration = start.elapsed();
        $crate::debug!(
            target: $target,
            context = %$context,
            duration_ms = duration.as_secs_f64() * 1000.0,
            "Operation completed"
        );
        result
    }};
}
