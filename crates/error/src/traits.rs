//! # Error Traits
//!
//! Conversion traits for error handling.

use crate::{AppError, Result};

/// Extension methods for Result types.
pub trait ResultExt<T> {
    fn with_context<C: ToString>(self, context: C) -> Result<T>;
    fn context<C: ToString>(self, context: C) -> Result<T>
    where
        Self: Sized;
    fn log_error(self) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<AppError> + std::fmt::Display,
{
    fn with_context<C: ToString>(self, context: C) -> Result<T> {
        self.map_err(|e| {
            let err: AppError = e.into();
            err.context(context)
        })
    }

    fn context<C: ToString>(self, context: C) -> Result<T>
    where
        Self: Sized,
    {
        self.with_context(context)
    }

    fn log_error(self) -> Result<T> {
        self.map_err(|e| {
            let err: AppError = e.into();
            if err.is_client_error() {
                tracing::warn!(error = %err, code = err.code(), "Operation rejected");
            } else {
                tracing::error!(error = %err, code = err.code(), "Error occurred");
            }
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context() {
        let result: Result<i32> = Err(AppError::not_found("Member"));
        let result = result.context("Failed to load member");

        let err = result.unwrap_err();
        assert_eq!(err.message(), "Failed to load member: Member");
    }

    #[test]
    fn test_context_on_db_err() {
        let result: std::result::Result<(), sea_orm::DbErr> = Err(sea_orm::DbErr::Custom("boom".to_string()));
        let err = result.context("Inserting authority").unwrap_err();
        assert_eq!(err.code(), "DATABASE_ERROR");
        assert!(err.message().starts_with("Inserting authority: "));
    }

    #[test]
    fn test_log_error() {
        let result: Result<i32> = Err(AppError::not_found("Member"));
        let err = result.log_error().unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");

        let result: std::result::Result<(), sea_orm::DbErr> = Err(sea_orm::DbErr::Custom("boom".to_string()));
        assert_eq!(result.log_error().unwrap_err().code(), "DATABASE_ERROR");
    }
}
