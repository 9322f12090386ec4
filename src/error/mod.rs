// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error module for Mauka Dict.
//!
//! Each component defines its own error enum; [`MaukaError`] aggregates them
//! for callers that span several components (configuration, the command-line
//! front end). Errors can be wrapped in an [`ErrorContext`] and handed to the
//! process-wide [`ErrorReporter`].

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use thiserror::Error;
use tracing_error::{SpanTrace, SpanTraceStatus};

use crate::data_structures::dictionary::DictionaryError;
use crate::data_structures::kmp_matcher::KmpError;

pub mod config;

/// Result type alias used throughout Mauka Dict.
pub type MaukaResult<T> = Result<T, MaukaError>;

/// Core error enum for Mauka Dict.
#[derive(Error, Debug)]
pub enum MaukaError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors reported by a substring dictionary or the registry.
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Errors reported by the single-pattern matcher.
    #[error("Matcher error: {0}")]
    Matcher(#[from] KmpError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: MaukaError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,

    /// Active tracing spans at the point the context was built.
    pub span_trace: Option<SpanTrace>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: impl Into<MaukaError>, component: S) -> Self {
        Self {
            error: error.into(),
            component: component.into(),
            details: None,
            span_trace: None,
        }
    }

    /// Adds detail information to the error context.
    ///
    /// # Arguments
    ///
    /// * `details` - Additional context information to help with debugging
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Captures the current span trace into the context.
    ///
    /// The trace is only kept when an `ErrorLayer` is installed in the active
    /// subscriber; otherwise there is nothing to capture.
    pub fn with_span_trace(mut self) -> Self {
        let trace = SpanTrace::capture();
        if trace.status() == SpanTraceStatus::CAPTURED {
            self.span_trace = Some(trace);
        }
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        if let Some(trace) = &self.span_trace {
            write!(f, "\nSpan trace:\n{trace}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    ///
    /// # Arguments
    ///
    /// * `context` - The error context to report
    fn report(&self, context: ErrorContext);
}

/// A simple error reporter implementation that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl TracingErrorReporter {
    /// Creates a new tracing reporter.
    pub fn new() -> Self {
        Self
    }
}

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        let trace = context.span_trace.as_ref().map(ToString::to_string);
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            span_trace = trace.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Global error reporter accessor.
#[derive(Debug, Default)]
pub struct ErrorReporting {
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl ErrorReporting {
    /// Set the reporter.
    ///
    /// # Arguments
    ///
    /// * `reporter` - The error reporter to use
    pub fn set_reporter(&mut self, reporter: Arc<dyn ErrorReporter>) {
        self.reporter = Some(reporter);
    }

    /// Whether a reporter has been installed.
    pub fn has_reporter(&self) -> bool {
        self.reporter.is_some()
    }

    /// Report an error with context.
    ///
    /// # Arguments
    ///
    /// * `context` - The error context to report
    pub fn report(&self, context: ErrorContext) {
        if let Some(reporter) = &self.reporter {
            reporter.report(context);
        } else {
            // Fallback to standard error output if no reporter is configured
            eprintln!("Error: {context}");
        }
    }
}

/// Error reporting singleton instance.
static ERROR_REPORTING: Lazy<RwLock<ErrorReporting>> =
    Lazy::new(|| RwLock::new(ErrorReporting::default()));

/// Set the global error reporter.
///
/// # Arguments
///
/// * `reporter` - The error reporter to use
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    ERROR_REPORTING.write().set_reporter(reporter);
}

/// Report an error through the global error reporter.
///
/// # Arguments
///
/// * `context` - The error context to report
pub fn report_error(context: ErrorContext) {
    ERROR_REPORTING.read().report(context);
}

/// Whether a global error reporter has been installed.
pub fn has_error_reporter() -> bool {
    ERROR_REPORTING.read().has_reporter()
}
