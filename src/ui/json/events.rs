//! Shared JSON event types for consistent CLI output.

use serde::Serialize;

use schoolspace::CalculationResult;

/// The computed program, emitted once per `compute` run.
#[derive(Debug, Clone, Serialize)]
pub struct ResultEvent<'a> {
    pub event: &'static str,
    pub command: &'static str,
    pub version: &'static str,
    pub result: &'a CalculationResult,
    pub disclaimer: &'static str,
}

impl<'a> ResultEvent<'a> {
    pub fn new(result: &'a CalculationResult) -> Self {
        Self {
            event: "result",
            command: "compute",
            version: env!("CARGO_PKG_VERSION"),
            result,
            disclaimer: schoolspace::docs::DISCLAIMER,
        }
    }
}

/// A named payload such as one regulatory table.
#[derive(Debug, Clone, Serialize)]
pub struct DataEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    pub name: &'a str,
    pub data: T,
}

impl<'a, T: Serialize> DataEvent<'a, T> {
    pub fn new(command: &'a str, name: &'a str, data: T) -> Self {
        Self {
            event: "data",
            command,
            name,
            data,
        }
    }
}

/// Non-fatal problem, e.g. an unknown config key.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> WarningEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            command,
            message: message.into(),
        }
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
        }
    }
}
