use std::fmt::Debug;

use tracing::{error, info};

use crate::error::{ExportError, ExportOperation};

/// Receives one callback per pipeline stage.
pub trait IExportLogger: Send + Sync + Debug {
    fn log_stage_started(&self, correlation_id: Option<&str>, operation: ExportOperation);
    fn log_stage_completed(&self, correlation_id: Option<&str>, operation: ExportOperation);
    fn log_stage_failed(
        &self,
        correlation_id: Option<&str>,
        operation: ExportOperation,
        error: &ExportError,
    );
}

#[derive(Debug, Default)]
pub struct TracingExportLogger;

impl IExportLogger for TracingExportLogger {
    fn log_stage_started(&self, correlation_id: Option<&str>, operation: ExportOperation) {
        let cid = correlation_id.unwrap_or("none");
        info!(cid, operation = %operation, "export stage started");
    }

    fn log_stage_completed(&self, correlation_id: Option<&str>, operation: ExportOperation) {
        let cid = correlation_id.unwrap_or("none");
        info!(cid, operation = %operation, "export stage completed");
    }

    fn log_stage_failed(
        &self,
        correlation_id: Option<&str>,
        operation: ExportOperation,
        error: &ExportError,
    ) {
        let cid = correlation_id.unwrap_or("none");
        error!(cid, operation = %operation, error = %error, "export stage failed");
    }
}
