//! Program request files
//!
//! A complete `ProgramRequest` serialized as JSON, for callers that script
//! the calculator instead of passing flags.

use std::fs;
use std::path::Path;

use crate::application::ProgramRequest;
use crate::error::{SchoolspaceError, SchoolspaceResult};

pub fn load_request(path: &Path) -> SchoolspaceResult<ProgramRequest> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| SchoolspaceError::InvalidRequest {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}
