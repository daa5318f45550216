//! Shared test utilities for camelk-modeline.
//!
//! This module provides common helpers used across multiple test modules.
//! It is only compiled when running tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use tower_lsp::lsp_types::{
    CompletionParams, PartialResultParams, Position, TextDocumentIdentifier,
    TextDocumentPositionParams, Url, WorkDoneProgressParams,
};

/// Creates a temporary workspace root for settings files.
///
/// Returns a tuple of (TempDir, PathBuf) where:
/// - TempDir: The temp directory handle (must be kept alive for the test duration)
/// - PathBuf: The path to the workspace subdirectory
pub fn create_test_workspace_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let workspace_dir = temp_dir.path().join("workspace");
    fs::create_dir(&workspace_dir).expect("Failed to create workspace subdirectory");
    (temp_dir, workspace_dir)
}

/// Completion request for `file:///tmp/Routes.java` at `line:character`.
pub fn completion_params(line: u32, character: u32) -> CompletionParams {
    CompletionParams {
        text_document_position: TextDocumentPositionParams {
            text_document: TextDocumentIdentifier {
                uri: Url::parse("file:///tmp/Routes.java").expect("valid test uri"),
            },
            position: Position { line, character },
        },
        work_done_progress_params: WorkDoneProgressParams::default(),
        partial_result_params: PartialResultParams::default(),
        context: None,
    }
}
