use serde::Serialize;

use crate::checker::FileResult;
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    threshold: usize,
    total: usize,
    files: &'a [FileResult],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, files: &[FileResult], threshold: usize) -> Result<String> {
        let output = JsonOutput {
            threshold,
            total: files.len(),
            files,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
