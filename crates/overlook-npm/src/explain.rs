//! npm explain invocation and response parsing

use crate::{Error, Result};
use overlook_core::ExplainEntry;
use serde_json::Value;
use std::path::PathBuf;
use std::process::Command;

/// Runs one batched `npm explain <names...> --json` against a project
/// directory.
///
/// npm is the only manager exposing a structured explain response carrying
/// override provenance, so this invoker serves every detected manager; it
/// reads the installed `node_modules` tree regardless of which tool wrote it.
#[derive(Debug, Clone)]
pub struct ExplainInvoker {
    dir: PathBuf,
}

impl ExplainInvoker {
    /// Create an invoker for the given project directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Explain why each of `names` is installed, in one batched call.
    ///
    /// npm may exit non-zero while still emitting usable JSON (unrelated
    /// peer-dependency warnings, some names missing from the graph), so the
    /// output is parsed regardless of the exit status. Only unusable output
    /// classifies as [`Error::QueryInvocationFailed`].
    pub fn explain(&self, names: &[String]) -> Result<Vec<ExplainEntry>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let output = Command::new("npm")
            .arg("explain")
            .args(names)
            .arg("--json")
            .current_dir(&self.dir)
            .output()
            .map_err(|e| Error::QueryInvocationFailed(format!("could not run npm: {e}")))?;

        parse_explain_output(&output.stdout)
    }
}

impl overlook_core::Explainer for ExplainInvoker {
    fn explain(&self, names: &[String]) -> overlook_core::Result<Vec<ExplainEntry>> {
        ExplainInvoker::explain(self, names).map_err(Into::into)
    }
}

/// Parse raw `npm explain --json` output into explain entries.
///
/// Accepts the usual entry array and the bare single-entry object. A
/// structured `{"error": ...}` payload or anything unparseable is a failed
/// invocation.
pub fn parse_explain_output(stdout: &[u8]) -> Result<Vec<ExplainEntry>> {
    let value: Value = serde_json::from_slice(stdout)
        .map_err(|e| Error::QueryInvocationFailed(format!("unparseable output: {e}")))?;

    if let Some(error) = value.get("error") {
        let summary = error
            .get("summary")
            .and_then(Value::as_str)
            .unwrap_or("npm reported an error");
        return Err(Error::QueryInvocationFailed(summary.to_string()));
    }

    let entries = match value {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<ExplainEntry>, _>>(),
        single @ Value::Object(_) => serde_json::from_value(single).map(|entry| vec![entry]),
        other => {
            return Err(Error::QueryInvocationFailed(format!(
                "unexpected output shape: {other}"
            )))
        }
    };

    entries.map_err(|e| Error::QueryInvocationFailed(format!("malformed explain entry: {e}")))
}
