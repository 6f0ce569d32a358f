// ============================================================
// Layer 6 — Command Extractor
// ============================================================
// Runs an external named-entity recogniser once per request.
//
// Protocol:
//   stdin  ← the text to analyse (UTF-8, then EOF)
//   stdout → JSON array of {"value": ..., "entity_group": ...}
//            (any other fields, e.g. "score", are ignored)
//   exit 0 on success
//
// The command line is split on whitespace into program + args;
// no shell is involved.

use std::{
    io::Write,
    process::{Command, Stdio},
    thread,
};

use crate::domain::entity::ExtractedEntity;
use crate::domain::error::{AdvisorError, Result};
use crate::domain::traits::EntityExtractor;

#[derive(Debug, Clone)]
pub struct CommandExtractor {
    program: String,
    args:    Vec<String>,
}

impl CommandExtractor {
    /// Parse `"python ner.py --device cpu"` into program and args.
    pub fn from_command_line(command_line: &str) -> Result<Self> {
        let mut parts = command_line.split_whitespace().map(String::from);
        let program = parts.next().ok_or_else(|| {
            AdvisorError::ExtractionFailure("NER command is empty".into())
        })?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl EntityExtractor for CommandExtractor {
    fn extract(&self, text: &str) -> Result<Vec<ExtractedEntity>> {
        tracing::debug!("Running NER command: {} {:?}", self.program, self.args);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                AdvisorError::ExtractionFailure(format!("cannot start '{}': {e}", self.program))
            })?;

        // stdout is drained while the writer thread feeds stdin;
        // the pipe closes when the thread drops it.
        let writer = child.stdin.take().map(|mut stdin| {
            let bytes = text.as_bytes().to_vec();
            thread::spawn(move || stdin.write_all(&bytes))
        });

        let output = child.wait_with_output().map_err(|e| {
            AdvisorError::ExtractionFailure(format!("'{}' did not finish: {e}", self.program))
        })?;

        if let Some(writer) = writer {
            writer
                .join()
                .map_err(|_| {
                    AdvisorError::ExtractionFailure(format!("stdin writer for '{}' panicked", self.program))
                })?
                .map_err(|e| {
                    AdvisorError::ExtractionFailure(format!("cannot write to '{}': {e}", self.program))
                })?;
        }

        if !output.status.success() {
            return Err(AdvisorError::ExtractionFailure(format!(
                "'{}' exited with {}",
                self.program, output.status
            )));
        }

        let entities: Vec<ExtractedEntity> = serde_json::from_slice(&output.stdout).map_err(|e| {
            AdvisorError::ExtractionFailure(format!("invalid JSON from '{}': {e}", self.program))
        })?;

        tracing::debug!("NER command returned {} entities", entities.len());
        Ok(entities)
    }
}
