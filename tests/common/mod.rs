use std::cell::Cell;
use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use nexa::chat::{Console, Delay, DelayError};

/// Replays canned input lines and records everything written.
///
/// Prompts are recorded in the transcript too, so tests can check ordering.
#[derive(Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    pub transcript: Vec<String>,
    pub prompts: Vec<String>,
    pub history: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    pub fn count(&self, needle: &str) -> usize {
        self.transcript.iter().filter(|line| line.as_str() == needle).count()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        self.transcript.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }

    fn remember(&mut self, entry: &str) {
        self.history.push(entry.to_string());
    }
}

/// Returns immediately and counts the waits it was asked for
#[derive(Default)]
pub struct InstantDelay {
    pub waits: Cell<usize>,
}

impl Delay for InstantDelay {
    fn pause(&self, _duration: Duration) -> Result<(), DelayError> {
        self.waits.set(self.waits.get() + 1);
        Ok(())
    }
}

/// Fails every wait once `healthy` waits have succeeded, as a dropped
/// connection would
#[derive(Default)]
pub struct FailingDelay {
    pub healthy: usize,
    calls: Cell<usize>,
}

impl FailingDelay {
    pub fn after(healthy: usize) -> Self {
        Self { healthy, calls: Cell::new(0) }
    }
}

impl Delay for FailingDelay {
    fn pause(&self, _duration: Duration) -> Result<(), DelayError> {
        let calls = self.calls.get();
        self.calls.set(calls + 1);
        if calls < self.healthy {
            Ok(())
        } else {
            Err(DelayError::Interrupted("network unreachable".to_string()))
        }
    }
}
