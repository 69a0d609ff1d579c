use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::Mutex;

use dictionary::{DictionaryError, LookupProvider, RawResponse};

use crate::utilities::Console;

/// Feeds canned input lines and records everything the session writes.
#[derive(Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    pub prompts: Vec<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|line| format!("{line}\n")).collect(),
            ..Default::default()
        }
    }

    pub fn printed(&self, line: &str) -> bool {
        self.output.iter().any(|printed| printed == line)
    }

    pub fn position(&self, line: &str) -> Option<usize> {
        self.output.iter().position(|printed| printed == line)
    }

    pub fn count(&self, line: &str) -> usize {
        self.output.iter().filter(|printed| *printed == line).count()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}

/// Answers from a fixed table; unknown words are not found.
#[derive(Default)]
pub struct StubProvider {
    words: HashMap<String, RawResponse>,
    failures: HashMap<String, fn() -> DictionaryError>,
    requested: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn with_word(mut self, word: &str, raw: serde_json::Value) -> Self {
        let raw = serde_json::from_value(raw).unwrap();
        self.words.insert(word.to_string(), raw);
        self
    }

    pub fn with_failure(mut self, word: &str, error: fn() -> DictionaryError) -> Self {
        self.failures.insert(word.to_string(), error);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LookupProvider for StubProvider {
    async fn fetch(&self, word: &str) -> Result<RawResponse, DictionaryError> {
        self.requested.lock().unwrap().push(word.to_string());
        if let Some(error) = self.failures.get(word) {
            return Err(error());
        }
        Ok(self
            .words
            .get(word)
            .cloned()
            .unwrap_or_else(RawResponse::not_found))
    }
}
