use std::io;

use dictionary::{normalize, DetailCategory, DictionaryError, LookupProvider, WordRecord};

use crate::utilities::{parse_choice, valid_choice, Console};

const GREETING: &str =
    "Welcome! Look up a word, then browse its synonyms, antonyms, similar words and rhymes.";
const GOODBYE: &str = "Goodbye!";
const WORD_PROMPT: &str = "Enter a word: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Welcome,
    PromptWord,
    EvaluateLookup,
    ShowDefinitions,
    PromptCategory,
    ShowDetails(DetailCategory),
    PromptNextAction,
    Terminated,
}

#[derive(Debug)]
pub enum Transition {
    To(State),
    Finish(SessionOutcome),
}

#[derive(Debug)]
pub enum SessionOutcome {
    /// The user picked "exit".
    Exited,
    /// Standard input reached end of file.
    InputClosed,
    /// The provider failed in a way another word can't fix.
    Aborted(DictionaryError),
}

impl SessionOutcome {
    pub fn exit_status(&self) -> u8 {
        match self {
            SessionOutcome::Exited | SessionOutcome::InputClosed => 0,
            SessionOutcome::Aborted(_) => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    BrowseCategory,
    NewWord,
    Exit,
}

impl NextAction {
    pub const ALL: [NextAction; 3] = [
        NextAction::BrowseCategory,
        NextAction::NewWord,
        NextAction::Exit,
    ];

    fn from_choice(choice: usize) -> Option<Self> {
        Self::ALL.get(choice.wrapping_sub(1)).copied()
    }

    fn describe(self, word: &str) -> String {
        match self {
            NextAction::BrowseCategory => format!("See more details for '{word}'"),
            NextAction::NewWord => "Look up a new word".to_string(),
            NextAction::Exit => "Exit".to_string(),
        }
    }
}

/// The interactive lookup loop. Holds at most one looked-up word at a time.
pub struct Session<'a, P, C> {
    provider: &'a P,
    console: &'a mut C,
    current: Option<WordRecord>,
}

impl<'a, P, C> Session<'a, P, C>
where
    P: LookupProvider,
    C: Console,
{
    pub fn new(provider: &'a P, console: &'a mut C) -> Self {
        Self {
            provider,
            console,
            current: None,
        }
    }

    pub fn current_word(&self) -> Option<&WordRecord> {
        self.current.as_ref()
    }

    pub async fn run(mut self) -> io::Result<SessionOutcome> {
        let mut state = State::Welcome;
        loop {
            state = match self.step(state).await? {
                Transition::To(next) => next,
                Transition::Finish(outcome) => return Ok(outcome),
            };
        }
    }

    pub async fn step(&mut self, state: State) -> io::Result<Transition> {
        tracing::trace!(?state, "entering state");
        match state {
            State::Welcome => {
                self.console.write_line(GREETING)?;
                Ok(Transition::To(State::PromptWord))
            }
            State::PromptWord => self.prompt_word().await,
            State::EvaluateLookup => self.evaluate_lookup(),
            State::ShowDefinitions => self.show_definitions(),
            State::PromptCategory => self.prompt_category(),
            State::ShowDetails(category) => self.show_details(category),
            State::PromptNextAction => self.prompt_next_action(),
            State::Terminated => Ok(Transition::Finish(SessionOutcome::Exited)),
        }
    }

    async fn prompt_word(&mut self) -> io::Result<Transition> {
        self.current = None;
        let Some(line) = self.console.read_line(WORD_PROMPT)? else {
            return Ok(input_closed());
        };
        let word = line.trim();
        tracing::info!(word, "looking up word");
        match self.provider.fetch(word).await {
            Ok(raw) => {
                self.current = Some(normalize(word, &raw));
                Ok(Transition::To(State::EvaluateLookup))
            }
            Err(error) if error.is_fatal() => {
                tracing::error!(word, %error, "lookup failed, giving up");
                self.console
                    .write_line(&format!("The dictionary can't be used: {error}."))?;
                Ok(Transition::Finish(SessionOutcome::Aborted(error)))
            }
            Err(error) => {
                tracing::warn!(word, %error, "lookup failed");
                self.console.write_line(&format!(
                    "Couldn't look up '{word}' right now: {error}. Please try again."
                ))?;
                Ok(Transition::To(State::PromptWord))
            }
        }
    }

    fn evaluate_lookup(&mut self) -> io::Result<Transition> {
        match self.current.take() {
            Some(record) if record.is_found() => {
                self.current = Some(record);
                Ok(Transition::To(State::ShowDefinitions))
            }
            Some(record) => {
                tracing::info!(word = record.text(), "word not found");
                self.console.write_line(&format!(
                    "Sorry, '{}' wasn't found. Please try another word.",
                    record.text()
                ))?;
                Ok(Transition::To(State::PromptWord))
            }
            None => Ok(Transition::To(State::PromptWord)),
        }
    }

    fn show_definitions(&mut self) -> io::Result<Transition> {
        let Some(record) = &self.current else {
            return Ok(Transition::To(State::PromptWord));
        };
        if record.definitions().is_empty() {
            self.console.write_line(&format!(
                "No definitions were listed for '{}'.",
                record.text()
            ))?;
        } else {
            self.console
                .write_line(&format!("Definitions of '{}':", record.text()))?;
            for (index, definition) in record.definitions().iter().enumerate() {
                self.console
                    .write_line(&format!("{}. {definition}", index + 1))?;
            }
        }
        Ok(Transition::To(State::PromptCategory))
    }

    fn prompt_category(&mut self) -> io::Result<Transition> {
        let Some(record) = &self.current else {
            return Ok(Transition::To(State::PromptWord));
        };
        self.console
            .write_line(&format!("What would you like to see for '{}'?", record.text()))?;
        for category in DetailCategory::ALL {
            self.console
                .write_line(&format!("{}. {}", category.index(), capitalize(category.label())))?;
        }
        let options = DetailCategory::ALL.len();
        let Some(choice) = self.prompt_choice(options)? else {
            return Ok(input_closed());
        };
        match DetailCategory::from_choice(choice) {
            Some(category) => Ok(Transition::To(State::ShowDetails(category))),
            None => Ok(Transition::To(State::PromptCategory)),
        }
    }

    fn show_details(&mut self, category: DetailCategory) -> io::Result<Transition> {
        let Some(record) = &self.current else {
            return Ok(Transition::To(State::PromptWord));
        };
        let details = record.detail(category);
        if details.is_empty() {
            self.console.write_line(&format!(
                "There are no listed {} for '{}'.",
                category.label(),
                record.text()
            ))?;
        } else {
            self.console.write_line(&format!(
                "{} of '{}':",
                capitalize(category.label()),
                record.text()
            ))?;
            for item in details {
                self.console.write_line(&format!("  - {item}"))?;
            }
        }
        Ok(Transition::To(State::PromptNextAction))
    }

    fn prompt_next_action(&mut self) -> io::Result<Transition> {
        let word = self
            .current
            .as_ref()
            .map(|record| record.text().to_string())
            .unwrap_or_default();
        self.console.write_line("What would you like to do next?")?;
        for (index, action) in NextAction::ALL.iter().enumerate() {
            self.console
                .write_line(&format!("{}. {}", index + 1, action.describe(&word)))?;
        }
        let Some(choice) = self.prompt_choice(NextAction::ALL.len())? else {
            return Ok(input_closed());
        };
        match NextAction::from_choice(choice) {
            Some(NextAction::BrowseCategory) => Ok(Transition::To(State::PromptCategory)),
            Some(NextAction::NewWord) => {
                self.current = None;
                Ok(Transition::To(State::PromptWord))
            }
            Some(NextAction::Exit) => {
                self.console.write_line(GOODBYE)?;
                Ok(Transition::To(State::Terminated))
            }
            None => Ok(Transition::To(State::PromptNextAction)),
        }
    }

    /// Reads until a number in `1..=options` arrives. `None` means the input was closed.
    fn prompt_choice(&mut self, options: usize) -> io::Result<Option<usize>> {
        let prompt = format!("Enter a number (1-{options}): ");
        loop {
            let Some(line) = self.console.read_line(&prompt)? else {
                return Ok(None);
            };
            let choice = parse_choice(&line);
            if valid_choice(choice, options) {
                return Ok(usize::try_from(choice).ok());
            }
            tracing::debug!(input = line.trim(), options, "rejected menu choice");
            self.console.write_line(&format!(
                "Invalid choice, please enter a number between 1 and {options}."
            ))?;
        }
    }
}

fn input_closed() -> Transition {
    tracing::warn!("input closed, ending the session");
    Transition::Finish(SessionOutcome::InputClosed)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
