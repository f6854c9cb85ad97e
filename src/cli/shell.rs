//! Interactive chat shell.
//!
//! Lines starting with `:` are menu commands; everything else is sent to
//! the pipeline in the session's language.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::debug;

use crate::pipeline::ConversationPipeline;
use crate::session::Session;
use crate::translation::Language;

const TITLE: &str = "Job Interview Preparation Chatbot";

const MENU: &str = "\
Commands:
  :home             show this menu
  :history          show the conversation history
  :about            about the chatbot
  :lang <code>      switch language
  :languages        list supported languages
  :speak            voice input
  :clear            forget the conversation
  :quit             leave";

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    /// Print the text and keep going.
    Reply(String),
    /// Nothing to print.
    Continue,
    Quit,
}

/// The interactive loop around a [`ConversationPipeline`].
pub struct ChatShell<'a> {
    pipeline: &'a ConversationPipeline,
    session: Session,
    readme: PathBuf,
}

impl<'a> ChatShell<'a> {
    pub fn new(pipeline: &'a ConversationPipeline, language: Language, readme: PathBuf) -> Self {
        Self {
            pipeline,
            session: Session::new(language),
            readme,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read lines until `:quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", self.home())?;
        self.prompt(&mut output)?;

        for line in input.lines() {
            match self.handle_line(&line?) {
                ShellAction::Reply(text) => writeln!(output, "{text}")?,
                ShellAction::Continue => {}
                ShellAction::Quit => return Ok(()),
            }
            self.prompt(&mut output)?;
        }
        Ok(())
    }

    /// Handle one line of input.
    pub fn handle_line(&mut self, line: &str) -> ShellAction {
        let line = line.trim();
        if let Some(command) = line.strip_prefix(':') {
            return self.handle_command(command);
        }

        self.session.pending_input = Some(line.to_string());
        let Some(text) = self.session.take_pending() else {
            return ShellAction::Continue;
        };

        let reply = self.pipeline.converse(
            &mut self.session.chat_log,
            &text,
            self.session.language.code(),
        );
        ShellAction::Reply(format!("Bot: {reply}"))
    }

    fn handle_command(&mut self, command: &str) -> ShellAction {
        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or("");
        debug!("Session {} command ':{name}'", self.session.id);

        match name {
            "home" | "help" => ShellAction::Reply(self.home()),
            "history" => ShellAction::Reply(self.history()),
            "about" => ShellAction::Reply(self.about()),
            "languages" => ShellAction::Reply(Self::languages()),
            "lang" => match parts.next() {
                Some(code) => match Language::from_code(code) {
                    Ok(language) => {
                        self.session.set_language(language);
                        ShellAction::Reply(format!("Language set to {language}."))
                    }
                    Err(_) => ShellAction::Reply(format!(
                        "Unsupported language '{code}'. Type :languages for the list."
                    )),
                },
                None => ShellAction::Reply(format!(
                    "Current language: {}",
                    self.session.language
                )),
            },
            "speak" => ShellAction::Reply("Features are temporarily unavailable.".to_string()),
            "clear" => {
                self.session.chat_log.clear();
                ShellAction::Reply("Conversation cleared.".to_string())
            }
            "quit" | "exit" => ShellAction::Quit,
            other => ShellAction::Reply(format!(
                "Unknown command ':{other}'. Type :home for the menu."
            )),
        }
    }

    fn home(&self) -> String {
        format!(
            "{TITLE}\nLanguage: {}\n\n{MENU}",
            self.session.language
        )
    }

    fn history(&self) -> String {
        let log = &self.session.chat_log;
        if log.is_empty() {
            return "Conversation History\nNo conversation history yet.".to_string();
        }

        let mut lines = vec!["Conversation History".to_string()];
        lines.extend(log.turns().iter().map(|turn| turn.to_string()));
        lines.join("\n")
    }

    fn about(&self) -> String {
        match std::fs::read_to_string(&self.readme) {
            Ok(content) => format!("About the Chatbot\n\n{content}"),
            Err(e) => {
                debug!("Could not read {}: {e}", self.readme.display());
                "About the Chatbot\nREADME.md file not found.".to_string()
            }
        }
    }

    fn languages() -> String {
        Language::ALL
            .iter()
            .map(|language| format!("  {:<6} {}", language.code(), language.display_name()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn prompt<W: Write>(&self, output: &mut W) -> io::Result<()> {
        write!(output, "[{}] You: ", self.session.language.code())?;
        output.flush()
    }
}
