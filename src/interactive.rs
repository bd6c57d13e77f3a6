//! Interactive field collection.
//!
//! Asks for each field in template order. Scalar fields take one line;
//! list fields take one entry per line until an empty line (or end of
//! input). Every answer is trimmed.

use crate::error::{LangGptError, Result};
use crate::fields::PromptFields;
use std::io::{BufRead, Write};

/// Line-based prompter over any input/output pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for every field and return the collected values.
    pub fn collect(&mut self) -> Result<PromptFields> {
        self.say("LangGPT prompt builder (interactive mode)\n")?;

        Ok(PromptFields {
            role: self.single("Role (e.g. Senior code reviewer)")?,
            profile: self.single("Profile (background and abilities)")?,
            goals: self.multi("Goals (one goal per line)")?,
            constraints: self.multi("Constraints (one constraint per line)")?,
            skills: self.multi("Skills (one skill or knowledge area per line)")?,
            workflow: self.multi("Workflow (one step per line)")?,
            output_format: self.single("Output Format (e.g. JSON, table, markdown sections)")?,
            style: self.single("Style (e.g. concise, bullet points, actionable)")?,
            examples: self.multi("Examples (few-shot examples, one per line)")?,
            memory: self.multi("Memory (context to remember, one per line)")?,
            tools: self.multi("Tools (available tools or interfaces, one per line)")?,
            safety: self.multi("Safety (boundaries and compliance, one per line)")?,
            evaluation: self.multi("Evaluation (self-checks and acceptance criteria, one per line)")?,
            rules: self.multi("Rules (execution rules and priorities, one per line)")?,
        })
    }

    /// Ask for a single value. Empty input (or end of input) means not given.
    pub fn single(&mut self, title: &str) -> Result<Option<String>> {
        self.say(&format!("\nEnter {} (optional):\n", title))?;
        let line = self.read_line()?;
        Ok(line.filter(|l| !l.is_empty()))
    }

    /// Ask for a list, one entry per line, ended by an empty line.
    pub fn multi(&mut self, title: &str) -> Result<Vec<String>> {
        self.say(&format!(
            "\nEnter {} (one per line, empty line to finish):\n",
            title
        ))?;

        let mut items = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.is_empty() {
                break;
            }
            items.push(line);
        }
        Ok(items)
    }

    /// Read one trimmed line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let read = self
            .input
            .read_line(&mut buf)
            .map_err(|e| LangGptError::Io(format!("failed to read input: {}", e)))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|e| LangGptError::Io(format!("failed to write prompt: {}", e)))
    }
}
