//! Line-based terminal prompts.
//!
//! Three kinds of questions are supported: yes/no confirmation, free-text input
//! with an optional default, and picking one entry from a numbered list.
//! Answers are read a line at a time, so any `BufRead` works as input,
//! which is how the tests drive it.

use std::io::{self, BufRead, Write};

use crate::error::WatermarkError;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks a yes/no question. An empty answer picks `default`.
    /// Anything that doesn't start with y or n asks again.
    pub fn confirm(&mut self, message: &str, default: bool) -> Result<bool, WatermarkError> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        loop {
            self.ask(&format!("? {message} {hint} "))?;
            let answer = self.read_answer()?;
            match answer.chars().next().map(|c| c.to_ascii_lowercase()) {
                None => return Ok(default),
                Some('y') => return Ok(true),
                Some('n') => return Ok(false),
                Some(_) => self.say("Please answer yes or no.")?,
            }
        }
    }

    /// Asks for free text. An empty answer picks `default`, or the empty string if there is none.
    pub fn input(&mut self, message: &str, default: Option<&str>) -> Result<String, WatermarkError> {
        match default {
            Some(default) => self.ask(&format!("? {message} ({default}) "))?,
            None => self.ask(&format!("? {message} "))?,
        }
        let answer = self.read_answer()?;
        if answer.is_empty() {
            Ok(default.unwrap_or_default().to_owned())
        } else {
            Ok(answer)
        }
    }

    /// Asks the user to pick one of `choices` and returns its index.
    /// The answer can be the number shown next to a choice or the choice itself.
    /// An empty answer picks the first choice.
    pub fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize, WatermarkError> {
        assert!(!choices.is_empty(), "nothing to select from");
        self.say(&format!("? {message}"))?;
        for (number, choice) in (1..).zip(choices) {
            self.say(&format!("  {number}) {choice}"))?;
        }
        loop {
            self.ask(&format!("  Answer (1-{}) [1] ", choices.len()))?;
            let answer = self.read_answer()?;
            if answer.is_empty() {
                return Ok(0);
            }
            if let Some(index) = parse_choice(&answer, choices) {
                return Ok(index);
            }
            self.say("Please enter one of the numbers above.")?;
        }
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.output
    }

    /// Prints a line that is not a question
    pub fn say(&mut self, message: &str) -> Result<(), WatermarkError> {
        writeln!(self.output, "{message}").map_err(WatermarkError::Prompt)
    }

    fn ask(&mut self, question: &str) -> Result<(), WatermarkError> {
        write!(self.output, "{question}")
            .and_then(|()| self.output.flush())
            .map_err(WatermarkError::Prompt)
    }

    /// Reads one line with surrounding whitespace removed.
    /// Closed input is reported as `UnexpectedEof`.
    fn read_answer(&mut self) -> Result<String, WatermarkError> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(WatermarkError::Prompt)?;
        if read == 0 {
            // terminate the dangling question so whatever comes next starts on its own line
            let _ = writeln!(self.output);
            return Err(WatermarkError::Prompt(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(line.trim().to_owned())
    }
}

fn parse_choice(answer: &str, choices: &[&str]) -> Option<usize> {
    if let Ok(number) = answer.parse::<usize>() {
        return (1..=choices.len()).contains(&number).then(|| number - 1);
    }
    choices
        .iter()
        .position(|choice| choice.eq_ignore_ascii_case(answer))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::ErrorKind;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.output.clone()).unwrap()
    }

    #[test]
    fn confirm_answers() {
        let mut p = prompter("y\nNo\n\nYES\n");
        assert!(p.confirm("Ready?", false).unwrap());
        assert!(!p.confirm("Ready?", true).unwrap());
        assert!(p.confirm("Ready?", true).unwrap());
        assert!(p.confirm("Ready?", false).unwrap());
        assert!(output(&p).starts_with("? Ready? (y/N) "));
    }

    #[test]
    fn confirm_asks_again_on_nonsense() {
        let mut p = prompter("maybe\nn\n");
        assert!(!p.confirm("Ready?", true).unwrap());
        assert!(output(&p).contains("Please answer yes or no."));
    }

    #[test]
    fn input_uses_default_when_empty() {
        let mut p = prompter("\n  photo.png  \n\n");
        assert_eq!(p.input("File?", Some("test.jpg")).unwrap(), "test.jpg");
        assert_eq!(p.input("File?", Some("test.jpg")).unwrap(), "photo.png");
        assert_eq!(p.input("Text?", None).unwrap(), "");
        assert!(output(&p).contains("? File? (test.jpg) "));
    }

    #[test]
    fn select_by_number_label_or_default() {
        let choices = ["Text watermark", "Image watermark"];
        let mut p = prompter("2\n\nimage watermark\n");
        assert_eq!(p.select("Kind?", &choices).unwrap(), 1);
        assert_eq!(p.select("Kind?", &choices).unwrap(), 0);
        assert_eq!(p.select("Kind?", &choices).unwrap(), 1);
        assert!(output(&p).contains("  2) Image watermark"));
    }

    #[test]
    fn select_asks_again_when_out_of_range() {
        let mut p = prompter("0\n3\nfoo\n1\n");
        assert_eq!(p.select("Kind?", &["a", "b"]).unwrap(), 0);
        assert_eq!(
            output(&p).matches("Please enter one of the numbers above.").count(),
            3
        );
    }

    #[test]
    fn closed_input_is_end_of_input() {
        let mut p = prompter("");
        let err = p.confirm("Ready?", true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Prompt);
        assert!(err.is_end_of_input());
    }

    #[test]
    fn test_parse_choice() {
        let choices = ["make image brighter", "invert image"];
        assert_eq!(parse_choice("1", &choices), Some(0));
        assert_eq!(parse_choice("2", &choices), Some(1));
        assert_eq!(parse_choice("Invert Image", &choices), Some(1));
        assert_eq!(parse_choice("0", &choices), None);
        assert_eq!(parse_choice("-1", &choices), None);
        assert_eq!(parse_choice("brighter", &choices), None);
    }
}
