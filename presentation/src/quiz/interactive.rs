//! Interactive quiz over stdin/stdout
//!
//! Each question is answered by letter (`a`-`d`), number, or the option
//! text. Answers are checked once every question has one; afterwards the
//! learner may try again with a fresh attempt.

use crate::output::console::option_label;
use colored::Colorize;
use polyglot_domain::{OptionOutcome, QuizAttempt, QuizQuestion, QuizScore};
use std::io::{self, BufRead, Write};

/// Plays a quiz against a line-based input
pub struct InteractiveQuiz<R, W> {
    input: R,
    output: W,
}

enum Answer {
    Option(String),
    Quit,
}

impl InteractiveQuiz<io::StdinLock<'static>, Box<dyn Write>> {
    /// Quiz on the process terminal, prompting on stderr when stdout
    /// carries machine-readable output
    pub fn terminal(prompt_on_stderr: bool) -> Self {
        let output: Box<dyn Write> = if prompt_on_stderr {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        };
        Self::new(io::stdin().lock(), output)
    }
}

impl<R: BufRead, W: Write> InteractiveQuiz<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run attempts until the learner stops.
    ///
    /// Returns the score of the last checked attempt, or `None` if the
    /// learner quit before checking any.
    pub fn run(&mut self, questions: &[QuizQuestion]) -> io::Result<Option<QuizScore>> {
        if questions.is_empty() {
            writeln!(self.output, "No quiz questions available.")?;
            return Ok(None);
        }

        let mut attempt = QuizAttempt::new(questions);
        let mut last_score = None;

        writeln!(
            self.output,
            "\n{} (answer with a letter, or q to quit)",
            "Comprehension Quiz".cyan().bold()
        )?;

        loop {
            for index in 0..questions.len() {
                match self.ask(&attempt, index)? {
                    Answer::Option(option) => {
                        attempt.select(index, &option);
                    }
                    Answer::Quit => return Ok(last_score),
                }
            }

            let score = match attempt.check() {
                Ok(score) => score,
                // Every question was just answered
                Err(_) => return Ok(last_score),
            };
            self.show_results(&attempt, score)?;
            last_score = Some(score);

            if !self.confirm("Try again? [y/N] ")? {
                return Ok(last_score);
            }
            attempt.reset();
        }
    }

    fn ask(&mut self, attempt: &QuizAttempt<'_>, index: usize) -> io::Result<Answer> {
        let question = &attempt.questions()[index];
        writeln!(
            self.output,
            "\n{}. {}",
            index + 1,
            question.question.bold()
        )?;
        for (j, option) in question.options.iter().enumerate() {
            writeln!(self.output, "   {}) {}", option_label(j), option)?;
        }

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Answer::Quit);
            };
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") {
                return Ok(Answer::Quit);
            }
            match parse_answer(line, &question.options) {
                Some(option) => return Ok(Answer::Option(option.to_string())),
                None => writeln!(
                    self.output,
                    "Please choose {}.",
                    option_range(question.options.len())
                )?,
            }
        }
    }

    fn show_results(&mut self, attempt: &QuizAttempt<'_>, score: QuizScore) -> io::Result<()> {
        writeln!(self.output, "\n{}", "Results".cyan().bold())?;

        for (i, question) in attempt.questions().iter().enumerate() {
            writeln!(self.output, "\n{}. {}", i + 1, question.question)?;
            for (j, option) in question.options.iter().enumerate() {
                let line = format!("{}) {}", option_label(j), option);
                let line = match attempt.option_outcome(i, option) {
                    OptionOutcome::Correct => format!("{} {}", "✓".green(), line.green()),
                    OptionOutcome::Incorrect => format!("{} {}", "✗".red(), line.red()),
                    _ => format!("  {}", line.dimmed()),
                };
                writeln!(self.output, "   {}", line)?;
            }
        }

        let summary = format!("Score: {}", score);
        let summary = if score.is_perfect() {
            summary.green().bold()
        } else {
            summary.yellow().bold()
        };
        writeln!(self.output, "\n{}", summary)
    }

    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        write!(self.output, "\n{}", prompt)?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|line| matches!(line.trim().to_lowercase().as_str(), "y" | "yes")))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Match a letter, a 1-based number, or the option text itself.
fn parse_answer<'a>(input: &str, options: &'a [String]) -> Option<&'a str> {
    if input.is_empty() {
        return None;
    }

    let mut chars = input.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && c.is_ascii_alphabetic()
    {
        let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
        return options.get(index).map(String::as_str);
    }

    if let Some(option) = input
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|i| options.get(i))
    {
        return Some(option);
    }

    options
        .iter()
        .find(|o| o.eq_ignore_ascii_case(input))
        .map(String::as_str)
}

fn option_range(count: usize) -> String {
    match count {
        0 => "nothing".to_string(),
        1 => "A".to_string(),
        n => format!("A-{}", option_label(n - 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn questions() -> Vec<QuizQuestion> {
        vec![
            QuizQuestion {
                question: "Welche Farbe hat der Himmel?".to_string(),
                options: vec!["Rot".into(), "Blau".into(), "Grün".into(), "Gelb".into()],
                correct_answer: "Blau".to_string(),
            },
            QuizQuestion {
                question: "Wie viele Tage hat eine Woche?".to_string(),
                options: vec!["Fünf".into(), "Sechs".into(), "Sieben".into(), "Acht".into()],
                correct_answer: "Sieben".to_string(),
            },
        ]
    }

    fn play(input: &str) -> (Option<QuizScore>, String) {
        let questions = questions();
        let mut output = Vec::new();
        let score = InteractiveQuiz::new(Cursor::new(input.to_string()), &mut output)
            .run(&questions)
            .unwrap();
        (score, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_perfect_score() {
        let (score, output) = play("b\n3\nn\n");
        assert_eq!(score, Some(QuizScore { correct: 2, total: 2 }));
        assert!(output.contains("2 / 2"));
    }

    #[test]
    fn test_partial_score_and_option_text() {
        let (score, _) = play("rot\nc\n");
        assert_eq!(score, Some(QuizScore { correct: 1, total: 2 }));
    }

    #[test]
    fn test_invalid_input_is_asked_again() {
        let (score, output) = play("z\n9\n\nb\nc\n");
        assert_eq!(score, Some(QuizScore { correct: 2, total: 2 }));
        assert!(output.contains("Please choose A-D."));
    }

    #[test]
    fn test_try_again_resets_attempt() {
        let (score, output) = play("a\na\ny\nb\nc\nno\n");
        assert_eq!(score, Some(QuizScore { correct: 2, total: 2 }));
        assert!(output.contains("0 / 2"));
        assert!(output.contains("2 / 2"));
    }

    #[test]
    fn test_quit_before_checking() {
        let (score, output) = play("b\nq\n");
        assert_eq!(score, None);
        assert!(!output.contains("Score"));
    }

    #[test]
    fn test_eof_ends_quiz() {
        let (score, _) = play("b\n");
        assert_eq!(score, None);
    }

    #[test]
    fn test_empty_quiz() {
        let mut output = Vec::new();
        let score = InteractiveQuiz::new(Cursor::new(String::new()), &mut output)
            .run(&[])
            .unwrap();
        assert!(score.is_none());
        assert!(String::from_utf8(output).unwrap().contains("No quiz questions"));
    }

    #[test]
    fn test_parse_answer() {
        let options = questions().remove(0).options;
        assert_eq!(parse_answer("a", &options), Some("Rot"));
        assert_eq!(parse_answer("D", &options), Some("Gelb"));
        assert_eq!(parse_answer("2", &options), Some("Blau"));
        assert_eq!(parse_answer("grün", &options), Some("Grün"));
        assert_eq!(parse_answer("GELB", &options), Some("Gelb"));
        assert_eq!(parse_answer("0", &options), None);
        assert_eq!(parse_answer("e", &options), None);
    }

    #[test]
    fn test_numeric_option_text() {
        let options: Vec<String> = vec!["1989".into(), "1990".into(), "2".into(), "2001".into()];
        assert_eq!(parse_answer("1990", &options), Some("1990"));
        assert_eq!(parse_answer("2", &options), Some("1990"));
        assert_eq!(parse_answer("2001", &options), Some("2001"));
        assert_eq!(parse_answer("1234", &options), None);
    }
}
