use crate::error::{Result, ScorecardError};
use crate::score;
use crate::types::rubric::{Category, Criterion, RUBRIC};
use crate::types::scoring::{EvaluationRun, Score};
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn startup_name(&mut self) -> Result<String> {
        self.ask("Enter the Startup Name: ", "the startup name")
    }

    pub fn category_header(&mut self, category: &Category) -> Result<()> {
        writeln!(
            self.output,
            "\n{} (Weight: {}%)",
            category.name, category.weight_percent
        )?;
        Ok(())
    }

    /// Re-prompts until the answer parses and lies in range; rejected answers are never returned.
    pub fn score(&mut self, criterion: &Criterion) -> Result<Score> {
        loop {
            writeln!(self.output, "\n{}: {}", criterion.name, criterion.description)?;
            let answer = self.ask("Enter a score (1-10): ", criterion.name)?;
            match Score::parse(&answer) {
                Ok(score) => return Ok(score),
                Err(rejection) => {
                    tracing::debug!(criterion = criterion.name, answer = %answer, "score rejected");
                    writeln!(self.output, "{}", rejection.message())?;
                }
            }
        }
    }

    fn ask(&mut self, prompt: &str, what: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ScorecardError::InputClosed(what.to_string()));
        }
        Ok(line.trim().to_string())
    }
}

pub fn collect_run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<EvaluationRun> {
    let startup_name = prompter.startup_name()?;

    let mut scores = Vec::with_capacity(RUBRIC.len());
    for category in RUBRIC {
        prompter.category_header(category)?;
        let mut category_scores = Vec::with_capacity(category.criteria.len());
        for criterion in category.criteria {
            let score = prompter.score(criterion)?;
            tracing::debug!(criterion = criterion.name, score = score.value(), "score recorded");
            category_scores.push(score);
        }
        scores.push(category_scores);
    }

    tracing::info!(startup = %startup_name, "collected all scores");
    score::build_run(&startup_name, &scores)
}
