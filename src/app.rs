// std imports
use std::io::{BufRead, Write};

// third-party imports
use itertools::Itertools;

// local imports
use crate::{error::*, finder::CompiledPattern, name::FullName};

// ---

pub struct Options {
    pub pattern: CompiledPattern,
    pub sort: bool,
    pub limit: Option<usize>,
    pub unique: bool,
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Reads candidate names from `input`, one per line, and writes the matching ones to `output`.
    ///
    /// Matches are sorted by class name when sorting is enabled, names with equal class names
    /// keep their input order. Any read error aborts the run before anything is written.
    pub fn run(&self, input: impl BufRead, output: &mut dyn Write) -> Result<()> {
        let lines = input.lines().collect::<std::io::Result<Vec<_>>>()?;
        log::debug!("scanned {} names", lines.len());

        let candidates = lines.iter().map(String::as_str);
        let matched = if self.options.unique {
            self.filter(candidates.unique())
        } else {
            self.filter(candidates)
        };
        log::debug!("matched {} names", matched.len());

        let mut names = matched.into_iter().map(FullName::new).collect_vec();
        if self.options.sort {
            names.sort_by(FullName::compare);
        }

        let limit = self.options.limit.unwrap_or(usize::MAX);
        for name in names.iter().take(limit) {
            writeln!(output, "{}", name)?;
        }
        output.flush()?;

        Ok(())
    }

    fn filter<'a>(&self, candidates: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
        candidates.filter(|name| self.options.pattern.matches(name)).collect()
    }
}
