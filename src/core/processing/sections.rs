//! Heading-driven document splitting.
//!
//! A [`SectionMap`] names the heading lines that open a section and the file
//! each section is written to. [`SectionSplitter`] consumes lines one at a
//! time and hands back a finished [`Section`] whenever a new heading closes
//! the previous one.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Exact heading text (compared against the trimmed line) -> output file name
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionMap {
    entries: HashMap<String, String>,
}

impl SectionMap {
    pub fn new<I, H, F>(entries: I) -> Self
    where
        I: IntoIterator<Item = (H, F)>,
        H: Into<String>,
        F: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(heading, file)| (heading.into(), file.into()))
                .collect(),
        }
    }

    /// The eight chapters of the INSolver write-up.
    pub fn insolver() -> Self {
        Self::new([
            ("# Introduction", "introduction.md"),
            ("# Governing Equations", "governing_equations.md"),
            ("# Discretization", "discretization.md"),
            ("# Grid Types", "grid_types.md"),
            ("# Algorithm", "algorithm.md"),
            ("# Poisson solver", "poisson_solver.md"),
            ("# Results", "results.md"),
            ("# Conclusion", "conclusion.md"),
        ])
    }

    pub fn file_name_for(&self, heading: &str) -> Option<&str> {
        self.entries.get(heading).map(String::as_str)
    }

    /// Returns the stored key when `line`, trimmed, is a heading.
    pub fn match_line(&self, line: &str) -> Option<(&str, &str)> {
        self.entries
            .get_key_value(line.trim())
            .map(|(heading, file)| (heading.as_str(), file.as_str()))
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A heading line plus every following line up to the next heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub heading: &'a str,
    pub file_name: &'a str,
    /// Raw lines, terminators included; `lines[0]` is the heading line
    pub lines: Vec<&'a str>,
}

impl Section<'_> {
    pub fn contents(&self) -> String {
        self.lines.concat()
    }
}

enum SplitState<'a> {
    Idle,
    Active(Section<'a>),
}

pub struct SectionSplitter<'a> {
    sections: &'a SectionMap,
    state: SplitState<'a>,
    discarded: usize,
}

impl<'a> SectionSplitter<'a> {
    pub fn new(sections: &'a SectionMap) -> Self {
        Self {
            sections,
            state: SplitState::Idle,
            discarded: 0,
        }
    }

    /// Feeds one raw line. Returns the section it closed, if any.
    pub fn feed(&mut self, line: &'a str) -> Option<Section<'a>> {
        let sections = self.sections;
        match sections.match_line(line) {
            Some((heading, file_name)) => {
                let opened = Section {
                    heading,
                    file_name,
                    lines: vec![line],
                };
                match std::mem::replace(&mut self.state, SplitState::Active(opened)) {
                    SplitState::Idle => None,
                    SplitState::Active(closed) => Some(closed),
                }
            }
            None => {
                match &mut self.state {
                    SplitState::Idle => self.discarded += 1,
                    SplitState::Active(section) => section.lines.push(line),
                }
                None
            }
        }
    }

    /// Closes the active section at end of input.
    pub fn finish(self) -> Option<Section<'a>> {
        match self.state {
            SplitState::Idle => None,
            SplitState::Active(section) => Some(section),
        }
    }

    /// Lines seen before the first heading; these are never written.
    pub fn discarded_lines(&self) -> usize {
        self.discarded
    }
}

/// Splits `text` into lines, keeping each line's terminator.
pub fn lines_with_terminators(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n')
}

/// Collects every section of `text` in document order, repeats included.
pub fn split_text<'a>(text: &'a str, sections: &'a SectionMap) -> Vec<Section<'a>> {
    let mut splitter = SectionSplitter::new(sections);
    let mut out: Vec<Section<'a>> = lines_with_terminators(text)
        .filter_map(|line| splitter.feed(line))
        .collect();
    out.extend(splitter.finish());
    out
}
