//! Rubric scoring for student papers
//!
//! A paper earns an integer score of 1, 3 or 5 per metric. Four metrics
//! check for the presence of a special section heading (introduction,
//! contents, epilogue, sources list), one scores the number of remaining
//! chapter headings, and one scores the overall word count.
//!
//! Headings are recognized by paragraph style: any style whose name starts
//! with "heading" (case-insensitive). Special headings are claimed in a
//! fixed rule order and removed from the working pool so a heading is never
//! counted twice; whatever remains in the pool counts as chapters.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::docx::{self, Document};
use crate::error::Result;

// CSV headers: the filename identifies the paper, the rest are metrics.
pub const FILENAME_HEADER: &str = "filename";
pub const CHAPTERS_HEADER: &str = "headings";
pub const INTRODUCTION_HEADER: &str = "introduction";
pub const CONTENTS_HEADER: &str = "contents";
pub const EPILOGUE_HEADER: &str = "epilogue";
pub const SOURCES_LIST_HEADER: &str = "sources-list";
pub const WORD_COUNT_HEADER: &str = "word-count";

/// Score for a section/metric that meets the rubric
const SCORE_FOUND: u8 = 5;
/// Score for an acceptable but suboptimal value
const SCORE_ACCEPTABLE: u8 = 3;
/// Score for a missing section or unacceptable value
const SCORE_MISSING: u8 = 1;

/// The scores of one paper, one integer in {1,3,5} per rubric metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSet {
    pub introduction: u8,
    pub contents: u8,
    pub epilogue: u8,
    pub sources_list: u8,
    pub headings: u8,
    pub word_count: u8,
}

impl ScoreSet {
    /// CSV column headers, in the fixed report order
    pub fn csv_headers() -> [&'static str; 7] {
        [
            FILENAME_HEADER,
            CHAPTERS_HEADER,
            INTRODUCTION_HEADER,
            CONTENTS_HEADER,
            EPILOGUE_HEADER,
            SOURCES_LIST_HEADER,
            WORD_COUNT_HEADER,
        ]
    }

    /// Metric values in the same order as [`ScoreSet::csv_headers`]
    /// (minus the filename column)
    pub fn metric_values(&self) -> [u8; 6] {
        [
            self.headings,
            self.introduction,
            self.contents,
            self.epilogue,
            self.sources_list,
            self.word_count,
        ]
    }
}

/// The compiled rubric patterns. All matching is case-insensitive and
/// anchored at the start of the text: "Inleiding en context" matches the
/// introduction rule, "Korte inleiding" does not.
struct Rubric {
    heading_style: Regex,
    introduction: Regex,
    contents: Regex,
    epilogue: Regex,
    sources_list: Regex,
}

fn rubric() -> &'static Rubric {
    static RUBRIC: OnceLock<Rubric> = OnceLock::new();
    RUBRIC.get_or_init(|| {
        let compile = |pattern: &str| {
            Regex::new(&format!("(?i)^(?:{pattern})")).expect("hard-coded rubric pattern compiles")
        };
        Rubric {
            heading_style: compile("heading"),
            introduction: compile("inleiding|voorwoord"),
            contents: compile("inhoud(s)?(opgave)?|hoofdstukken"),
            epilogue: compile("nawoord|conclusie"),
            sources_list: compile("bronnen(lijst)?"),
        }
    })
}

/// One parsed paper, ready to be scored
pub struct Paper {
    document: Document,
    full_text: String,
}

impl Paper {
    /// Parse a `.docx` file and prepare it for scoring
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::from_document(docx::parse(path)?))
    }

    /// Build a paper from an already-parsed document
    pub fn from_document(document: Document) -> Self {
        // Full text is the paragraph texts joined with no separator;
        // paragraph boundaries do not count as whitespace.
        let full_text = document
            .paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        Self {
            document,
            full_text,
        }
    }

    /// Compute all rubric scores.
    ///
    /// Builds a fresh heading pool per invocation, so calling this twice on
    /// the same paper yields identical results.
    pub fn scores(&self) -> ScoreSet {
        let rubric = rubric();
        let mut pool = self.heading_pool();

        // Special headings are claimed in this fixed order; each match is
        // removed from the pool so it is not also counted as a chapter.
        let introduction = score_and_pop(&mut pool, &rubric.introduction);
        let contents = score_and_pop(&mut pool, &rubric.contents);
        let epilogue = score_and_pop(&mut pool, &rubric.epilogue);
        let sources_list = score_and_pop(&mut pool, &rubric.sources_list);

        // The headings left over are the chapter headings.
        tracing::debug!(chapters = pool.len(), "classified headings");
        let headings = chapter_count_score(pool.len());

        let word_count = word_count_score(self.word_count());

        ScoreSet {
            introduction,
            contents,
            epilogue,
            sources_list,
            headings,
            word_count,
        }
    }

    /// Ordered texts of all heading-styled paragraphs
    fn heading_pool(&self) -> Vec<String> {
        self.document
            .paragraphs
            .iter()
            .filter(|p| rubric().heading_style.is_match(&p.style_name))
            .map(|p| p.text.clone())
            .collect()
    }

    /// Number of tokens in the full text, split on single space characters.
    ///
    /// Tabs, newlines and consecutive spaces are not collapsed, so they
    /// produce empty tokens that still count. Kept this way deliberately:
    /// reports stay comparable with earlier score runs.
    pub fn word_count(&self) -> usize {
        self.full_text.trim().split(' ').count()
    }
}

/// Scan the pool in order; pop the first heading the rule matches and score
/// 5, or leave the pool untouched and score 1.
fn score_and_pop(pool: &mut Vec<String>, rule: &Regex) -> u8 {
    if let Some(index) = pool.iter().position(|heading| rule.is_match(heading)) {
        pool.remove(index);
        SCORE_FOUND
    } else {
        SCORE_MISSING
    }
}

/// Score the number of chapters. The sweet spot is 4-8; 3 or 9-12 is
/// acceptable; fewer or more scores the minimum.
fn chapter_count_score(chapter_count: usize) -> u8 {
    match chapter_count {
        4..=8 => SCORE_FOUND,
        3 | 9..=12 => SCORE_ACCEPTABLE,
        _ => SCORE_MISSING,
    }
}

/// Score the word count. The assignment asks for 1000-2000 words; up to
/// 3000 is tolerated.
fn word_count_score(word_count: usize) -> u8 {
    match word_count {
        1000..=2000 => SCORE_FOUND,
        2001..=3000 => SCORE_ACCEPTABLE,
        _ => SCORE_MISSING,
    }
}
