use std::collections::HashSet;

use log::{debug, info, trace, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::resources::{self, LanguageResources};
use crate::quiz::tokenize;
use crate::quiz::GeneratedQuestion;

pub const DEFAULT_QUESTION_COUNT: usize = 5;
pub const BLANK: &str = "______";

const DISTRACTOR_COUNT: usize = 3;
const RESAMPLE_ROUNDS_PER_CANDIDATE: usize = 10;

// Used only when the whole passage offers no alternative to the answer.
const FALLBACK_DISTRACTORS: [&str; DISTRACTOR_COUNT] = [
    "None of the above",
    "All of the above",
    "Not stated in the text",
];

pub struct McqGenerator<'r> {
    resources: &'r LanguageResources,
}

impl McqGenerator<'static> {
    /// Generator backed by the process-wide resources.
    pub fn new() -> Self {
        Self {
            resources: resources::global(),
        }
    }
}

impl Default for McqGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> McqGenerator<'r> {
    pub fn with_resources(resources: &'r LanguageResources) -> Self {
        Self { resources }
    }

    /// Nouns and adjectives of `sentence` that are not stop words, deduplicated
    /// by exact surface form and kept in order of first appearance.
    pub fn keywords(&self, sentence: &str) -> Vec<String> {
        let tokens = tokenize::words(sentence);
        let tags = self.resources.tagger.tag(&tokens);

        let mut seen = HashSet::new();
        let mut keywords = Vec::new();
        for (token, tag) in tokens.iter().zip(tags) {
            trace!("{}/{}", token.text, tag.penn());
            if !tag.is_keyword_category() || self.resources.stop_words.contains(token.text) {
                continue;
            }
            if seen.insert(token.text) {
                keywords.push(token.text.to_string());
            }
        }
        keywords
    }

    /// Builds up to `count` questions from the first `count` sentences of
    /// `text`. A sentence without keywords yields nothing and is not replaced
    /// by a later one; malformed or empty input yields an empty result.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        text: &str,
        count: usize,
        rng: &mut R,
    ) -> Vec<GeneratedQuestion> {
        let sentences = self.resources.segmenter.split(text);
        if sentences.is_empty() {
            debug!("no sentences found in input");
            return Vec::new();
        }

        let mut passage_pool: Option<Vec<String>> = None;
        let mut questions = Vec::with_capacity(count.min(sentences.len()));
        for (index, sentence) in sentences.iter().take(count).enumerate() {
            let keywords = self.keywords(sentence);
            let Some(answer) = keywords.choose(rng).cloned() else {
                debug!("sentence {} has no keywords, skipping", index + 1);
                continue;
            };

            let stem = sentence.replacen(answer.as_str(), BLANK, 1);
            let distractors = if keywords.len() > DISTRACTOR_COUNT {
                pick_distractors(&keywords, &answer, rng)
            } else {
                let passage =
                    passage_pool.get_or_insert_with(|| self.passage_keywords(&sentences));
                let pool = topped_up(&keywords, passage);
                if pool.iter().any(|keyword| *keyword != answer) {
                    pick_distractors(&pool, &answer, rng)
                } else {
                    debug!("no alternative to '{}' in the passage", answer);
                    FALLBACK_DISTRACTORS.iter().map(|d| d.to_string()).collect()
                }
            };

            let mut options = Vec::with_capacity(DISTRACTOR_COUNT + 1);
            options.push(answer.clone());
            options.extend(distractors);
            options.shuffle(rng);

            questions.push(GeneratedQuestion::new(stem, options, answer));
        }

        info!(
            "generated {} of {} requested questions from {} sentences",
            questions.len(),
            count,
            sentences.len()
        );
        questions
    }

    /// Same as [`generate`](Self::generate) for raw input; bytes that are not
    /// valid UTF-8 produce no questions.
    pub fn generate_bytes<R: Rng + ?Sized>(
        &self,
        bytes: &[u8],
        count: usize,
        rng: &mut R,
    ) -> Vec<GeneratedQuestion> {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.generate(text, count, rng),
            Err(err) => {
                warn!("input is not valid UTF-8 ({err}), no questions generated");
                Vec::new()
            }
        }
    }

    fn passage_keywords(&self, sentences: &[&str]) -> Vec<String> {
        let mut seen = HashSet::new();
        sentences
            .iter()
            .flat_map(|sentence| self.keywords(sentence))
            .filter(|keyword| seen.insert(keyword.clone()))
            .collect()
    }
}

/// The sentence's own keywords followed by the rest of the passage's, for
/// sentences too short on alternatives to fill every distractor slot.
fn topped_up(keywords: &[String], passage: &[String]) -> Vec<String> {
    let mut pool = keywords.to_vec();
    pool.extend(
        passage
            .iter()
            .filter(|keyword| !keywords.contains(keyword))
            .cloned(),
    );
    pool
}

/// Exactly three distractors from `pool`, none equal to `answer`.
///
/// Takes the first alternatives in pool order, then resamples the whole pool
/// with a bounded number of draws. When the pool is too small for three
/// distinct alternatives the remaining slots repeat them. `pool` must hold at
/// least one term other than `answer`.
fn pick_distractors<R: Rng + ?Sized>(pool: &[String], answer: &str, rng: &mut R) -> Vec<String> {
    let alternatives: Vec<&String> = pool.iter().filter(|k| k.as_str() != answer).collect();
    let mut distractors: Vec<String> = alternatives
        .iter()
        .take(DISTRACTOR_COUNT)
        .map(|k| k.to_string())
        .collect();

    let max_draws = pool.len() * RESAMPLE_ROUNDS_PER_CANDIDATE;
    let mut draws = 0;
    while distractors.len() < DISTRACTOR_COUNT && draws < max_draws {
        draws += 1;
        let Some(filler) = pool.choose(rng) else {
            break;
        };
        if filler.as_str() != answer && !distractors.contains(filler) {
            distractors.push(filler.clone());
        }
    }

    let mut repeats = alternatives.iter().cycle();
    while distractors.len() < DISTRACTOR_COUNT {
        match repeats.next() {
            Some(keyword) => distractors.push(keyword.to_string()),
            None => break,
        }
    }
    distractors
}
