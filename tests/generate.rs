//! End-to-end properties of question generation.

use mcq_gen::quiz::resources::LanguageResources;
use mcq_gen::quiz::{self, GeneratedQuestion, McqGenerator, BLANK};
use rand::rngs::StdRng;
use rand::SeedableRng;

const PANGRAM: &str = "The quick brown fox jumps over the lazy dog. Dogs are loyal animals.";

const PASSAGE: &str = "The Sun is the largest object in the Solar System. \
    Mercury is the closest planet to the Sun. \
    Venus has a thick atmosphere of carbon dioxide. \
    Earth is the only planet known to support life. \
    Mars appears red because of iron oxide on its surface. \
    Jupiter is a gas giant with a huge storm. \
    Saturn is famous for its bright rings.";

fn assert_well_formed(question: &GeneratedQuestion) {
    assert_eq!(question.options.len(), 4, "{question:?}");
    let occurrences = question
        .options
        .iter()
        .filter(|o| **o == question.correct_answer)
        .count();
    assert_eq!(occurrences, 1, "{question:?}");
    assert!(question.stem.contains(BLANK), "{question:?}");
    assert!(question.explanation.contains(&question.correct_answer));
}

fn first_occurrence_masked(question: &GeneratedQuestion, sentence: &str) {
    let restored = question.stem.replacen(BLANK, &question.correct_answer, 1);
    assert_eq!(restored, sentence);
    let blank_at = question.stem.find(BLANK).unwrap();
    assert_eq!(sentence.find(&question.correct_answer), Some(blank_at));
}

#[test]
fn pangram_yields_two_well_formed_questions() {
    let mut rng = StdRng::seed_from_u64(2024);
    let questions = quiz::generate(PANGRAM, 2, &mut rng);

    assert_eq!(questions.len(), 2);
    let sentences = [
        "The quick brown fox jumps over the lazy dog.",
        "Dogs are loyal animals.",
    ];
    for (question, sentence) in questions.iter().zip(sentences) {
        assert_well_formed(question);
        first_occurrence_masked(question, sentence);
    }
    assert!(["quick", "brown", "fox", "lazy", "dog"].contains(&questions[0].correct_answer.as_str()));
    assert!(["Dogs", "loyal", "animals"].contains(&questions[1].correct_answer.as_str()));
}

#[test]
fn never_exceeds_count_or_sentence_total() {
    let resources = LanguageResources::builtin();
    let generator = McqGenerator::with_resources(&resources);
    let sentence_total = resources.segmenter.split(PASSAGE).len();
    assert_eq!(sentence_total, 7);

    for count in [0, 1, 3, 7, 20] {
        let mut rng = StdRng::seed_from_u64(count as u64);
        let questions = generator.generate(PASSAGE, count, &mut rng);
        assert!(questions.len() <= count);
        assert!(questions.len() <= sentence_total);
        questions.iter().for_each(assert_well_formed);
    }
}

#[test]
fn same_seed_same_questions() {
    let resources = LanguageResources::builtin();
    let generator = McqGenerator::with_resources(&resources);

    let first = generator.generate(PASSAGE, 5, &mut StdRng::seed_from_u64(99));
    let second = generator.generate(PASSAGE, 5, &mut StdRng::seed_from_u64(99));
    assert_eq!(first, second);
    assert_eq!(first.len(), 5);
}

#[test]
fn only_first_occurrence_is_masked() {
    let resources = LanguageResources::builtin();
    let generator = McqGenerator::with_resources(&resources);
    let sentence = "Rivers feed lakes and lakes feed rivers.";

    for seed in 0..20 {
        let questions = generator.generate(sentence, 1, &mut StdRng::seed_from_u64(seed));
        assert_eq!(questions.len(), 1);
        first_occurrence_masked(&questions[0], sentence);
    }
}

#[test]
fn stop_words_and_punctuation_give_nothing() {
    let resources = LanguageResources::builtin();
    let generator = McqGenerator::with_resources(&resources);
    let mut rng = StdRng::seed_from_u64(5);

    assert!(generator.generate("And so it was. Then there were none!", 5, &mut rng).is_empty());
    assert!(generator.generate("... !!! ???", 5, &mut rng).is_empty());
    assert!(generator.generate("", 5, &mut rng).is_empty());
}

#[test]
fn skipped_sentences_are_not_backfilled() {
    let resources = LanguageResources::builtin();
    let generator = McqGenerator::with_resources(&resources);
    let text = "It was there. Cats chase mice. Owls hunt at night.";
    let questions = generator.generate(text, 2, &mut StdRng::seed_from_u64(8));

    assert_eq!(questions.len(), 1);
    first_occurrence_masked(&questions[0], "Cats chase mice.");
}

#[test]
fn one_keyword_sentence_still_has_four_options() {
    let resources = LanguageResources::builtin();
    let generator = McqGenerator::with_resources(&resources);

    for seed in 0..10 {
        let questions = generator.generate("Gold is valuable.", 1, &mut StdRng::seed_from_u64(seed));
        assert_eq!(questions.len(), 1);
        assert_well_formed(&questions[0]);
    }

    let questions = generator.generate("Iron rusts. Copper conducts.", 2, &mut StdRng::seed_from_u64(4));
    assert_eq!(questions.len(), 2);
    questions.iter().for_each(assert_well_formed);
}

#[test]
fn generation_is_safe_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|seed| {
            std::thread::spawn(move || {
                quiz::generate(PASSAGE, 7, &mut StdRng::seed_from_u64(seed))
            })
        })
        .collect();
    for handle in handles {
        let questions = handle.join().unwrap();
        assert_eq!(questions.len(), 7);
        questions.iter().for_each(assert_well_formed);
    }
}

#[test]
fn present_tense_verbs_are_not_answers() {
    let resources = LanguageResources::builtin();
    let generator = McqGenerator::with_resources(&resources);
    let text = "Iron rusts. Copper conducts heat well.";

    for seed in 0..10 {
        let questions = generator.generate(text, 2, &mut StdRng::seed_from_u64(seed));
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].correct_answer, "Iron");
        assert!(["Copper", "heat"].contains(&questions[1].correct_answer.as_str()));
        for question in &questions {
            assert_well_formed(question);
            assert!(!question.options.iter().any(|o| o == "rusts" || o == "conducts"));
        }
    }
}
