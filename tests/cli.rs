//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const PANGRAM: &str = "The quick brown fox jumps over the lazy dog. Dogs are loyal animals.";

fn mcq_gen() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("mcq-gen").unwrap();
    cmd.env_remove("MCQ_SEED")
        .env_remove("MCQ_QUESTION_COUNT")
        .env_remove("MCQ_TREEBANK");
    cmd
}

#[test]
fn prints_questions_as_text() {
    mcq_gen()
        .args(["--seed", "1", "-n", "2"])
        .write_stdin(PANGRAM)
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1: "))
        .stdout(predicate::str::contains("Question 2: "))
        .stdout(predicate::str::contains("______"))
        .stdout(predicate::str::contains("Answer: "));
}

#[test]
fn json_output_is_reproducible_with_a_seed() {
    let run = || {
        mcq_gen()
            .args(["--seed", "42", "--format", "json"])
            .write_stdin(PANGRAM)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    let first = run();
    assert_eq!(first, run());

    let questions: serde_json::Value = serde_json::from_slice(&first).unwrap();
    let questions = questions.as_array().unwrap();
    assert_eq!(questions.len(), 2);
    for question in questions {
        assert_eq!(question["options"].as_array().unwrap().len(), 4);
        assert!(question["stem"].as_str().unwrap().contains("______"));
    }
}

#[test]
fn records_carry_subject_and_difficulty() {
    let output = mcq_gen()
        .args([
            "--seed",
            "3",
            "--format",
            "records",
            "--subject",
            "Zoology",
            "--difficulty",
            "easy",
        ])
        .write_stdin(PANGRAM)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let records: serde_json::Value = serde_json::from_slice(&output).unwrap();
    for record in records.as_array().unwrap() {
        assert_eq!(record["subject"], "Zoology");
        assert_eq!(record["difficulty"], "easy");
        assert_eq!(record["question_type"], "mcq");
        let letter = record["correct_option"].as_str().unwrap().to_lowercase();
        assert_eq!(record[format!("option_{letter}")], record["correct_answer"]);
    }
}

#[test]
fn reads_input_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PANGRAM.as_bytes()).unwrap();

    mcq_gen()
        .arg(file.path())
        .args(["--seed", "9", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1: "))
        .stdout(predicate::str::contains("Question 2: ").not());
}

#[test]
fn count_can_come_from_the_environment() {
    mcq_gen()
        .env("MCQ_QUESTION_COUNT", "1")
        .args(["--seed", "9"])
        .write_stdin(PANGRAM)
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 2: ").not());
}

#[test]
fn text_without_keywords_reports_no_questions() {
    mcq_gen()
        .write_stdin("And then it was so.")
        .assert()
        .success()
        .stdout(predicate::str::contains("No questions could be generated"));
}

#[test]
fn missing_input_file_fails() {
    mcq_gen()
        .arg("/nonexistent/passage.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn bad_treebank_still_generates() {
    mcq_gen()
        .args(["--treebank", "/nonexistent/treebank.conllu", "--seed", "5"])
        .write_stdin(PANGRAM)
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1: "));
}
