use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn wordscope(data_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wordscope"));
    cmd.arg("--data-dir").arg(data_dir.path()).env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn analyzes_text_argument() {
    let data_dir = TempDir::new().unwrap();

    let stdout = stdout_of(wordscope(&data_dir).args(["--text", "Cats cats dogs. Dogs run fast!"]));

    assert!(stdout.contains("Word count: 6"));
    assert!(stdout.contains("Character count: 30"));
    assert!(stdout.contains("Sentence count: 2"));
    assert!(stdout.contains("Reading time (minutes): 0.03"));
    assert!(stdout.contains("cat           2"));
}

#[test]
fn analyzes_stdin() {
    let data_dir = TempDir::new().unwrap();

    let stdout = stdout_of(wordscope(&data_dir).write_stdin("The children played. The child slept."));

    assert!(stdout.contains("Word count: 4"));
    assert!(stdout.contains("child           2"));
}

#[test]
fn piped_newline_does_not_change_character_count() {
    let data_dir = TempDir::new().unwrap();

    let piped = stdout_of(wordscope(&data_dir).write_stdin("Cats cats dogs. Dogs run fast!\n"));
    let argument = stdout_of(wordscope(&data_dir).args(["--text", "Cats cats dogs. Dogs run fast!"]));

    assert!(piped.contains("Character count: 30"));
    assert_eq!(piped, argument);
}

#[test]
fn empty_input_fails() {
    let data_dir = TempDir::new().unwrap();

    let output = wordscope(&data_dir).args(["--text", ""]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Please enter or paste some text"));
}

#[test]
fn bootstraps_data_dir_on_first_run() {
    let data_dir = TempDir::new().unwrap();

    stdout_of(wordscope(&data_dir).args(["--text", "hello"]));

    assert!(data_dir.path().join("tokenizers/punkt/abbreviations.txt").is_file());
    assert!(data_dir.path().join("corpora/wordnet/noun.exc").is_file());
    assert!(data_dir.path().join("corpora/stopwords/english").is_file());
}

#[test]
fn init_reports_installed_then_present() {
    let data_dir = TempDir::new().unwrap();

    let first = stdout_of(wordscope(&data_dir).arg("--init"));
    let second = stdout_of(wordscope(&data_dir).arg("--init"));

    assert_eq!(first.matches("Installed").count(), 3);
    assert_eq!(second.matches("Already present").count(), 3);
}

#[test]
fn example_is_printed_not_analyzed() {
    let data_dir = TempDir::new().unwrap();

    let stdout = stdout_of(wordscope(&data_dir).arg("--example"));

    assert!(stdout.starts_with("Lorem ipsum dolor sit amet"));
    assert!(!stdout.contains("Word count"));
}

#[test]
fn json_output_is_machine_readable() {
    let data_dir = TempDir::new().unwrap();

    let stdout = stdout_of(wordscope(&data_dir).args([
        "--format",
        "json",
        "--text",
        "Cats cats dogs. Dogs run fast!",
    ]));

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["metrics"]["word_count"], 6);
    assert_eq!(value["top_words"][1]["word"], "dog");
}

#[test]
fn writes_word_cloud() {
    let data_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let cloud = out_dir.path().join("cloud.svg");

    stdout_of(
        wordscope(&data_dir)
            .args(["--text", "Cats cats dogs. Dogs run fast!", "--cloud"])
            .arg(&cloud),
    );

    let svg = fs::read_to_string(&cloud).unwrap();
    assert!(svg.contains(">cat</text>"));
    assert!(svg.contains(">fast</text>"));
}

#[test]
fn rejects_non_svg_cloud_path() {
    let data_dir = TempDir::new().unwrap();

    let output = wordscope(&data_dir)
        .args(["--text", "hello", "--cloud", "cloud.png"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains(".svg"));
}
