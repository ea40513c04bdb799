use std::process::{Command, Output};

use passgen::CharacterClass;

fn passgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_passgen"))
        .args(args)
        .output()
        .expect("failed to run passgen")
}

fn generated_password(output: &Output) -> String {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    let line = stdout.strip_suffix('\n').unwrap();
    assert!(!line.contains('\n'), "expected a single line, got {stdout:?}");
    line.strip_prefix("Generated Password: ")
        .unwrap_or_else(|| panic!("unexpected output: {stdout:?}"))
        .to_owned()
}

#[test]
fn default_password() {
    let output = passgen(&[]);
    assert!(output.status.success());
    let password = generated_password(&output);
    assert_eq!(password.len(), 12);
    for class in CharacterClass::ALL {
        assert!(password.chars().any(|ch| class.contains(ch)), "{password:?}");
    }
}

#[test]
fn length_and_exclusions() {
    let output = passgen(&["-l", "30", "--no-upper", "--no-special"]);
    assert!(output.status.success());
    let password = generated_password(&output);
    assert_eq!(password.len(), 30);
    assert!(password.chars().any(|ch| ch.is_ascii_lowercase()));
    assert!(password.chars().any(|ch| ch.is_ascii_digit()));
    assert!(password
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit()));
}

#[test]
fn too_short() {
    let output = passgen(&["--length", "2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "Error: Password length must be at least 4 characters to include all selected character \
         types.\n",
    );
}

#[test]
fn negative_length() {
    let output = passgen(&["--length", "-1", "--no-lower", "--no-digits", "--no-special"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "Error: Password length must be at least 1 characters to include all selected character \
         types.\n",
    );
}

#[test]
fn everything_excluded() {
    let output = passgen(&["--no-upper", "--no-lower", "--no-digits", "--no-special"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "Error: At least one character type must be selected.\n",
    );
}

#[test]
fn verbose_logging_never_shows_the_password() {
    let output = passgen(&["-vvv"]);
    assert!(output.status.success());
    let password = generated_password(&output);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("generating password"), "{stderr}");
    assert!(!stderr.contains(&password), "{stderr}");
}

#[test]
fn malformed_length() {
    let output = passgen(&["--length", "many"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
