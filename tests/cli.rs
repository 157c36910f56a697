use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

fn bundled_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

fn create_template(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_create-template"))
        .args(args)
        .current_dir(cwd)
        .env_remove("FORCE_COLOR")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("CREATE_TEMPLATE_TRACE")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn is_empty(dir: &Path) -> bool {
    fs::read_dir(dir).unwrap().next().is_none()
}

fn has_cd_line(stdout: &str) -> bool {
    stdout.lines().any(|l| l.trim_start().starts_with("cd "))
}

#[test]
fn unknown_template_fails() {
    let cwd = tempfile::tempdir().unwrap();
    let output = create_template(cwd.path(), &["demo", "-t", "svelte"]);

    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("error: creation failed: unknown template `svelte`"),
        "stderr: {}",
        stderr(&output)
    );
    assert!(is_empty(cwd.path()));
}

#[test]
fn creates_project_and_suggests_cd() {
    let cwd = tempfile::tempdir().unwrap();
    let templates = bundled_templates();
    let output = create_template(
        cwd.path(),
        &["demo", "-t", "vue-ts", "--templates-dir", templates.to_str().unwrap()],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Done. Now run:"));
    assert!(out.lines().any(|l| l.trim() == "cd demo"), "stdout: {out}");
    assert!(cwd.path().join("demo/.gitignore").is_file());
}

#[test]
fn in_place_has_no_cd() {
    let cwd = tempfile::tempdir().unwrap();
    let templates = bundled_templates();
    let output = create_template(
        cwd.path(),
        &[".", "-t", "react", "--templates-dir", templates.to_str().unwrap()],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!has_cd_line(&stdout(&output)));
    assert!(cwd.path().join("package.json").is_file());
}

#[test]
fn no_terminal_fails_cleanly() {
    let cwd = tempfile::tempdir().unwrap();
    let output = create_template(cwd.path(), &[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("error: creation failed"));
    assert!(!stderr(&output).contains("panicked"));
    assert!(is_empty(cwd.path()));
}

#[test]
fn help_is_plain_when_piped() {
    let cwd = tempfile::tempdir().unwrap();
    let output = create_template(cwd.path(), &["--help", "demo", "-t", "vue"]);

    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Usage:"));
    assert!(out.contains("react-ts"));
    assert!(!out.contains('\u{1b}'), "stdout: {out:?}");
    assert!(is_empty(cwd.path()));
}
