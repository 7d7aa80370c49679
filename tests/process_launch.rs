// tests/process_launch.rs
//
// Runs real child processes through `TokioLauncher`. Unix only, since the
// fake pull command is a shell script.

#![cfg(unix)]

use std::error::Error;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use chrono::Local;
use tempfile::TempDir;

use pullwrap::classify::consume;
use pullwrap::engine::{ExecutableSource, PullRunner, RunPlan};
use pullwrap::errors::PullError;
use pullwrap::exec::{ProcessLauncher, TokioLauncher};
use pullwrap::fs::RealFileSystem;
use pullwrap::invocation;
use pullwrap::sink::{FileLogSink, SUMMARY_LOG_NAME, VERBOSE_LOG_NAME};
use pullwrap_test_utils::builders::PullOptionsBuilder;
use pullwrap_test_utils::init_tracing;
use pullwrap_test_utils::memory_sink::MemorySink;

type TestResult = Result<(), Box<dyn Error>>;

fn write_script(dir: &Path, name: &str, body: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n"))?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(path)
}

#[tokio::test]
async fn real_process_output_is_streamed_and_exit_code_kept() -> TestResult {
    init_tracing();
    let dir = TempDir::new()?;
    let script = write_script(
        dir.path(),
        "fake-pull",
        r#"echo "TASK [setup]"
echo "ok: [host]"
echo "PLAY RECAP"
echo "host : ok=5 changed=1 failed=0"
exit 3"#,
    )?;

    let inv = invocation::build(&script, &PullOptionsBuilder::new().build());
    let mut process = TokioLauncher.launch(&inv)?;
    let mut sink = MemorySink::new();

    let summary = consume(process.as_mut(), &mut sink, Local::now()).await?;
    let status = process.wait().await?;

    assert_eq!(status.exit_code(), 3);
    assert_eq!(summary.recap_line.as_deref(), Some("host : ok=5 changed=1 failed=0"));
    assert_eq!(
        sink.line_texts(),
        vec!["TASK [setup]", "ok: [host]", "PLAY RECAP", "host : ok=5 changed=1 failed=0"]
    );
    assert_eq!(sink.lines()[1].task.as_deref(), Some("TASK [setup]"));

    Ok(())
}

#[tokio::test]
async fn stderr_lines_are_captured_too() -> TestResult {
    let dir = TempDir::new()?;
    let script = write_script(dir.path(), "fake-pull", "echo 'warning: on stderr' 1>&2")?;

    let inv = invocation::build(&script, &PullOptionsBuilder::new().build());
    let mut process = TokioLauncher.launch(&inv)?;
    let mut sink = MemorySink::new();

    consume(process.as_mut(), &mut sink, Local::now()).await?;
    let status = process.wait().await?;

    assert!(status.success());
    assert_eq!(sink.line_texts(), vec!["warning: on stderr"]);

    Ok(())
}

#[tokio::test]
async fn non_utf8_output_is_kept_and_does_not_abort_the_run() -> TestResult {
    let dir = TempDir::new()?;
    let script = write_script(
        dir.path(),
        "fake-pull",
        r#"echo 'TASK [x]'
printf 'caf\351\n'
printf 'windows line\r\n'
echo 'PLAY RECAP'
echo 'h : ok=1'"#,
    )?;

    let inv = invocation::build(&script, &PullOptionsBuilder::new().build());
    let mut process = TokioLauncher.launch(&inv)?;
    let mut sink = MemorySink::new();

    let summary = consume(process.as_mut(), &mut sink, Local::now()).await?;
    let status = process.wait().await?;

    assert!(status.success());
    assert_eq!(
        sink.line_texts(),
        vec!["TASK [x]", "caf\u{FFFD}", "windows line", "PLAY RECAP", "h : ok=1"]
    );
    assert_eq!(summary.recap_line.as_deref(), Some("h : ok=1"));
    assert_eq!(sink.recaps().len(), 1);

    Ok(())
}

#[tokio::test]
async fn arguments_reach_the_child_in_order() -> TestResult {
    let dir = TempDir::new()?;
    let script = write_script(dir.path(), "fake-pull", r#"for a in "$@"; do echo "$a"; done"#)?;

    let opts = PullOptionsBuilder::new().verbosity(2).tags("web").build();
    let inv = invocation::build(&script, &opts);
    let mut process = TokioLauncher.launch(&inv)?;
    let mut sink = MemorySink::new();

    consume(process.as_mut(), &mut sink, Local::now()).await?;
    process.wait().await?;

    let expected: Vec<String> = inv
        .args()
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    assert_eq!(sink.line_texts(), expected);

    Ok(())
}

#[tokio::test]
async fn signal_termination_maps_to_128_plus_signal() -> TestResult {
    let dir = TempDir::new()?;
    let script = write_script(dir.path(), "fake-pull", "kill -TERM $$")?;

    let inv = invocation::build(&script, &PullOptionsBuilder::new().build());
    let mut process = TokioLauncher.launch(&inv)?;
    let mut sink = MemorySink::new();

    consume(process.as_mut(), &mut sink, Local::now()).await?;
    let status = process.wait().await?;

    assert_eq!(status.code, None);
    assert_eq!(status.signal, Some(15));
    assert_eq!(status.exit_code(), 143);

    Ok(())
}

#[tokio::test]
async fn spawn_failure_is_a_launch_error() -> TestResult {
    let inv = invocation::build("/definitely/not/here/ansible-pull", &PullOptionsBuilder::new().build());

    match TokioLauncher.launch(&inv) {
        Err(PullError::Launch { program, .. }) => {
            assert_eq!(program, PathBuf::from("/definitely/not/here/ansible-pull"));
        }
        Err(other) => panic!("Expected Launch error, got: {:?}", other),
        Ok(_) => panic!("Expected Launch error, got a running process"),
    }

    Ok(())
}

#[tokio::test]
async fn full_run_writes_verbose_and_summary_logs() -> TestResult {
    init_tracing();
    let dir = TempDir::new()?;
    let script = write_script(
        dir.path(),
        "fake-pull",
        r#"echo "PLAY [localhost]"
echo "TASK [ping]"
echo "ok: [localhost]"
echo "PLAY RECAP"
echo "localhost : ok=1 changed=0 failed=0""#,
    )?;
    let inventory = write_script(dir.path(), "inventory.sh", "echo '{}'")?;
    let log_dir = dir.path().join("logs");

    let plan = RunPlan {
        executable: ExecutableSource::Explicit(script),
        options: PullOptionsBuilder::new()
            .inventory(inventory.to_str().ok_or("non-utf8 temp path")?)
            .build(),
    };

    let launcher = TokioLauncher;
    let runner = PullRunner::new(&RealFileSystem, &launcher);
    let mut sink = FileLogSink::open(&log_dir)?;

    let outcome = runner.run(&plan, &mut sink).await?;
    drop(sink);

    assert!(outcome.status.success());

    let verbose = fs::read_to_string(log_dir.join(VERBOSE_LOG_NAME))?;
    let verbose_lines: Vec<&str> = verbose.lines().collect();
    assert_eq!(verbose_lines.len(), 5);
    assert!(verbose_lines[2].ends_with("\tTASK [ping]\tok: [localhost]"));
    assert!(verbose_lines[0].ends_with("\t-\tPLAY [localhost]"));

    let summary = fs::read_to_string(log_dir.join(SUMMARY_LOG_NAME))?;
    let summary_lines: Vec<&str> = summary.lines().collect();
    assert_eq!(summary_lines.len(), 1);
    let fields: Vec<&str> = summary_lines[0].split('\t').collect();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[2], "localhost : ok=1 changed=0 failed=0");

    Ok(())
}
