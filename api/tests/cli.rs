use std::{
    fs,
    net::TcpListener,
    path::{Path, PathBuf},
    process::{Command, Output},
    sync::atomic::{AtomicUsize, Ordering},
};

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// Fresh working directory under the system temp dir, optionally holding a `.env`.
fn work_dir(env_file: Option<&str>) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "study-tracker-cli-{}-{}",
        std::process::id(),
        NEXT_DIR.fetch_add(1, Ordering::SeqCst)
    ));
    fs::create_dir_all(&dir).unwrap();
    if let Some(contents) = env_file {
        fs::write(dir.join(".env"), contents).unwrap();
    }
    dir
}

fn run_server(dir: &Path) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_study-tracker-api"))
        .current_dir(dir)
        .env_remove("PORT")
        .env_remove("HOST")
        .env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .output()
        .unwrap();
    let _ = fs::remove_dir_all(dir);
    output
}

#[test]
fn exits_non_zero_without_env_file() {
    let dir = work_dir(None);
    let output = run_server(&dir);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("failed to load configuration"), "{stdout}");
}

#[test]
fn exits_non_zero_on_invalid_port() {
    let dir = work_dir(Some("PORT=abc\n"));
    let output = run_server(&dir);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PORT must be a number"), "{stdout}");
}

#[test]
fn exits_non_zero_when_port_is_taken() {
    let taken = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port();

    let dir = work_dir(Some(&format!("HOST=127.0.0.1\nPORT={port}\n")));
    let output = run_server(&dir);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("failed to bind 127.0.0.1:{port}")), "{stdout}");
    drop(taken);
}
