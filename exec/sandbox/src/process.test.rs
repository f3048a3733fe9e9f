use super::*;
use std::collections::HashMap;

fn env() -> HashMap<String, String> {
    let mut env = HashMap::new();
    env.insert("PATH".to_string(), "/usr/bin:/bin".to_string());
    env
}

#[cfg(unix)]
#[tokio::test]
async fn a_quick_command_completes_within_its_timeout() {
    let cwd = std::env::temp_dir();
    let argv = vec!["/bin/echo".to_string(), "hello".to_string()];
    let output = run_sandboxed(&argv, &env(), &cwd, Duration::from_secs(5), None, None).await.unwrap();

    assert_eq!(output.exit_code, 0);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello");
    assert!(!output.stdout_truncated);
}

#[cfg(unix)]
#[tokio::test]
async fn a_long_running_command_times_out_as_a_normal_result_not_an_error() {
    let cwd = std::env::temp_dir();
    let argv = vec!["/bin/sleep".to_string(), "30".to_string()];
    let output = run_sandboxed(&argv, &env(), &cwd, Duration::from_millis(200), None, None).await.unwrap();

    assert_eq!(output.exit_code, 124);
    assert!(String::from_utf8_lossy(&output.stderr).contains("command timed out"));
}

#[cfg(unix)]
#[tokio::test]
async fn an_empty_argv_fails_to_spawn() {
    let cwd = std::env::temp_dir();
    let result = run_sandboxed(&[], &env(), &cwd, Duration::from_secs(1), None, None).await;
    assert!(result.is_err());
}

#[cfg(unix)]
#[tokio::test]
async fn on_output_streams_chunks_as_they_are_read() {
    let cwd = std::env::temp_dir();
    let argv = vec!["/bin/echo".to_string(), "hi".to_string()];
    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    let callback: OutputCallback = std::sync::Arc::new(move |stream, bytes| {
        seen_clone.lock().unwrap().push((stream, bytes.to_vec()));
    });

    run_sandboxed(&argv, &env(), &cwd, Duration::from_secs(5), None, Some(callback)).await.unwrap();

    let seen = seen.lock().unwrap();
    assert!(seen.iter().any(|(stream, bytes)| *stream == OutputStream::Stdout && !bytes.is_empty()));
}

#[tokio::test]
async fn draining_stops_keeping_bytes_past_the_cap_but_reports_truncation() {
    use tokio::io::AsyncWriteExt;

    let (mut writer, mut reader) = tokio::io::duplex(16 * 1024);
    let data = vec![b'x'; MAX_OUTPUT_BYTES + 10];

    let writer_task = tokio::spawn(async move {
        writer.write_all(&data).await.unwrap();
        drop(writer);
    });

    let (kept, truncated) = drain_capped(&mut reader, OutputStream::Stdout, None).await;
    writer_task.await.unwrap();

    assert!(kept.len() > MAX_OUTPUT_BYTES);
    assert!(String::from_utf8_lossy(&kept).ends_with("[sandbox: output truncated at 10MB]"));
    assert!(truncated);
}
