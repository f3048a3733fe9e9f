use super::*;
use crate::config::SandboxMode;

fn temp_base(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("agentick-kernel-test-{name}-{}", std::process::id()))
}

#[tokio::test]
async fn building_with_none_strategy_and_running_echo_succeeds() {
    let base = temp_base("none-run");
    let kernel = KernelBuilder::new(SandboxConfig::default())
        .with_strategy(SandboxStrategy::None)
        .build(&base)
        .unwrap();

    assert_eq!(kernel.strategy(), SandboxStrategy::None);

    let output = kernel.run(&["/bin/echo".to_string(), "hi".to_string()], Duration::from_secs(5), None).await.unwrap();
    assert_eq!(output.exit_code, 0);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hi");
}

#[tokio::test]
async fn build_rejects_an_unavailable_explicit_strategy() {
    let base = temp_base("bad-strategy");
    let bogus = if cfg!(target_os = "linux") {
        SandboxStrategy::SandboxExec
    } else {
        SandboxStrategy::Bwrap
    };
    let result = KernelBuilder::new(SandboxConfig::default()).with_strategy(bogus).build(&base);
    assert!(result.is_err());
}

#[test]
fn sandbox_exec_argv_embeds_the_generated_profile() {
    let base = temp_base("sbpl-argv");
    let kernel = KernelBuilder::new(SandboxConfig {
        mode: SandboxMode::Strict,
        ..SandboxConfig::default()
    })
    .with_strategy(SandboxStrategy::None)
    .build(&base)
    .unwrap();

    let argv = kernel.sandbox_exec_argv(&["true".to_string()]).unwrap();
    assert_eq!(argv[0], "sandbox-exec");
    assert_eq!(argv[1], "-p");
    assert!(argv[2].contains("(version 1)"));
    assert_eq!(argv.last().unwrap(), "true");
}

#[test]
fn sandbox_exec_argv_rejects_an_empty_command() {
    let base = temp_base("sbpl-empty");
    let kernel = KernelBuilder::new(SandboxConfig::default())
        .with_strategy(SandboxStrategy::None)
        .build(&base)
        .unwrap();

    assert!(kernel.sandbox_exec_argv(&[]).is_err());
}

#[tokio::test]
async fn write_file_then_read_file_round_trips() {
    let base = temp_base("write-read");
    let mut kernel = KernelBuilder::new(SandboxConfig::default())
        .with_strategy(SandboxStrategy::None)
        .build(&base)
        .unwrap();
    let target = kernel.workspace().root().join("hello.txt");

    kernel.write_file(target.to_str().unwrap(), "hello").await.unwrap();
    let content = kernel.read_file(target.to_str().unwrap()).await.unwrap();
    assert_eq!(content, "hello");
}

#[tokio::test]
async fn edit_file_with_empty_old_string_creates_the_file() {
    let base = temp_base("edit-create");
    let mut kernel = KernelBuilder::new(SandboxConfig::default())
        .with_strategy(SandboxStrategy::None)
        .build(&base)
        .unwrap();
    let target = kernel.workspace().root().join("new.txt");

    kernel
        .edit_file(
            target.to_str().unwrap(),
            &[FileEdit {
                old_string: String::new(),
                new_string: "fresh content".to_string(),
                replace_all: false,
            }],
        )
        .await
        .unwrap();

    assert_eq!(kernel.read_file(target.to_str().unwrap()).await.unwrap(), "fresh content");
}

#[tokio::test]
async fn edit_file_replaces_an_exact_match() {
    let base = temp_base("edit-replace");
    let mut kernel = KernelBuilder::new(SandboxConfig::default())
        .with_strategy(SandboxStrategy::None)
        .build(&base)
        .unwrap();
    let target = kernel.workspace().root().join("edit.txt");

    kernel.write_file(target.to_str().unwrap(), "foo bar foo").await.unwrap();
    kernel
        .edit_file(
            target.to_str().unwrap(),
            &[FileEdit {
                old_string: "bar".to_string(),
                new_string: "baz".to_string(),
                replace_all: false,
            }],
        )
        .await
        .unwrap();

    assert_eq!(kernel.read_file(target.to_str().unwrap()).await.unwrap(), "foo baz foo");
}

#[tokio::test]
async fn edit_file_rejects_an_ambiguous_match_without_replace_all() {
    let base = temp_base("edit-ambiguous");
    let mut kernel = KernelBuilder::new(SandboxConfig::default())
        .with_strategy(SandboxStrategy::None)
        .build(&base)
        .unwrap();
    let target = kernel.workspace().root().join("ambiguous.txt");

    kernel.write_file(target.to_str().unwrap(), "foo foo").await.unwrap();
    let result = kernel
        .edit_file(
            target.to_str().unwrap(),
            &[FileEdit {
                old_string: "foo".to_string(),
                new_string: "bar".to_string(),
                replace_all: false,
            }],
        )
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn edit_file_rejects_identical_old_and_new_strings() {
    let base = temp_base("edit-identical");
    let mut kernel = KernelBuilder::new(SandboxConfig::default())
        .with_strategy(SandboxStrategy::None)
        .build(&base)
        .unwrap();
    let target = kernel.workspace().root().join("identical.txt");

    kernel.write_file(target.to_str().unwrap(), "same").await.unwrap();
    let result = kernel
        .edit_file(
            target.to_str().unwrap(),
            &[FileEdit {
                old_string: "same".to_string(),
                new_string: "same".to_string(),
                replace_all: false,
            }],
        )
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn add_mount_then_remove_mount_round_trips_through_list_mounts() {
    let base = temp_base("mount-round-trip");
    let mut kernel = KernelBuilder::new(SandboxConfig::default())
        .with_strategy(SandboxStrategy::None)
        .build(&base)
        .unwrap();

    kernel.add_mount(crate::mounts::MountEntry {
        host_path: std::path::PathBuf::from("/tmp/mount-target"),
        sandbox_path: None,
        mode: crate::mounts::MountMode::ReadOnly,
    });
    assert_eq!(kernel.list_mounts().count(), 1);

    assert!(kernel.remove_mount(std::path::Path::new("/tmp/mount-target")));
    assert_eq!(kernel.list_mounts().count(), 0);
}
