use super::sandbox_error::*;
use super::*;

#[test]
fn status_codes_cover_every_variant() {
    assert_eq!(
        WriteDeniedSnafu { message: "x" }.build().status_code(),
        StatusCode::PermissionDenied
    );
    assert_eq!(
        PathDeniedSnafu { path: "/etc/passwd" }.build().status_code(),
        StatusCode::PermissionDenied
    );
    assert_eq!(NetworkDeniedSnafu.build().status_code(), StatusCode::PermissionDenied);
    assert_eq!(
        InvalidPathSnafu { message: "nul byte" }.build().status_code(),
        StatusCode::InvalidArguments
    );
    assert_eq!(NoStrategyAvailableSnafu.build().status_code(), StatusCode::Unsupported);
    assert_eq!(
        StrategyUnavailableSnafu {
            requested: "bwrap",
            reason: "binary not found"
        }
        .build()
        .status_code(),
        StatusCode::Unsupported
    );
    assert_eq!(
        SpawnFailedSnafu { message: "exec failed" }.build().status_code(),
        StatusCode::IoError
    );
    assert_eq!(
        TimeoutSnafu { timeout_secs: 30u64 }.build().status_code(),
        StatusCode::Timeout
    );
    assert_eq!(
        CgroupErrorSnafu { message: "mkdir failed" }.build().status_code(),
        StatusCode::IoError
    );
    assert_eq!(
        WorkspaceErrorSnafu { message: "mkdir failed" }.build().status_code(),
        StatusCode::IoError
    );
}

#[test]
fn display_messages_include_context() {
    let err: SandboxError = PathDeniedSnafu { path: "/etc/shadow" }.build();
    assert!(err.to_string().contains("/etc/shadow"));
}
