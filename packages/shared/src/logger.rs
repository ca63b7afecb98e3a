//! Logging setup utilities for the Tsudoi binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Library crates whose log output is enabled alongside the binary.
const WORKSPACE_CRATES: [&str; 3] = ["tsudoi_shared", "tsudoi_server", "tsudoi_client"];

/// Build the default filter directives used when `RUST_LOG` is not set.
fn default_directives(binary_name: &str, default_log_level: &str) -> String {
    let binary_target = binary_name.replace('-', "_");
    let mut directives: Vec<String> = WORKSPACE_CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, default_log_level))
        .collect();
    if !WORKSPACE_CRATES.contains(&binary_target.as_str()) {
        directives.push(format!("{}={}", binary_target, default_log_level));
    }
    directives.join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// Sets up logging for the workspace crates and the binary. The log level can be
/// overridden using the `RUST_LOG` environment variable. Output goes to stderr so
/// that it never interleaves with what the client draws on stdout.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "tsudoi-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn")
///
/// # Examples
///
/// ```no_run
/// use tsudoi_shared::logger::setup_logger;
///
/// setup_logger("tsudoi-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_include_workspace_crates() {
        // テスト項目: ワークスペースの全クレートにデフォルトのログレベルが設定される
        // given (前提条件):
        let binary_name = "tsudoi-server";

        // when (操作):
        let directives = default_directives(binary_name, "debug");

        // then (期待する結果): バイナリ名はライブラリと同じターゲットなので重複しない
        assert_eq!(
            directives,
            "tsudoi_shared=debug,tsudoi_server=debug,tsudoi_client=debug"
        );
    }

    #[test]
    fn test_default_directives_append_unknown_binary() {
        // テスト項目: ワークスペース外のバイナリ名はターゲットとして追加される
        // when (操作):
        let directives = default_directives("load-test", "info");

        // then (期待する結果):
        assert!(directives.ends_with(",load_test=info"));
    }
}
