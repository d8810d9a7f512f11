//! Application configuration
//!
//! UI layout constants shared by the sidebar and the composer, plus the
//! server-side settings (port, optional history seed file).

/// Viewport width (px) below which the sidebar renders as an overlay
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Rail width when collapsed (icons only)
pub const SIDEBAR_COLLAPSED_WIDTH_PX: u32 = 80;

/// Rail width when expanded (icons + labels)
pub const SIDEBAR_EXPANDED_WIDTH_PX: u32 = 256;

/// Composer textarea height bounds
pub const COMPOSER_MIN_HEIGHT_PX: u32 = 44;
pub const COMPOSER_MAX_HEIGHT_PX: u32 = 200;

/// Vertical scrolling turns on past this many lines, regardless of height
pub const COMPOSER_SCROLL_LINE_THRESHOLD: usize = 5;

/// Estimated line box used when the DOM can't be measured (SSR)
pub const COMPOSER_LINE_HEIGHT_PX: u32 = 24;
pub const COMPOSER_VERTICAL_PADDING_PX: u32 = 20;

/// Transition applied when the composer docks
pub const DOCK_TRANSITION: &str = "all 0.5s ease-out";

/// Advisory accept filter for the file picker (not enforced)
pub const FILE_ACCEPT_HINT: &str = ".pdf,.doc,.docx,.txt,.png,.jpg,.jpeg";

/// DOM ids used to reach elements from event handlers
pub const COMPOSER_TEXTAREA_ID: &str = "composer-input";
pub const COMPOSER_FILE_INPUT_ID: &str = "composer-file-input";

/// Environment variable naming the JSON file used to seed the history store
pub const HISTORY_FILE_ENV: &str = "CHAT_SHELL_HISTORY_FILE";

#[cfg(not(target_arch = "wasm32"))]
pub use server::{ServerArgs, ServerConfig};

#[cfg(not(target_arch = "wasm32"))]
mod server {
    use clap::Parser;
    use std::path::PathBuf;

    use super::HISTORY_FILE_ENV;

    /// Command-line arguments for the standalone API server
    #[derive(Debug, Clone, Parser)]
    #[command(name = "server", about = "Chat history API server")]
    pub struct ServerArgs {
        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 3001)]
        pub port: u16,

        /// JSON file with an array of conversations to preload
        #[arg(long, env = "CHAT_SHELL_HISTORY_FILE")]
        pub history_file: Option<PathBuf>,
    }

    /// Settings shared by both server entry points
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct ServerConfig {
        pub history_file: Option<PathBuf>,
    }

    impl ServerConfig {
        /// Read settings from the environment (fullstack entry point)
        pub fn from_env() -> Self {
            Self::from_history_var(std::env::var(HISTORY_FILE_ENV).ok())
        }

        fn from_history_var(value: Option<String>) -> Self {
            let history_file = value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from);
            Self { history_file }
        }
    }

    impl From<&ServerArgs> for ServerConfig {
        fn from(args: &ServerArgs) -> Self {
            Self {
                history_file: args.history_file.clone(),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_blank_history_var_is_ignored() {
            assert_eq!(ServerConfig::from_history_var(None).history_file, None);
            assert_eq!(ServerConfig::from_history_var(Some("  ".into())).history_file, None);
            assert_eq!(
                ServerConfig::from_history_var(Some("/tmp/history.json".into())).history_file,
                Some(PathBuf::from("/tmp/history.json"))
            );
        }

        #[test]
        fn test_server_args_explicit() {
            let args = ServerArgs::try_parse_from([
                "server",
                "--port",
                "4000",
                "--history-file",
                "seed.json",
            ])
            .unwrap();
            assert_eq!(args.port, 4000);
            let config = ServerConfig::from(&args);
            assert_eq!(config.history_file, Some(PathBuf::from("seed.json")));
        }
    }
}
