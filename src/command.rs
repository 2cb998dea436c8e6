//! ConEmu command line construction.
//!
//! Quoting policy: the executable, the target directory and the run command
//! are always wrapped in double quotes. Embedded quote characters are not
//! escaped.

use std::fmt;
use std::path::Path;

use crate::config::ConEmuSettings;

/// Attach to a running ConEmu instance
pub const SINGLE_FLAG: &str = "-Single";
/// Start a separate ConEmu instance
pub const NO_SINGLE_FLAG: &str = "-NoSingle";
/// Startup directory of the new console
pub const DIR_FLAG: &str = "-Dir";
/// Command to run in the new console
pub const RUN_FLAG: &str = "-Run";

/// Wrap a token in double quotes
pub fn quote(token: &str) -> String {
    format!("\"{}\"", token)
}

/// The full ConEmu invocation, one entry per shell token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    tokens: Vec<String>,
}

impl LaunchCommand {
    /// Build the command for `target` from validated settings.
    pub fn build(settings: &ConEmuSettings, target: &Path) -> Self {
        let mut tokens = vec![quote(&settings.path)];

        tokens.push(
            if settings.reuse_instance {
                SINGLE_FLAG
            } else {
                NO_SINGLE_FLAG
            }
            .to_string(),
        );

        tokens.push(DIR_FLAG.to_string());
        tokens.push(quote(&target.to_string_lossy()));

        if let Some(run) = settings.run_command() {
            tokens.push(RUN_FLAG.to_string());
            tokens.push(quote(run));
        }

        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Single command line as handed to the shell
    pub fn command_line(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(reuse_instance: bool, run_command: &str) -> ConEmuSettings {
        ConEmuSettings {
            path: "C:\\tools\\term.exe".to_string(),
            reuse_instance,
            run_command: run_command.to_string(),
            show_titlebar_icon: true,
        }
    }

    #[test]
    fn test_single_instance_command() {
        let cmd = LaunchCommand::build(&settings(true, ""), Path::new("C:\\project\\src"));
        assert_eq!(
            cmd.command_line(),
            r#""C:\tools\term.exe" -Single -Dir "C:\project\src""#
        );
    }

    #[test]
    fn test_run_command_appended() {
        let cmd = LaunchCommand::build(&settings(true, "ls"), Path::new("C:\\project\\src"));
        let tokens = cmd.tokens();
        assert_eq!(tokens.len(), 6);
        assert_eq!(&tokens[4..], &["-Run".to_string(), "\"ls\"".to_string()]);
    }

    #[test]
    fn test_exactly_one_reuse_flag() {
        for reuse in [true, false] {
            let cmd = LaunchCommand::build(&settings(reuse, ""), Path::new("D:\\x"));
            let single = cmd.tokens().iter().filter(|t| *t == SINGLE_FLAG).count();
            let separate = cmd.tokens().iter().filter(|t| *t == NO_SINGLE_FLAG).count();
            assert_eq!(single + separate, 1);
            assert_eq!(single == 1, reuse);
        }
    }

    #[test]
    fn test_dir_flag_followed_by_target() {
        let cmd = LaunchCommand::build(&settings(false, "cmd /k echo hi"), Path::new("D:\\My Dir"));
        let tokens = cmd.tokens();
        let idx = tokens.iter().position(|t| t == DIR_FLAG).unwrap();
        assert_eq!(tokens[idx + 1], "\"D:\\My Dir\"");
        assert_eq!(tokens.last().unwrap(), "\"cmd /k echo hi\"");
    }

    #[test]
    fn test_no_run_flag_without_run_command() {
        let cmd = LaunchCommand::build(&settings(false, ""), Path::new("D:\\x"));
        assert!(!cmd.tokens().iter().any(|t| t == RUN_FLAG));
        assert_eq!(cmd.to_string(), r#""C:\tools\term.exe" -NoSingle -Dir "D:\x""#);
    }
}
