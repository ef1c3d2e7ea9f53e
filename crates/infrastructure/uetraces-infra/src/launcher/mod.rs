use std::process::Stdio;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Command parsing error")]
    ParseError,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A child process that was started and immediately let go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchedProcess {
    pub pid: u32,
}

pub struct Launcher {
    command_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedLaunchCommand {
    pub program: String,
    /// Everything after the program token, exactly as written.
    pub raw_args: String,
}

/// Splits the program token off a command line the way Windows does when no
/// application name is given: a leading quoted run, or everything up to the
/// first whitespace.
pub(crate) fn split_program(cmd: &str) -> Option<(String, String)> {
    let cmd = cmd.trim_start();

    let (program, rest) = if let Some(quoted) = cmd.strip_prefix('"') {
        let end = quoted.find('"')?;
        (&quoted[..end], &quoted[end + 1..])
    } else {
        match cmd.find(char::is_whitespace) {
            Some(end) => (&cmd[..end], &cmd[end..]),
            None => (cmd, ""),
        }
    };

    if program.is_empty() {
        return None;
    }

    Some((program.to_string(), rest.trim_start().to_string()))
}

/// Splits an argument tail on whitespace, grouping double-quoted runs. Quotes
/// are the only special character, so `'` and `\` in paths pass through.
#[cfg_attr(target_os = "windows", allow(dead_code))]
pub(crate) fn split_args(args: &str) -> Option<Vec<String>> {
    let mut parts = Vec::<String>::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in args.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }

    if in_quotes {
        return None;
    }

    if !current.is_empty() {
        parts.push(current);
    }

    Some(parts)
}

impl Launcher {
    pub fn new(command_line: String) -> Self {
        Self { command_line }
    }

    pub(crate) fn resolve_command(&self) -> Result<ResolvedLaunchCommand, LaunchError> {
        let (program, raw_args) =
            split_program(&self.command_line).ok_or(LaunchError::ParseError)?;
        Ok(ResolvedLaunchCommand { program, raw_args })
    }

    /// Starts the process without waiting for it. The child handle is dropped
    /// before returning, so the launched build outlives nothing here.
    pub fn launch(&self) -> Result<LaunchedProcess, LaunchError> {
        let cmd = self.resolve_command()?;

        tracing::info!(
            program = %cmd.program,
            args = %cmd.raw_args,
            "Launching packaged build"
        );

        let mut command = std::process::Command::new(&cmd.program);

        #[cfg(target_os = "windows")]
        {
            // Windows programs parse their own command line, so the arguments
            // are handed over untouched.
            use std::os::windows::process::CommandExt;
            if !cmd.raw_args.is_empty() {
                command.raw_arg(&cmd.raw_args);
            }
        }

        #[cfg(not(target_os = "windows"))]
        {
            let args = split_args(&cmd.raw_args).ok_or(LaunchError::ParseError)?;
            command.args(args);
        }

        let child = command
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?;

        Ok(LaunchedProcess { pid: child.id() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_program_with_spaces_is_one_token() {
        let launcher = Launcher::new(
            r#""C:\My Game\Game.exe" -trace=cpu,gpu -tracefile=C:\t.utrace -statnamedevents"#
                .to_string(),
        );

        let cmd = launcher.resolve_command().expect("expected command to resolve");

        assert_eq!(cmd.program, r"C:\My Game\Game.exe");
        assert_eq!(
            cmd.raw_args,
            r"-trace=cpu,gpu -tracefile=C:\t.utrace -statnamedevents"
        );
    }

    #[test]
    fn unquoted_program_ends_at_first_space() {
        let (program, rest) =
            split_program(r"C:\g.exe -trace=cpu -tracefile=C:\t.utrace").expect("split");
        assert_eq!(program, r"C:\g.exe");
        assert_eq!(rest, r"-trace=cpu -tracefile=C:\t.utrace");
    }

    #[test]
    fn backslashes_in_program_survive() {
        let (program, rest) = split_program(r"C:\test\game.exe").expect("split");
        assert_eq!(program, r"C:\test\game.exe");
        assert_eq!(rest, "");
    }

    #[test]
    fn unbalanced_or_empty_command_lines_are_rejected() {
        assert!(split_program(r#""C:\never closed.exe -trace=cpu"#).is_none());
        assert!(split_program("   ").is_none());
        assert!(split_program(r#""" -trace=cpu"#).is_none());

        let err = Launcher::new(String::new()).launch().unwrap_err();
        assert!(matches!(err, LaunchError::ParseError));
    }

    #[test]
    fn argument_tail_keeps_apostrophes_and_backslashes() {
        let args = split_args(
            "-trace=cpu,gpu -tracefile=/home/o'brien/UETrace_x.utrace -statnamedevents",
        )
        .expect("split");
        assert_eq!(
            args,
            [
                "-trace=cpu,gpu",
                "-tracefile=/home/o'brien/UETrace_x.utrace",
                "-statnamedevents",
            ]
        );

        let args = split_args(r"-tracefile=C:\traces\t.utrace").expect("split");
        assert_eq!(args, [r"-tracefile=C:\traces\t.utrace"]);
    }

    #[test]
    fn quoted_trace_path_with_spaces_is_one_argument() {
        let args = split_args(r#"-trace=cpu -tracefile="/tmp/My Traces/t.utrace" -statnamedevents"#)
            .expect("split");
        assert_eq!(
            args,
            ["-trace=cpu", "-tracefile=/tmp/My Traces/t.utrace", "-statnamedevents"]
        );
        assert!(split_args(r#"-tracefile="/tmp/never closed"#).is_none());
    }

    #[test]
    fn missing_program_is_an_io_error() {
        let launcher = Launcher::new(
            "definitely-not-a-real-program-4f1c9e -trace=cpu -statnamedevents".to_string(),
        );
        let err = launcher.launch().unwrap_err();
        assert!(matches!(err, LaunchError::Io(_)), "got {err:?}");
    }
}
