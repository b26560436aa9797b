//! Shell completion scripts for bot-avatar.

use std::io::Write;

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use super::Cli;
use crate::error::Result;

/// Print a completion script for a shell
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    write_completions(args.shell, &mut std::io::stdout());
    Ok(())
}

/// Write the completion script for `shell`, named after the binary.
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut buf = Vec::new();
        write_completions(shell, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_bash_completions_cover_subcommands() {
        let bash = script(Shell::Bash);
        assert!(bash.contains("bot-avatar"));
        for command in ["generate", "stamp", "badges", "colorize", "completions"] {
            assert!(bash.contains(command), "missing {}", command);
        }
        assert!(bash.contains("--badge-color"));
    }

    #[test]
    fn test_zsh_completions_name_the_binary() {
        assert!(script(Shell::Zsh).contains("#compdef bot-avatar"));
    }
}
