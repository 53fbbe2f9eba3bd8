//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;

use crate::error::Result;

/// Generate shell completions
pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "stalepkg", &mut std::io::stdout().lock());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_bash() {
        assert!(run(Shell::Bash).is_ok());
    }

    #[test]
    fn test_completions_fish() {
        assert!(run(Shell::Fish).is_ok());
    }

    #[test]
    fn test_completions_zsh() {
        assert!(run(Shell::Zsh).is_ok());
    }
}
