use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Generator, Shell};
use std::io::{self, Write};

#[derive(Debug, clap::Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn emit(args: CompletionsArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_completions(args.shell, &mut stdout)
}

fn write_completions<G: Generator>(shell: G, out: &mut impl Write) -> Result<()> {
    let mut cmd = crate::Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_completions;
    use clap_complete::Shell;

    #[test]
    fn bash_completions_cover_subcommands() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut buf).expect("generate completions");
        let script = String::from_utf8(buf).expect("utf8");
        assert!(script.contains("dialsift"));
        assert!(script.contains("extract"));
        assert!(script.contains("export"));
    }

    #[test]
    fn zsh_completions_name_the_binary() {
        let mut buf = Vec::new();
        write_completions(Shell::Zsh, &mut buf).expect("generate completions");
        let script = String::from_utf8(buf).expect("utf8");
        assert!(script.contains("#compdef dialsift"));
    }
}
