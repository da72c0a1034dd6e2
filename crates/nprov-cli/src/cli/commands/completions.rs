//! `nprov completions <shell>` – emit a completion script on stdout.

use clap::CommandFactory;
use clap_complete::Shell;

pub fn run_completions(shell: Shell) {
    let mut cmd = crate::cli::Cli::command();
    clap_complete::generate(shell, &mut cmd, "nprov", &mut std::io::stdout());
}
