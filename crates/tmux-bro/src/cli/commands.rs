//! CLI command definitions using `clap`

use clap::{Arg, ArgAction, Command as ClapCommand};

pub fn after_help_text(examples: &[&str]) -> String {
    let mut text = String::from("EXAMPLES:\n");
    for example in examples {
        text.push_str("  ");
        text.push_str(example);
        text.push('\n');
    }
    text
}

pub fn build_cli() -> ClapCommand {
    ClapCommand::new("tmux-bro")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Open a project-aware tmux session for a directory")
        .arg(
            Arg::new("directory")
                .value_name("DIRECTORY")
                .required(false)
                .help("Project directory (pick one with fzf when omitted)"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Print the session as JSON without touching tmux"),
        )
        .after_help(after_help_text(&[
            "tmux-bro                      Pick a project with fzf",
            "tmux-bro ~/code/my-app        Open or reuse the my-app session",
            "tmux-bro . --dry-run          Show the windows and panes that would be created",
        ]))
}
