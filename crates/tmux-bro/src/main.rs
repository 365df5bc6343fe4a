//! tmux-bro CLI - project-aware tmux sessions
//!
//! Binary name: `tmux-bro`

use std::process;

mod cli;
mod selector;

use cli::{run_cli, setup::init_tracing};

fn main() {
    if let Err(e) = init_tracing() {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Warning: {e}");
        }
    }

    if let Err(err) = run_cli() {
        #[allow(clippy::print_stderr)]
        {
            if err.is::<cli::NoSelection>() {
                eprintln!("{err}");
            } else {
                eprintln!("Error: {err:#}");
            }
        }

        let code = err
            .downcast_ref::<tmux_bro_core::Error>()
            .map_or(1, tmux_bro_core::Error::exit_code);

        #[allow(clippy::exit)]
        process::exit(code);
    }
}
