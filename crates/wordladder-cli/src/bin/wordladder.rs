// wordladder: query shortest single-letter-edit ladders between words.
//
// Usage:
//   wordladder [-w WORDLIST] [--no-possessives] [-v|-q] <COMMAND>
//
// Without -w (or WORDLADDER_WORDLIST) the bundled sample vocabulary is used.
//
// Examples:
//   wordladder distance cart bone --path
//   wordladder neighbors cat
//   wordladder paths cat -m 2
//   wordladder matrix --pretty > map.json

use std::io::{self, Write};

use clap::Parser;

use wordladder_cli::args::LadderArgs;
use wordladder_cli::commands::execute_command;

fn main() {
    let args = LadderArgs::parse();
    wordladder_cli::init_logging(args.verbosity());

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if let Err(e) = execute_command(&args, &mut out) {
        let _ = out.flush();
        wordladder_cli::fatal(&e.to_string());
    }
    if let Err(e) = out.flush() {
        wordladder_cli::fatal(&format!("failed to write output: {e}"));
    }
}
