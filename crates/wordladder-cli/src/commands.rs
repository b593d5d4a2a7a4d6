//! Command implementations. Each writes its report to `out` so the binary
//! can pass stdout and tests can pass a buffer.

use std::io::Write;

use log::{info, warn};
use wordladder_core::LadderError;
use wordladder_core::distance::Distance;
use wordladder_core::word::Word;
use wordladder_graph::handle::{LadderHandle, LadderOptions};
use wordladder_graph::transform::TransformOptions;

use crate::args::{
    CandidatesArgs, Command, DistanceArgs, LadderArgs, MatrixArgs, NeighborsArgs, PathsArgs,
};

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Ladder(#[from] LadderError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CommandResult = std::result::Result<(), CommandError>;

/// Load the vocabulary named by `args`, build the handle, run the command.
pub fn execute_command(args: &LadderArgs, out: &mut impl Write) -> CommandResult {
    let (vocabulary, source) = crate::load_vocabulary(args.wordlist.as_deref())?;
    info!("vocabulary source: {source:?}");

    let options = LadderOptions {
        transform: TransformOptions {
            allow_possessives: !args.no_possessives,
            ..TransformOptions::default()
        },
    };
    let handle = LadderHandle::with_options(vocabulary, &options);
    run(&handle, &args.command, out)
}

/// Run one command against an existing handle.
pub fn run(handle: &LadderHandle, command: &Command, out: &mut impl Write) -> CommandResult {
    match command {
        Command::Distance(a) => distance(handle, a, out),
        Command::Neighbors(a) => neighbors(handle, a, out),
        Command::Candidates(a) => candidates(handle, a, out),
        Command::Components => components(handle, out),
        Command::Bridges => bridges(handle, out),
        Command::Paths(a) => paths(handle, a, out),
        Command::Matrix(a) => matrix(handle, a, out),
    }
}

fn join(path: &[Word]) -> String {
    path.iter()
        .map(Word::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn distance(handle: &LadderHandle, args: &DistanceArgs, out: &mut impl Write) -> CommandResult {
    let d = handle.distance(&args.from, &args.to)?;
    writeln!(out, "{} -> {}: {d}", args.from, args.to)?;
    if d == Distance::Unreachable {
        if args.path || args.all {
            writeln!(out, "  (no ladder)")?;
        }
        return Ok(());
    }
    if args.path {
        if let Some(path) = handle.shortest_path(&args.from, &args.to)? {
            writeln!(out, "  {}", join(&path))?;
        }
    } else if args.all {
        for path in handle.all_shortest_paths(&args.from, &args.to)? {
            writeln!(out, "  {}", join(&path))?;
        }
    }
    Ok(())
}

fn neighbors(handle: &LadderHandle, args: &NeighborsArgs, out: &mut impl Write) -> CommandResult {
    for word in &args.words {
        let found = handle.transformations_in_vocabulary(word)?;
        if found.is_empty() {
            writeln!(out, "{word}: (no neighbors)")?;
        } else {
            let list: Vec<&str> = found.iter().map(Word::as_str).collect();
            writeln!(out, "{word}: {}", list.join(", "))?;
        }
    }
    Ok(())
}

fn candidates(handle: &LadderHandle, args: &CandidatesArgs, out: &mut impl Write) -> CommandResult {
    let mut found: Vec<String> = handle
        .generate_transformations(&args.word)
        .into_iter()
        .collect();
    found.sort();
    for candidate in &found {
        let marker = if handle.vocabulary().contains(candidate) {
            " *"
        } else {
            ""
        };
        writeln!(out, "{candidate}{marker}")?;
    }
    Ok(())
}

fn components(handle: &LadderHandle, out: &mut impl Write) -> CommandResult {
    for (i, component) in handle.connected_components().iter().enumerate() {
        let list: Vec<&str> = component.iter().map(Word::as_str).collect();
        writeln!(out, "{}: {}", i + 1, list.join(", "))?;
    }
    Ok(())
}

fn bridges(handle: &LadderHandle, out: &mut impl Write) -> CommandResult {
    let found = handle.bridge_words();
    if found.is_empty() {
        writeln!(out, "(no bridge words)")?;
    }
    for word in &found {
        writeln!(out, "{word}")?;
    }
    Ok(())
}

fn paths(handle: &LadderHandle, args: &PathsArgs, out: &mut impl Write) -> CommandResult {
    for node in handle.ladder_tree(&args.start, args.max_depth)? {
        let indent = "  ".repeat(node.depth as usize);
        if node.depth == 0 {
            writeln!(out, "{}", node.word)?;
            continue;
        }
        let ladders: Vec<String> = node.paths.iter().map(|p| join(p)).collect();
        writeln!(
            out,
            "{indent}{} (paths: {})",
            node.word,
            ladders.join(" OR ")
        )?;
    }
    Ok(())
}

fn matrix(handle: &LadderHandle, args: &MatrixArgs, out: &mut impl Write) -> CommandResult {
    let unreachable = handle.distance_matrix().unreachable_pairs();
    if !unreachable.is_empty() {
        warn!("{} word pairs have no ladder", unreachable.len());
        for (a, b) in &unreachable {
            info!("no ladder between {a:?} and {b:?}");
        }
    }

    let data = handle.visualization_data();
    let value = match args.cap {
        Some(cap) => serde_json::json!({
            "words": data.words,
            "distances": data.dense_distances(cap),
        }),
        None => serde_json::to_value(&data)?,
    };
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, &value)?;
    } else {
        serde_json::to_writer(&mut *out, &value)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordladder_core::vocabulary::Vocabulary;

    fn run_on(words: Option<&[&str]>, command: Command) -> String {
        let vocab = match words {
            Some(w) => Vocabulary::from_strs(w).unwrap(),
            None => Vocabulary::sample(),
        };
        let handle = LadderHandle::new(vocab);
        let mut out = Vec::new();
        run(&handle, &command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn distance_with_path() {
        let text = run_on(
            Some(&["arts", "parts", "part"]),
            Command::Distance(DistanceArgs {
                from: "arts".into(),
                to: "part".into(),
                path: true,
                all: false,
            }),
        );
        assert_eq!(text, "arts -> part: 2\n  arts -> parts -> part\n");
    }

    #[test]
    fn distance_unreachable() {
        let text = run_on(
            Some(&["cat", "zebra"]),
            Command::Distance(DistanceArgs {
                from: "cat".into(),
                to: "zebra".into(),
                path: true,
                all: false,
            }),
        );
        assert_eq!(text, "cat -> zebra: inf\n  (no ladder)\n");
    }

    #[test]
    fn distance_unknown_word_fails() {
        let handle = LadderHandle::new(Vocabulary::sample());
        let command = Command::Distance(DistanceArgs {
            from: "cat".into(),
            to: "dog".into(),
            path: false,
            all: false,
        });
        let mut out = Vec::new();
        let err = run(&handle, &command, &mut out).unwrap_err();
        assert!(matches!(err, CommandError::Ladder(LadderError::WordNotFound(_))));
        assert_eq!(err.to_string(), "word not found: \"dog\"");
    }

    #[test]
    fn neighbors_listing() {
        let text = run_on(
            None,
            Command::Neighbors(NeighborsArgs {
                words: vec!["cat".into(), "cute".into()],
            }),
        );
        assert_eq!(text, "cat: bat, cart, cat's, chat, coat, cut\ncute: cut\n");
    }

    #[test]
    fn candidates_mark_vocabulary_words() {
        let text = run_on(
            Some(&["cat", "cut"]),
            Command::Candidates(CandidatesArgs { word: "cat".into() }),
        );
        assert!(text.lines().any(|l| l == "cut *"));
        assert!(text.lines().any(|l| l == "bat"));
    }

    #[test]
    fn components_and_bridges() {
        let text = run_on(Some(&["arts", "parts", "part", "zebra"]), Command::Components);
        assert_eq!(text, "1: arts, part, parts\n2: zebra\n");

        let text = run_on(Some(&["arts", "parts", "part"]), Command::Bridges);
        assert_eq!(text, "parts\n");

        let text = run_on(Some(&["cat"]), Command::Bridges);
        assert_eq!(text, "(no bridge words)\n");
    }

    #[test]
    fn paths_tree_output() {
        let text = run_on(
            Some(&["arts", "parts", "part"]),
            Command::Paths(PathsArgs {
                start: "arts".into(),
                max_depth: 2,
            }),
        );
        assert_eq!(
            text,
            "arts\n  parts (paths: arts -> parts)\n    part (paths: arts -> parts -> part)\n"
        );
    }

    #[test]
    fn matrix_json() {
        let text = run_on(
            Some(&["cat", "cut", "zebra"]),
            Command::Matrix(MatrixArgs {
                pretty: false,
                cap: None,
            }),
        );
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["words"], serde_json::json!(["cat", "cut", "zebra"]));
        assert_eq!(value["distances"][0], serde_json::json!([0, 1, null]));
        assert_eq!(value["edges"], serde_json::json!([[0, 1]]));
    }

    #[test]
    fn matrix_dense_cap() {
        let text = run_on(
            Some(&["cat", "cut", "zebra"]),
            Command::Matrix(MatrixArgs {
                pretty: true,
                cap: Some(100.0),
            }),
        );
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["distances"][2], serde_json::json!([100.0, 100.0, 0.0]));
    }
}
