// wordladder-cli: argument definitions, vocabulary loading and command
// implementations shared by the `wordladder` binary.

pub mod args;
pub mod commands;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use env_logger::Builder;
use log::{LevelFilter, info};
use wordladder_core::vocabulary::Vocabulary;
use wordladder_core::word::Word;
use wordladder_core::{LadderError, Result};

/// Environment variable naming a word list file.
pub const WORDLIST_ENV: &str = "WORDLADDER_WORDLIST";

/// Where a loaded vocabulary came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularySource {
    File(PathBuf),
    Sample,
}

/// Load the vocabulary for a command.
///
/// Search order:
/// 1. `wordlist` argument (if provided)
/// 2. `WORDLADDER_WORDLIST` environment variable
/// 3. The bundled sample word list
pub fn load_vocabulary(wordlist: Option<&Path>) -> Result<(Vocabulary, VocabularySource)> {
    let path = wordlist
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(WORDLIST_ENV).map(PathBuf::from));

    match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path).map_err(|source| {
                LadderError::WordlistRead {
                    path: path.display().to_string(),
                    source,
                }
            })?;
            let vocabulary = parse_wordlist(&text)?;
            info!(
                "loaded {} words from {}",
                vocabulary.len(),
                path.display()
            );
            Ok((vocabulary, VocabularySource::File(path)))
        }
        None => {
            info!("no word list given, using the sample vocabulary");
            Ok((Vocabulary::sample(), VocabularySource::Sample))
        }
    }
}

/// Parse a word list: one word per line, surrounding whitespace trimmed,
/// blank lines and `#` comments skipped, words lowercased.
pub fn parse_wordlist(text: &str) -> Result<Vocabulary> {
    let words = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| Word::new(line.to_lowercase()))
        .collect::<Result<Vec<_>>>()?;
    if words.is_empty() {
        return Err(LadderError::EmptyVocabulary);
    }
    Ok(Vocabulary::new(words))
}

/// Install the logger. `verbosity` 0 is quiet (errors only), 1 the default
/// (warnings), 2 adds info and 3 or more adds debug output.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_wordlist_skips_comments_and_blanks() {
        let vocab = parse_wordlist("# animals\ncat\n\n  Bat  \ncat\n").unwrap();
        let words: Vec<&str> = vocab.iter().map(Word::as_str).collect();
        assert_eq!(words, ["bat", "cat"]);
    }

    #[test]
    fn parse_wordlist_rejects_empty_input() {
        assert!(matches!(
            parse_wordlist("# nothing\n\n"),
            Err(LadderError::EmptyVocabulary)
        ));
    }

    #[test]
    fn parse_wordlist_rejects_multiword_lines() {
        assert!(matches!(
            parse_wordlist("ice cream\n"),
            Err(LadderError::InvalidWord(_, _))
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let result = load_vocabulary(Some(Path::new("/nonexistent/wordladder/words.txt")));
        assert!(matches!(result, Err(LadderError::WordlistRead { .. })));
    }

    #[test]
    fn reads_word_list_file() {
        let path = std::env::temp_dir().join(format!("wordladder-{}.txt", process::id()));
        std::fs::write(&path, "arts\nparts\npart\n").unwrap();
        let (vocab, source) = load_vocabulary(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(source, VocabularySource::File(path));
    }
}
