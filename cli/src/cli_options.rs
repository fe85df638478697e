//! Command-line options.
//!
//! Every flag is optional: flags override the settings file, which overrides the built-in
//! defaults.

use clap::Parser;
use sopa_core::GeneratorConfig;
use sopa_external::{Settings, WordList};
use std::path::PathBuf;

/// Generate a word-search puzzle and save it as plain text.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Side length of the square grid
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Word to hide in the grid (repeatable); replaces the configured list
    #[arg(short, long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    /// Word list file (.txt, .csv or .json); replaces the configured list
    #[arg(short = 'f', long, value_name = "FILE")]
    pub words_file: Option<PathBuf>,

    /// Text file the puzzle is written to
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Seed for a reproducible puzzle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Placement attempts per word before it is dropped
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Letters used to fill the free cells
    #[arg(long)]
    pub alphabet: Option<String>,

    /// JSON settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print what happened to every word on stderr
    #[arg(short, long, default_value_t = false)]
    pub report: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Apply the flags on top of `settings`, loading the word list file if one was given.
    pub fn apply(&self, mut settings: Settings) -> Result<Settings, sopa_external::ExternalError> {
        let config: &mut GeneratorConfig = &mut settings.generator;

        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_attempts) = self.max_attempts {
            config.max_attempts = max_attempts;
        }
        if let Some(alphabet) = &self.alphabet {
            config.alphabet = alphabet.clone();
        }

        if self.words_file.is_some() || !self.words.is_empty() {
            let mut list = match &self.words_file {
                Some(path) => WordList::load(path)?,
                None => WordList::parse_text("command line", ""),
            };
            for word in &self.words {
                list.add_word(word.clone());
            }
            config.words = list.words;
        }

        if let Some(output) = &self.output {
            settings.output = output.clone();
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keep_settings() {
        let args = Args::parse_from(["sopa-de-letras"]);
        assert_eq!(args.apply(Settings::default()).unwrap(), Settings::default());
    }

    #[test]
    fn test_flags_override_settings() {
        let args = Args::parse_from([
            "sopa-de-letras",
            "--size",
            "10",
            "-w",
            "niño",
            "-w",
            "RGB",
            "--seed",
            "7",
            "-o",
            "salida.txt",
        ]);
        let settings = args.apply(Settings::default()).unwrap();
        assert_eq!(settings.generator.size, 10);
        assert_eq!(settings.generator.words, vec!["niño", "RGB"]);
        assert_eq!(settings.generator.seed, Some(7));
        assert_eq!(settings.generator.max_attempts, 100);
        assert_eq!(settings.output, PathBuf::from("salida.txt"));
    }
}
