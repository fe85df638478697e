use crate::error::ExternalError;
use serde::{Deserialize, Serialize};
use std::{fs::File, path::Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordListFormat {
    Text,
    Csv,
    Json,
}

impl WordListFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" => Some(WordListFormat::Text),
            "csv" => Some(WordListFormat::Csv),
            "json" => Some(WordListFormat::Json),
            _ => None,
        }
    }
}

/// A CSV row; any other columns are ignored.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    word: String,
}

/// The JSON shapes accepted for a word list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonWordList {
    Plain(Vec<String>),
    Named { name: Option<String>, words: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    pub name: String,
    pub words: Vec<String>,
}

impl WordList {
    /// Load a word list, picking the format from the file extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ExternalError> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        let format = WordListFormat::from_extension(extension).ok_or_else(|| {
            ExternalError::InvalidFormat {
                expected: "txt, csv or json".to_string(),
                actual: extension.to_string(),
            }
        })?;

        let mut list = match format {
            WordListFormat::Text => Self::from_text(path)?,
            WordListFormat::Csv => Self::from_csv(path)?,
            WordListFormat::Json => Self::from_json(path)?,
        };

        if list.name.is_empty() {
            list.name = file_stem(path);
        }
        if list.words.is_empty() {
            return Err(ExternalError::InvalidWordList(format!(
                "{} contains no words",
                path.display()
            )));
        }
        log::debug!("Loaded {} words from {}", list.words.len(), path.display());
        Ok(list)
    }

    /// One word per line; blank lines and lines starting with `#` are skipped.
    pub fn from_text<P: AsRef<Path>>(path: P) -> Result<Self, ExternalError> {
        let contents = std::fs::read_to_string(&path)?;
        Ok(Self::parse_text(&file_stem(path.as_ref()), &contents))
    }

    pub fn parse_text(name: &str, contents: &str) -> Self {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self {
            name: name.to_string(),
            words,
        }
    }

    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, ExternalError> {
        let file = File::open(&path)?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);
        let mut words = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result?;
            if !record.word.is_empty() {
                words.push(record.word);
            }
        }

        Ok(Self {
            name: file_stem(path.as_ref()),
            words,
        })
    }

    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, ExternalError> {
        let file = File::open(&path)?;
        let list = match serde_json::from_reader(file)? {
            JsonWordList::Plain(words) => Self {
                name: file_stem(path.as_ref()),
                words,
            },
            JsonWordList::Named { name, words } => Self {
                name: name.unwrap_or_else(|| file_stem(path.as_ref())),
                words,
            },
        };
        Ok(list)
    }

    pub fn add_word(&mut self, word: String) {
        self.words.push(word);
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown")
        .to_string()
}
