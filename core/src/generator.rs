use crate::normalize::normalize_words;
use crate::word_search::{Placement, PlacementOutcome, WordReport, WordSearch};
use crate::{Cell, Direction, Grid};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Latin alphabet plus `Ñ`, used to fill cells no word passes through.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZÑ";

pub const DEFAULT_SIZE: usize = 25;

pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

pub const DEFAULT_WORDS: [&str; 15] = [
    "HARDWARE",
    "MONITOR",
    "PIXEL",
    "RESOLUCION",
    "RGB",
    "PROCESADOR",
    "MEMORIA",
    "GRAFICO",
    "PANTALLA",
    "USB",
    "TECLADO",
    "IMAGEN",
    "BRILLO",
    "CONTRASTE",
    "SATURACION",
];

/// Generator configuration parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Side length of the square grid.
    pub size: usize,
    /// Raw input words, normalized before placement.
    pub words: Vec<String>,
    /// Letters drawn when filling the free cells.
    pub alphabet: String,
    /// Placement attempts per word before it is dropped.
    pub max_attempts: usize,
    /// Fixed seed for reproducible puzzles; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            alphabet: DEFAULT_ALPHABET.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.size == 0 {
            return Err(GeneratorError::InvalidSize(self.size));
        }
        if self.alphabet.is_empty() {
            return Err(GeneratorError::EmptyAlphabet);
        }
        if let Some(index) = self.words.iter().position(String::is_empty) {
            return Err(GeneratorError::EmptyWord(index));
        }
        Ok(())
    }
}

/// Generator error types
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Grid size must be at least 1, got {0}")]
    InvalidSize(usize),
    #[error("Filler alphabet must not be empty")]
    EmptyAlphabet,
    #[error("Word #{0} is empty")]
    EmptyWord(usize),
}

/// Legal start coordinates on one axis for a word of `len` cells moving by `delta`.
///
/// The range shrinks from the edge the word would run out of.
fn start_range(delta: isize, len: usize, size: usize) -> Option<RangeInclusive<usize>> {
    if len == 0 || len > size {
        return None;
    }
    match delta {
        0 => Some(0..=size - 1),
        d if d > 0 => Some(0..=size - len),
        _ => Some(len - 1..=size - 1),
    }
}

/// Walk `word` from `(row, col)` and commit it only if every cell accepts its letter.
fn try_place(
    grid: &mut Grid,
    word: &[char],
    row: usize,
    col: usize,
    direction: Direction,
) -> bool {
    let mut positions = Vec::with_capacity(word.len());
    for (i, &letter) in word.iter().enumerate() {
        let Some((r, c)) = direction.step(row, col, i, grid.size) else {
            return false;
        };
        match grid.get_cell(r, c) {
            Some(cell) if cell.accepts(letter) => positions.push((r, c)),
            _ => return false,
        }
    }

    for ((r, c), &letter) in positions.into_iter().zip(word) {
        if let Some(cell) = grid.get_cell_mut(r, c) {
            *cell = Cell::Letter(letter);
        }
    }
    true
}

/// One randomized attempt: pick a direction and a start, then try to commit.
fn attempt<R: Rng + ?Sized>(grid: &mut Grid, word: &[char], rng: &mut R) -> Option<Placement> {
    let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
    let (dr, dc) = direction.delta();
    let rows = start_range(dr, word.len(), grid.size)?;
    let cols = start_range(dc, word.len(), grid.size)?;
    let row = rng.random_range(rows);
    let col = rng.random_range(cols);

    try_place(grid, word, row, col, direction).then(|| Placement {
        word: word.iter().collect(),
        row,
        col,
        direction,
    })
}

/// Greedily place already-normalized `words` into a fresh `size`x`size` grid.
///
/// Words holding a character outside `alphabet` are reported as
/// [`PlacementOutcome::InvalidChars`] and words longer than `size` as
/// [`PlacementOutcome::TooLong`], both in input order. The rest are shuffled and each gets up
/// to `max_attempts` random tries; placed words never move, so an unlucky early placement can
/// crowd out later words.
pub fn place_words<R: Rng + ?Sized>(
    size: usize,
    words: &[String],
    alphabet: &[char],
    max_attempts: usize,
    rng: &mut R,
) -> (Grid, Vec<WordReport>) {
    let mut grid = Grid::new(size);
    let mut report = Vec::with_capacity(words.len());

    let mut eligible = Vec::with_capacity(words.len());
    for word in words {
        let outcome = if word.chars().any(|c| !alphabet.contains(&c)) {
            debug!("Skipping {word}: contains characters outside the alphabet");
            PlacementOutcome::InvalidChars
        } else if word.chars().count() > size {
            debug!("Skipping {word}: longer than grid size {size}");
            PlacementOutcome::TooLong
        } else {
            eligible.push(word);
            continue;
        };
        report.push(WordReport {
            word: word.clone(),
            outcome,
            attempts: 0,
        });
    }

    eligible.shuffle(rng);

    for word in eligible {
        let letters: Vec<char> = word.chars().collect();
        let mut outcome = PlacementOutcome::NoSlot;
        let mut attempts = 0;

        while attempts < max_attempts {
            attempts += 1;
            if let Some(placement) = attempt(&mut grid, &letters, rng) {
                debug!(
                    "Placed {word} at ({}, {}) going {} after {attempts} attempts",
                    placement.row,
                    placement.col,
                    placement.direction.name()
                );
                outcome = PlacementOutcome::Placed(placement);
                break;
            }
        }

        if outcome == PlacementOutcome::NoSlot {
            debug!("Dropping {word}: no slot found in {attempts} attempts");
        }
        report.push(WordReport {
            word: word.clone(),
            outcome,
            attempts,
        });
    }

    (grid, report)
}

/// Replace every empty cell with a random letter from `alphabet`.
///
/// Returns how many cells were filled, which is zero on a grid that is already full.
pub fn fill_grid<R: Rng + ?Sized>(grid: &mut Grid, alphabet: &[char], rng: &mut R) -> usize {
    if alphabet.is_empty() {
        return 0;
    }
    let mut filled = 0;
    for cell in grid.cells.iter_mut().flatten() {
        if cell.is_empty() {
            *cell = Cell::Letter(alphabet[rng.random_range(0..alphabet.len())]);
            filled += 1;
        }
    }
    filled
}

/// The main word-search generator
pub struct WordSearchGenerator {
    config: GeneratorConfig,
}

impl WordSearchGenerator {
    /// Create a new generator with the given configuration
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate a puzzle, seeding the random source from the configuration.
    pub fn generate(&self) -> Result<WordSearch, GeneratorError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.generate_with_rng(&mut rng)
    }

    /// Generate a puzzle drawing all randomness from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<WordSearch, GeneratorError> {
        self.config.validate()?;

        let words = normalize_words(&self.config.words);
        let alphabet: Vec<char> = self.config.alphabet.chars().collect();
        let (mut grid, report) = place_words(
            self.config.size,
            &words,
            &alphabet,
            self.config.max_attempts,
            rng,
        );

        let filled = fill_grid(&mut grid, &alphabet, rng);

        let search = WordSearch { grid, report };
        info!(
            "Generated {size}x{size} grid: {placed}/{total} words placed, {filled} random cells",
            size = self.config.size,
            placed = search.placements().count(),
            total = words.len(),
        );
        Ok(search)
    }
}

/// Public API function to generate a word search
pub fn generate_word_search(config: GeneratorConfig) -> Result<WordSearch, GeneratorError> {
    WordSearchGenerator::new(config).generate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_range_shrinks_from_exit_edge() {
        assert_eq!(start_range(0, 3, 5), Some(0..=4));
        assert_eq!(start_range(1, 3, 5), Some(0..=2));
        assert_eq!(start_range(-1, 3, 5), Some(2..=4));
        assert_eq!(start_range(1, 5, 5), Some(0..=0));
        assert_eq!(start_range(-1, 5, 5), Some(4..=4));
        assert_eq!(start_range(1, 6, 5), None);
    }

    #[test]
    fn test_try_place_rejects_conflict_without_mutation() {
        let mut grid = Grid::new(3);
        assert!(try_place(&mut grid, &['A', 'B', 'C'], 0, 0, Direction::Right));
        let before = grid.clone();

        // crosses (0, 1) which holds 'B'
        assert!(!try_place(&mut grid, &['X', 'Y', 'Z'], 0, 1, Direction::Down));
        assert_eq!(grid, before);

        // leaves the grid on the last letter
        assert!(!try_place(&mut grid, &['Q', 'R', 'S'], 1, 1, Direction::Down));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_try_place_shares_matching_letter() {
        let mut grid = Grid::new(3);
        assert!(try_place(&mut grid, &['S', 'O', 'L'], 1, 0, Direction::Right));
        assert!(try_place(&mut grid, &['D', 'O', 'S'], 0, 1, Direction::Down));
        assert_eq!(grid.read_along(1, 0, Direction::Right, 3).as_deref(), Some("SOL"));
        assert_eq!(grid.read_along(0, 1, Direction::Down, 3).as_deref(), Some("DOS"));
    }

    #[test]
    fn test_fill_grid_only_touches_empty_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(2);
        grid.set_cell(0, 0, Cell::Letter('Z')).unwrap();

        assert_eq!(fill_grid(&mut grid, &['A'], &mut rng), 3);
        assert_eq!(grid.get_cell(0, 0), Some(&Cell::Letter('Z')));
        assert_eq!(grid.get_cell(1, 1), Some(&Cell::Letter('A')));
        assert_eq!(fill_grid(&mut grid, &['B'], &mut rng), 0);
    }

    #[test]
    fn test_zero_attempts_drops_every_word() {
        let mut rng = StdRng::seed_from_u64(1);
        let alphabet: Vec<char> = DEFAULT_ALPHABET.chars().collect();
        let words = vec!["RGB".to_string()];
        let (grid, report) = place_words(5, &words, &alphabet, 0, &mut rng);
        assert_eq!(report[0].outcome, PlacementOutcome::NoSlot);
        assert_eq!(report[0].attempts, 0);
        assert_eq!(grid.empty_count(), 25);
    }

    #[test]
    fn test_words_outside_alphabet_are_skipped() {
        let mut rng = StdRng::seed_from_u64(1);
        let alphabet: Vec<char> = DEFAULT_ALPHABET.chars().collect();
        let words: Vec<String> = ["USB-3", "TARJETA GRAFICA", "RGB", "MONITORES"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let (grid, report) = place_words(5, &words, &alphabet, 100, &mut rng);

        let outcomes: Vec<_> = report.iter().map(|r| (r.word.as_str(), &r.outcome)).collect();
        assert_eq!(outcomes[0], ("USB-3", &PlacementOutcome::InvalidChars));
        assert_eq!(outcomes[1], ("TARJETA GRAFICA", &PlacementOutcome::InvalidChars));
        assert_eq!(outcomes[2], ("MONITORES", &PlacementOutcome::TooLong));
        assert!(report[3].is_placed());

        let letters: Vec<char> = grid.cells.iter().flatten().filter_map(|c| c.letter()).collect();
        assert_eq!(letters.len(), 3);
        assert!(letters.iter().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let config = GeneratorConfig {
            size: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GeneratorError::InvalidSize(0))));

        let config = GeneratorConfig {
            alphabet: String::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GeneratorError::EmptyAlphabet)));

        let config = GeneratorConfig {
            words: vec!["RGB".to_string(), String::new()],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GeneratorError::EmptyWord(1))));

        // unusable words are dropped during placement, not rejected up front
        let config = GeneratorConfig {
            words: vec!["TARJETA GRAFICA".to_string(), "USB-3".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert!(GeneratorConfig::default().validate().is_ok());
    }
}
