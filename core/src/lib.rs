pub mod direction;
pub mod generator;
pub mod grid;
pub mod normalize;
pub mod render;
pub mod word_search;

pub use direction::Direction;
pub use generator::{GeneratorConfig, GeneratorError, WordSearchGenerator, generate_word_search};
pub use grid::{Cell, Grid, GridError};
pub use normalize::{normalize_word, normalize_words};
pub use word_search::{Placement, PlacementOutcome, WordReport, WordSearch};
