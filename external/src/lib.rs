mod word_list;
pub use word_list::{WordList, WordListFormat};

mod error;
pub use error::ExternalError;

pub mod puzzle_file;
pub use puzzle_file::{save_text, write_text};

pub mod settings;
pub use settings::{Settings, load_settings};
