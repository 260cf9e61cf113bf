mod genre_frequency;
mod models;
mod profile;

pub use genre_frequency::{flatten_genres, ranked_genres};
pub use models::{Artist, GenreTag, Track};
pub use profile::{Profile, TOP_ITEMS_LIMIT};
