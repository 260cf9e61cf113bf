use vibematch::{Artist, GenreTag, Profile, Track};

pub fn make_artist(id: &str, name: &str, genres: &[&str], popularity: u8) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        genres: genres.iter().map(|g| GenreTag::from(*g)).collect(),
        popularity,
    }
}

pub fn make_track(id: &str, name: &str, artist_name: &str, popularity: u8) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artist_name: artist_name.to_string(),
        popularity,
    }
}

/// A chart-heavy dance/pop listener with uniformly popular tracks.
pub fn party_listener(display_name: &str) -> Profile {
    Profile::build(
        display_name,
        vec![
            make_artist("artist-dua", "Dua Lipa", &["dance pop", "pop"], 90),
            make_artist("artist-calvin", "Calvin Harris", &["edm", "dance pop"], 85),
            make_artist("artist-disclosure", "Disclosure", &["house", "edm"], 75),
        ],
        vec![
            make_track("track-levitating", "Levitating", "Dua Lipa", 100),
            make_track("track-oneKiss", "One Kiss", "Calvin Harris", 100),
            make_track("track-latch", "Latch", "Disclosure", 100),
        ],
    )
}

/// A quiet folk/acoustic listener with obscure tracks.
pub fn acoustic_listener(display_name: &str) -> Profile {
    Profile::build(
        display_name,
        vec![
            make_artist("artist-iron", "Iron & Wine", &["folk", "acoustic"], 40),
            make_artist("artist-sufjan", "Sufjan Stevens", &["indie folk", "folk"], 45),
            make_artist("artist-jose", "José González", &["acoustic", "indie folk"], 35),
        ],
        vec![
            make_track("track-nakedAsWeCame", "Naked as We Came", "Iron & Wine", 0),
            make_track("track-chicago", "Chicago", "Sufjan Stevens", 0),
            make_track("track-heartbeats", "Heartbeats", "José González", 0),
        ],
    )
}
