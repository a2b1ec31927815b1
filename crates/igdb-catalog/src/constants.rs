//! IGDB API constants

/// Games query endpoint on the IGDB API host
pub const GAMES_ENDPOINT: &str = "https://api.igdb.com/v4/games";
