// src/normalize/genre.rs

/// Sentinel returned when no keyword matches. Never an empty string.
pub const UNKNOWN_GENRE: &str = "unknown";

// Ordered: first substring hit wins, so multi-word genres must sit above
// the generic single words they contain ("post rock" above "rock",
// "black metal" above "metal"). Reordering silently degrades results.
const GENRE_KEYWORDS: &[(&str, &[&str])] = &[
    ("post rock", &["post rock", "post-rock"]),
    ("post punk", &["post punk", "post-punk"]),
    ("black metal", &["black metal"]),
    ("death metal", &["death metal"]),
    ("doom metal", &["doom metal", "doom", "sludge"]),
    ("nu metal", &["nu metal", "nu-metal"]),
    ("metalcore", &["metalcore"]),
    ("hardcore", &["hardcore"]),
    ("punk", &["punk"]),
    ("metal", &["metal", "heavy metal", "thrash"]),
    ("rock", &["rock", "rock and roll", "garage"]),
    ("indie", &["indie", "alternative", "shoegaze"]),
    ("electronic", &["electronic", "synth", "techno", "house"]),
    ("hip hop", &["hip hop", "hip-hop", "rap"]),
    ("jazz", &["jazz"]),
    ("folk", &["folk", "americana", "bluegrass"]),
    ("pop", &["pop"]),
];

/// Map free text to one genre tag by ordered keyword matching.
pub fn classify(text: &str) -> &'static str {
    let haystack = text.to_lowercase();
    for (genre, keywords) in GENRE_KEYWORDS {
        if keywords.iter().any(|k| haystack.contains(k)) {
            return genre;
        }
    }
    UNKNOWN_GENRE
}
