use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

const OUTPUT_PATH: &str = "data/flixpatrol.csv";
const ROWS: usize = 240;

#[derive(Serialize)]
struct TitleRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Type")]
    content_type: &'static str,
    #[serde(rename = "Genre")]
    genre: String,
    #[serde(rename = "Premiere")]
    premiere: String,
    #[serde(rename = "Watchtime in Million")]
    watchtime: String,
}

/// SplitMix64: one word of state, same output for the same seed.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const ADJECTIVES: [&str; 12] = [
    "Silent", "Crimson", "Hidden", "Last", "Broken", "Golden", "Midnight", "Wild", "Lost",
    "Frozen", "Electric", "Secret",
];
const NOUNS: [&str; 12] = [
    "Harbor", "Kingdom", "Signal", "Garden", "Empire", "Road", "Witness", "Tide", "Circle",
    "Archive", "Frontier", "Promise",
];
const GENRES: [&str; 9] = [
    "Drama",
    "Comedy",
    "Thriller",
    "Action",
    "Documentary",
    "Drama, Sci-Fi",
    "Action, Thriller",
    "Romantic Comedy",
    "Crime, Drama",
];

fn main() -> Result<()> {
    let mut rng = SampleRng(42);

    let path = Path::new(OUTPUT_PATH);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {OUTPUT_PATH}"))?;

    for i in 0..ROWS {
        let content_type = if rng.unit() < 0.6 { "Movie" } else { "TV Show" };
        let title = format!("The {} {} {}", rng.pick(&ADJECTIVES), rng.pick(&NOUNS), i + 1);
        let genre = rng.pick(&GENRES).to_string();

        // Roughly one in twenty rows has no usable premiere year.
        let premiere = match rng.next_u64() % 20 {
            0 => String::new(),
            1 => "TBA".to_string(),
            _ => (1990 + rng.next_u64() % 34).to_string(),
        };

        // Heavy-tailed: most titles are small, a few are huge.
        let watchtime = 1.0 + rng.unit().powi(3) * 600.0;

        writer.serialize(TitleRow {
            title,
            content_type,
            genre,
            premiere,
            watchtime: format!("{watchtime:.1}M"),
        })?;
    }
    writer.flush()?;

    println!("Wrote {ROWS} titles to {OUTPUT_PATH}");
    Ok(())
}
