#![allow(dead_code)]

use keycalc::domain::key::KeyToken;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const LABELS: [&str; 17] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "×", "÷", "=", "AC",
];

/// Picks `len` random keys from the full keypad.
pub fn random_keys(rng: &mut StdRng, len: usize) -> Vec<KeyToken> {
    (0..len)
        .map(|_| {
            LABELS
                .choose(&mut *rng)
                .and_then(|label| label.parse().ok())
                .unwrap_or(KeyToken::Clear)
        })
        .collect()
}

/// Parses a whitespace-separated list of key labels.
pub fn keys(labels: &str) -> Vec<KeyToken> {
    labels
        .split_whitespace()
        .map(|label| label.parse().expect("valid key label"))
        .collect()
}

pub fn generate_csv(path: &Path, sessions: u16, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    let mut rng = rand::thread_rng();

    wtr.write_record(["session", "key"])?;

    for _ in 0..rows {
        let session = rng.gen_range(1..=sessions).to_string();
        let label = LABELS.choose(&mut rng).copied().unwrap_or("AC");
        wtr.write_record([session.as_str(), label])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn generate_large_csv(path: &Path, size_mb: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(["session", "key"])?;

    let target_size = (size_mb * 1024 * 1024) as u64;
    let mut i: usize = 0;

    // Check size every 5000 rows to avoid syscall overhead
    loop {
        for _ in 0..5000 {
            let session = (i % 50 + 1).to_string();
            let label = LABELS[i % LABELS.len()];
            wtr.write_record([session.as_str(), label])?;
            i += 1;
        }
        wtr.flush()?;
        if std::fs::metadata(path)?.len() >= target_size {
            break;
        }
    }
    Ok(())
}
