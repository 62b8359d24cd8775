use crate::alphabet::{index_of, ALPHABET, ALPHABET_SIZE};
use crate::error::{CipherError, CipherResult};
use crate::scorer::model::{BigramCounts, TransitionModel};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// On-disk form of a transition model. Only the raw counts and the smoothing
/// constant are stored; log-probabilities are rebuilt on load.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub alphabet: String,
    pub smoothing: f64,
    pub counts: Vec<Vec<u64>>,
}

impl From<&TransitionModel> for ModelSnapshot {
    fn from(model: &TransitionModel) -> Self {
        Self {
            alphabet: String::from_utf8_lossy(ALPHABET).to_string(),
            smoothing: model.smoothing(),
            counts: model.counts().iter().map(|row| row.to_vec()).collect(),
        }
    }
}

impl TryFrom<ModelSnapshot> for TransitionModel {
    type Error = CipherError;

    fn try_from(snapshot: ModelSnapshot) -> Result<Self, Self::Error> {
        if snapshot.alphabet.as_bytes() != ALPHABET {
            return Err(CipherError::InvalidModel(format!(
                "alphabet '{}' does not match the expected a-z",
                snapshot.alphabet
            )));
        }
        if snapshot.counts.len() != ALPHABET_SIZE {
            return Err(CipherError::InvalidModel(format!(
                "expected {} count rows, found {}",
                ALPHABET_SIZE,
                snapshot.counts.len()
            )));
        }

        let mut counts = [[0u64; ALPHABET_SIZE]; ALPHABET_SIZE];
        for (i, row) in snapshot.counts.iter().enumerate() {
            if row.len() != ALPHABET_SIZE {
                return Err(CipherError::InvalidModel(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    ALPHABET_SIZE
                )));
            }
            counts[i].copy_from_slice(row);
        }

        TransitionModel::from_counts(counts, snapshot.smoothing)
    }
}

pub fn read_text<P: AsRef<Path>>(path: P) -> CipherResult<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Reads a tab-separated bigram table (`th<TAB>1234`, no header).
///
/// Rows whose first column is not exactly two letters, or whose count is not
/// a non-negative integer, are skipped. Letters are folded to lowercase, so
/// `TH` and `th` accumulate into the same cell.
pub fn load_bigram_counts<R: Read>(reader: R) -> CipherResult<BigramCounts> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut counts = [[0u64; ALPHABET_SIZE]; ALPHABET_SIZE];
    let mut loaded = 0;
    let mut skipped = 0;

    for result in rdr.records() {
        let rec = result?;
        if rec.len() < 2 {
            skipped += 1;
            continue;
        }

        let pair = rec[0].trim().as_bytes();
        let (prev, next) = match pair {
            [a, b] => match (index_of(*a), index_of(*b)) {
                (Some(p), Some(n)) => (p, n),
                _ => {
                    skipped += 1;
                    continue;
                }
            },
            _ => {
                skipped += 1;
                continue;
            }
        };

        let count: u64 = match rec[1].trim().parse() {
            Ok(v) => v,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        counts[prev][next] += count;
        loaded += 1;
    }

    debug!(
        "Bigram table: loaded {} rows, skipped {} rows",
        loaded, skipped
    );

    Ok(counts)
}

pub fn load_bigram_counts_from_file<P: AsRef<Path>>(path: P) -> CipherResult<BigramCounts> {
    let path = path.as_ref();
    info!("📊 Loading bigram table: {}", path.display());
    load_bigram_counts(File::open(path)?)
}

pub fn save_model<W: Write>(model: &TransitionModel, writer: W) -> CipherResult<()> {
    serde_json::to_writer_pretty(writer, &ModelSnapshot::from(model))?;
    Ok(())
}

pub fn load_model<R: Read>(reader: R) -> CipherResult<TransitionModel> {
    let snapshot: ModelSnapshot = serde_json::from_reader(reader)?;
    TransitionModel::try_from(snapshot)
}

pub fn save_model_to_file<P: AsRef<Path>>(model: &TransitionModel, path: P) -> CipherResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    save_model(model, &mut writer)?;
    writer.flush()?;
    info!("💾 Model written to {}", path.display());
    Ok(())
}

pub fn load_model_from_file<P: AsRef<Path>>(path: P) -> CipherResult<TransitionModel> {
    let path = path.as_ref();
    info!("📂 Loading model: {}", path.display());
    load_model(BufReader::new(File::open(path)?))
}
