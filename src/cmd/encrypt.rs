use crate::reports;
use cipherforge::api;
use cipherforge::key::Key;
use cipherforge::scorer::loader;
use cipherforge::CipherResult;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    /// File holding the plaintext
    pub input: PathBuf,

    /// Deciphering key (26 letters); random when omitted
    #[arg(short, long)]
    pub key: Option<String>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Write the ciphertext here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: EncryptArgs) -> CipherResult<()> {
    let plaintext = loader::read_text(&args.input)?;
    let key = args.key.as_deref().map(Key::parse).transpose()?;

    let (key, ciphertext) = api::encipher(&plaintext, key, args.seed);

    println!("Key: {}", key);
    println!("Cipher: {}", key.inverse());
    reports::print_key_grid("DECIPHER", &key);

    match &args.output {
        Some(path) => {
            fs::write(path, &ciphertext)?;
            info!("🔒 Ciphertext written to {}", path.display());
        }
        None => reports::print_text("Ciphertext", &ciphertext),
    }
    Ok(())
}
