//! # Keygen Subcommand
//!
//! Signer key pair generation, and address derivation for existing keys.

use clap::Args;

use qstate_core::hexstr;
use qstate_crypto::SignerKeyPair;

/// Arguments for the keygen subcommand.
#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Derive the key pair from an existing 32-byte secret key (hex)
    /// instead of generating a fresh one.
    #[arg(long)]
    pub secret: Option<String>,
}

/// Generate (or re-derive) a key pair and print its secret and address.
pub fn run(args: KeygenArgs) -> anyhow::Result<()> {
    let keypair = match &args.secret {
        Some(secret) => SignerKeyPair::from_secret_hex(secret)?,
        None => SignerKeyPair::generate(),
    };

    println!("secret:  {}", hexstr::encode(&keypair.secret_bytes()));
    println!("address: {}", keypair.address());
    Ok(())
}
