use clap::Parser;
use nsec3_core::conversion::{encode_base32hex, encode_hex};
use nsec3_core::{CrackFormat, Digest, Nsec3Format, Salt, WireName, hash_name};

mod error;

use error::Error;

#[derive(Parser, Debug)]
#[command(name = "nsec3-lookup")]
#[command(about = "Compute or verify a single NSEC3 hash")]
struct Args {
    /// Domain name to hash, or candidate label when --record is given
    name: String,

    /// Salt as hex (empty for an unsalted hash)
    #[arg(short, long, default_value = "", conflicts_with = "record")]
    salt: String,

    /// Number of additional hash iterations
    #[arg(short, long, default_value_t = 0, conflicts_with = "record")]
    iterations: u16,

    /// Verify the candidate against a $NSEC3$ record instead of hashing a
    /// standalone name; exits 1 when the candidate does not match
    #[arg(short, long)]
    record: Option<String>,

    /// Print the digest in base32hex, the form NSEC3 owner names use
    #[arg(long)]
    base32hex: bool,
}

fn print_digest(digest: &Digest, base32hex: bool) {
    if base32hex {
        println!("{}", encode_base32hex(digest));
    } else {
        println!("{}", encode_hex(digest));
    }
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    if let Some(record) = &args.record {
        let format = Nsec3Format;
        let descriptor = format.descriptor(record)?;
        let digest = format.evaluate(&descriptor, &args.name)?;
        print_digest(&digest, args.base32hex);
        if !format.matches(&descriptor, &digest) {
            eprintln!("no match");
            std::process::exit(1);
        }
        return Ok(());
    }

    let name = WireName::from_text(&args.name)?;
    let salt = Salt::from_hex(&args.salt).ok_or(Error::BadSalt)?;
    let digest = hash_name(&name, salt.as_bytes(), args.iterations);
    print_digest(&digest, args.base32hex);

    Ok(())
}
