//! Dissect a frame given as hex octets and encode it again.
//!
//! Usage:
//!   cargo run --example dissect -- [--extended] <hex-octets>...
//!
//! Example:
//!   cargo run --example dissect -- 30 10 48 49

use anyhow::Context;

use hdlc::{Codec, Config, Modulo};


fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    // handle command line arguments
    let mut config = Config::default();
    let mut raw = Vec::new();

    for arg in std::env::args().skip(1) {
        if arg == "--extended" {
            config = config.with_modulo(Modulo::Extended);
            continue;
        }

        let byte = u8::from_str_radix(arg.trim_start_matches("0x"), 16)
            .with_context(|| format!("invalid octet '{arg}'"))?;

        raw.push(byte);
    }

    let codec = Codec::new(config);

    println!("Input:");
    dump(&raw);
    println!();

    let frame = codec.dissect(&raw)?;

    println!("Frame:");
    println!("  kind:    {}", frame.kind());
    println!("  address: 0x{:02x}", frame.address());
    println!("  N(S):    {:?}", frame.ns());
    println!("  N(R):    {:?}", frame.nr());
    println!("  P/F:     {}", frame.is_pf());

    if let Some(payload) = frame.payload() {
        println!("  payload:");
        dump(payload);
    }
    println!();

    let encoded = codec.encode_bytes(&frame)?;

    println!("Encoded:");
    dump(&encoded);

    Ok(())
}

fn dump(data: &[u8]) {
    let data = pretty_hex::config_hex(
        &data,
        pretty_hex::HexConfig {
            title: false,
            ..Default::default()
        },
    );

    for line in data.lines() {
        println!("    {}", line);
    }
}
