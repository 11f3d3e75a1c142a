//! Basic encode/decode walkthrough

use creasepack_core::{decode_alpha, encode_alpha, CreaseParams, EncodedAlpha};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Creasepack Encode/Decode Example\n");

    let authored = [
        CreaseParams::new(0, 0, false, 12)?,
        CreaseParams::new(1, 2, true, 31)?,
        CreaseParams::new(2, 1, false, 3)?,
    ];

    for params in &authored {
        let encoded = encode_alpha(params);

        println!(
            "lod {} mode {} bump {:5} thickness {:2}  ->  alpha {}",
            params.lod, params.mode, params.bump, params.thickness, encoded.value()
        );

        let decoded = decode_alpha(encoded).expect("authored creases always decode");
        assert_eq!(&decoded, params);
    }

    // A channel slot nobody authored decodes to "no crease"
    let untouched = EncodedAlpha::from_raw(1.0);
    match decode_alpha(untouched) {
        Some(_) => unreachable!(),
        None => println!("\nalpha 1.0 carries no crease (default opacity)"),
    }

    Ok(())
}
