// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run with `cargo run --example demo`. Set `R3BL_CHAT_HEX=0` or
//! `MINECRAFT_VERSION=1.12.2` to see how a legacy platform renders the same markup.

use r3bl_chat_color::{Colorizer, ColorizerConfig, HexFallback, HexSupport};

const SAMPLES: &[&str] = &[
    "&aGreen &lbold &rand reset",
    "&#FF8000Orange via hex",
    "<#FF0000>Rainbow-ish gradient</#0000FF>",
    "<#00FFFF>&lBold &oitalic</#FF00FF> gradient",
    "&zUnknown code and <#ZZZZZZ>bad tag</#000000> stay as is",
];

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let from_env = Colorizer::from_env();
    let nearest_legacy = Colorizer::new(ColorizerConfig::new(
        HexSupport::Unsupported,
        HexFallback::NearestLegacy,
    ));

    for (label, colorizer) in [("from env", from_env), ("nearest legacy", nearest_legacy)] {
        println!("── {label} ──");
        for sample in SAMPLES {
            let colorized = colorizer.colorize(sample);
            println!("{}", colorizer.to_ansi(&colorized));
            println!("  {:?}", colorizer.uncolorize(&colorized));
        }
    }
}
