//! `blob-unpack` — decode the blob-tree binary format (stdin) to JSON (stdout).
//!
//! Usage:
//!   blob-unpack [--framed]

use std::io::{self, Read, Write};

use blob_tree::cli::unpack;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut framed = false;
    let mut i = 1;
    while i < args.len() {
        if args[i].as_str() == "--framed" {
            framed = true;
        }
        i += 1;
    }

    let mut buf = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match unpack(&buf, framed) {
        Ok(json) => {
            io::stdout().write_all(json.as_bytes()).unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
