//! `blob-pack` — encode JSON (stdin) to the blob-tree binary format (stdout).
//!
//! Usage:
//!   blob-pack [--framed] [--doc-version N]

use std::io::{self, Read, Write};

use blob_tree::cli::{pack, PackOptions};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut options = PackOptions::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--framed" => {
                options.framed = true;
            }
            "--doc-version" => {
                i += 1;
                if let Some(v) = args.get(i) {
                    match v.parse() {
                        Ok(n) => options.version = n,
                        Err(_) => {
                            eprintln!("Invalid version: {v}");
                            std::process::exit(1);
                        }
                    }
                }
            }
            _ => {}
        }
        i += 1;
    }

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match pack(buf.trim(), &options) {
        Ok(bytes) => {
            io::stdout().write_all(&bytes).unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
