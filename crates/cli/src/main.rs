//! # CLI - bloomset demo shell
//!
//! A REPL-style driver for the `bloomset` crate. Reads commands from
//! stdin, executes them against a single in-process [`Filter`], and prints
//! results to stdout. Exists only to exercise the core from outside it --
//! it owns the hash-function choice and the env-var configuration that the
//! core itself deliberately has no opinion on.
//!
//! ## Commands
//!
//! ```text
//! ADD key        Hash `key` (FNV-1a) and add it to the filter
//! TEST key       Hash `key` and report whether it might be present
//! CLEAR          Reset the filter within its current mode
//! STATS          Print n/p/m/k, mode, count, memsize
//! EXIT / QUIT    Shut down
//! ```
//!
//! ## Configuration
//!
//! ```text
//! BLOOMSET_N     capacity the filter is sized for        (default: 10000)
//! BLOOMSET_P     target false-positive rate              (default: 0.01)
//! BLOOMSET_KEYS  number of demo keys to pre-seed on start (default: 0)
//! ```
use anyhow::Result;
use bloomset::Filter;
use std::io::{self, BufRead, Write};

/// Reads a configuration value from the environment, falling back to `default`.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// FNV-1a 64-bit hash, used to turn string keys into the opaque `u64`s the
/// core filter accepts. This choice -- and the fact that there is a choice
/// at all -- lives outside the core on purpose.
fn fnv1a_64(data: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
    let mut hash = FNV_OFFSET;
    for &byte in data {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

fn main() -> Result<()> {
    let n: usize = env_or("BLOOMSET_N", "10000").parse().unwrap_or(10_000);
    let p: f64 = env_or("BLOOMSET_P", "0.01").parse().unwrap_or(0.01);
    let seed_keys: usize = env_or("BLOOMSET_KEYS", "0").parse().unwrap_or(0);

    let mut filter = Filter::new(n, p);

    for i in 0..seed_keys {
        let demo_key = format!("demo:{}", i);
        filter.add(fnv1a_64(demo_key.as_bytes()))?;
    }

    println!(
        "bloomset started (n={}, p={}, m={}, k={}, seeded={})",
        filter.capacity(),
        filter.false_positive_rate(),
        filter.bloom_bits(),
        filter.bloom_hashes(),
        seed_keys
    );
    println!("Commands: ADD key | TEST key | CLEAR | STATS | EXIT");
    print!("> ");
    io::stdout().flush().ok();

    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        if let Some(cmd) = parts.next() {
            match cmd.to_uppercase().as_str() {
                "ADD" => {
                    if let Some(key) = parts.next() {
                        match filter.add(fnv1a_64(key.as_bytes())) {
                            Ok(()) => println!("OK"),
                            Err(e) => println!("ERR add failed: {}", e),
                        }
                    } else {
                        println!("ERR usage: ADD key");
                    }
                }
                "TEST" => {
                    if let Some(key) = parts.next() {
                        if filter.test(fnv1a_64(key.as_bytes())) {
                            println!("maybe");
                        } else {
                            println!("no");
                        }
                    } else {
                        println!("ERR usage: TEST key");
                    }
                }
                "CLEAR" => {
                    filter.clear();
                    println!("OK");
                }
                "STATS" => {
                    println!("{:?}", filter);
                }
                "EXIT" | "QUIT" => {
                    println!("bye");
                    break;
                }
                other => {
                    println!("unknown command: {}", other);
                }
            }
        }

        print!("> ");
        io::stdout().flush().ok();
    }

    Ok(())
}
