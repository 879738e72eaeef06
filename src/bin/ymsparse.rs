// Copyright 2022 Rémy Oudompheng. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Demonstration of sparse GF(2) matrices.
//!
//! Mode "parity" builds a random sparse matrix P, the matrices
//! H = [P^T | I] and G^T = [I | P]^T and checks that H G^T = 0.
//!
//! Mode "inverse" builds a random invertible matrix A together
//! with its inverse B and checks that A B = I.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gf2sparse::random::random_matrix;
use gf2sparse::{parity, render, InversePair, Preferences, Result, SparseMatrix, Verbosity};

fn main() {
    let arg = arguments::parse(std::env::args()).unwrap();
    if arg.get::<bool>("help").is_some() {
        eprintln!("Usage: ymsparse [OPTIONS]");
        eprintln!("");
        eprintln!("Options:");
        eprintln!("  --help                    show this help");
        eprintln!("  --mode parity|inverse|all (default all)");
        eprintln!("  --size N:                 matrix dimension (default 500)");
        eprintln!("  --ones K:                 random entries in P (default N)");
        eprintln!("  --seed S:                 random seed");
        eprintln!("  --threads N:              multiply using N threads");
        eprintln!("  --verbose silent|info|verbose|debug");
        eprintln!("  --out DIR:                write PGM pictures to DIR");
        return;
    }
    let mode = arg.get::<String>("mode").unwrap_or("all".into());
    let n = arg.get::<usize>("size").unwrap_or(500);
    let ones = arg.get::<usize>("ones").unwrap_or(n);
    let out = arg.get::<String>("out").map(PathBuf::from);
    let v = arg.get::<String>("verbose").unwrap_or("info".into());

    let mut prefs = Preferences::default();
    prefs.threads = arg.get::<usize>("threads");
    prefs.seed = arg.get::<u64>("seed");
    prefs.verbosity = match Verbosity::from_str(&v) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let seed = prefs.seed.unwrap_or_else(|| rand::thread_rng().gen());
    if prefs.verbose(Verbosity::Info) {
        eprintln!("Using random seed {seed}");
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let tpool: Option<rayon::ThreadPool> = match prefs.threads {
        None | Some(1) => None,
        Some(t) => {
            if prefs.verbose(Verbosity::Verbose) {
                eprintln!("Using a pool of {t} threads");
            }
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .expect("cannot create thread pool"),
            )
        }
    };
    let tpool = tpool.as_ref();

    let res = match &mode[..] {
        "parity" => parity_demo(n, ones, &mut rng, &prefs, out.as_deref(), tpool),
        "inverse" => inverse_demo(n, &mut rng, &prefs, out.as_deref(), tpool),
        "all" => parity_demo(n, ones, &mut rng, &prefs, out.as_deref(), tpool)
            .and_then(|_| inverse_demo(n, &mut rng, &prefs, out.as_deref(), tpool)),
        _ => {
            eprintln!("Invalid operation mode {:?}", mode);
            std::process::exit(1);
        }
    };
    if let Err(e) = res {
        eprintln!("ERROR {e}");
        std::process::exit(1);
    }
}

fn parity_demo(
    n: usize,
    ones: usize,
    rng: &mut StdRng,
    prefs: &Preferences,
    out: Option<&Path>,
    tpool: Option<&rayon::ThreadPool>,
) -> Result<()> {
    let p = random_matrix(n, n, ones, rng);
    println!("HammingWeight of P = {}", p.hamming_weight());
    if let Some(stats) = p.weight_stats() {
        println!(
            "(Min, Max) of HammingWeightsOfRows of P = {} {}",
            stats.min_row, stats.max_row
        );
        println!(
            "(Min, Max) of HammingWeightsOfCols of P = {} {}",
            stats.min_col, stats.max_col
        );
    }
    let (h, gt) = parity::parity_pair(&p)?;
    if prefs.verbose(Verbosity::Verbose) {
        eprintln!("H is a {h}");
        eprintln!("GT is a {gt}");
    }
    write_picture(&gt, out, "GT.pgm", prefs)?;
    write_picture(&h, out, "H.pgm", prefs)?;
    let t0 = Instant::now();
    let w = parity::check(&h, &gt, tpool)?;
    if prefs.verbose(Verbosity::Info) {
        eprintln!("Computed H*GT in {:.3}s", t0.elapsed().as_secs_f64());
    }
    println!("HammingWeight of H*GT = {w}");
    Ok(())
}

fn inverse_demo(
    n: usize,
    rng: &mut StdRng,
    prefs: &Preferences,
    out: Option<&Path>,
    tpool: Option<&rayon::ThreadPool>,
) -> Result<()> {
    let t0 = Instant::now();
    let pair = InversePair::random(n, n, n / 2, rng);
    if prefs.verbose(Verbosity::Info) {
        eprintln!(
            "Applied {} elementary operations in {:.3}s",
            pair.log().len(),
            t0.elapsed().as_secs_f64()
        );
    }
    if prefs.verbose(Verbosity::Debug) {
        for op in pair.log() {
            eprintln!("{op:?}");
        }
    }
    let a = pair.forward();
    let b = pair.inverse();
    println!("HammingWeight of A = {}", a.hamming_weight());
    println!("HammingWeight of B = {}", b.hamming_weight());
    write_picture(&a, out, "A.pgm", prefs)?;
    write_picture(&b, out, "B.pgm", prefs)?;
    let t0 = Instant::now();
    let ok = pair.verify(tpool)?;
    if prefs.verbose(Verbosity::Info) {
        eprintln!("Computed A*B in {:.3}s", t0.elapsed().as_secs_f64());
    }
    println!("A*B is identity: {ok}");
    if !ok {
        eprintln!("ERROR A*B is not the identity matrix");
        std::process::exit(1);
    }
    Ok(())
}

fn write_picture(
    m: &SparseMatrix,
    dir: Option<&Path>,
    name: &str,
    prefs: &Preferences,
) -> Result<()> {
    let Some(dir) = dir else {
        return Ok(());
    };
    let path = dir.join(name);
    render::write_pgm(m, &path)?;
    if prefs.verbose(Verbosity::Info) {
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}
