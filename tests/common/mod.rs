#![allow(dead_code)]

use std::{fmt::Write as _, fs, path::PathBuf};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tempfile::TempDir;

pub const SIDE: usize = 28;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

// Seven-segment strokes as (rows, cols) rectangles on a 28x28 grid.
const STROKES: [(char, (usize, usize), (usize, usize)); 7] = [
    ('a', (3, 6), (6, 22)),
    ('b', (3, 15), (19, 22)),
    ('c', (12, 25), (19, 22)),
    ('d', (22, 25), (6, 22)),
    ('e', (12, 25), (6, 9)),
    ('f', (3, 15), (6, 9)),
    ('g', (12, 15), (6, 22)),
];

const SEGMENTS: [&str; 10] = [
    "abcdef", "bc", "abdeg", "abcdg", "bcfg", "acdfg", "acdefg", "abc", "abcdefg", "abcdfg",
];

fn glyph(digit: usize) -> Vec<bool> {
    let mut grid = vec![false; SIDE * SIDE];
    for &(name, (r0, r1), (c0, c1)) in &STROKES {
        if !SEGMENTS[digit].contains(name) {
            continue;
        }
        for row in r0..r1 {
            for col in c0..c1 {
                grid[row * SIDE + col] = true;
            }
        }
    }
    grid
}

/// One corpus record of `digit` with each pixel flipped with probability `noise`.
pub fn render(digit: usize, rng: &mut StdRng, noise: f64) -> String {
    let mut out = format!("{digit}\n");
    for row in glyph(digit).chunks(SIDE) {
        for &shaded in row {
            let shaded = shaded ^ rng.gen_bool(noise);
            out.push(if shaded { '#' } else { ' ' });
        }
        out.push('\n');
    }
    out
}

/// `count` records cycling through every digit.
pub fn corpus(count: usize, seed: u64, noise: f64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = String::new();
    for i in 0..count {
        write!(out, "{}", render(i % 10, &mut rng, noise)).unwrap();
    }
    out
}

pub struct Corpora {
    pub dir: TempDir,
    pub train: PathBuf,
    pub test: PathBuf,
}

pub fn write_corpora() -> Corpora {
    let dir = tempfile::tempdir().expect("create temp dir");
    let train = dir.path().join("trainingimagesandlabels.txt");
    let test = dir.path().join("testimagesandlabels.txt");
    fs::write(&train, corpus(5000, 7, 0.15)).unwrap();
    fs::write(&test, corpus(1000, 11, 0.15)).unwrap();
    Corpora { dir, train, test }
}
