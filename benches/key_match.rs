//! Benchmarks for accelerator parsing and matching
//!
//! `key_match` re-parses its pattern on every call, so these cover:
//! - parsing patterns of increasing length
//! - a full match against a pre-built event
//! - matching a pre-parsed pattern (the registry-free path)
//! - dispatching one event through a registry of many shortcuts
//!
//! Run with: cargo bench key_match

use keymatch::{key_match, parse_accelerator, KeyInput, Modifiers, Platform, Shortcuts};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const PATTERNS: [&str; 4] = [
    "Escape",
    "CmdOrCtrl+S",
    "CmdOrCtrl+Shift+EnterOrSpace",
    "Ctrl+Alt+Shift+UpOrDownOrLeftOrRightOrPageUpOrPageDown",
];

// ============================================================================
// Parsing
// ============================================================================

#[divan::bench(args = PATTERNS)]
fn parse(pattern: &str) {
    divan::black_box(parse_accelerator(divan::black_box(pattern), &Platform::Other)).ok();
}

#[divan::bench]
fn parse_blank() {
    divan::black_box(parse_accelerator(divan::black_box("   "), &Platform::Other)).ok();
}

// ============================================================================
// Matching
// ============================================================================

#[divan::bench(args = PATTERNS)]
fn key_match_unparsed(pattern: &str) {
    let event = KeyInput::new("ArrowDown", Modifiers::CTRL | Modifiers::SHIFT | Modifiers::ALT);
    divan::black_box(key_match(&event, divan::black_box(pattern), &Platform::Other)).ok();
}

#[divan::bench(args = PATTERNS)]
fn key_match_preparsed(bencher: divan::Bencher, pattern: &str) {
    let parsed = parse_accelerator(pattern, &Platform::Other).unwrap();
    let event = KeyInput::new("ArrowDown", Modifiers::CTRL | Modifiers::SHIFT | Modifiers::ALT);
    bencher.bench_local(|| divan::black_box(parsed.matches(divan::black_box(&event))));
}

// ============================================================================
// Registry dispatch
// ============================================================================

#[divan::bench(args = [10, 50, 200])]
fn dispatch(bencher: divan::Bencher, registered: usize) {
    let mut shortcuts = Shortcuts::new(Platform::Other);
    for i in 0..registered {
        let pattern = format!("CmdOrCtrl+Shift+{}", (b'a' + (i % 26) as u8) as char);
        shortcuts.register(format!("{}OrF{}", pattern, i % 12 + 1), |_: &KeyInput| {});
    }
    let event = KeyInput::new("m", Modifiers::CTRL | Modifiers::SHIFT);

    bencher.bench_local(|| divan::black_box(shortcuts.dispatch(&event)).ok());
}
