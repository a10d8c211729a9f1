use std::{env, fs, process};

use inline_suggest::{diff_changes, diff_comments};

/// Prints reviewer-style suggestions for the changes between two versions
/// of a document.
///
/// Run it with:
/// `cargo run --example suggest-file original.md updated.md`
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: suggest-file <original> <updated>");
        process::exit(1);
    }

    let original_file = &args[1];
    let updated_file = &args[2];

    let original = fs::read_to_string(original_file).unwrap_or_else(|e| {
        eprintln!("Error reading {original_file}: {e}");
        process::exit(1);
    });

    let updated = fs::read_to_string(updated_file).unwrap_or_else(|e| {
        eprintln!("Error reading {updated_file}: {e}");
        process::exit(1);
    });

    for change in diff_changes(&original, &updated) {
        println!("{}", change.display);
    }

    println!();

    for comment in diff_comments(&original, &updated) {
        println!("{} (anchor: {})", comment.comment, comment.pattern);
    }
}
