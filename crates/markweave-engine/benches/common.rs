// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "Paragraph with www.example.com/path and <mail@example.com>.\n\n- Bullet point with `code`\n  - Nested item <https://example.org>\n- Another item\n\n> quoted\n> - list in quote\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// A flat list of `items` entries with the caret on the item at `caret_at`.
#[allow(dead_code)]
pub fn generate_list_with_caret(items: usize, caret_at: usize) -> String {
    let mut content = String::new();
    for i in 0..items {
        let caret = if i == caret_at { "\u{2038}" } else { "" };
        content.push_str(&format!("- item {i}{caret}\n"));
        if i % 5 == 0 {
            content.push_str("  - child\n");
        }
    }
    content
}
