// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\n\n```python\ndef example():\n    print(\"Hello\")\n```\n\n```bash\necho demoted\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_long_fences(blocks: usize, body_lines: usize) -> String {
    let mut content = String::new();

    for block in 0..blocks {
        content.push_str(&format!("## Block {}\n\n", block));
        content.push_str("```python\n");
        for line in 0..body_lines {
            content.push_str(&format!("value_{} = {}\n", line, line * block));
        }
        content.push_str("```\n\n");
    }

    content
}
