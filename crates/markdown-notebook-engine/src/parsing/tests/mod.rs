//! Integration tests for the parsing module.
//!
//! Uses snapshot testing with JSON format for readability.
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.


use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::parsing::{Cell, CellKind, SegmentOptions, segment, segment_with};

// Fixture-based snapshot tests

#[test]
fn fixture_headers_and_code() {
    assert_fixture("headers_and_code");
}

#[test]
fn fixture_demoted_fences() {
    assert_fixture("demoted_fences");
}

#[test]
fn fixture_unterminated_fence() {
    assert_fixture("unterminated_fence");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let cells = segment(&md);
    invariants::check(&Rope::from(md.as_str()), &cells);

    let snap = normalize::normalize(&cells);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_json_snapshot!(name, snap);
    });
}

fn lines(cell: &Cell) -> Vec<&str> {
    cell.lines.iter().map(String::as_str).collect()
}

fn segment_checked(md: &str) -> Vec<Cell> {
    let cells = segment(md);
    invariants::check(&Rope::from(md), &cells);
    cells
}

// Documented examples

#[test]
fn header_seeds_single_prose_cell() {
    let cells = segment_checked("# Title\nHello\n");

    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].kind, CellKind::Prose);
    assert_eq!(lines(&cells[0]), vec!["# Title\n", "Hello\n"]);
}

#[test]
fn python_fence_becomes_code_between_prose() {
    let cells = segment_checked("Intro\n```python\nprint(1)\n```\nEnd\n");

    assert_eq!(cells.len(), 3);
    assert_eq!(cells[0].kind, CellKind::Prose);
    assert_eq!(lines(&cells[0]), vec!["Intro\n"]);
    assert_eq!(cells[1].language(), Some("python"));
    assert_eq!(lines(&cells[1]), vec!["print(1)\n"]);
    assert_eq!(cells[2].kind, CellKind::Prose);
    assert_eq!(lines(&cells[2]), vec!["End\n"]);
}

#[test]
fn non_python_fence_is_demoted_and_rewrapped() {
    let cells = segment_checked("```bash\necho hi\n```\n");

    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].kind, CellKind::Prose);
    assert_eq!(lines(&cells[0]), vec!["```bash\n", "echo hi\n", "```\n"]);
}

#[test]
fn empty_input_has_no_cells() {
    assert!(segment("").is_empty());
}

#[test]
fn consecutive_headers_split_cells() {
    let cells = segment_checked("# A\n\n# B\n");

    assert_eq!(cells.len(), 2);
    assert_eq!(lines(&cells[0]), vec!["# A\n", "\n"]);
    assert_eq!(lines(&cells[1]), vec!["# B\n"]);
}

// Edge cases

#[rstest]
#[case::python("python", true)]
#[case::capitalised("Python", false)]
#[case::python3("python3", false)]
#[case::untagged("", false)]
#[case::rust("rust", false)]
fn language_gating(#[case] tag: &str, #[case] is_code: bool) {
    let md = format!("```{tag}\nbody\n```\n");
    let cells = segment_checked(&md);

    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].is_code(), is_code);
    if !is_code {
        let opener = format!("```{tag}\n");
        assert_eq!(lines(&cells[0]), vec![opener.as_str(), "body\n", "```\n"]);
    }
}

#[rstest]
#[case::only_blank_lines("\n\n   \n")]
#[case::tabs_and_spaces(" \t \n\t\n")]
fn whitespace_only_document_has_no_cells(#[case] md: &str) {
    assert!(segment(md).is_empty());
}

#[test]
fn blank_lines_before_header_are_dropped() {
    let cells = segment_checked("\n\n# Title\n");

    assert_eq!(cells.len(), 1);
    assert_eq!(lines(&cells[0]), vec!["# Title\n"]);
    assert_eq!(cells[0].span.start, 2);
}

#[test]
fn blank_lines_between_fence_and_header_are_dropped() {
    let cells = segment_checked("```python\nx\n```\n\n\n# Next\n");

    assert_eq!(cells.len(), 2);
    assert!(cells[0].is_code());
    assert_eq!(lines(&cells[1]), vec!["# Next\n"]);
}

#[test]
fn header_inside_fence_is_plain_content() {
    let cells = segment_checked("```python\n# comment\nx = 1\n```\n");

    assert_eq!(cells.len(), 1);
    assert!(cells[0].is_code());
    assert_eq!(lines(&cells[0]), vec!["# comment\n", "x = 1\n"]);
}

#[test]
fn any_fence_line_closes_an_open_fence() {
    let cells = segment_checked("```python\na\n```bash\nafter\n");

    assert_eq!(cells.len(), 2);
    assert!(cells[0].is_code());
    assert_eq!(lines(&cells[0]), vec!["a\n"]);
    assert_eq!(lines(&cells[1]), vec!["after\n"]);
}

#[test]
fn fence_directly_after_prose_flushes_prose() {
    let cells = segment_checked("Some text\n```python\nx\n```\n");

    assert_eq!(cells.len(), 2);
    assert_eq!(lines(&cells[0]), vec!["Some text\n"]);
    assert!(cells[1].is_code());
}

#[test]
fn empty_python_block_still_yields_code_cell() {
    let cells = segment_checked("```python\n```\n");

    assert_eq!(cells.len(), 1);
    assert!(cells[0].is_code());
    assert!(cells[0].lines.is_empty());
}

#[test]
fn unterminated_fence_keeps_opener_without_closer() {
    let cells = segment_checked("Intro\n```python\nx = 1\n");

    assert_eq!(cells.len(), 2);
    assert_eq!(cells[1].kind, CellKind::Prose);
    assert_eq!(lines(&cells[1]), vec!["```python\n", "x = 1\n"]);
}

#[test]
fn bare_fence_at_end_of_input_is_kept() {
    let cells = segment_checked("```");

    assert_eq!(cells.len(), 1);
    assert_eq!(lines(&cells[0]), vec!["```"]);
}

#[test]
fn closing_fence_without_newline_keeps_missing_terminator() {
    let cells = segment_checked("```sh\nls\n```");

    assert_eq!(lines(&cells[0]), vec!["```sh\n", "ls\n", "```"]);
}

#[test]
fn last_line_without_newline_is_kept() {
    let cells = segment_checked("# Title\nno newline");

    assert_eq!(lines(&cells[0]), vec!["# Title\n", "no newline"]);
}

#[test]
fn indented_fence_tag_is_trimmed_on_rebuild() {
    let cells = segment_checked("  ```bash   \necho\n  ```\n");

    assert_eq!(lines(&cells[0]), vec!["```bash\n", "echo\n", "```\n"]);
}

#[test]
fn custom_code_language() {
    let options = SegmentOptions {
        code_language: "rust".to_string(),
    };
    let cells = segment_with("```rust\nfn main() {}\n```\n```python\nx\n```\n", &options);

    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0].language(), Some("rust"));
    assert!(!cells[1].is_code());
}

#[test]
fn cells_follow_source_order() {
    let md = "# One\ntext\n```python\na\n```\n## Two\n```js\nb\n```\n";
    let cells = segment_checked(md);

    let kinds: Vec<bool> = cells.iter().map(Cell::is_code).collect();
    assert_eq!(kinds, vec![false, true, false, false]);
    assert_eq!(lines(&cells[2]), vec!["## Two\n"]);
    assert_eq!(lines(&cells[3]), vec!["```js\n", "b\n", "```\n"]);
}
