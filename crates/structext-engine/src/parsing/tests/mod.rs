//! Integration tests for the parsing module.
//!
//! Uses debug snapshots for whole-document outputs.
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.


use pretty_assertions::assert_eq;

use crate::parsing::{
    Extractor,
    blocks::{Block, OrderedItem},
    extract,
    inline::{InlineRun, tokenize},
};

// Fixture-based snapshot tests

#[test]
fn fixture_mixed_response() {
    assert_fixture("mixed_response");
}

#[test]
fn fixture_fence_shields_markup() {
    assert_fixture("fence_shields_markup");
}

#[test]
fn fixture_headings_with_sentences() {
    assert_fixture("headings_with_sentences");
}

fn fixtures_dir() -> String {
    format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

fn assert_fixture(name: &str) {
    let fixtures_dir = fixtures_dir();
    let text = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let blocks = extract(&text);
    invariants::check(&text, &blocks);

    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_debug_snapshot!(name, blocks);
    });
}

#[test]
fn inline_all_kinds_snapshot() {
    let runs = tokenize("Use **bold**, *italic*, ~~old~~, `code` and [a link](https://example.com).");
    let fixtures_dir = fixtures_dir();
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_debug_snapshot!("inline_all_kinds", runs);
    });
}

// Scenarios

#[test]
fn scenario_a_two_sentences_one_paragraph() {
    assert_eq!(
        extract("Hello world. This is great."),
        vec![Block::paragraph("Hello world. This is great.")]
    );
}

#[test]
fn scenario_b_fenced_code_with_language() {
    assert_eq!(
        extract("```js\nconsole.log(1)\n```"),
        vec![Block::CodeBlock {
            language: "js".into(),
            code: "console.log(1)".into(),
        }]
    );
}

#[test]
fn scenario_c_simple_table() {
    assert_eq!(
        extract("| A | B |\n|---|---|\n| 1 | 2 |"),
        vec![Block::Table {
            headers: vec!["A".into(), "B".into()],
            rows: vec![vec!["1".into(), "2".into()]],
        }]
    );
}

#[test]
fn scenario_d_ordered_list() {
    assert_eq!(
        extract("1. First\n2. Second"),
        vec![Block::OrderedList {
            items: vec![
                OrderedItem {
                    number: "1".into(),
                    content: "First".into(),
                },
                OrderedItem {
                    number: "2".into(),
                    content: "Second".into(),
                },
            ]
        }]
    );
}

#[test]
fn scenario_e_link_and_bold() {
    assert_eq!(
        tokenize("Check [docs](http://x) and **bold** text"),
        vec![
            InlineRun::Text("Check ".into()),
            InlineRun::Link {
                content: "docs".into(),
                url: "http://x".into(),
            },
            InlineRun::Text(" and ".into()),
            InlineRun::Bold("bold".into()),
            InlineRun::Text(" text".into()),
        ]
    );
}

// Edge cases

#[test]
fn empty_and_blank_input_yield_nothing() {
    assert!(extract("").is_empty());
    assert!(extract("  \n\t\n ").is_empty());
}

#[test]
fn unterminated_fence_runs_to_end() {
    let text = "Before.\n```python\nprint(1)\nprint(2)";
    let blocks = extract(text);
    assert_eq!(
        blocks,
        vec![
            Block::paragraph("Before."),
            Block::CodeBlock {
                language: "python".into(),
                code: "print(1)\nprint(2)".into(),
            },
        ]
    );
    invariants::check(text, &blocks);
}

#[test]
fn markup_inside_fence_is_not_structured() {
    let blocks = extract("```\n# not heading\n- not bullet\n> not quote\n```");
    assert_eq!(blocks.len(), 1);
    assert!(matches!(&blocks[0], Block::CodeBlock { language, .. } if language == "text"));
}

#[test]
fn text_on_closing_fence_line_is_kept() {
    let text = "```sh\nls\n``` and then it lists files.";
    let blocks = extract(text);
    assert_eq!(blocks[1], Block::paragraph("and then it lists files."));
    invariants::check(text, &blocks);
}

#[test]
fn trailing_blockquote_is_captured() {
    let blocks = extract("Remember this.\n> first\n>second\n>> nested");
    assert_eq!(
        blocks,
        vec![
            Block::paragraph("Remember this."),
            Block::Blockquote {
                content: "first\nsecond\n> nested".into(),
            },
        ]
    );
}

#[test]
fn last_zone_of_input_is_kept() {
    assert_eq!(
        extract("Hello world. This is great."),
        vec![Block::paragraph("Hello world. This is great.")]
    );
    assert_eq!(
        extract("> only a quote"),
        vec![Block::Blockquote {
            content: "only a quote".into()
        }]
    );
    assert!(matches!(&extract("| A | B |\n|---|---|\n| 1 | 2 |")[..], [Block::Table { .. }]));

    let text = "Intro.\n```\nx\n```\nOutro text.";
    let blocks = extract(text);
    assert_eq!(
        blocks,
        vec![
            Block::paragraph("Intro."),
            Block::CodeBlock {
                language: "text".into(),
                code: "x".into(),
            },
            Block::paragraph("Outro text."),
        ]
    );
    invariants::check(text, &blocks);
}

#[test]
fn heading_keeps_hash_inside_word() {
    let blocks = extract("# Learn C#\nIt is fun.");
    assert_eq!(
        blocks,
        vec![
            Block::Heading {
                level: 1,
                content: "Learn C#".into(),
            },
            Block::paragraph("It is fun."),
        ]
    );
}

#[test]
fn empty_quote_and_heading_emit_no_chrome() {
    let blocks = extract("Before.\n>\n\n#  \n\nAfter.");
    assert!(
        blocks
            .iter()
            .all(|b| !matches!(b, Block::Blockquote { .. } | Block::Heading { .. })),
        "{blocks:?}"
    );
}

#[test]
fn malformed_table_rows_are_dropped_not_the_table() {
    let blocks = extract("| A | B |\n|---|---|\n| 1 | 2 |\n| only |\n| 3 | 4 |");
    let Block::Table { headers, rows } = &blocks[0] else {
        panic!("expected table, got {blocks:?}");
    };
    assert_eq!(headers.len(), 2);
    assert_eq!(rows, &vec![vec!["1".to_string(), "2".into()], vec!["3".into(), "4".into()]]);
}

#[test]
fn custom_heuristics_change_paragraph_grouping() {
    let extractor = Extractor::new(&crate::heuristics::Heuristics {
        sentences_per_paragraph: 1,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(
        extractor.extract("One. Two."),
        vec![Block::paragraph("One."), Block::paragraph("Two.")]
    );
}

#[test]
fn keyword_emphasis_applies_to_paragraphs_only() {
    let extractor = Extractor::new(&crate::heuristics::Heuristics {
        keyword_emphasis: crate::heuristics::KeywordEmphasis {
            enabled: true,
            keywords: vec!["release".into()],
        },
        ..Default::default()
    })
    .unwrap();
    let blocks = extractor.extract("Plan the release.\n\n```\nrelease()\n```");
    assert_eq!(
        blocks,
        vec![
            Block::paragraph("Plan the **release**."),
            Block::CodeBlock {
                language: "text".into(),
                code: "release()".into(),
            },
        ]
    );
}

#[test]
fn every_block_text_tokenizes_totally() {
    let text = std::fs::read_to_string(format!("{}/mixed_response.md", fixtures_dir())).unwrap();
    for block in extract(&text) {
        for t in block.inline_texts() {
            invariants::check_inline(t);
        }
    }
}

#[test]
fn unbalanced_markup_stays_text() {
    for text in ["**open", "*a", "~~x", "`tick", "[x](", "a * b * c"] {
        invariants::check_inline(text);
    }
    assert_eq!(tokenize("**open"), vec![InlineRun::Text("**open".into())]);
}
