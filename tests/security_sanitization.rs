use dirtree::error::ListingError;
use dirtree::render::{line_to_plain_text, tree_to_lines};
use dirtree::terminal::write_lines;
use dirtree::tree::{EntryKind, TreeEntry};
use std::path::PathBuf;

#[test]
fn test_terminal_control_chars_are_sanitized_in_rendered_output() {
    let entries = vec![
        TreeEntry {
            name: "evil\u{001B}[31mname\twith\ncontrols".to_string(),
            path: PathBuf::from("/tmp/evil"),
            depth: 1,
            kind: EntryKind::File,
            is_last: false,
            prefix: "├── ".to_string(),
        },
        TreeEntry {
            name: String::new(),
            path: PathBuf::from("/tmp/evil"),
            depth: 1,
            kind: EntryKind::Error(ListingError::Io("bad\tinput\nvalue\r".to_string())),
            is_last: true,
            prefix: "└── ".to_string(),
        },
    ];

    let lines = tree_to_lines(&entries);
    assert_eq!(lines.len(), 2);

    for line in &lines {
        let rendered = line_to_plain_text(line);
        // No raw ESC/control chars should remain in rendered tree lines.
        assert!(!rendered.contains('\u{001B}'));
        assert!(!rendered.contains('\n'));
        assert!(!rendered.contains('\r'));
        assert!(!rendered.contains('\t'));
    }

    // Escaped forms should be visible for debugging/auditing.
    let name = line_to_plain_text(&lines[0]);
    assert!(name.contains("\\x1B"));
    assert!(name.contains("\\t"));
    assert!(name.contains("\\n"));
    let err = line_to_plain_text(&lines[1]);
    assert!(err.contains("\\t"));
    assert!(err.contains("\\n"));
    assert!(err.contains("\\r"));
}

#[test]
fn test_only_our_escapes_reach_the_terminal() {
    let entry = TreeEntry {
        name: "\u{001B}[2Jwipe".to_string(),
        path: PathBuf::from("/tmp/wipe"),
        depth: 1,
        kind: EntryKind::Dir,
        is_last: true,
        prefix: "└── ".to_string(),
    };
    let mut buf = Vec::new();
    write_lines(&mut buf, &tree_to_lines(&[entry])).unwrap();
    let out = String::from_utf8(buf).unwrap();
    // One color sequence and one reset, nothing from the file name.
    assert_eq!(out.matches('\u{001B}').count(), 2, "got {out:?}");
    assert!(!out.contains("\u{001B}[2J"));
}
