use mpad::{Editor, FindOptions, Motion, Offset, Point, TextBuffer};

#[test]
fn test_empty_editor() {
    let editor = Editor::new();
    assert_eq!(editor.text(), "");
    assert_eq!(editor.cursor(), Point::zero());
}

#[test]
fn test_insert_at_cursor() {
    let mut editor = Editor::new();

    editor.insert("Hello");
    assert_eq!(editor.text(), "Hello");
    assert_eq!(editor.cursor(), Point::new(0, 5));

    editor.insert(" World");
    assert_eq!(editor.text(), "Hello World");
    assert_eq!(editor.cursor(), Point::new(0, 11));
}

#[test]
fn test_insert_newline() {
    let mut editor = Editor::new();

    editor.insert("Line 1");
    editor.insert("\n");
    editor.insert("Line 2");

    assert_eq!(editor.text(), "Line 1\nLine 2");
    assert_eq!(editor.cursor(), Point::new(1, 6));
}

#[test]
fn test_backspace() {
    let mut editor = Editor::from_text("Hello World");
    editor.set_cursor(Point::new(0, 5)); // After "Hello"

    editor.backspace();
    assert_eq!(editor.text(), "Hell World");
    assert_eq!(editor.cursor(), Point::new(0, 4));
}

#[test]
fn test_delete() {
    let mut editor = Editor::from_text("Hello World");
    editor.set_cursor(Point::new(0, 5)); // At space

    editor.delete();
    assert_eq!(editor.text(), "HelloWorld");
    assert_eq!(editor.cursor(), Point::new(0, 5)); // Cursor stays
}

#[test]
fn test_move_left_right() {
    let mut editor = Editor::from_text("Hello");
    editor.set_cursor(Point::new(0, 5));

    editor.move_left();
    assert_eq!(editor.cursor(), Point::new(0, 4));

    editor.move_right();
    assert_eq!(editor.cursor(), Point::new(0, 5));
}

#[test]
fn test_move_up_down() {
    let mut editor = Editor::from_text("Line 1\nLine 2\nLine 3");
    editor.set_cursor(Point::new(1, 3)); // Line 2, column 3

    editor.move_up();
    assert_eq!(editor.cursor(), Point::new(0, 3));

    editor.move_down();
    assert_eq!(editor.cursor(), Point::new(1, 3));

    editor.move_down();
    assert_eq!(editor.cursor(), Point::new(2, 3));
}

#[test]
fn test_move_line_start_end() {
    let mut editor = Editor::from_text("Hello World");
    editor.set_cursor(Point::new(0, 5));

    editor.move_to_line_start();
    assert_eq!(editor.cursor(), Point::new(0, 0));

    editor.move_to_line_end();
    assert_eq!(editor.cursor(), Point::new(0, 11));
}

#[test]
fn test_typing_simulation() {
    let mut editor = Editor::new();

    // Type "Hello"
    editor.insert("H");
    editor.insert("e");
    editor.insert("l");
    editor.insert("l");
    editor.insert("o");

    assert_eq!(editor.text(), "Hello");
    assert_eq!(editor.cursor(), Point::new(0, 5));

    // Press Enter
    editor.insert("\n");

    // Type "World"
    editor.insert("World");

    assert_eq!(editor.text(), "Hello\nWorld");
    assert_eq!(editor.cursor(), Point::new(1, 5));
}

#[test]
fn test_backspace_newline() {
    let mut editor = Editor::from_text("Hello\nWorld");
    editor.set_cursor(Point::new(1, 0)); // Start of "World"

    editor.backspace(); // Delete newline

    assert_eq!(editor.text(), "HelloWorld");
    assert_eq!(editor.cursor(), Point::new(0, 5));
}

#[test]
fn test_insert_replaces_selection() {
    let mut editor = Editor::from_text("Hello World");
    editor.select_range(Offset(6)..Offset(11));

    editor.insert("Rust");
    assert_eq!(editor.text(), "Hello Rust");
    assert_eq!(editor.cursor(), Point::new(0, 10));
    assert!(!editor.has_selection());
}

#[test]
fn test_backspace_deletes_selection_only() {
    let mut editor = Editor::from_text("abcdef");
    editor.select_range(Offset(1)..Offset(3));

    editor.backspace();
    assert_eq!(editor.text(), "adef");
    assert_eq!(editor.cursor(), Point::new(0, 1));
}

#[test]
fn test_shift_motion_extends_selection() {
    let mut editor = Editor::from_text("Hello\nWorld");

    editor.move_cursor(Motion::Right, true);
    editor.move_cursor(Motion::Right, true);
    assert_eq!(editor.selected_text(), "He");

    editor.move_cursor(Motion::Down, true);
    assert_eq!(editor.selected_text(), "Hello\nWo");

    editor.move_cursor(Motion::Left, false);
    assert!(!editor.has_selection());
}

#[test]
fn test_backwards_selection_is_ordered() {
    let mut editor = Editor::from_text("abcdef");
    editor.set_cursor(Point::new(0, 4));
    editor.move_cursor(Motion::LineStart, true);

    assert_eq!(editor.selection_range(), Some(Offset(0)..Offset(4)));
    assert_eq!(editor.selected_text(), "abcd");
    assert_eq!(editor.cursor(), Point::new(0, 0));
}

#[test]
fn test_select_all_and_delete() {
    let mut editor = Editor::from_text("one\ntwo");
    editor.select_all();
    assert_eq!(editor.selected_text(), "one\ntwo");

    assert!(editor.delete_selection());
    assert_eq!(editor.text(), "");
    assert!(!editor.delete_selection());
}

#[test]
fn test_document_motions() {
    let mut editor = Editor::from_text("first\nsecond\nlast");

    editor.move_cursor(Motion::DocumentEnd, false);
    assert_eq!(editor.cursor(), Point::new(2, 4));

    editor.move_cursor(Motion::DocumentStart, false);
    assert_eq!(editor.cursor(), Point::zero());
}

#[test]
fn test_set_cursor_clamps() {
    let mut editor = Editor::from_text("ab\ncd");
    editor.set_cursor(Point::new(7, 7));
    assert_eq!(editor.cursor(), Point::new(1, 2));
}

#[test]
fn test_version_tracks_content_changes() {
    let mut editor = Editor::from_text("abc");
    let start = editor.version();

    editor.move_right();
    editor.select_all();
    assert_eq!(editor.version(), start);

    editor.insert("x");
    assert!(editor.version() > start);

    // Nothing to delete at the end
    let before = editor.version();
    editor.delete();
    assert_eq!(editor.version(), before);
}

#[test]
fn test_find_selects_match_after_cursor() {
    let mut editor = Editor::from_text("cat dog cat");

    assert!(editor.find("cat", FindOptions::default()));
    assert_eq!(editor.selection_range(), Some(Offset(0)..Offset(3)));

    assert!(editor.find("cat", FindOptions::default()));
    assert_eq!(editor.selection_range(), Some(Offset(8)..Offset(11)));

    assert!(!editor.find("cat", FindOptions::default()));
    assert!(!editor.has_selection());
    assert_eq!(editor.cursor(), Point::new(0, 11));
}

#[test]
fn test_set_text_resets_cursor() {
    let mut editor = Editor::from_text("old text");
    editor.select_all();

    TextBuffer::set_text(&mut editor, "new");
    assert_eq!(editor.text(), "new");
    assert_eq!(editor.cursor(), Point::zero());
    assert!(!editor.has_selection());
}
