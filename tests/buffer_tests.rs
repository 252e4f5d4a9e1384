use mpad::{Buffer, Offset, Point};

#[test]
fn test_empty_buffer() {
    let buffer = Buffer::new();
    assert!(buffer.is_empty());
    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.line_count(), 1); // Empty buffer has 1 line
}

#[test]
fn test_buffer_from_text() {
    let buffer = Buffer::from_text("Hello, World!");
    assert_eq!(buffer.len(), 13);
    assert_eq!(buffer.line_count(), 1);
}

#[test]
fn test_point_to_offset() {
    let buffer = Buffer::from_text("Hello\nWorld\n!");

    // Point (0, 0) = 'H'
    assert_eq!(buffer.point_to_offset(Point::new(0, 0)), Offset(0));

    // Point (0, 5) = '\n'
    assert_eq!(buffer.point_to_offset(Point::new(0, 5)), Offset(5));

    // Point (1, 0) = 'W'
    assert_eq!(buffer.point_to_offset(Point::new(1, 0)), Offset(6));

    // Point (1, 5) = '\n'
    assert_eq!(buffer.point_to_offset(Point::new(1, 5)), Offset(11));

    // Point (2, 0) = '!'
    assert_eq!(buffer.point_to_offset(Point::new(2, 0)), Offset(12));
}

#[test]
fn test_offset_to_point() {
    let buffer = Buffer::from_text("Hello\nWorld\n!");

    assert_eq!(buffer.offset_to_point(Offset(0)), Point::new(0, 0));
    assert_eq!(buffer.offset_to_point(Offset(5)), Point::new(0, 5));
    assert_eq!(buffer.offset_to_point(Offset(6)), Point::new(1, 0));
    assert_eq!(buffer.offset_to_point(Offset(11)), Point::new(1, 5));
    assert_eq!(buffer.offset_to_point(Offset(12)), Point::new(2, 0));
}

#[test]
fn test_roundtrip_conversion() {
    let buffer = Buffer::from_text("Line 1\nLine 2\nLine 3\n");

    // Test various points
    let points = vec![
        Point::new(0, 0),
        Point::new(0, 3),
        Point::new(1, 0),
        Point::new(2, 6),
    ];

    for point in points {
        let offset = buffer.point_to_offset(point);
        let back = buffer.offset_to_point(offset);
        assert_eq!(point, back, "Roundtrip failed for {:?}", point);
    }
}

#[test]
fn test_get_line() {
    let buffer = Buffer::from_text("Line 1\nLine 2\nLine 3");

    assert_eq!(buffer.line(0), Some("Line 1".to_string()));
    assert_eq!(buffer.line(1), Some("Line 2".to_string()));
    assert_eq!(buffer.line(2), Some("Line 3".to_string()));
    assert_eq!(buffer.line(3), None);
}

#[test]
fn test_get_all_lines() {
    let buffer = Buffer::from_text("A\nB\nC");
    let lines = buffer.lines();

    assert_eq!(lines, vec!["A", "B", "C"]);
}

#[test]
fn test_line_count() {
    let b1 = Buffer::from_text("Single line");
    assert_eq!(b1.line_count(), 1);

    let b2 = Buffer::from_text("Line 1\nLine 2");
    assert_eq!(b2.line_count(), 2);

    let b3 = Buffer::from_text("A\nB\nC\n");
    assert_eq!(b3.line_count(), 4); // 3 lines + 1 empty
}

#[test]
fn test_insert_at_point() {
    let mut buffer = Buffer::from_text("Hello World");

    // Insert newline at position 5
    let offset = buffer.point_to_offset(Point::new(0, 5));
    buffer.insert(offset, "\n");

    assert_eq!(buffer.to_string(), "Hello\n World");
    assert_eq!(buffer.line_count(), 2);
}

#[test]
fn test_delete_at_point() {
    let mut buffer = Buffer::from_text("Hello\nWorld");

    // Delete the newline
    let start = buffer.point_to_offset(Point::new(0, 5));
    let end = buffer.point_to_offset(Point::new(1, 0));
    buffer.delete(start, end);

    assert_eq!(buffer.to_string(), "HelloWorld");
}

#[test]
fn test_columns_count_characters() {
    let buffer = Buffer::from_text("héllo\nwörld");

    // 'é' is two bytes
    assert_eq!(buffer.point_to_offset(Point::new(0, 2)), Offset(3));
    assert_eq!(buffer.offset_to_point(Offset(3)), Point::new(0, 2));
    assert_eq!(buffer.point_to_offset(Point::new(1, 2)), Offset(10));
}

#[test]
fn test_point_to_offset_clamps() {
    let buffer = Buffer::from_text("ab\ncd");

    assert_eq!(buffer.point_to_offset(Point::new(0, 99)), Offset(2));
    assert_eq!(buffer.point_to_offset(Point::new(9, 0)), Offset(3));
}

#[test]
fn test_slice_and_clamp() {
    let buffer = Buffer::from_text("héllo");

    assert_eq!(buffer.slice(Offset(0)..Offset(3)), "hé");
    assert_eq!(buffer.slice(Offset(3)..Offset(99)), "llo");
    assert_eq!(buffer.slice(Offset(4)..Offset(2)), "");

    // Inside the two-byte 'é' snaps back to its start
    assert_eq!(buffer.clamp(Offset(2)), Offset(1));
}

#[test]
fn test_char_boundaries() {
    let buffer = Buffer::from_text("aé");

    assert_eq!(buffer.next_char_boundary(Offset(1)), Some(Offset(3)));
    assert_eq!(buffer.prev_char_boundary(Offset(3)), Some(Offset(1)));
    assert_eq!(buffer.prev_char_boundary(Offset(0)), None);
    assert_eq!(buffer.next_char_boundary(Offset(3)), None);
}

#[test]
fn test_set_text_reindexes() {
    let mut buffer = Buffer::from_text("one");
    buffer.set_text("a\nb\nc");

    assert_eq!(buffer.line_count(), 3);
    assert_eq!(buffer.line(2), Some("c".to_string()));
}
