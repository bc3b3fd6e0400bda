#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn begin_with_surface() {
    let e = parse_line(r#"{"phase":"begin","id":3,"x":1.5,"y":2.0,"surface":"board"}"#).unwrap().unwrap();
    assert_eq!(
        e,
        TraceEvent::Begin(ContactEvent { surface: "board".to_owned(), id: ContactId(3), x: 1.5, y: 2.0 })
    );
}

#[test]
fn surface_defaults_to_main() {
    let Some(TraceEvent::Move(e)) = parse_line(r#"{"phase":"move","id":1,"x":0,"y":0}"#).unwrap() else {
        panic!("expected move");
    };
    assert_eq!(e.surface, "main");
    assert_eq!(e.position(), Point::new(0.0, 0.0));
}

#[test]
fn end_event() {
    let e = parse_line(r#"{"phase":"end","id":7,"x":4,"y":5}"#).unwrap().unwrap();
    assert!(matches!(e, TraceEvent::End(ContactEvent { id: ContactId(7), .. })));
}

#[test]
fn control_events() {
    assert_eq!(parse_line(r#"{"phase":"reset"}"#).unwrap(), Some(TraceEvent::Reset));
    assert_eq!(
        parse_line(r#"{"phase":"disable"}"#).unwrap(),
        Some(TraceEvent::Disable { surface: "main".to_owned() })
    );
    assert_eq!(
        parse_line(r#"{"phase":"enable","surface":"side"}"#).unwrap(),
        Some(TraceEvent::Enable { surface: "side".to_owned() })
    );
}

#[test]
fn blank_and_comment_lines_are_skipped() {
    assert_eq!(parse_line("").unwrap(), None);
    assert_eq!(parse_line("   \t").unwrap(), None);
    assert_eq!(parse_line("# two finger pinch").unwrap(), None);
}

#[test]
fn unknown_phase_is_an_error() {
    assert!(parse_line(r#"{"phase":"hover","id":1,"x":0,"y":0}"#).is_err());
}

#[test]
fn missing_coordinates_is_an_error() {
    assert!(parse_line(r#"{"phase":"begin","id":1}"#).is_err());
}

#[test]
fn non_json_is_an_error() {
    assert!(parse_line("begin 1 0 0").is_err());
}
