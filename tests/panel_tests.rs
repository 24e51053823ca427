// Panel content, the typewriter reveal and in-scene panel buttons.

use glam::Vec2;
use showcase_core::*;

#[test]
fn typewriter_reveals_one_char_per_step() {
    let mut tw = Typewriter::with_speed("abc", 10);
    assert_eq!(tw.visible(), "");
    assert!(!tw.advance(5.0));
    assert!(tw.advance(5.0));
    assert_eq!(tw.visible(), "a");
    assert!(tw.advance(25.0));
    assert_eq!(tw.visible(), "abc");
    assert!(tw.is_done());
    assert!(!tw.advance(100.0));
}

#[test]
fn typewriter_counts_characters_not_bytes() {
    let mut tw = Typewriter::with_speed("äöü", 1);
    tw.advance(2.0);
    assert_eq!(tw.visible(), "äö");
    tw.finish();
    assert_eq!(tw.visible(), "äöü");
}

#[test]
fn typewriter_ignores_bad_elapsed_time() {
    let mut tw = Typewriter::new("hello");
    assert!(!tw.advance(-10.0));
    assert!(!tw.advance(f64::NAN));
    assert!(tw.advance(f64::from(TYPEWRITER_MS_PER_CHAR)));
    assert_eq!(tw.visible(), "h");
    assert!(Typewriter::new("").is_done());
}

#[test]
fn typewriter_survives_huge_elapsed_time() {
    let mut tw = Typewriter::with_speed("abc", 1);
    assert!(tw.advance(1.0));
    assert!(tw.advance(1e30));
    assert_eq!(tw.visible(), "abc");
    assert!(tw.is_done());
}

#[test]
fn panel_content_per_kind() {
    let link = PanelContent::link("https://x");
    assert_eq!(link.kind, PanelKind::Link);
    assert_eq!(link.title, LINK_PANEL_TITLE);
    assert_eq!(link.url.as_deref(), Some("https://x"));
    assert_eq!(link.overlay_id(), "link-overlay");

    let msg = PanelContent::message("hi");
    assert_eq!(msg.kind, PanelKind::Message);
    assert_eq!(msg.body, "hi");
    assert_eq!(msg.url, None);
    assert_eq!(msg.overlay_id(), "animated-overlay");
}

#[test]
fn open_button_only_on_link_panels() {
    let on_button = Vec2::new(0.3, 0.3);
    assert_eq!(PanelButton::at_uv(PanelKind::Link, on_button), PanelButton::Open);
    assert_eq!(PanelButton::at_uv(PanelKind::Message, on_button), PanelButton::Close);
    assert_eq!(
        PanelButton::at_uv(PanelKind::Link, Vec2::new(0.8, 0.3)),
        PanelButton::Close
    );
    assert_eq!(
        PanelButton::at_uv(PanelKind::Link, Vec2::new(0.3, 0.9)),
        PanelButton::Close
    );
}
