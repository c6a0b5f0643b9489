use super::*;

#[test]
fn overlay_is_visible_only_while_interactive() {
    assert!(overlay_class(SidebarPhase::Opening).contains("--visible"));
    assert!(overlay_class(SidebarPhase::Open).contains("--visible"));
    assert!(!overlay_class(SidebarPhase::Closing).contains("--visible"));
}

#[test]
fn panel_class_tracks_each_phase() {
    assert_eq!(panel_class(SidebarPhase::Closed), "mobile-sidebar__panel");
    assert!(panel_class(SidebarPhase::Opening).ends_with("--entering"));
    assert!(panel_class(SidebarPhase::Open).ends_with("--in"));
    assert!(panel_class(SidebarPhase::Closing).ends_with("--leaving"));
}
