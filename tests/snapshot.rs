//! Tests for capturing, persisting and restoring layouts

mod common;

use common::{drain, id, ids, panel, record_events, test_workspace};
use dockspace::geometry::Edge;
use dockspace::workspace::{Workspace, WorkspaceEvent};
use dockspace::LayoutSnapshot;
use tempfile::TempDir;

fn arranged() -> Workspace {
    let mut ws = test_workspace();
    ws.append(panel("files"), Edge::Left);
    ws.append(panel("outline"), Edge::Left);
    ws.append(panel("term"), Edge::Bottom);
    ws.toggle(&id("files"));
    ws.set_tool_dimension(&id("files"), 210.0);
    ws
}

// ============================================================================
// Capture and restore
// ============================================================================

#[test]
fn test_restore_reproduces_layout() {
    let source = arranged();
    let snapshot = LayoutSnapshot::capture(&source);

    let mut target = test_workspace();
    snapshot.restore(&mut target);

    assert_eq!(LayoutSnapshot::capture(&target), snapshot);
    assert_eq!(target.layout(), source.layout());
    // An open tool that is not last stays the open one
    assert_eq!(target.bar(Edge::Left).selected(), Some(&id("files")));
}

#[test]
fn test_restore_replaces_existing_tools() {
    let snapshot = LayoutSnapshot::capture(&arranged());

    let mut target = test_workspace();
    target.append(panel("stale"), Edge::Top);
    target.append(panel("term"), Edge::Right);
    snapshot.restore(&mut target);

    assert!(target.bar(Edge::Top).is_empty());
    assert!(target.bar(Edge::Right).is_empty());
    assert_eq!(ids(&target, Edge::Bottom), vec!["term"]);
    assert_eq!(ids(&target, Edge::Left), vec!["files", "outline"]);
}

#[test]
fn test_restore_applies_visibility() {
    let mut source = arranged();
    source.hide_tool_buttons();
    source.hide_all_tools();
    let snapshot = LayoutSnapshot::capture(&source);

    let mut target = test_workspace();
    snapshot.restore(&mut target);

    assert!(!target.is_tool_buttons_visible());
    assert!(!target.is_all_tools_visible());
    assert_eq!(target.tool(&id("files")).unwrap().dimension, 210.0);
}

#[test]
fn test_restore_is_silent_but_keeps_delegate() {
    let snapshot = LayoutSnapshot::capture(&arranged());
    let mut target = test_workspace();
    target.append(panel("old"), Edge::Top);
    let events = record_events(&mut target);

    snapshot.restore(&mut target);
    assert!(drain(&events).is_empty());

    target.toggle(&id("term"));
    assert_eq!(drain(&events).last(), Some(&WorkspaceEvent::Toggled(id("term"))));
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_save_then_load_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("layout.json");
    let snapshot = LayoutSnapshot::capture(&arranged());

    snapshot.save(&path).unwrap();
    let loaded = LayoutSnapshot::load(&path).unwrap();

    assert_eq!(loaded, snapshot);
    assert_eq!(loaded.version, LayoutSnapshot::CURRENT_VERSION);
}

#[test]
fn test_load_reports_missing_and_malformed_files() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(LayoutSnapshot::load(&missing).is_err());

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    let err = LayoutSnapshot::load(&broken).unwrap_err();
    assert!(err.to_string().contains("Failed to parse layout"));
}
