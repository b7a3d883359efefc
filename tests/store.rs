//! Tests for the store's change publication

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{button_center, id, test_workspace};
use dockspace::geometry::{Edge, Rect};
use dockspace::messages::{LayoutMsg, Msg, PointerMsg, ToolMsg};
use dockspace::{Cmd, LayoutSnapshot, Store};

fn append(name: &str, edge: Edge) -> Msg {
    Msg::Tool(ToolMsg::Append {
        id: id(name),
        title: name.to_string(),
        minimum_dimension: 50.0,
        edge,
    })
}

fn recording_store() -> (Store, Rc<RefCell<Vec<LayoutSnapshot>>>) {
    let mut store = Store::new(test_workspace());
    let published = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&published);
    store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));
    (store, published)
}

#[test]
fn test_subscribers_see_placement_changes() {
    let (mut store, published) = recording_store();

    let cmd = store.dispatch(append("files", Edge::Left)).unwrap();
    assert!(cmd.needs_persist());
    assert_eq!(published.borrow().len(), 1);
    assert_eq!(published.borrow()[0].bars[3].tools[0].id, id("files"));

    store.dispatch(Msg::Tool(ToolMsg::Toggle(id("files"))));
    assert_eq!(published.borrow().len(), 2);
    assert!(store.snapshot().bars[3].tools[0].selected);
}

#[test]
fn test_no_op_messages_publish_nothing() {
    let (mut store, published) = recording_store();
    store.dispatch(append("files", Edge::Top));

    // Duplicate append and unknown toggle change nothing
    assert_eq!(store.dispatch(append("files", Edge::Right)), None);
    assert_eq!(store.dispatch(Msg::Tool(ToolMsg::Toggle(id("ghost")))), None);

    // Hover and bounds only need a redraw
    let over = button_center(store.workspace(), Edge::Top, "files");
    assert_eq!(store.dispatch(Msg::Pointer(PointerMsg::Moved(over))), Some(Cmd::Redraw));
    store.dispatch(Msg::Layout(LayoutMsg::SetBounds(Rect::new(0.0, 0.0, 1024.0, 768.0))));

    assert_eq!(published.borrow().len(), 1);
}

#[test]
fn test_modify_publishes_direct_changes() {
    let (mut store, published) = recording_store();
    store.dispatch(append("files", Edge::Left));

    let applied = store.modify(|ws| {
        ws.toggle(&id("files"));
        ws.set_bar_dimension(Edge::Left, 300.0)
    });

    assert_eq!(applied, 300.0);
    assert_eq!(published.borrow().len(), 2);
    assert_eq!(store.snapshot().bars[3].tools[0].dimension, 274.0);
    assert_eq!(store.into_workspace().bar(Edge::Left).dimension(), 300.0);
}
