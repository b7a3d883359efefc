//! Benchmarks for workspace layout, painting and drag routing
//!
//! Run with: cargo bench layout

mod support;
use support::make_workspace;

use dockspace::geometry::{Edge, Point};
use dockspace::messages::{DragMsg, Msg};
use dockspace::update::update;
use dockspace::{LayoutSnapshot, ToolId};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Layout
// ============================================================================

#[divan::bench(args = [1, 4, 16, 64])]
fn workspace_layout(bencher: divan::Bencher, per_bar: usize) {
    let workspace = make_workspace(per_bar);
    bencher.bench_local(|| divan::black_box(workspace.layout()));
}

#[divan::bench(args = [1, 4, 16, 64])]
fn display_list(bencher: divan::Bencher, per_bar: usize) {
    let workspace = make_workspace(per_bar);
    bencher.bench_local(|| divan::black_box(workspace.display_list()));
}

#[divan::bench(args = [4, 64])]
fn hit_test_buttons(bencher: divan::Bencher, per_bar: usize) {
    let workspace = make_workspace(per_bar);
    let point = Point::new(40.0, 12.0);
    bencher.bench_local(|| divan::black_box(workspace.tool_at(divan::black_box(point))));
}

// ============================================================================
// Drag routing
// ============================================================================

#[divan::bench(args = [4, 16])]
fn drag_sweep_across_edges(bencher: divan::Bencher, per_bar: usize) {
    let source = ToolId::from(format!("{}-0", Edge::Top));
    bencher
        .with_inputs(|| {
            let mut workspace = make_workspace(per_bar);
            update(&mut workspace, Msg::Drag(DragMsg::Begin(source.clone())));
            workspace
        })
        .bench_local_values(|mut workspace| {
            for step in 0..100 {
                let x = step as f32 * 19.0;
                update(&mut workspace, Msg::Drag(DragMsg::Update(Point::new(x, 8.0))));
                update(&mut workspace, Msg::Drag(DragMsg::Update(Point::new(x, 540.0))));
            }
            update(&mut workspace, Msg::Drag(DragMsg::Cancel));
            workspace
        });
}

// ============================================================================
// Snapshots
// ============================================================================

#[divan::bench(args = [4, 64])]
fn snapshot_capture(bencher: divan::Bencher, per_bar: usize) {
    let workspace = make_workspace(per_bar);
    bencher.bench_local(|| divan::black_box(LayoutSnapshot::capture(&workspace)));
}

#[divan::bench(args = [4, 64])]
fn snapshot_restore(bencher: divan::Bencher, per_bar: usize) {
    let snapshot = LayoutSnapshot::capture(&make_workspace(per_bar));
    bencher
        .with_inputs(|| make_workspace(0))
        .bench_local_values(|mut workspace| {
            snapshot.restore(&mut workspace);
            workspace
        });
}
