//! Interactive model scenarios driven through the public API.

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::net::IpAddr;
use subnet_calc::tui::{draw, Action, Effect, Model, Msg, UNDO_LIMIT};

fn model(cidr: &str, split: Option<u8>) -> Model {
    let mut m = Model::new(cidr, split).unwrap();
    m.update(Msg::Resize(100, 40));
    m
}

fn press(m: &mut Model, action: Action) -> Vec<Effect> {
    m.update(Msg::Action(action))
}

fn cidrs(m: &Model) -> Vec<String> {
    m.row_cidrs().iter().map(|c| c.to_string()).collect()
}

fn screen(m: &Model) -> String {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| draw(f, m)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .chunks(100)
        .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_join_collapses_to_root_then_undo_redo() {
    let mut m = model("192.168.1.0/24", Some(26));
    assert_eq!(m.rows().len(), 4);
    assert_eq!(m.cursor(), 0);

    // first join merges the /26 pair into its /25 parent, second merges the root
    press(&mut m, Action::Join);
    press(&mut m, Action::Join);
    assert_eq!(cidrs(&m), vec!["192.168.1.0/24"]);

    press(&mut m, Action::Undo);
    press(&mut m, Action::Undo);
    assert_eq!(m.rows().len(), 4);

    press(&mut m, Action::Redo);
    press(&mut m, Action::Redo);
    assert_eq!(m.rows().len(), 1);
}

#[test]
fn test_split_undo_round_trip_keeps_shape() {
    let mut m = model("10.0.0.0/22", Some(24));
    let before = cidrs(&m);
    press(&mut m, Action::Down);
    press(&mut m, Action::Down);
    press(&mut m, Action::Split);
    let after = cidrs(&m);
    assert_eq!(after.len(), before.len() + 1);

    press(&mut m, Action::Undo);
    assert_eq!(cidrs(&m), before);
    press(&mut m, Action::Redo);
    assert_eq!(cidrs(&m), after);
}

#[test]
fn test_redo_invalidated_by_new_edit() {
    let mut m = model("10.0.0.0/24", None);
    press(&mut m, Action::Split);
    press(&mut m, Action::Undo);
    press(&mut m, Action::Split);
    press(&mut m, Action::Redo);
    assert_eq!(m.status(), Some("Nothing to redo"));
}

#[test]
fn test_undo_history_is_capped() {
    let mut m = model("10.0.0.0/16", None);
    for _ in 0..UNDO_LIMIT + 10 {
        press(&mut m, Action::Split);
        press(&mut m, Action::Join);
    }
    assert_eq!(m.history().undo_len(), UNDO_LIMIT);
}

#[test]
fn test_partition_holds_across_edits() {
    let mut m = model("10.0.0.0/24", Some(26));
    press(&mut m, Action::Down);
    press(&mut m, Action::Split);
    press(&mut m, Action::Down);
    press(&mut m, Action::Down);
    press(&mut m, Action::Join);

    let tree = m.tree();
    let root = &tree[tree.root()].network;
    let leaves: Vec<_> = m.rows().iter().map(|&id| &tree[id].network).collect();
    assert_eq!(leaves[0].network_addr, root.network_addr);
    assert_eq!(leaves[leaves.len() - 1].broadcast_addr, root.broadcast_addr);
    for pair in leaves.windows(2) {
        assert_eq!(v4(pair[0].broadcast_addr) + 1, v4(pair[1].network_addr));
    }
}

fn v4(addr: IpAddr) -> u32 {
    match addr {
        IpAddr::V4(v4) => u32::from(v4),
        IpAddr::V6(_) => panic!("expected an IPv4 address"),
    }
}

#[test]
fn test_export_prints_tree_json() {
    let mut m = model("10.0.0.0/24", Some(25));
    press(&mut m, Action::Export);
    assert!(m.export_requested());

    let value: serde_json::Value = serde_json::from_str(&m.export_json().unwrap()).unwrap();
    assert_eq!(value["cidr"], "10.0.0.0/24");
    assert_eq!(value["subnets"][0]["cidr"], "10.0.0.0/25");
    assert_eq!(value["subnets"][0]["maxHosts"], "126");
}

#[test]
fn test_screen_shows_rows_status_and_help() {
    let mut m = model("192.168.1.0/24", Some(25));
    press(&mut m, Action::Split);
    let text = screen(&m);

    assert!(text.contains("Subnet Calculator - 192.168.1.0/24"));
    assert!(text.contains("192.168.1.0/26"));
    assert!(text.contains("192.168.1.128/25"));
    assert!(text.contains("Split /26"));
    assert!(text.contains("x join"));
}

#[test]
fn test_status_clears_after_timer() {
    let mut m = model("10.0.0.0/24", None);
    let effects = press(&mut m, Action::Split);
    let Some(Effect::ClearStatusAfter(_, seq)) = effects.into_iter().next() else {
        panic!("expected a status timer");
    };
    m.update(Msg::ClearStatus(seq));
    assert_eq!(m.status(), None);
    assert!(!screen(&m).contains("Split /25"));
}
