use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate("Salary Deposit", 20), "Salary Deposit");
    assert_eq!(truncate("Cash", 4), "Cash");
    assert_eq!(truncate("", 3), "");
}

#[test]
fn test_truncate_long_payee() {
    assert_eq!(truncate("Restaurant - The Grand Diner", 12), "Restaurant …");
}

#[test]
fn test_truncate_degenerate_widths() {
    assert_eq!(truncate("ConnectNet ISP", 0), "");
    assert_eq!(truncate("ConnectNet ISP", 1), "…");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("Café Résumé", 5), "Café…");
    assert_eq!(truncate("€£¥₹$", 3), "€£…");
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..10 {
        scroll_down(&mut index, &mut scroll, 3, 5);
    }
    assert_eq!(index, 2);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..4 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 4);
    assert_eq!(scroll, 2);
}

#[test]
fn test_scroll_up_pulls_window() {
    let (mut index, mut scroll) = (4, 4);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (3, 3));
    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_bottom_and_top() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 11, 5);
    assert_eq!((index, scroll), (10, 6));
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));

    // Empty lists leave the cursor alone.
    scroll_to_bottom(&mut index, &mut scroll, 0, 5);
    assert_eq!((index, scroll), (0, 0));
}

// ── layout helpers ────────────────────────────────────────────

#[test]
fn test_wrap_index() {
    assert_eq!(wrap_index(0, 5, 1), 1);
    assert_eq!(wrap_index(4, 5, 1), 0);
    assert_eq!(wrap_index(0, 5, -1), 4);
    assert_eq!(wrap_index(3, 0, 1), 0);
}

#[test]
fn test_centered_clamps_to_area() {
    let area = ratatui::layout::Rect::new(0, 0, 80, 24);
    let r = centered(area, 40, 10);
    assert_eq!((r.x, r.y, r.width, r.height), (20, 7, 40, 10));

    let small = ratatui::layout::Rect::new(0, 0, 30, 8);
    let r = centered(small, 72, 40);
    assert_eq!((r.width, r.height), (26, 6));
}
