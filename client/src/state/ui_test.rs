use super::*;

// =============================================================
// TabId
// =============================================================

#[test]
fn tab_order_starts_with_highlights() {
    assert_eq!(TabId::ALL[0], TabId::Highlights);
    assert_eq!(TabId::default(), TabId::Highlights);
    let ids: Vec<&str> = TabId::ALL.iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec!["highlights", "champions", "items", "arena", "other"]);
}

#[test]
fn tab_labels_are_title_case() {
    let labels: Vec<&str> = TabId::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Highlights", "Champions", "Items", "Arena", "Other"]);
}

// =============================================================
// TabsState
// =============================================================

#[test]
fn tabs_state_defaults_to_first_tab_collapsed() {
    let state = TabsState::default();
    assert_eq!(state.active, TabId::Highlights);
    assert!(!state.is_expanded(&card_key("champions", "Ahri")));
}

#[test]
fn select_moves_active_tab_unconditionally() {
    let mut state = TabsState::new(TabId::Champions);
    state.select(TabId::Other);
    assert_eq!(state.active, TabId::Other);
    state.select(TabId::Highlights);
    assert_eq!(state.active, TabId::Highlights);
}

#[test]
fn toggle_flips_single_card() {
    let mut state = TabsState::new(TabId::Champions);
    let ahri = card_key("champions", "Ahri");
    let lux = card_key("champions", "Lux");

    state.toggle(&ahri);
    assert!(state.is_expanded(&ahri));
    assert!(!state.is_expanded(&lux));

    state.toggle(&ahri);
    assert!(!state.is_expanded(&ahri));
}

#[test]
fn switching_tabs_away_and_back_collapses_cards() {
    let mut state = TabsState::new(TabId::Champions);
    let ahri = card_key("champions", "Ahri");
    state.toggle(&ahri);

    state.select(TabId::Items);
    state.select(TabId::Champions);

    assert!(!state.is_expanded(&ahri));
}

#[test]
fn reselecting_active_tab_keeps_cards_open() {
    let mut state = TabsState::new(TabId::Champions);
    let ahri = card_key("champions", "Ahri");
    state.toggle(&ahri);

    state.select(TabId::Champions);

    assert!(state.is_expanded(&ahri));
}

#[test]
fn card_keys_distinguish_sections() {
    assert_ne!(card_key("arena", "Mentions"), card_key("arena-mentions", "Mentions"));
    assert_eq!(card_key("items", "Item 1"), "items/Item 1");
}
