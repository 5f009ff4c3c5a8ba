//! Live smoke test against api.scryfall.com.
//!
//! Ignored by default; run with `cargo test --test smoke_test -- --ignored`.

use scryfall_search::{Color, ScryfallSearch, SessionState, SortKey};

#[test]
#[ignore]
fn live_search_and_prints() {
    let _ = env_logger::builder().is_test(true).try_init();
    let sdk = ScryfallSearch::builder().build().unwrap();

    let result = sdk.search("llanowar elves", &[Color::Green]).unwrap();
    assert!(result.total_cards >= 1);
    assert!(result.cards.iter().any(|c| c.name == "Llanowar Elves"));
    assert!(sdk.cached_pages() >= 1);

    let prints = sdk.search_prints("Llanowar Elves").unwrap();
    assert!(prints.total_prints > 1);

    let err = sdk.search("zzqqxxnonexistentcardzz", &[]).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
#[ignore]
fn live_session_flow() {
    let sdk = ScryfallSearch::builder().build().unwrap();
    let mut session = SessionState::new();

    session.set_query("t:goblin");
    assert!(session.search(&sdk));
    assert!(session.page_buttons().len() > 1);

    session.sort_by(SortKey::Name);
    assert!(session.next_page(&sdk).unwrap());
    assert_eq!(session.pagination().current_page, 2);
    assert_eq!(session.sort(), Some(SortKey::Name));
}
