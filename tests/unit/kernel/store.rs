use super::*;
use std::time::{Duration, Instant};

use crate::content::{node, Document, Node, Section};
use crate::kernel::NotificationKind;
use crate::services::config::ReaderConfig;

fn section(id: &str, title: &str, text: &str) -> Section {
    Section {
        id: id.into(),
        title: title.to_string(),
        body: vec![Node::text(text)],
    }
}

fn sample_doc() -> Document {
    Document::new(vec![
        section("section-1", "Introducción", "introducción general"),
        section("section-2", "Clínica", "cuadro con dolor abdominal"),
        section("section-3", "Tratamiento", "cuadro con dolor lumbar"),
    ])
}

fn new_store() -> Store {
    Store::new(AppState::new(sample_doc(), ReaderConfig::default()))
}

const DEBOUNCE: Duration = Duration::from_millis(300);

#[test]
fn navigate_to_moves_and_emits_effects() {
    let mut store = new_store();
    let result = store.dispatch(Action::NavigateTo { section: 2 });

    assert!(result.state_changed);
    assert_eq!(store.state().ui.current_section, 2);
    assert_eq!(
        result.effects,
        vec![
            Effect::ScrollToTop,
            Effect::UpdateHash("#section-3".into()),
            Effect::Announce("Navegando a la sección 3".to_string()),
        ]
    );
}

#[test]
fn navigate_to_out_of_range_clamps_to_last() {
    let mut store = new_store();
    let result = store.dispatch(Action::NavigateTo { section: 99 });

    assert!(result.state_changed);
    assert_eq!(store.state().ui.current_section, 2);
}

#[test]
fn navigation_commands_are_noops_at_bounds() {
    let mut store = new_store();

    let result = store.dispatch(Action::RunCommand(Command::PrevSection));
    assert!(!result.state_changed);
    assert!(result.effects.is_empty());

    store.dispatch(Action::RunCommand(Command::LastSection));
    assert_eq!(store.state().ui.current_section, 2);

    let result = store.dispatch(Action::RunCommand(Command::NextSection));
    assert!(!result.state_changed);
    assert!(result.effects.is_empty());
}

#[test]
fn hash_changed_navigates_to_known_id_only() {
    let mut store = new_store();

    let result = store.dispatch(Action::HashChanged {
        hash: "#section-2".to_string(),
    });
    assert!(result.state_changed);
    assert_eq!(store.state().ui.current_section, 1);

    let result = store.dispatch(Action::HashChanged {
        hash: "#no-such".to_string(),
    });
    assert!(!result.state_changed);
    assert_eq!(store.state().ui.current_section, 1);
}

#[test]
fn debounced_search_fires_on_tick() {
    let mut store = new_store();
    let t0 = Instant::now();

    let result = store.dispatch(Action::SearchInputChanged {
        text: "dolor".to_string(),
        now: t0,
    });
    assert!(result.effects.is_empty());
    assert_eq!(store.state().search.phase, SearchPhase::Idle);

    // 未到期的心跳不触发
    let result = store.dispatch(Action::Tick {
        now: t0 + Duration::from_millis(100),
    });
    assert!(!result.state_changed);

    let result = store.dispatch(Action::Tick { now: t0 + DEBOUNCE });
    assert!(result.state_changed);
    assert_eq!(
        store.state().search.phase,
        SearchPhase::Highlighted {
            term: "dolor".to_string()
        }
    );
    assert_eq!(store.state().ui.current_section, 1);

    let notification = store.state().notification.as_ref().unwrap();
    assert_eq!(notification.message, "Encontrados 2 resultados para \"dolor\"");
    assert_eq!(notification.kind, NotificationKind::Success);

    let last = result.effects.last().unwrap();
    assert!(matches!(last, Effect::ScrollToMatch { section: 1, .. }));
    assert!(result
        .effects
        .contains(&Effect::UpdateHash("#section-2".into())));
}

#[test]
fn rapid_typing_only_last_term_fires() {
    let mut store = new_store();
    let t0 = Instant::now();

    store.dispatch(Action::SearchInputChanged {
        text: "do".to_string(),
        now: t0,
    });
    store.dispatch(Action::SearchInputChanged {
        text: "dolor lumbar".to_string(),
        now: t0 + Duration::from_millis(100),
    });

    // 第一个词的到期时刻已被替换，什么都不发生
    let result = store.dispatch(Action::Tick { now: t0 + DEBOUNCE });
    assert!(!result.state_changed);

    store.dispatch(Action::Tick {
        now: t0 + Duration::from_millis(100) + DEBOUNCE,
    });
    let notification = store.state().notification.as_ref().unwrap();
    assert_eq!(
        notification.message,
        "Encontrados 1 resultado para \"dolor lumbar\""
    );
    assert_eq!(store.state().ui.current_section, 2);
}

#[test]
fn submit_skips_debounce() {
    let mut store = new_store();
    let t0 = Instant::now();

    store.dispatch(Action::SearchInputChanged {
        text: "dolor".to_string(),
        now: t0,
    });
    let result = store.dispatch(Action::SearchSubmit { now: t0 });
    assert!(result.state_changed);
    assert!(matches!(
        store.state().search.phase,
        SearchPhase::Highlighted { .. }
    ));

    // 提交已取消待触发任务，到期心跳不再重搜
    let result = store.dispatch(Action::Tick { now: t0 + DEBOUNCE });
    assert!(!result.state_changed);
}

#[test]
fn no_results_warns_and_leaves_document_pristine() {
    let mut store = new_store();
    let t0 = Instant::now();

    store.dispatch(Action::SearchInputChanged {
        text: "dolor".to_string(),
        now: t0,
    });
    store.dispatch(Action::SearchSubmit { now: t0 });

    store.dispatch(Action::SearchInputChanged {
        text: "inexistente".to_string(),
        now: t0,
    });
    store.dispatch(Action::SearchSubmit { now: t0 });

    assert_eq!(store.state().search.phase, SearchPhase::Idle);
    assert_eq!(store.state().document, sample_doc());

    let notification = store.state().notification.as_ref().unwrap();
    assert_eq!(
        notification.message,
        "No se encontraron resultados para \"inexistente\""
    );
    assert_eq!(notification.kind, NotificationKind::Warning);
}

#[test]
fn manual_navigation_clears_highlights() {
    let mut store = new_store();
    let t0 = Instant::now();

    store.dispatch(Action::SearchInputChanged {
        text: "dolor".to_string(),
        now: t0,
    });
    store.dispatch(Action::SearchSubmit { now: t0 });
    assert_eq!(store.state().ui.current_section, 1);

    let result = store.dispatch(Action::RunCommand(Command::NextSection));
    assert!(result.state_changed);
    assert_eq!(store.state().ui.current_section, 2);
    assert_eq!(store.state().search.phase, SearchPhase::Idle);
    assert_eq!(store.state().document, sample_doc());
}

#[test]
fn search_jump_keeps_highlights() {
    let mut store = new_store();
    let t0 = Instant::now();

    store.dispatch(Action::SearchInputChanged {
        text: "dolor".to_string(),
        now: t0,
    });
    store.dispatch(Action::SearchSubmit { now: t0 });

    let body = &store.state().document.section(1).unwrap().body;
    assert!(!node::highlight_paths(body).is_empty());
}

#[test]
fn clear_search_resets_everything() {
    let mut store = new_store();
    let t0 = Instant::now();

    store.dispatch(Action::SearchInputChanged {
        text: "dolor".to_string(),
        now: t0,
    });
    store.dispatch(Action::SearchSubmit { now: t0 });

    let result = store.dispatch(Action::RunCommand(Command::ClearSearch));
    assert!(result.state_changed);
    assert!(store.state().search.input.is_empty());
    assert_eq!(store.state().search.phase, SearchPhase::Idle);
    assert_eq!(store.state().document, sample_doc());
    assert!(store.state().notification.is_none());
}

#[test]
fn emptied_input_clears_highlights_on_fire() {
    let mut store = new_store();
    let t0 = Instant::now();

    store.dispatch(Action::SearchInputChanged {
        text: "dolor".to_string(),
        now: t0,
    });
    store.dispatch(Action::SearchSubmit { now: t0 });

    store.dispatch(Action::SearchInputChanged {
        text: String::new(),
        now: t0,
    });
    let result = store.dispatch(Action::Tick { now: t0 + DEBOUNCE });
    assert!(result.state_changed);
    assert_eq!(store.state().search.phase, SearchPhase::Idle);
    assert_eq!(store.state().document, sample_doc());
}

#[test]
fn notification_expires_on_tick() {
    let mut store = new_store();
    let t0 = Instant::now();

    store.dispatch(Action::SearchInputChanged {
        text: "dolor".to_string(),
        now: t0,
    });
    store.dispatch(Action::SearchSubmit { now: t0 });
    assert!(store.state().notification.is_some());

    let ttl = store.state().config.notification_ttl();
    let result = store.dispatch(Action::Tick { now: t0 + ttl });
    assert!(result.state_changed);
    assert!(store.state().notification.is_none());
}

#[test]
fn toggle_block_scrolls_on_expand_only() {
    let mut store = new_store();

    let result = store.dispatch(Action::ToggleBlock { id: "exp-1".into() });
    assert!(result.state_changed);
    assert_eq!(
        result.effects,
        vec![Effect::ScrollToBlock { id: "exp-1".into() }]
    );
    assert!(store.state().ui.is_expanded("exp-1"));

    let result = store.dispatch(Action::ToggleBlock { id: "exp-1".into() });
    assert!(result.effects.is_empty());
    assert!(!store.state().ui.is_expanded("exp-1"));
}
