use stockroom::app::FormField;
use stockroom::input::{KeyCode, KeyEvent, KeyModifiers};
use stockroom::runner::handlers::handle_key;
use stockroom::{App, CategoryFilter, DeleteConfirm, Dialog, ItemId, SortDirection};

const PAGE: usize = 10;

fn press(app: &mut App, code: KeyCode) -> bool {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), PAGE).unwrap()
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn q_quits_from_the_table_but_types_in_the_form() {
    let mut app = App::ephemeral();
    press(&mut app, KeyCode::Char('a'));
    assert!(matches!(app.dialog, Dialog::Creating { .. }));
    assert!(!press(&mut app, KeyCode::Char('q')));
    assert_eq!(app.dialog.draft().unwrap().name, "q");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.dialog, Dialog::Closed);
    assert!(press(&mut app, KeyCode::Char('q')));
}

#[test]
fn ctrl_c_quits_even_inside_dialogs() {
    let mut app = App::ephemeral();
    press(&mut app, KeyCode::Char('a'));
    let quit = handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        PAGE,
    )
    .unwrap();
    assert!(quit);
}

#[test]
fn create_item_through_the_form() {
    let mut app = App::ephemeral();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Monitor");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Electronics");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "7x");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "150.5.0");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "27in");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.dialog, Dialog::Closed);
    let m = app.store.items().last().unwrap();
    assert_eq!(m.name, "Monitor");
    assert_eq!(m.quantity, 7);
    assert_eq!(m.price, 150.5);
    assert_eq!(m.description, "27in");
    assert_eq!(app.status.as_deref(), Some("Added Monitor"));
}

#[test]
fn blank_required_field_blocks_submission() {
    let mut app = App::ephemeral();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Lamp");
    press(&mut app, KeyCode::Enter);

    let draft = app.dialog.draft().expect("dialog still open");
    assert_eq!(draft.focus, FormField::Category);
    assert_eq!(draft.notice.as_deref(), Some("Category is required"));
    assert_eq!(app.store.len(), 3);

    type_text(&mut app, "L");
    assert!(app.dialog.draft().unwrap().notice.is_none());
}

#[test]
fn edit_selected_row_with_enter() {
    let mut app = App::ephemeral();
    // descending: Desk Chair, Laptop, Printer
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    match &app.dialog {
        Dialog::Editing { original, .. } => assert_eq!(original.id, ItemId::from("1")),
        other => panic!("expected edit dialog, got {other:?}"),
    }
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "2");
    press(&mut app, KeyCode::Enter);
    let laptop = app.store.get(&ItemId::from("1")).unwrap();
    assert_eq!(laptop.quantity, 2);
    assert!(laptop.is_low_stock());
}

#[test]
fn delete_flow_defaults_to_cancel() {
    let mut app = App::ephemeral();
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.delete.pending(), Some(&ItemId::from("2")));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.delete, DeleteConfirm::Idle);
    assert_eq!(app.store.len(), 3);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.delete, DeleteConfirm::Idle);
    assert!(app.store.get(&ItemId::from("2")).is_none());
}

#[test]
fn y_and_n_answer_the_confirmation() {
    let mut app = App::ephemeral();
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.store.len(), 3);
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.store.len(), 2);
}

#[test]
fn filter_sort_and_theme_keys() {
    let mut app = App::ephemeral();
    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.category, CategoryFilter::Only("Electronics".into()));
    press(&mut app, KeyCode::Char('F'));
    assert_eq!(app.category, CategoryFilter::All);
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.sort, SortDirection::Ascending);
    let before = app.theme();
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.theme(), before.toggle());
}

#[test]
fn navigation_clamps_at_both_ends() {
    let mut app = App::ephemeral();
    press(&mut app, KeyCode::Up);
    assert_eq!(app.cursor.selected, 0);
    press(&mut app, KeyCode::End);
    assert_eq!(app.cursor.selected, 2);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.cursor.selected, 2);
    press(&mut app, KeyCode::Home);
    assert_eq!(app.cursor.selected, 0);
}

#[test]
fn edit_and_delete_on_empty_table_do_nothing() {
    let mut app = App::ephemeral();
    for _ in 0..3 {
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
    }
    assert!(app.store.is_empty());
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.dialog, Dialog::Closed);
    assert_eq!(app.delete, DeleteConfirm::Idle);
}
