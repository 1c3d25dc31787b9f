use model_admin_core::controller::NoticeLevel;
use model_admin_core::editor::ControlValue;
use model_admin_core::{Command, Dialog, ViewState};
use serde_json::{json, Value};

use super::update;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::FocusPanel;
use crate::test_support::{ready, settle};

fn content(msg: ContentMessage) -> AppMessage {
    AppMessage::Content(msg)
}

fn modal(msg: ModalMessage) -> AppMessage {
    AppMessage::Modal(msg)
}

fn type_text(app: &mut crate::model::App, text: &str) {
    for c in text.chars() {
        update(app, modal(ModalMessage::Input(c)));
    }
}

// ===== 模型选择 =====

#[test]
fn confirm_opens_model_and_focuses_records() {
    let (mut app, _) = ready(3);

    let ws = app.controller.workspace().unwrap();
    assert_eq!(ws.model.as_ref(), "Course");
    assert_eq!(ws.page.records.len(), 3);
    assert_eq!(ws.page.total, 3);
    assert_eq!(app.focus, FocusPanel::Records);
    assert!(app.take_commands().is_empty());
}

#[test]
fn switching_models_discards_old_rows() {
    let (mut app, mut fixture) = ready(5);
    update(&mut app, content(ContentMessage::SelectLast));
    assert_eq!(app.rows.selected, 4);

    update(&mut app, AppMessage::GoBack);
    update(&mut app, AppMessage::Navigation(NavigationMessage::SelectNext));
    update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
    settle(&mut app, &mut fixture);

    let ws = app.controller.workspace().unwrap();
    assert_eq!(ws.model.as_ref(), "Lesson");
    assert!(ws.page.records.is_empty());
    assert_eq!(app.rows.selected, 0);
}

#[test]
fn late_answer_for_previous_model_is_dropped() {
    let (mut app, mut fixture) = ready(3);

    // 重新选择 Course，但先不回答
    update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
    let stale = app.take_commands();

    // 立即切换到 Lesson 并完成加载
    update(&mut app, AppMessage::Navigation(NavigationMessage::SelectNext));
    update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
    settle(&mut app, &mut fixture);

    // Course 的旧结果此时才到
    for command in stale {
        let outcome = fixture.answer(command);
        update(&mut app, AppMessage::Backend(outcome));
    }

    let ws = app.controller.workspace().unwrap();
    assert_eq!(ws.model.as_ref(), "Lesson");
    assert_eq!(ws.fields.len(), 2);
    assert!(ws.page.records.is_empty());
}

// ===== 分页 =====

#[test]
fn next_and_previous_page() {
    let (mut app, mut fixture) = ready(25);
    update(&mut app, content(ContentMessage::SelectLast));

    update(&mut app, content(ContentMessage::NextPage));
    settle(&mut app, &mut fixture);
    let ws = app.controller.workspace().unwrap();
    assert_eq!(ws.page.page, 2);
    assert_eq!(ws.page.records[0].id().unwrap().as_str(), "11");
    assert_eq!(app.rows.selected, 0);

    update(&mut app, content(ContentMessage::NextPage));
    settle(&mut app, &mut fixture);
    update(&mut app, content(ContentMessage::NextPage));
    assert!(app.take_commands().is_empty(), "already on the last page");
    assert_eq!(app.controller.workspace().unwrap().page.page, 3);

    update(&mut app, content(ContentMessage::PrevPage));
    settle(&mut app, &mut fixture);
    assert_eq!(app.controller.workspace().unwrap().page.page, 2);
}

#[test]
fn limit_cycles_and_resets_to_first_page() {
    let (mut app, mut fixture) = ready(25);
    update(&mut app, content(ContentMessage::NextPage));
    settle(&mut app, &mut fixture);

    update(&mut app, content(ContentMessage::LargerLimit));
    settle(&mut app, &mut fixture);

    let ws = app.controller.workspace().unwrap();
    assert_eq!(ws.page.limit, 20);
    assert_eq!(ws.page.page, 1);
    assert_eq!(ws.page.records.len(), 20);
    assert_eq!(app.status.as_ref().unwrap().text, "20 records per page");

    // 10 → 100（向下循环）
    update(&mut app, content(ContentMessage::SmallerLimit));
    settle(&mut app, &mut fixture);
    update(&mut app, content(ContentMessage::SmallerLimit));
    settle(&mut app, &mut fixture);
    assert_eq!(app.controller.limit(), 100);
}

#[test]
fn page_failure_shows_error() {
    let (mut app, mut fixture) = ready(3);
    fixture.fail_pages = true;

    update(&mut app, AppMessage::Refresh);
    settle(&mut app, &mut fixture);

    let status = app.status.as_ref().unwrap();
    assert_eq!(status.level, NoticeLevel::Error);
    assert!(status.text.contains("connection refused"), "{}", status.text);
    assert!(app.controller.workspace().unwrap().page.records.is_empty());
}

// ===== 新建 =====

#[test]
fn create_record_through_form() {
    let (mut app, mut fixture) = ready(2);

    update(&mut app, content(ContentMessage::Add));
    assert!(matches!(app.dialog(), Some(Dialog::Create(_))));

    type_text(&mut app, "Rust 101");
    update(&mut app, modal(ModalMessage::NextField)); // description
    type_text(&mut app, "line one");
    update(&mut app, modal(ModalMessage::Newline));
    type_text(&mut app, "line two");
    update(&mut app, modal(ModalMessage::NextField)); // published
    update(&mut app, modal(ModalMessage::ToggleNext));
    update(&mut app, modal(ModalMessage::Confirm));

    let commands = app.take_commands();
    let [Command::CreateRecord { payload, .. }] = commands.as_slice() else {
        panic!("expected a single create, got {commands:?}");
    };
    assert_eq!(payload.get("title"), Some(&json!("Rust 101")));
    assert_eq!(payload.get("description"), Some(&json!("line one\nline two")));
    assert_eq!(payload.get("published"), Some(&json!(true)));
    assert!(!payload.contains_key("id"));

    app.queue(commands);
    settle(&mut app, &mut fixture);

    assert!(app.dialog().is_none());
    assert_eq!(fixture.courses.len(), 3);
    assert_eq!(app.controller.workspace().unwrap().page.total, 3);
    let status = app.status.as_ref().unwrap();
    assert_eq!(status.level, NoticeLevel::Info);
    assert_eq!(status.text, "Course record created");
}

#[test]
fn missing_required_choice_keeps_dialog_open() {
    let (mut app, mut fixture) = ready(2);

    update(&mut app, content(ContentMessage::Add));
    type_text(&mut app, "Draft");
    update(&mut app, modal(ModalMessage::Confirm));

    assert!(app.take_commands().is_empty());
    let form = app.dialog().and_then(Dialog::form).unwrap();
    assert!(form.error.as_ref().unwrap().contains("published is required"));
    assert_eq!(
        form.form.control("title"),
        Some(&ControlValue::Text("Draft".to_string()))
    );

    settle(&mut app, &mut fixture);
    assert_eq!(fixture.courses.len(), 2);
}

#[test]
fn toggle_cycles_through_unset() {
    let (mut app, _) = ready(1);
    update(&mut app, content(ContentMessage::Add));
    app.form_cursor = 2; // published

    let published = |app: &crate::model::App| {
        app.dialog()
            .and_then(Dialog::form)
            .and_then(|f| f.form.control("published").cloned())
            .unwrap()
    };

    update(&mut app, modal(ModalMessage::TogglePrev));
    assert_eq!(published(&app), ControlValue::Choice(Some(false)));
    update(&mut app, modal(ModalMessage::ToggleNext));
    assert_eq!(published(&app), ControlValue::Choice(None));
    update(&mut app, modal(ModalMessage::ToggleNext));
    assert_eq!(published(&app), ControlValue::Choice(Some(true)));

    // 文本输入不影响三态字段
    update(&mut app, modal(ModalMessage::Input('x')));
    assert_eq!(published(&app), ControlValue::Choice(Some(true)));

    update(&mut app, modal(ModalMessage::ClearField));
    assert_eq!(published(&app), ControlValue::Choice(None));
}

#[test]
fn field_cursor_wraps() {
    let (mut app, _) = ready(1);
    update(&mut app, content(ContentMessage::Add));

    // title, description, published, price, starts_at
    update(&mut app, modal(ModalMessage::PrevField));
    assert_eq!(app.form_cursor, 4);
    update(&mut app, modal(ModalMessage::NextField));
    assert_eq!(app.form_cursor, 0);
}

// ===== 编辑 =====

#[test]
fn edit_prefills_and_updates() {
    let (mut app, mut fixture) = ready(3);
    update(&mut app, content(ContentMessage::SelectNext));

    update(&mut app, content(ContentMessage::Edit));
    assert!(matches!(app.dialog(), Some(Dialog::Edit { .. })));
    assert_eq!(
        app.focused_entry().unwrap().control,
        ControlValue::Text("Course 2".to_string())
    );

    update(&mut app, modal(ModalMessage::Backspace));
    type_text(&mut app, "X");
    update(&mut app, modal(ModalMessage::Confirm));
    settle(&mut app, &mut fixture);

    assert!(app.dialog().is_none());
    assert_eq!(fixture.courses[1].value_of("title"), &json!("Course X"));
    assert_eq!(app.status.as_ref().unwrap().text, "Course record updated");
}

#[test]
fn edit_sends_untouched_nulls_back_as_null() {
    let (mut app, _) = ready(2);

    update(&mut app, content(ContentMessage::Edit));
    type_text(&mut app, "!");
    update(&mut app, modal(ModalMessage::Confirm));

    let commands = app.take_commands();
    let [Command::UpdateRecord { payload, .. }] = commands.as_slice() else {
        panic!("expected a single update, got {commands:?}");
    };
    assert_eq!(payload.get("title"), Some(&json!("Course 1!")));
    assert_eq!(payload.get("description"), Some(&Value::Null));
    assert_eq!(payload.get("price"), Some(&json!(9.5)));
    assert_eq!(payload.get("starts_at"), Some(&Value::Null));
}

#[test]
fn actions_need_a_selected_row() {
    let (mut app, _) = ready(0);

    update(&mut app, content(ContentMessage::Edit));

    assert!(app.dialog().is_none());
    assert_eq!(app.status.as_ref().unwrap().text, "No record selected");
}

// ===== 删除 =====

#[test]
fn delete_requires_confirmation() {
    let (mut app, mut fixture) = ready(3);

    update(&mut app, content(ContentMessage::Delete));
    assert!(matches!(app.dialog(), Some(Dialog::ConfirmDelete { .. })));
    assert!(app.take_commands().is_empty());

    update(&mut app, modal(ModalMessage::Close));
    assert!(app.dialog().is_none());
    settle(&mut app, &mut fixture);
    assert_eq!(fixture.courses.len(), 3);

    update(&mut app, content(ContentMessage::Delete));
    update(&mut app, modal(ModalMessage::Confirm));
    // 重复确认不会再发删除请求
    update(&mut app, modal(ModalMessage::Confirm));
    let commands = app.take_commands();
    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], Command::DeleteRecord { .. }));

    app.queue(commands);
    settle(&mut app, &mut fixture);
    assert_eq!(fixture.courses.len(), 2);
    assert_eq!(app.controller.workspace().unwrap().page.total, 2);
    assert_eq!(app.status.as_ref().unwrap().text, "Course record deleted");
}

#[test]
fn deleting_last_row_on_last_page_moves_back() {
    let (mut app, mut fixture) = ready(11);
    update(&mut app, content(ContentMessage::NextPage));
    settle(&mut app, &mut fixture);
    assert_eq!(app.controller.workspace().unwrap().page.records.len(), 1);

    update(&mut app, content(ContentMessage::Delete));
    update(&mut app, modal(ModalMessage::Confirm));
    settle(&mut app, &mut fixture);

    let ws = app.controller.workspace().unwrap();
    assert_eq!(ws.page.total, 10);
    assert_eq!(ws.page.page, 1);
    assert_eq!(ws.page.records.len(), 10);
}

// ===== 查看 =====

#[test]
fn view_fetches_fresh_record() {
    let (mut app, mut fixture) = ready(3);
    update(&mut app, content(ContentMessage::SelectLast));

    update(&mut app, content(ContentMessage::View));
    assert!(matches!(
        app.dialog(),
        Some(Dialog::View { record: None, .. })
    ));

    settle(&mut app, &mut fixture);
    let Some(Dialog::View {
        record: Some(record),
        ..
    }) = app.dialog()
    else {
        panic!("view dialog should hold the record");
    };
    assert_eq!(record.value_of("title"), &json!("Course 3"));

    update(&mut app, modal(ModalMessage::Confirm));
    assert!(app.dialog().is_none());
}

// ===== 其他 =====

#[test]
fn focus_is_locked_while_dialog_is_open() {
    let (mut app, _) = ready(1);
    update(&mut app, content(ContentMessage::Add));

    update(&mut app, AppMessage::ToggleFocus);

    assert_eq!(app.focus, FocusPanel::Records);
}

#[test]
fn refresh_without_selection_reloads_catalog() {
    let (mut app, _) = ready(1);
    let mut fresh = crate::model::App::new(
        model_admin_core::ViewController::new(model_admin_core::ViewSettings::default()),
        "test",
    );

    update(&mut fresh, AppMessage::Refresh);

    assert!(matches!(
        fresh.take_commands().as_slice(),
        [Command::ListModels { .. }]
    ));
    assert!(matches!(app.controller.state(), ViewState::Ready(_)));
    update(&mut app, AppMessage::Quit);
    assert!(app.should_quit);
}
