use tarefas_shared::api::{SaveRoute, save_error_message};
use tarefas_shared::confirm::{DeleteConfirm, DeleteOutcome};
use tarefas_shared::task::{Task, TaskPayload};
use tarefas_shared::view::{LOAD_ERROR_MESSAGE, ListView, MISSING_DETAIL_FALLBACK};

const LIST_FIXTURE: &str = r#"[
    {
        "id": 1,
        "titulo": "Buy milk",
        "responsavel": "Alex",
        "dataTermino": "2000-01-01",
        "detalhamento": ""
    },
    {
        "id": 2,
        "titulo": "Renovar contrato",
        "responsavel": "Bruna",
        "dataTermino": "2030-06-15",
        "detalhamento": "Enviar minuta para revisão"
    }
]"#;

#[test]
fn loaded_list_becomes_cards_with_derived_state() {
    let tasks: Vec<Task> = serde_json::from_str(LIST_FIXTURE).expect("parse list fixture");
    let view = ListView::from_tasks(&tasks, "2024-01-01");

    let ListView::Cards(cards) = view else {
        panic!("expected rendered cards");
    };
    assert_eq!(cards.len(), 2);

    assert_eq!(cards[0].title, "Buy milk");
    assert!(cards[0].overdue);
    assert_eq!(cards[0].due_display, "01/01/2000");
    assert_eq!(cards[0].detail, MISSING_DETAIL_FALLBACK);

    assert_eq!(cards[1].title, "Renovar contrato");
    assert!(!cards[1].overdue);
    assert_eq!(cards[1].due_display, "15/06/2030");
    assert_eq!(cards[1].detail, "Enviar minuta para revisão");
}

#[test]
fn load_failure_replaces_cards_with_error_copy() {
    let tasks: Vec<Task> = serde_json::from_str(LIST_FIXTURE).expect("parse list fixture");
    let view = ListView::from_load(Ok::<_, String>(tasks), "2024-01-01");
    assert!(matches!(view, ListView::Cards(_)));

    // A later refresh that fails must not leave the old cards behind.
    let view = ListView::from_load(
        Err::<Vec<Task>, String>("connection refused".to_string()),
        "2024-01-01",
    );
    assert_eq!(view, ListView::Error(LOAD_ERROR_MESSAGE.to_string()));
}

#[test]
fn confirmed_delete_reloads_exactly_once() {
    let mut confirm = DeleteConfirm::request(42, "Buy milk");
    let mut reloads = 0_u32;

    let target = confirm.take_confirmed().expect("pending target");
    let outcome = DeleteOutcome::from_status(204);
    if outcome.reloads() {
        reloads += 1;
    }

    assert_eq!(target, 42);
    assert_eq!(reloads, 1);
    assert_eq!(confirm, DeleteConfirm::Idle);

    // The cleared state must swallow a duplicate confirm.
    assert_eq!(confirm.take_confirmed(), None);

    let mut confirm = DeleteConfirm::request(42, "Buy milk");
    let target = confirm.take_confirmed().expect("pending target");
    let outcome = DeleteOutcome::from_status(404);
    if outcome.reloads() {
        reloads += 1;
    }

    assert_eq!(target, 42);
    assert_eq!(reloads, 1);
    assert_eq!(confirm, DeleteConfirm::Idle);
}

#[test]
fn cancelled_confirmation_leaves_no_target() {
    let mut confirm = DeleteConfirm::request(7, "Pagar contas");
    assert!(confirm.pending().is_some());

    confirm.cancel();

    assert_eq!(confirm, DeleteConfirm::Idle);
    assert_eq!(confirm.take_confirmed(), None);
}

#[test]
fn submit_routes_and_failure_text_compose() {
    let payload = TaskPayload {
        title: "Comprar leite".to_string(),
        assignee: "Alex".to_string(),
        due_date: "2026-02-01".to_string(),
        description: String::new(),
    };
    let body = serde_json::to_value(&payload).expect("payload json");
    assert!(body.get("id").is_none());

    assert_eq!(
        SaveRoute::for_task("/api/tarefas", None),
        SaveRoute::Create("/api/tarefas".to_string())
    );
    assert_eq!(
        SaveRoute::for_task("/api/tarefas", Some(42)),
        SaveRoute::Update("/api/tarefas/42".to_string())
    );

    let rejection = r#"{"errors": [{"field": "titulo", "defaultMessage": "não deve estar em branco"}]}"#;
    let message = save_error_message(400, rejection);
    assert!(message.starts_with("Erro ao salvar a tarefa. Status: 400"));
    assert!(message.contains("- titulo: não deve estar em branco"));
}
