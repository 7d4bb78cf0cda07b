use chrono::Utc;
use gloo::console::log;
use tarefas_shared::api::{
  SAVE_CONNECTION_ERROR_MESSAGE,
  SAVE_SUCCESS_MESSAGE,
  SaveRoute,
  TASK_LOAD_ERROR_MESSAGE,
  save_error_message
};
use tarefas_shared::config::load_api_base;
use tarefas_shared::confirm::{
  CONNECTION_ERROR_MESSAGE,
  DeleteConfirm,
  DeleteOutcome
};
use tarefas_shared::task::TaskPayload;
use tarefas_shared::view::ListView;
use yew::{
  Callback,
  Html,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::api::{
  ApiError,
  delete_task,
  fetch_task,
  list_tasks,
  save_task
};
use crate::components::{
  ConfirmDeleteModal,
  TaskBoard
};

#[derive(Clone, PartialEq)]
struct ModalState {
  mode:           ModalMode,
  draft_title:    String,
  draft_assignee: String,
  draft_due:      String,
  draft_detail:   String
}

#[derive(Clone, PartialEq)]
enum ModalMode {
  Add,
  Edit(u64)
}

const APP_CONFIG_TOML: &str =
  include_str!("../assets/app.toml");

#[function_component(App)]
pub fn app() -> Html {
  let api_base = use_state(|| {
    load_api_base(APP_CONFIG_TOML)
  });
  let list =
    use_state(|| ListView::Loading);
  let refresh_tick =
    use_state(|| 0_u64);
  let modal_state =
    use_state(|| None::<ModalState>);
  let delete_confirm =
    use_state(DeleteConfirm::default);

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and hooks \
         initialized"
      );
      || ()
    });
  }

  {
    let api_base = api_base.clone();
    let list = list.clone();
    let refresh_tick =
      refresh_tick.clone();
    use_effect_with(
      *refresh_tick,
      move |tick| {
        let tick = *tick;
        let base = (*api_base).clone();
        let list = list.clone();

        list.set(ListView::Loading);
        wasm_bindgen_futures::spawn_local(async move {
            tracing::info!(tick, "refreshing task list");
            let today = today_iso();

            let result = list_tasks(&base).await;
            match &result {
                Ok(tasks) => tracing::debug!(total = tasks.len(), "task list loaded"),
                Err(error) => tracing::error!(error = ?error, "task list load failed"),
            }
            list.set(ListView::from_load(result, &today));
        });

        || ()
      }
    );
  }

  let on_add_click = {
    let modal_state =
      modal_state.clone();
    Callback::from(move |_| {
      modal_state.set(Some(
        ModalState {
          mode:           ModalMode::Add,
          draft_title:    String::new(),
          draft_assignee: String::new(),
          draft_due:      String::new(),
          draft_detail:   String::new()
        }
      ));
      ui_debug(
        "action.add_modal.open",
        "clicked Incluir Nova Tarefa"
      );
    })
  };

  let on_edit = {
    let api_base = api_base.clone();
    let modal_state =
      modal_state.clone();
    Callback::from(move |id: u64| {
      let base = (*api_base).clone();
      let modal_state =
        modal_state.clone();
      ui_debug(
        "action.edit_modal.open",
        &format!(
          "loading task {id} for edit"
        )
      );
      wasm_bindgen_futures::spawn_local(async move {
          match fetch_task(&base, id).await {
              Ok(task) => {
                  modal_state.set(Some(ModalState {
                      mode: ModalMode::Edit(id),
                      draft_title: task.title,
                      draft_assignee: task.assignee,
                      draft_due: task.due_date,
                      draft_detail: task.description.unwrap_or_default(),
                  }));
              }
              Err(error) => {
                  tracing::error!(error = ?error, task_id = id, "failed loading task for edit");
                  notify(TASK_LOAD_ERROR_MESSAGE);
              }
          }
      });
    })
  };

  let on_modal_close = {
    let modal_state =
      modal_state.clone();
    Callback::from(move |_| {
      modal_state.set(None);
      ui_debug(
        "action.modal.cancel",
        "closing edit modal"
      );
    })
  };

  let on_modal_submit = {
    let api_base = api_base.clone();
    let modal_state =
      modal_state.clone();
    let refresh_tick =
      refresh_tick.clone();
    Callback::from(
      move |event: web_sys::SubmitEvent| {
        event.prevent_default();
        let Some(state) =
          (*modal_state).clone()
        else {
          return;
        };

        ui_debug(
          "action.modal.submit",
          &format!(
            "mode={}, title_len={}",
            match state.mode {
              | ModalMode::Add => "add",
              | ModalMode::Edit(_) => {
                "edit"
              }
            },
            state.draft_title.len()
          )
        );

        let task_id = match state.mode
        {
          | ModalMode::Add => None,
          | ModalMode::Edit(id) => {
            Some(id)
          }
        };
        let base = (*api_base).clone();
        let route = SaveRoute::for_task(
          &base, task_id
        );
        let payload = TaskPayload {
          title: state
            .draft_title
            .clone(),
          assignee: state
            .draft_assignee
            .clone(),
          due_date: state
            .draft_due
            .clone(),
          description: state
            .draft_detail
            .clone()
        };

        let modal_state =
          modal_state.clone();
        let refresh_tick =
          refresh_tick.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match save_task(&route, &payload).await {
                Ok(()) => {
                    tracing::info!(url = route.url(), "task saved");
                    notify(SAVE_SUCCESS_MESSAGE);
                    modal_state.set(None);
                    refresh_tick.set((*refresh_tick).saturating_add(1));
                }
                Err(ApiError::Rejected { status, body }) => {
                    tracing::warn!(status, "save rejected by backend");
                    notify(&save_error_message(status, &body));
                }
                Err(ApiError::Transport(error)) => {
                    tracing::error!(%error, "save request failed");
                    notify(SAVE_CONNECTION_ERROR_MESSAGE);
                }
            }
        });
      }
    )
  };

  let on_request_delete = {
    let delete_confirm =
      delete_confirm.clone();
    Callback::from(
      move |(id, label): (
        u64,
        String
      )| {
        delete_confirm.set(
          DeleteConfirm::request(
            id, &label
          )
        );
        ui_debug(
          "action.delete_modal.open",
          &format!(
            "task {id} pending \
             confirmation"
          )
        );
      }
    )
  };

  let on_cancel_delete = {
    let delete_confirm =
      delete_confirm.clone();
    Callback::from(move |_| {
      let mut current =
        (*delete_confirm).clone();
      current.cancel();
      delete_confirm.set(current);
      ui_debug(
        "action.delete_modal.cancel",
        "confirmation dismissed"
      );
    })
  };

  let on_confirm_delete = {
    let api_base = api_base.clone();
    let delete_confirm =
      delete_confirm.clone();
    let refresh_tick =
      refresh_tick.clone();
    Callback::from(move |id: u64| {
      let mut current =
        (*delete_confirm).clone();
      let Some(target) =
        current.take_confirmed()
      else {
        tracing::warn!(
          id,
          "confirm with no pending \
           deletion; ignoring"
        );
        return;
      };
      delete_confirm.set(current);
      ui_debug(
        "action.delete_modal.confirm",
        &format!(
          "deleting task {target}"
        )
      );

      let base = (*api_base).clone();
      let refresh_tick =
        refresh_tick.clone();
      wasm_bindgen_futures::spawn_local(async move {
          match delete_task(&base, target).await {
              Ok(status) => {
                  let outcome = DeleteOutcome::from_status(status);
                  tracing::info!(status, task_id = target, "delete request finished");
                  notify(&outcome.message(target));
                  if outcome.reloads() {
                      refresh_tick.set((*refresh_tick).saturating_add(1));
                  }
              }
              Err(error) => {
                  tracing::error!(error = ?error, task_id = target, "delete request failed");
                  notify(CONNECTION_ERROR_MESSAGE);
              }
          }
      });
    })
  };

  html! {
      <div class="app">
          <div class="topbar">
              <div class="brand">{ "Gerenciador de Tarefas" }</div>
              <button class="btn" onclick={on_add_click.clone()}>
                  { "Incluir Nova Tarefa" }
              </button>
          </div>

          <TaskBoard
              view={(*list).clone()}
              on_edit={on_edit.clone()}
              on_request_delete={on_request_delete.clone()}
          />

          {
              if let Some(state) = (*modal_state).clone() {
                  html! {
                      <div class="modal-backdrop" onclick={on_modal_close.clone()}>
                          <div class="modal" onclick={Callback::from(|e: yew::MouseEvent| e.stop_propagation())}>
                              <div class="header">
                                  {
                                      match &state.mode {
                                          ModalMode::Add => "Incluir Nova Tarefa".to_string(),
                                          ModalMode::Edit(id) => format!("Alterar Tarefa - ID {id}"),
                                      }
                                  }
                              </div>
                              <form class="content" onsubmit={on_modal_submit.clone()}>
                                  <div class="field">
                                      <label>{ "Título" }</label>
                                      <input
                                          value={state.draft_title.clone()}
                                          required={true}
                                          oninput={{
                                              let modal_state = modal_state.clone();
                                              Callback::from(move |e: web_sys::InputEvent| {
                                                  let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                  if let Some(mut current) = (*modal_state).clone() {
                                                      current.draft_title = input.value();
                                                      modal_state.set(Some(current));
                                                  }
                                              })
                                          }}
                                      />
                                  </div>
                                  <div class="field">
                                      <label>{ "Responsável" }</label>
                                      <input
                                          value={state.draft_assignee.clone()}
                                          required={true}
                                          oninput={{
                                              let modal_state = modal_state.clone();
                                              Callback::from(move |e: web_sys::InputEvent| {
                                                  let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                  if let Some(mut current) = (*modal_state).clone() {
                                                      current.draft_assignee = input.value();
                                                      modal_state.set(Some(current));
                                                  }
                                              })
                                          }}
                                      />
                                  </div>
                                  <div class="field">
                                      <label>{ "Data de término" }</label>
                                      <input
                                          type="date"
                                          value={state.draft_due.clone()}
                                          required={true}
                                          oninput={{
                                              let modal_state = modal_state.clone();
                                              Callback::from(move |e: web_sys::InputEvent| {
                                                  let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                  if let Some(mut current) = (*modal_state).clone() {
                                                      current.draft_due = input.value();
                                                      modal_state.set(Some(current));
                                                  }
                                              })
                                          }}
                                      />
                                  </div>
                                  <div class="field">
                                      <label>{ "Detalhamento" }</label>
                                      <textarea
                                          value={state.draft_detail.clone()}
                                          oninput={{
                                              let modal_state = modal_state.clone();
                                              Callback::from(move |e: web_sys::InputEvent| {
                                                  let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                                                  if let Some(mut current) = (*modal_state).clone() {
                                                      current.draft_detail = input.value();
                                                      modal_state.set(Some(current));
                                                  }
                                              })
                                          }}
                                      />
                                  </div>
                                  <div class="footer">
                                      <button
                                          id="modal-cancel-btn"
                                          type="button"
                                          class="btn"
                                          onclick={on_modal_close.clone()}
                                      >
                                          { "Cancelar" }
                                      </button>
                                      <button
                                          id="modal-save-btn"
                                          type="submit"
                                          class="btn"
                                      >
                                          { "Salvar" }
                                      </button>
                                  </div>
                              </form>
                          </div>
                      </div>
                  }
              } else {
                  html! {}
              }
          }

          <ConfirmDeleteModal
              confirm={(*delete_confirm).clone()}
              on_close={on_cancel_delete.clone()}
              on_confirm={on_confirm_delete.clone()}
          />
      </div>
  }
}

fn today_iso() -> String {
  Utc::now()
    .format("%Y-%m-%d")
    .to_string()
}

fn notify(message: &str) {
  if let Some(window) =
    web_sys::window()
  {
    let _ = window
      .alert_with_message(message);
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
