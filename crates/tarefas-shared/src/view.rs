use crate::datetime::{
  format_date_br,
  is_overdue
};
use crate::task::Task;

pub const LOADING_MESSAGE: &str =
  "Carregando tarefas...";
pub const LOAD_ERROR_MESSAGE: &str =
  "Erro ao carregar tarefas. \
   Verifique se o servidor está \
   rodando!";
pub const EMPTY_LIST_MESSAGE: &str =
  "Nenhuma tarefa cadastrada. Inclua \
   uma nova tarefa!";
pub const MISSING_DETAIL_FALLBACK:
  &str = "Sem detalhamento.";
pub const OVERDUE_TAG: &str =
  "ATRASADA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
  pub id:          u64,
  pub title:       String,
  pub overdue:     bool,
  pub assignee:    String,
  pub due_display: String,
  pub detail:      String
}

impl TaskCard {
  #[must_use]
  pub fn from_task(
    task: &Task,
    today: &str
  ) -> Option<Self> {
    let id = task.id?;
    let detail = match &task.description
    {
      | Some(text)
        if !text.is_empty() =>
      {
        text.clone()
      }
      | _ => MISSING_DETAIL_FALLBACK
        .to_string()
    };

    Some(Self {
      id,
      title: task.title.clone(),
      overdue: is_overdue(
        &task.due_date,
        today
      ),
      assignee: task.assignee.clone(),
      due_display: format_date_br(
        &task.due_date
      ),
      detail
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
  Loading,
  Error(String),
  Empty,
  Cards(Vec<TaskCard>)
}

impl ListView {
  #[must_use]
  pub fn from_tasks(
    tasks: &[Task],
    today: &str
  ) -> Self {
    let cards: Vec<TaskCard> = tasks
      .iter()
      .filter_map(|task| {
        TaskCard::from_task(task, today)
      })
      .collect();

    if cards.is_empty() {
      Self::Empty
    } else {
      Self::Cards(cards)
    }
  }

  #[must_use]
  pub fn from_load<E>(
    result: Result<Vec<Task>, E>,
    today: &str
  ) -> Self {
    match result {
      | Ok(tasks) => {
        Self::from_tasks(&tasks, today)
      }
      | Err(_) => Self::Error(
        LOAD_ERROR_MESSAGE.to_string()
      )
    }
  }
}
