pub const CONNECTION_ERROR_MESSAGE:
  &str =
  "Erro de conexão com o servidor.";

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Default,
)]
pub enum DeleteConfirm {
  #[default]
  Idle,
  Pending {
    id:    u64,
    label: String
  }
}

impl DeleteConfirm {
  #[must_use]
  pub fn request(
    id: u64,
    label: &str
  ) -> Self {
    Self::Pending {
      id,
      label: label.to_string()
    }
  }

  #[must_use]
  pub fn pending(
    &self
  ) -> Option<(u64, &str)> {
    match self {
      | Self::Pending { id, label } => {
        Some((*id, label.as_str()))
      }
      | Self::Idle => None
    }
  }

  pub fn take_confirmed(
    &mut self
  ) -> Option<u64> {
    match std::mem::take(self) {
      | Self::Pending { id, .. } => {
        Some(id)
      }
      | Self::Idle => None
    }
  }

  pub fn cancel(&mut self) {
    *self = Self::Idle;
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum DeleteOutcome {
  Deleted,
  Missing,
  Rejected(u16)
}

impl DeleteOutcome {
  #[must_use]
  pub fn from_status(
    status: u16
  ) -> Self {
    match status {
      | 204 => Self::Deleted,
      | 404 => Self::Missing,
      | other => Self::Rejected(other)
    }
  }

  #[must_use]
  pub fn reloads(self) -> bool {
    self == Self::Deleted
  }

  #[must_use]
  pub fn message(
    self,
    id: u64
  ) -> String {
    match self {
      | Self::Deleted => format!(
        "Tarefa ID {id} excluída com \
         sucesso!"
      ),
      | Self::Missing => {
        "Erro: Tarefa não encontrada."
          .to_string()
      }
      | Self::Rejected(status) => {
        format!(
          "Erro ao excluir a tarefa \
           (status {status}). Tente \
           novamente."
        )
      }
    }
  }
}
