use serde::Deserialize;

pub const SAVE_SUCCESS_MESSAGE: &str = "Tarefa salva com sucesso!";
pub const SAVE_CONNECTION_ERROR_MESSAGE: &str = "Erro de conexão ao tentar salvar a tarefa.";
pub const TASK_LOAD_ERROR_MESSAGE: &str = "Não foi possível carregar os dados da tarefa.";

#[must_use]
pub fn collection_url(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}

#[must_use]
pub fn item_url(base: &str, id: u64) -> String {
    format!("{}/{id}", collection_url(base))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRoute {
    Create(String),
    Update(String),
}

impl SaveRoute {
    #[must_use]
    pub fn for_task(base: &str, id: Option<u64>) -> Self {
        match id {
            Some(id) => Self::Update(item_url(base, id)),
            None => Self::Create(collection_url(base)),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Create(url) | Self::Update(url) => url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<FieldError>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FieldError {
    #[serde(default)]
    field: String,
    #[serde(rename = "defaultMessage", default)]
    default_message: String,
}

#[must_use]
pub fn save_error_message(status: u16, body: &str) -> String {
    let mut message = format!("Erro ao salvar a tarefa. Status: {status}");

    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return message;
    };

    if !parsed.errors.is_empty() {
        message.push_str("\nCampos inválidos:");
        for error in &parsed.errors {
            message.push_str(&format!("\n- {}: {}", error.field, error.default_message));
        }
    } else if let Some(detail) = parsed.message {
        message.push('\n');
        message.push_str(&detail);
    }

    message
}
