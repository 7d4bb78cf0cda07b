use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  pub id:          Option<u64>,
  #[serde(rename = "titulo", default)]
  pub title:       String,
  #[serde(
    rename = "responsavel",
    default
  )]
  pub assignee:    String,
  #[serde(
    rename = "dataTermino",
    default
  )]
  pub due_date:    String,
  #[serde(rename = "detalhamento")]
  pub description: Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskPayload {
  #[serde(rename = "titulo")]
  pub title:       String,
  #[serde(rename = "responsavel")]
  pub assignee:    String,
  #[serde(rename = "dataTermino")]
  pub due_date:    String,
  #[serde(rename = "detalhamento")]
  pub description: String
}

#[cfg(test)]
mod tests {
  use super::{
    Task,
    TaskPayload
  };

  #[test]
  fn reads_backend_field_names() {
    let raw = r#"{
      "id": 7,
      "titulo": "Enviar relatório",
      "responsavel": "Bruna",
      "dataTermino": "2026-09-01",
      "detalhamento": "Versão final"
    }"#;
    let task: Task =
      serde_json::from_str(raw)
        .expect("task json");

    assert_eq!(task.id, Some(7));
    assert_eq!(
      task.title,
      "Enviar relatório"
    );
    assert_eq!(task.assignee, "Bruna");
    assert_eq!(
      task.due_date,
      "2026-09-01"
    );
    assert_eq!(
      task.description.as_deref(),
      Some("Versão final")
    );
  }

  #[test]
  fn tolerates_missing_description() {
    let raw = r#"{
      "id": 1,
      "titulo": "Pagar contas",
      "responsavel": "Alex",
      "dataTermino": "2026-01-15"
    }"#;
    let task: Task =
      serde_json::from_str(raw)
        .expect("task json");

    assert_eq!(task.description, None);
  }

  #[test]
  fn null_description_reads_as_none() {
    let raw = r#"{
      "id": 2,
      "titulo": "Revisar texto",
      "responsavel": "Alex",
      "dataTermino": "2026-03-10",
      "detalhamento": null
    }"#;
    let task: Task =
      serde_json::from_str(raw)
        .expect("task json");

    assert_eq!(task.description, None);
  }

  #[test]
  fn payload_never_carries_an_id() {
    let payload = TaskPayload {
      title:       "Comprar leite"
        .to_string(),
      assignee:    "Alex".to_string(),
      due_date:    "2026-02-01"
        .to_string(),
      description: String::new()
    };
    let value =
      serde_json::to_value(&payload)
        .expect("payload json");
    let object = value
      .as_object()
      .expect("json object");

    assert!(
      object.contains_key("titulo")
    );
    assert!(object
      .contains_key("responsavel"));
    assert!(object
      .contains_key("dataTermino"));
    assert!(object
      .contains_key("detalhamento"));
    assert!(!object.contains_key("id"));
  }
}
