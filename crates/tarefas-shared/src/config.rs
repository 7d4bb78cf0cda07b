use serde::Deserialize;

pub const DEFAULT_API_BASE: &str =
  "/api/tarefas";

#[derive(Deserialize)]
struct UiConfig {
  api_base: Option<String>,
  api:      Option<ApiSection>
}

#[derive(Deserialize)]
struct ApiSection {
  base: Option<String>
}

#[must_use]
pub fn load_api_base(
  raw: &str
) -> String {
  match configured_api_base(raw) {
    | Some(base) => base,
    | None => {
      tracing::warn!(
        "no usable api base in \
         config; using default"
      );
      DEFAULT_API_BASE.to_string()
    }
  }
}

fn configured_api_base(
  raw: &str
) -> Option<String> {
  let parsed = match toml::from_str::<
    UiConfig
  >(raw)
  {
    | Ok(parsed) => parsed,
    | Err(error) => {
      tracing::error!(
        %error,
        "failed parsing app config"
      );
      return None;
    }
  };

  let base =
    parsed.api_base.or_else(|| {
      parsed.api.and_then(|section| {
        section.base
      })
    })?;

  let trimmed = base.trim();
  if trimmed.is_empty() {
    tracing::warn!(
      "app config api base was blank"
    );
    return None;
  }

  tracing::info!(
    api_base = %trimmed,
    "configured api base"
  );
  Some(trimmed.to_string())
}
