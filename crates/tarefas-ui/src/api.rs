use gloo::net::http::{Request, Response};
use tarefas_shared::api::{SaveRoute, collection_url, item_url};
use tarefas_shared::task::{Task, TaskPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Transport(String),
    Rejected { status: u16, body: String },
}

fn transport(error: gloo::net::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

async fn rejected(response: Response) -> ApiError {
    ApiError::Rejected {
        status: response.status(),
        body: response.text().await.unwrap_or_default(),
    }
}

pub async fn list_tasks(base: &str) -> Result<Vec<Task>, ApiError> {
    let response = Request::get(&collection_url(base))
        .send()
        .await
        .map_err(transport)?;

    if !response.ok() {
        return Err(rejected(response).await);
    }

    response.json::<Vec<Task>>().await.map_err(transport)
}

pub async fn fetch_task(base: &str, id: u64) -> Result<Task, ApiError> {
    let response = Request::get(&item_url(base, id))
        .send()
        .await
        .map_err(transport)?;

    if !response.ok() {
        return Err(rejected(response).await);
    }

    response.json::<Task>().await.map_err(transport)
}

pub async fn save_task(route: &SaveRoute, payload: &TaskPayload) -> Result<(), ApiError> {
    let builder = match route {
        SaveRoute::Create(url) => Request::post(url),
        SaveRoute::Update(url) => Request::put(url),
    };

    let response = builder
        .json(payload)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    if response.ok() {
        Ok(())
    } else {
        Err(rejected(response).await)
    }
}

pub async fn delete_task(base: &str, id: u64) -> Result<u16, ApiError> {
    let response = Request::delete(&item_url(base, id))
        .send()
        .await
        .map_err(transport)?;

    Ok(response.status())
}
