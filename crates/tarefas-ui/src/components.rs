use tarefas_shared::confirm::DeleteConfirm;
use tarefas_shared::view::{EMPTY_LIST_MESSAGE, LOADING_MESSAGE, ListView, OVERDUE_TAG, TaskCard};
use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct TaskBoardProps {
    pub view: ListView,
    pub on_edit: Callback<u64>,
    pub on_request_delete: Callback<(u64, String)>,
}

#[function_component(TaskBoard)]
pub fn task_board(props: &TaskBoardProps) -> Html {
    html! {
        <div class="task-list">
            {
                match &props.view {
                    ListView::Loading => html! { <p>{ LOADING_MESSAGE }</p> },
                    ListView::Error(message) => html! {
                        <p style="color:red;">{ message }</p>
                    },
                    ListView::Empty => html! { <p>{ EMPTY_LIST_MESSAGE }</p> },
                    ListView::Cards(cards) => html! {
                        <>
                            {
                                for cards.iter().map(|card| html! {
                                    <TaskCardView
                                        card={card.clone()}
                                        on_edit={props.on_edit.clone()}
                                        on_request_delete={props.on_request_delete.clone()}
                                    />
                                })
                            }
                        </>
                    },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TaskCardViewProps {
    pub card: TaskCard,
    pub on_edit: Callback<u64>,
    pub on_request_delete: Callback<(u64, String)>,
}

#[function_component(TaskCardView)]
pub fn task_card_view(props: &TaskCardViewProps) -> Html {
    let card = &props.card;
    let id = card.id;
    let label = card.title.clone();
    let on_edit = props.on_edit.clone();
    let on_request_delete = props.on_request_delete.clone();

    html! {
        <div class={classes!("task-card", card.overdue.then_some("atrasada"))}>
            <h3>
                { &card.title }
                {
                    if card.overdue {
                        html! {
                            <>
                                { " " }
                                <span class="tag-atrasada">{ OVERDUE_TAG }</span>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </h3>
            <p><strong>{ "Responsável:" }</strong>{ format!(" {}", card.assignee) }</p>
            <p><strong>{ "Data de término:" }</strong>{ format!(" {}", card.due_display) }</p>
            <p>{ &card.detail }</p>
            <div class="task-actions">
                <button class="alterar-btn" onclick={move |_| on_edit.emit(id)}>
                    { "Alterar" }
                </button>
                <button
                    class="delete-btn"
                    onclick={move |_| on_request_delete.emit((id, label.clone()))}
                >
                    { "Excluir" }
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmDeleteModalProps {
    pub confirm: DeleteConfirm,
    pub on_close: Callback<MouseEvent>,
    pub on_confirm: Callback<u64>,
}

#[function_component(ConfirmDeleteModal)]
pub fn confirm_delete_modal(props: &ConfirmDeleteModalProps) -> Html {
    let Some((id, label)) = props.confirm.pending() else {
        return html! {};
    };

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_| on_confirm.emit(id))
    };

    html! {
        <div class="modal-backdrop" onclick={props.on_close.clone()}>
            <div class="modal modal-sm" onclick={Callback::from(|e: yew::MouseEvent| e.stop_propagation())}>
                <div class="header">{ "Excluir Tarefa" }</div>
                <div class="content">
                    <div>{ format!("Deseja excluir a tarefa \"{label}\"?") }</div>
                </div>
                <div class="footer">
                    <button
                        class="btn"
                        type="button"
                        onclick={props.on_close.clone()}
                    >
                        { "Cancelar" }
                    </button>
                    <button
                        class="btn danger"
                        type="button"
                        onclick={on_confirm}
                    >
                        { "Excluir" }
                    </button>
                </div>
            </div>
        </div>
    }
}
