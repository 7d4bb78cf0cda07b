mod api;
mod app;
mod components;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    version =
      env!("CARGO_PKG_VERSION"),
    "starting tarefas frontend"
  );

  let document = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .expect("missing browser document");
  let mount = document
    .get_element_by_id("tarefas-app")
    .expect(
      "missing #tarefas-app mount \
       element"
    );

  yew::Renderer::<app::App>::with_root(
    mount
  )
  .render();
}
