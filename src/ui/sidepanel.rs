/// Side panel UI for the link list

use crate::bridge::{offCaptureMessage, onCaptureMessage};
use crate::config::StoreConfig;
use crate::error::{PersistenceError, StoreError};
use crate::link_data::{CaptureAck, CapturePayload, ItemId, RenderSnapshot};
use crate::storage::ChromeSyncStorage;
use crate::store::LinkListStore;
use crate::ui::components::{CapacitySelector, LinkRow};
use patternfly_yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

type PanelStore = LinkListStore<ChromeSyncStorage>;

/// The store plus captures that arrived before it finished loading
#[derive(Default)]
struct PanelCore {
    store: Option<PanelStore>,
    pending: Vec<CapturePayload>,
}

#[derive(Clone, PartialEq)]
enum Notice {
    Warning(String),
    Error(String),
}

#[function_component(SidePanel)]
pub fn side_panel() -> Html {
    let core = use_mut_ref(PanelCore::default);
    let snapshot = use_state(|| None::<RenderSnapshot>);
    let notice = use_state(|| None::<Notice>);
    let input_value = use_state(String::new);

    // Listen for captures and load storage on mount
    {
        let core = core.clone();
        let snapshot = snapshot.clone();
        let notice = notice.clone();

        use_effect_with((), move |_| {
            let handler = {
                let core = core.clone();
                let snapshot = snapshot.clone();
                let notice = notice.clone();

                Closure::wrap(Box::new(move |message: JsValue| -> JsValue {
                    match serde_wasm_bindgen::from_value::<CapturePayload>(message) {
                        Ok(payload) if !payload.is_capture() => {
                            log::debug!("ignoring non-capture message");
                            return JsValue::UNDEFINED;
                        }
                        Ok(payload) => {
                            log::debug!("capture received: {:?}", payload);
                            let mut guard = core.borrow_mut();
                            let core = &mut *guard;
                            match core.store.as_mut() {
                                Some(store) => {
                                    apply(store, &snapshot, &notice, |store| {
                                        store.add_from_capture(&payload).map(|o| o.warning)
                                    });
                                }
                                None => core.pending.push(payload),
                            }
                        }
                        Err(e) => log::warn!("ignoring malformed capture: {:?}", e),
                    }

                    serde_wasm_bindgen::to_value(&CaptureAck::received()).unwrap_or(JsValue::NULL)
                }) as Box<dyn FnMut(JsValue) -> JsValue>)
            };
            onCaptureMessage(&handler);

            spawn_local(async move {
                let config = StoreConfig::default();
                let backend = ChromeSyncStorage::open(&[
                    config.list_key.as_str(),
                    config.capacity_key.as_str(),
                ])
                .await;

                let mut store = LinkListStore::load(backend, config);
                let mut core = core.borrow_mut();
                let pending = std::mem::take(&mut core.pending);
                for payload in pending {
                    apply(&mut store, &snapshot, &notice, |store| {
                        store.add_from_capture(&payload).map(|o| o.warning)
                    });
                }
                snapshot.set(Some(store.snapshot()));
                core.store = Some(store);
            });

            move || {
                offCaptureMessage(&handler);
                drop(handler);
            }
        });
    }

    let on_input = {
        let input_value = input_value.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                input_value.set(input.value());
            }
        })
    };

    let on_add = {
        let core = core.clone();
        let snapshot = snapshot.clone();
        let notice = notice.clone();
        let input_value = input_value.clone();

        Callback::from(move |_: ()| {
            let mut core = core.borrow_mut();
            let Some(store) = core.store.as_mut() else {
                return;
            };
            let text = (*input_value).clone();
            let added = apply(store, &snapshot, &notice, |store| {
                store.add_from_text(&text).map(|o| o.warning)
            });
            if added {
                input_value.set(String::new());
            }
        })
    };

    let on_add_click = {
        let on_add = on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    let on_key_press = {
        let on_add = on_add.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_add.emit(());
            }
        })
    };

    let on_toggle = {
        let core = core.clone();
        let snapshot = snapshot.clone();
        let notice = notice.clone();

        Callback::from(move |(id, checked): (ItemId, bool)| {
            if let Some(store) = core.borrow_mut().store.as_mut() {
                apply(store, &snapshot, &notice, |store| {
                    Ok(store.toggle_checked(id, checked).warning)
                });
            }
        })
    };

    let on_delete = {
        let core = core.clone();
        let snapshot = snapshot.clone();
        let notice = notice.clone();

        Callback::from(move |id: ItemId| {
            if let Some(store) = core.borrow_mut().store.as_mut() {
                apply(store, &snapshot, &notice, |store| Ok(store.remove(id).warning));
            }
        })
    };

    let on_capacity = {
        let core = core.clone();
        let snapshot = snapshot.clone();
        let notice = notice.clone();

        Callback::from(move |max: u32| {
            if let Some(store) = core.borrow_mut().store.as_mut() {
                apply(store, &snapshot, &notice, |store| {
                    store.set_capacity(max).map(|o| o.warning)
                });
            }
        })
    };

    let is_loading = snapshot.is_none();
    let (items, max_items) = match &*snapshot {
        Some(snapshot) => (snapshot.items.clone(), snapshot.max_items),
        None => (Vec::new(), 0),
    };

    html! {
        <div class="sidepanel">
            <h1 class="panel-title">{"123Links"}</h1>

            {match &*notice {
                Some(Notice::Warning(msg)) => html! {
                    <Alert r#type={AlertType::Warning} title={msg.clone()} inline={true}>
                    </Alert>
                },
                Some(Notice::Error(msg)) => html! {
                    <Alert r#type={AlertType::Danger} title={msg.clone()} inline={true}>
                    </Alert>
                },
                None => html! {},
            }}

            <div class="add-row">
                <input
                    id="todoInput"
                    type="text"
                    placeholder="Add a task or link"
                    value={(*input_value).clone()}
                    oninput={on_input}
                    onkeypress={on_key_press}
                    disabled={is_loading}
                />
                <Button onclick={on_add_click} disabled={is_loading} variant={ButtonVariant::Primary}>
                    {"Add"}
                </Button>
            </div>

            <ul id="todoList">
                {for items.into_iter().map(|item| {
                    let key = item.id.to_string();
                    html! {
                        <LinkRow
                            {key}
                            item={item}
                            on_toggle={on_toggle.clone()}
                            on_delete={on_delete.clone()}
                        />
                    }
                })}
            </ul>

            <CapacitySelector selected={max_items} on_select={on_capacity} disabled={is_loading} />
        </div>
    }
}

/// Run one store operation and publish its result to the panel
///
/// Returns true if the operation was applied.
fn apply<F>(
    store: &mut PanelStore,
    snapshot: &UseStateHandle<Option<RenderSnapshot>>,
    notice: &UseStateHandle<Option<Notice>>,
    op: F,
) -> bool
where
    F: FnOnce(&mut PanelStore) -> Result<Option<PersistenceError>, StoreError>,
{
    match op(store) {
        Ok(warning) => {
            notice.set(warning.map(|e| Notice::Warning(format!("Not saved: {}", e))));
            snapshot.set(Some(store.snapshot()));
            true
        }
        Err(e) => {
            notice.set(Some(Notice::Error(e.to_string())));
            false
        }
    }
}
