/// Reusable UI components

use crate::classifier::validate_safely;
use crate::config::Capacity;
use crate::link_data::{ItemId, LinkItem};
use crate::sanitize::is_escaped;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LinkRowProps {
    pub item: LinkItem,
    pub on_toggle: Callback<(ItemId, bool)>,
    pub on_delete: Callback<ItemId>,
}

/// One list entry: checkbox, text (linked when the link is navigable), delete
#[function_component(LinkRow)]
pub fn link_row(props: &LinkRowProps) -> Html {
    let item = &props.item;
    let id = item.id;

    let on_change = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_toggle.emit((id, input.checked()));
            }
        })
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    // tasks from this crate are escaped on creation; anything else in
    // storage is shown as literal text
    let text = if is_escaped(&item.task) {
        Html::from_html_unchecked(AttrValue::from(item.task.clone()))
    } else {
        html! { {item.task.clone()} }
    };

    // javascript: and friends are shown as plain text
    let href = validate_safely(&item.link).ok().map(|safe| safe.url);

    html! {
        <li class={classes!("todoItem", item.is_checked.then_some("completed"))}>
            <label class="todoTitle">
                <input class="todoCheck" type="checkbox" checked={item.is_checked} onchange={on_change} />
                if let Some(href) = href {
                    <p><a href={href} target="_blank" rel="noopener noreferrer">{text}</a></p>
                } else {
                    <p>{text}</p>
                }
            </label>
            <button class="deleteButton" onclick={on_delete}>{"X"}</button>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct CapacitySelectorProps {
    pub selected: usize,
    pub on_select: Callback<u32>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(CapacitySelector)]
pub fn capacity_selector(props: &CapacitySelectorProps) -> Html {
    html! {
        <div id="maxSettings" class="max-settings">
            {for Capacity::all().map(|capacity| {
                let value = u32::from(capacity);
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(value));
                let selected = capacity.get() == props.selected;

                html! {
                    <button
                        class={classes!("max-option", selected.then_some("selected"))}
                        data-max={value.to_string()}
                        disabled={props.disabled}
                        {onclick}
                    >
                        {value}
                    </button>
                }
            })}
        </div>
    }
}
