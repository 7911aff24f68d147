use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub actions: Html,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

/// Always-open modal; callers mount and unmount it.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class={classes!("modal", "modal-open", props.class.clone())} role="dialog" aria-modal="true">
            <div class="modal-box">
                <h3 class="text-lg font-bold mb-4">{props.title.clone()}</h3>
                { for props.children.iter() }
                <div class="modal-action">{props.actions.clone()}</div>
            </div>
            <button class="modal-backdrop" aria-label="Close" onclick={on_close}></button>
        </div>
    }
}
