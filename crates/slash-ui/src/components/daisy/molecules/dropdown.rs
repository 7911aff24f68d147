use gloo::events::EventListener;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DropdownProps {
    pub trigger: Html,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub content_class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Click-to-open dropdown. Clicks inside never reach the document, so only an
/// outside click (or the trigger) closes it.
#[function_component(Dropdown)]
pub fn dropdown(props: &DropdownProps) -> Html {
    let open = use_state(|| false);

    {
        let open = open.clone();
        use_effect_with_deps(
            move |is_open: &bool| {
                let handler = is_open.then(|| {
                    EventListener::new(&gloo::utils::document(), "click", move |_event| {
                        open.set(false);
                    })
                });
                move || drop(handler)
            },
            *open,
        );
    }

    let toggle = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };
    let contain = Callback::from(|event: MouseEvent| event.stop_propagation());

    let classes = classes!(
        "dropdown",
        "dropdown-end",
        open.then_some("dropdown-open"),
        props.class.clone()
    );

    html! {
        <div class={classes} onclick={contain}>
            <div role="button" tabindex="0" onclick={toggle}>{props.trigger.clone()}</div>
            if *open {
                <div
                    class={classes!(
                        "dropdown-content",
                        "z-10",
                        "p-3",
                        "shadow",
                        "bg-base-100",
                        "rounded-box",
                        props.content_class.clone()
                    )}
                >
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}
