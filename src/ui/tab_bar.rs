/// Tab strip for switching between and closing open tabs

use yew::prelude::*;
use crate::ui::app::TabsContext;

#[function_component(TabBar)]
pub fn tab_bar() -> Html {
    let Some(context) = use_context::<TabsContext>() else {
        return html! {};
    };

    html! {
        <div class="pf-v5-c-tabs tabs-nav">
            <ul class="pf-v5-c-tabs__list">
                {for context.tabs.iter().map(|tab| {
                    let is_active = tab.key == context.active_tab;
                    let on_select = context.on_set_active_tab.reform({
                        let key = tab.key.clone();
                        move |_: MouseEvent| key.clone()
                    });
                    let on_close = context.on_remove_tab.reform({
                        let key = tab.key.clone();
                        move |_: MouseEvent| key.clone()
                    });

                    html! {
                        <li
                            key={tab.key.clone()}
                            class={if is_active { "pf-v5-c-tabs__item pf-m-current" } else { "pf-v5-c-tabs__item" }}
                        >
                            <button class="pf-v5-c-tabs__link" onclick={on_select}>
                                <span class="pf-v5-c-tabs__item-text">{&tab.name}</span>
                            </button>
                            // The Home tab stays open
                            if !tab.is_initial() {
                                <button class="tab-close" aria-label="Close tab" onclick={on_close}>
                                    {"✗"}
                                </button>
                            }
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
