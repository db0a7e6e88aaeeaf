/// Container for a single tab's content. Inactive panes stay mounted but hidden.

use yew::prelude::*;
use crate::device::DeviceContext;
use crate::tab_data::Tab;

#[derive(Properties, PartialEq)]
pub struct TabPaneProps {
    pub is_active: bool,
    pub tab: Tab,
    pub device: DeviceContext,
}

#[function_component(TabPane)]
pub fn tab_pane(props: &TabPaneProps) -> Html {
    let tab = &props.tab;
    let style = if props.is_active { "" } else { "display: none;" };

    html! {
        <div class="tab-pane" data-tab-key={tab.key.clone()} style={style}>
            <div class="tab-pane-header">
                <h2 class="tab-pane-title">{&tab.name}</h2>
                <span class="tab-pane-source">{tab.source.label()}</span>
            </div>
            if tab.is_initial() {
                <p class="tab-pane-subtitle">{&props.device.home_directory}</p>
            } else {
                <p class="tab-pane-subtitle">{&tab.repo_name}</p>
            }
        </div>
    }
}
