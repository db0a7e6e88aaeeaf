/// Root component: owns the tab session and shares it through context

use std::rc::Rc;
use yew::prelude::*;
use log::error;
use crate::api::init_api;
use crate::device::DeviceContext;
use crate::storage::{KeyValueStore, LocalStorage};
use crate::tab_data::{RepoSource, Tab};
use crate::tabs::TabController;
use crate::ui::tab_bar::TabBar;
use crate::ui::tab_pane::TabPane;

/// Arguments for opening a repository tab
#[derive(Debug, Clone, PartialEq)]
pub struct AddTabRequest {
    pub repo_ref: String,
    pub repo_name: String,
    pub name: String,
    pub source: RepoSource,
}

/// Transitions dispatched against the tab session
#[derive(Debug, Clone, PartialEq)]
pub enum TabAction {
    Add(AddTabRequest),
    Remove(String),
    SetActive(String),
}

impl<S: KeyValueStore + Clone + 'static> Reducible for TabController<S> {
    type Action = TabAction;

    /// Applies `action` to the latest session, not the one from the last render
    fn reduce(self: Rc<Self>, action: TabAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TabAction::Add(request) => {
                next.add_tab(&request.repo_ref, &request.repo_name, &request.name, request.source);
            }
            TabAction::Remove(key) => {
                next.remove_tab(&key);
            }
            TabAction::SetActive(key) => next.set_active_tab(&key),
        }
        next.into()
    }
}

/// Session state and tab actions available to every descendant
#[derive(Clone, PartialEq)]
pub struct TabsContext {
    pub tabs: Vec<Tab>,
    pub active_tab: String,
    pub on_add_tab: Callback<AddTabRequest>,
    pub on_remove_tab: Callback<String>,
    pub on_set_active_tab: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub device: DeviceContext,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    // Configure the API once, before anything renders
    {
        let api_url = props.device.api_url.clone();
        use_memo((), move |_| {
            if let Err(e) = init_api(&api_url) {
                error!("Failed to initialise API: {}", e);
            }
        });
    }

    let controller = use_reducer(|| TabController::load(LocalStorage));
    let dispatcher = controller.dispatcher();

    let on_add_tab = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |request: AddTabRequest| dispatcher.dispatch(TabAction::Add(request)))
    };

    let on_remove_tab = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |key: String| dispatcher.dispatch(TabAction::Remove(key)))
    };

    let on_set_active_tab =
        Callback::from(move |key: String| dispatcher.dispatch(TabAction::SetActive(key)));

    let context = TabsContext {
        tabs: controller.tabs().to_vec(),
        active_tab: controller.active_tab().to_string(),
        on_add_tab,
        on_remove_tab,
        on_set_active_tab,
    };

    html! {
        <ContextProvider<TabsContext> context={context}>
            <TabBar />
            {for controller.tabs().iter().map(|tab| html! {
                <TabPane
                    key={tab.key.clone()}
                    is_active={tab.key == controller.active_tab()}
                    tab={tab.clone()}
                    device={props.device.clone()}
                />
            })}
        </ContextProvider<TabsContext>>
    }
}
