/// Results page shown when a search returns nothing

use yew::prelude::*;
use patternfly_yew::prelude::{Button, ButtonVariant};

/// Which empty-state message to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoResultsKind {
    RepoNotSynced,
    EmptyFolder,
    ZeroResults,
}

impl NoResultsKind {
    /// A repository takes precedence over a folder
    pub fn from_flags(is_repo: bool, is_folder: bool) -> NoResultsKind {
        if is_repo {
            NoResultsKind::RepoNotSynced
        } else if is_folder {
            NoResultsKind::EmptyFolder
        } else {
            NoResultsKind::ZeroResults
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            NoResultsKind::RepoNotSynced => "Sorry, this repository is not ready for search",
            NoResultsKind::EmptyFolder => "The folder is empty",
            NoResultsKind::ZeroResults => "0 results",
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            NoResultsKind::RepoNotSynced => {
                Some("Wait for the repository to finish syncing and try again")
            }
            NoResultsKind::EmptyFolder => Some("We haven't found any files to index in this folder"),
            NoResultsKind::ZeroResults => None,
        }
    }

    pub fn shows_suggestions(&self) -> bool {
        matches!(self, NoResultsKind::ZeroResults)
    }
}

/// Open/closed state of the filter panel. Starts open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiltersPanel {
    pub is_open: bool,
}

impl Default for FiltersPanel {
    fn default() -> Self {
        FiltersPanel { is_open: true }
    }
}

impl FiltersPanel {
    pub fn toggled(self) -> FiltersPanel {
        FiltersPanel { is_open: !self.is_open }
    }

    pub fn class(&self) -> &'static str {
        if self.is_open { "filters filters-open" } else { "filters" }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_open { "◀ Hide filters" } else { "▶ Filters" }
    }
}

#[derive(Properties, PartialEq)]
pub struct FiltersProps {
    pub panel: FiltersPanel,
    pub toggle_open: Callback<()>,
}

#[function_component(Filters)]
pub fn filters(props: &FiltersProps) -> Html {
    html! {
        <aside class={props.panel.class()}>
            <Button
                onclick={props.toggle_open.reform(|_: MouseEvent| ())}
                variant={ButtonVariant::Secondary}
            >
                {props.panel.toggle_label()}
            </Button>
        </aside>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoResultsProps {
    #[prop_or_default]
    pub suggestions: Vec<String>,
    #[prop_or(false)]
    pub is_repo: bool,
    #[prop_or(false)]
    pub is_folder: bool,
}

#[function_component(NoResults)]
pub fn no_results(props: &NoResultsProps) -> Html {
    let filters = use_state(FiltersPanel::default);

    let toggle_filters = {
        let filters = filters.clone();
        Callback::from(move |_: ()| {
            filters.set((*filters).toggled());
        })
    };

    let kind = NoResultsKind::from_flags(props.is_repo, props.is_folder);

    html! {
        <>
            <Filters panel={*filters} toggle_open={toggle_filters} />
            <div class="no-results">
                {match kind.hint() {
                    Some(hint) => html! {
                        <div class="no-results-message">
                            <h4 class="no-results-title">{kind.title()}</h4>
                            <p class="no-results-hint">{hint}</p>
                        </div>
                    },
                    None => html! {
                        <h4 class="results-header">{kind.title()}</h4>
                    },
                }}

                if kind.shows_suggestions() {
                    <div class="suggestions">
                        <p class="suggestions-label">{"Suggested combinations"}</p>
                        <div class="suggestions-list">
                            {for props.suggestions.iter().map(|s| html! {
                                <Button key={s.clone()} variant={ButtonVariant::Secondary}>
                                    {s.clone()}
                                </Button>
                            })}
                        </div>
                    </div>
                }
            </div>
        </>
    }
}
