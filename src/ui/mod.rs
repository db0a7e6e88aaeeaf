/// UI module exports

pub mod app;
pub mod no_results;
pub mod tab_bar;
pub mod tab_pane;
