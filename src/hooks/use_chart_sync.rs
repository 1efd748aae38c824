use std::collections::HashSet;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::chart_sync::ChartSync;

pub enum SyncAction {
    Toggle(AttrValue),
    Hover(Option<usize>),
}

impl Reducible for ChartSync {
    type Action = SyncAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SyncAction::Hover(index) if index == self.hover_index() => self,
            SyncAction::Hover(index) => {
                let mut next = (*self).clone();
                next.set_hover(index);
                Rc::new(next)
            }
            SyncAction::Toggle(key) => {
                let mut next = (*self).clone();
                next.toggle(&key);
                Rc::new(next)
            }
        }
    }
}

/// Handle returned by `use_chart_sync`. The legend gets the whole handle;
/// charts get a [`ChartView`].
#[derive(Clone, PartialEq)]
pub struct ChartSyncHandle {
    pub hidden: Rc<HashSet<String>>,
    pub hover_index: Option<usize>,
    pub toggle: Callback<AttrValue>,
    pub set_hover: Callback<Option<usize>>,
}

impl ChartSyncHandle {
    pub fn is_hidden(&self, key: &str) -> bool {
        self.hidden.contains(key)
    }

    /// Read-only hidden set plus hover reporting, without `toggle`.
    pub fn chart_view(&self) -> ChartView {
        ChartView {
            hidden: self.hidden.clone(),
            hover_index: self.hover_index,
            set_hover: self.set_hover.clone(),
        }
    }
}

/// What a chart may see and change of the shared sync state.
#[derive(Clone, PartialEq)]
pub struct ChartView {
    pub hidden: Rc<HashSet<String>>,
    pub hover_index: Option<usize>,
    pub set_hover: Callback<Option<usize>>,
}

/// Hidden technologies and hovered bar, owned by the view that renders the charts.
#[hook]
pub fn use_chart_sync() -> ChartSyncHandle {
    let sync = use_reducer(ChartSync::new);

    let toggle = {
        let sync = sync.dispatcher();
        Callback::from(move |key: AttrValue| sync.dispatch(SyncAction::Toggle(key)))
    };

    let set_hover = {
        let sync = sync.dispatcher();
        Callback::from(move |index: Option<usize>| sync.dispatch(SyncAction::Hover(index)))
    };

    ChartSyncHandle {
        hidden: Rc::new(sync.hidden().clone()),
        hover_index: sync.hover_index(),
        toggle,
        set_hover,
    }
}
