use dioxus::prelude::*;

use crate::components::app_view::AppView;

const NAV_HISTORY_LIMIT: usize = 64;

#[derive(Clone, Copy, PartialEq)]
pub struct Navigation {
    current_view: Signal<AppView>,
    history: Signal<Vec<AppView>>,
}

impl Navigation {
    pub fn new(current_view: Signal<AppView>, history: Signal<Vec<AppView>>) -> Self {
        Self {
            current_view,
            history,
        }
    }

    pub fn current(&self) -> AppView {
        (self.current_view)()
    }

    pub fn navigate_to(&self, target: AppView) {
        let mut current_view = self.current_view;
        let previous = current_view();
        if previous == target {
            return;
        }

        let mut history = self.history;
        history.with_mut(|stack| push_bounded(stack, previous));

        current_view.set(target);
    }

    pub fn can_go_back(&self) -> bool {
        !(self.history)().is_empty()
    }

    pub fn go_back(&self) -> Option<AppView> {
        let mut history = self.history;
        let prev = history.with_mut(|stack| stack.pop());
        prev.map(|prev| {
            let mut current_view = self.current_view;
            current_view.set(prev.clone());
            prev
        })
    }
}

fn push_bounded(stack: &mut Vec<AppView>, view: AppView) {
    stack.push(view);
    if stack.len() > NAV_HISTORY_LIMIT {
        stack.remove(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_drops_oldest_entries() {
        let mut stack = Vec::new();
        push_bounded(&mut stack, AppView::OtherSettings);
        for _ in 0..NAV_HISTORY_LIMIT {
            push_bounded(&mut stack, AppView::Settings);
        }

        assert_eq!(stack.len(), NAV_HISTORY_LIMIT);
        assert!(stack.iter().all(|view| *view == AppView::Settings));
    }
}
