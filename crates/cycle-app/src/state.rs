// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::BottomTab;

/// UI shell state. The selected tab is the only mutable value the app
/// carries; everything rendered is derived from it and from constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    pub selected_tab: BottomTab,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selected_tab: BottomTab::Insights,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    SelectTab(BottomTab),
    NextTab,
    PrevTab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    TabChanged(BottomTab),
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::SelectTab(tab) => {
                // Re-selecting the active tab is a no-op.
                if tab == self.selected_tab {
                    return Vec::new();
                }
                self.selected_tab = tab;
                vec![AppEvent::TabChanged(tab)]
            }
            AppCommand::NextTab => self.rotate_tab(1),
            AppCommand::PrevTab => self.rotate_tab(-1),
        }
    }

    fn rotate_tab(&mut self, delta: isize) -> Vec<AppEvent> {
        let tabs = BottomTab::ALL;
        let current = tabs
            .iter()
            .position(|tab| *tab == self.selected_tab)
            .unwrap_or(0) as isize;
        let len = tabs.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.selected_tab = tabs[next];
        vec![AppEvent::TabChanged(self.selected_tab)]
    }
}
