// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BottomTab {
    Cycle,
    Calendar,
    Insights,
    Me,
}

impl BottomTab {
    pub const ALL: [Self; 4] = [Self::Cycle, Self::Calendar, Self::Insights, Self::Me];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cycle => "Cycle",
            Self::Calendar => "Calendar",
            Self::Insights => "Insights",
            Self::Me => "Me",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Cycle => "◌",
            Self::Calendar => "▦",
            Self::Insights => "✦",
            Self::Me => "◉",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cycle" => Some(Self::Cycle),
            "calendar" => Some(Self::Calendar),
            "insights" => Some(Self::Insights),
            "me" => Some(Self::Me),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOverview {
    pub last_period_days: u16,
    pub estimated_cycle_days: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSummary {
    pub name: &'static str,
    pub days_left: u16,
    pub description: &'static str,
}

/// Everything the insights page displays. The mockup has no real data
/// source, so these are literal values shared by the renderer and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightsContent {
    pub overview: CycleOverview,
    pub phase: PhaseSummary,
    pub prediction_slots: usize,
    pub prediction_window_days: u16,
}

impl InsightsContent {
    pub const fn placeholder() -> Self {
        Self {
            overview: CycleOverview {
                last_period_days: 4,
                estimated_cycle_days: 28,
            },
            phase: PhaseSummary {
                name: "Follicular",
                days_left: 3,
                description: "Your energy is on the rise as your body prepares for ovulation.",
            },
            prediction_slots: 4,
            prediction_window_days: 3,
        }
    }
}
