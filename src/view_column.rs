//! Editor pane ordinals and the pane-selection policy for preview placement.

use serde::{Deserialize, Serialize};

/// An editor pane identified by its ordinal position, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewColumn {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

/// Decide which pane the preview should open in.
///
/// Reuses the active pane unless `side_by_side` is set, in which case the
/// preview opens one pane to the right, capped at pane Three. Panes past the
/// cap stay where they are — the cycle deliberately does not extend further.
///
/// With no active editor the preview defaults to pane One.
pub fn select_view_column(active: Option<ViewColumn>, side_by_side: bool) -> ViewColumn {
    let Some(active) = active else {
        return ViewColumn::One;
    };

    if !side_by_side {
        return active;
    }

    match active {
        ViewColumn::One => ViewColumn::Two,
        ViewColumn::Two => ViewColumn::Three,
        other => other,
    }
}
