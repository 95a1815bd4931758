//! Shared mode selection
//!
//! The input monitor writes the selection, the render loop reads a copy of
//! it every tick. Both go through one critical-section mutex and hold it only
//! for a copy or a single update.

use core::cell::Cell;

use critical_section::Mutex;

use crate::color::{BLACK, Rgb, STATIC_PALETTE};
use crate::effect::EffectId;

const COLORFUL_MODE: u8 = 0;
const STATIC_MODE: u8 = 1;
const OFF_MODE: u8 = 2;

/// Snapshot of the two-level selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeSelection {
    /// Top level mode
    pub mode: u8,
    /// Effect or color within the mode
    pub sub_mode: u8,
}

/// What the render loop should show for a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    /// Animated effect, re-rendered every tick
    Animated(EffectId),
    /// One fixed color, rendered on change only
    Solid(Rgb),
    /// Strip switched off, rendered on change only
    Off,
}

impl Scene {
    /// Target color of non-animated scenes
    pub const fn solid_color(self) -> Option<Rgb> {
        match self {
            Self::Animated(_) => None,
            Self::Solid(color) => Some(color),
            Self::Off => Some(BLACK),
        }
    }

    /// Short name for log lines
    pub const fn name(self) -> &'static str {
        match self {
            Self::Animated(id) => id.as_str(),
            Self::Solid(_) => "solid",
            Self::Off => "off",
        }
    }
}

/// How modes and sub-modes are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeLayout {
    /// Every mode is one animated effect, there are no sub-modes
    Flat,
    /// Colorful (3 effects), Static (palette colors) and Off
    Nested,
}

impl ModeLayout {
    /// Number of top level modes
    #[allow(clippy::cast_possible_truncation)]
    pub const fn mode_count(self) -> u8 {
        match self {
            Self::Flat => EffectId::ALL.len() as u8,
            Self::Nested => 3,
        }
    }

    /// Number of sub-modes within `mode`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn sub_mode_count(self, mode: u8) -> u8 {
        match (self, mode) {
            (Self::Nested, COLORFUL_MODE) => EffectId::ALL.len() as u8,
            (Self::Nested, STATIC_MODE) => STATIC_PALETTE.len() as u8,
            _ => 1,
        }
    }

    /// Resolve a selection to the scene to render
    pub fn scene(self, selection: ModeSelection) -> Scene {
        let ModeSelection { mode, sub_mode } = selection;
        match self {
            Self::Flat => match EffectId::ALL.get(usize::from(mode)) {
                Some(id) => Scene::Animated(*id),
                None => Scene::Off,
            },
            Self::Nested => match mode {
                COLORFUL_MODE => match EffectId::ALL.get(usize::from(sub_mode)) {
                    Some(id) => Scene::Animated(*id),
                    None => Scene::Off,
                },
                STATIC_MODE => match STATIC_PALETTE.get(usize::from(sub_mode)) {
                    Some(color) => Scene::Solid(*color),
                    None => Scene::Off,
                },
                OFF_MODE => Scene::Off,
                _ => Scene::Off,
            },
        }
    }
}

/// Mode selection shared between the input monitor and the render loop
pub struct ModeState {
    layout: ModeLayout,
    selection: Mutex<Cell<ModeSelection>>,
}

impl ModeState {
    /// Create a mode state starting at mode 0, sub-mode 0
    pub const fn new(layout: ModeLayout) -> Self {
        Self {
            layout,
            selection: Mutex::new(Cell::new(ModeSelection {
                mode: 0,
                sub_mode: 0,
            })),
        }
    }

    pub const fn layout(&self) -> ModeLayout {
        self.layout
    }

    /// Copy of the current selection
    pub fn read(&self) -> ModeSelection {
        critical_section::with(|cs| self.selection.borrow(cs).get())
    }

    /// Scene for the current selection
    pub fn scene(&self) -> Scene {
        self.layout.scene(self.read())
    }

    /// Move to the next mode and reset the sub-mode
    ///
    /// Returns the new selection.
    pub fn advance_mode(&self) -> ModeSelection {
        let layout = self.layout;
        critical_section::with(|cs| {
            let cell = self.selection.borrow(cs);
            let current = cell.get();
            let next = ModeSelection {
                mode: (current.mode + 1) % layout.mode_count(),
                sub_mode: 0,
            };
            cell.set(next);
            next
        })
    }

    /// Move to the next sub-mode of the current mode
    ///
    /// Returns the new selection.
    pub fn advance_sub_mode(&self) -> ModeSelection {
        let layout = self.layout;
        critical_section::with(|cs| {
            let cell = self.selection.borrow(cs);
            let current = cell.get();
            let next = ModeSelection {
                mode: current.mode,
                sub_mode: (current.sub_mode + 1) % layout.sub_mode_count(current.mode),
            };
            cell.set(next);
            next
        })
    }
}
