//! Window and display enumeration for the cursor overlay.
//!
//! Exposes the stacking information the overlay needs to keep collaborator
//! cursors from being painted over windows that sit in front of the shared
//! one: bounds, z-order, window level, visibility and opacity.
//!
//! All bounds are reported in physical pixels with the origin in the top-left
//! corner of the primary display.

pub mod bounds;

#[cfg(windows)]
mod win;

#[cfg(windows)]
pub use win::{DisplayImpl, WindowImpl};

#[cfg(not(windows))]
mod fallback;

#[cfg(not(windows))]
pub use fallback::{DisplayImpl, WindowImpl};

use bounds::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Level reported for ordinary application windows.
pub const LEVEL_NORMAL: i32 = 0;
/// Level reported for top-most (always on top) windows.
pub const LEVEL_FLOATING: i32 = 3;
/// Level reported for the task bar and similar shell chrome.
pub const LEVEL_DOCK: i32 = 20;

#[derive(Clone, Copy)]
pub struct Display(DisplayImpl);

impl Display {
    pub fn list() -> Vec<Self> {
        DisplayImpl::list().into_iter().map(Self).collect()
    }

    pub fn primary() -> Option<Self> {
        DisplayImpl::primary().map(Self)
    }

    pub fn raw_handle(&self) -> &DisplayImpl {
        &self.0
    }

    pub fn id(&self) -> DisplayId {
        DisplayId(self.0.raw_id())
    }

    pub fn from_id(id: &DisplayId) -> Option<Self> {
        Self::list().into_iter().find(|d| &d.id() == id)
    }

    pub fn name(&self) -> Option<String> {
        self.0.name()
    }

    pub fn refresh_rate(&self) -> f64 {
        self.0.refresh_rate()
    }

    pub fn physical_bounds(&self) -> Option<PhysicalBounds> {
        self.0.physical_bounds()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DisplayId(u64);

impl DisplayId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for DisplayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| "Invalid display ID".to_string())
    }
}

#[derive(Clone, Copy)]
pub struct Window(WindowImpl);

impl Window {
    /// All top-level windows, front-most first.
    pub fn list() -> Vec<Self> {
        WindowImpl::list().into_iter().map(Self).collect()
    }

    pub fn id(&self) -> WindowId {
        WindowId(self.0.id())
    }

    pub fn from_id(id: &WindowId) -> Option<Self> {
        WindowImpl::from_id(id.0).map(Self)
    }

    /// Windows stacked in front of this one, front-most first.
    pub fn windows_above(&self) -> Vec<Self> {
        self.0.windows_above().into_iter().map(Self).collect()
    }

    pub fn owner_pid(&self) -> Option<u32> {
        self.0.owner_pid()
    }

    pub fn owner_name(&self) -> Option<String> {
        self.0.owner_name()
    }

    pub fn raw_handle(&self) -> &WindowImpl {
        &self.0
    }

    pub fn name(&self) -> Option<String> {
        self.0.name()
    }

    pub fn physical_bounds(&self) -> Option<PhysicalBounds> {
        self.0.physical_bounds()
    }

    pub fn level(&self) -> i32 {
        self.0.level()
    }

    /// Window opacity in `0.0..=1.0`.
    pub fn alpha(&self) -> f64 {
        self.0.alpha()
    }

    pub fn is_onscreen(&self) -> bool {
        self.0.is_onscreen()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WindowId(u64);

impl WindowId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WindowId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| "Invalid window ID".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids() {
        assert_eq!("42".parse::<WindowId>().unwrap().raw(), 42);
        assert_eq!("7".parse::<DisplayId>().unwrap(), DisplayId::new(7));
        assert!("-1".parse::<WindowId>().is_err());
        assert!("abc".parse::<DisplayId>().is_err());
    }

    #[test]
    fn displays_ids() {
        assert_eq!(WindowId::new(1234).to_string(), "1234");
        assert_eq!(DisplayId::new(2).to_string(), "2");
    }

    #[test]
    fn levels_are_ordered() {
        assert!(LEVEL_NORMAL < LEVEL_FLOATING);
        assert!(LEVEL_FLOATING < LEVEL_DOCK);
    }
}
