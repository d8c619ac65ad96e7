//! Multi-option toggle switch.
//!
//! A [`SwitchControl`] holds the selection for one group of mutually
//! exclusive options. Selection only changes through [`SwitchControl::select`]
//! (including [`SwitchControl::reset`]), and every effective change is
//! announced to the registered listeners exactly once.

use std::fmt;

use log::trace;

use crate::error::ConfigError;
use crate::models::{OptionGroup, SwitchOption};

/// Callback invoked with the newly selected value.
pub type ChangeListener = Box<dyn FnMut(&str)>;

pub struct SwitchControl {
    options: OptionGroup,
    selected_index: usize,
    initial_index: usize,
    disabled: bool,
    listeners: Vec<ChangeListener>,
}

impl SwitchControl {
    /// Create a switch over `options`.
    ///
    /// An `initial_index` outside the option list falls back to the first
    /// option instead of failing.
    pub fn new(
        options: OptionGroup,
        initial_index: usize,
        disabled: bool,
    ) -> Result<Self, ConfigError> {
        if options.is_empty() {
            return Err(ConfigError::NoOptions);
        }

        let initial_index = if initial_index < options.len() {
            initial_index
        } else {
            0
        };

        Ok(Self {
            options,
            selected_index: initial_index,
            initial_index,
            disabled,
            listeners: Vec::new(),
        })
    }

    /// Register a listener for selection changes.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&str) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Select the option at `index`.
    ///
    /// Returns the new value, or `None` when nothing changed: the switch is
    /// disabled, `index` is already selected, or `index` is out of range.
    /// Listeners only run when a value is returned.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        if self.disabled || index == self.selected_index || index >= self.options.len() {
            return None;
        }

        self.selected_index = index;
        let value = self.options[index].value.as_str();
        trace!("switch selected {} ({})", index, value);

        for listener in &mut self.listeners {
            listener(value);
        }

        Some(value)
    }

    /// Select the option to the right, wrapping to the first.
    pub fn select_next(&mut self) -> Option<&str> {
        let next = (self.selected_index + 1) % self.options.len();
        self.select(next)
    }

    /// Select the option to the left, wrapping to the last.
    pub fn select_previous(&mut self) -> Option<&str> {
        let len = self.options.len();
        let previous = (self.selected_index + len - 1) % len;
        self.select(previous)
    }

    /// Go back to the option selected at creation.
    ///
    /// Follows the same rules as [`select`](Self::select), so listeners hear
    /// about the change and a disabled switch stays put.
    pub fn reset(&mut self) -> Option<&str> {
        self.select(self.initial_index)
    }

    pub fn current_selection(&self) -> &SwitchOption {
        &self.options[self.selected_index]
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn options(&self) -> &[SwitchOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Never true once constructed.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Left edge of the selection indicator as a fraction of the track.
    pub fn indicator_offset(&self) -> f64 {
        self.selected_index as f64 / self.options.len() as f64
    }

    /// Width of the selection indicator as a fraction of the track.
    pub fn indicator_width(&self) -> f64 {
        1.0 / self.options.len() as f64
    }
}

impl fmt::Debug for SwitchControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitchControl")
            .field("options", &self.options)
            .field("selected_index", &self.selected_index)
            .field("disabled", &self.disabled)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn three_options() -> OptionGroup {
        vec![
            SwitchOption::new("Cell wall", "cell_wall"),
            SwitchOption::new("Ribosomes", "ribosomes"),
            SwitchOption::new("Option 3", "option_3"),
        ]
    }

    fn recording(switch: &mut SwitchControl) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        switch.on_change(move |value| sink.borrow_mut().push(value.to_string()));
        seen
    }

    #[test]
    fn test_empty_options_rejected() {
        let err = SwitchControl::new(Vec::new(), 0, false).unwrap_err();
        assert_eq!(err, ConfigError::NoOptions);
    }

    #[test]
    fn test_out_of_range_initial_index_falls_back() {
        let switch = SwitchControl::new(three_options(), 7, false).unwrap();
        assert_eq!(switch.selected_index(), 0);
        assert_eq!(switch.current_selection().value, "cell_wall");
    }

    #[test]
    fn test_select_notifies_once() {
        let mut switch = SwitchControl::new(three_options(), 0, false).unwrap();
        let seen = recording(&mut switch);

        assert_eq!(switch.select(1), Some("ribosomes"));
        assert_eq!(switch.current_selection().value, "ribosomes");
        assert_eq!(*seen.borrow(), vec!["ribosomes".to_string()]);
    }

    #[test]
    fn test_select_same_index_is_noop() {
        let mut switch = SwitchControl::new(three_options(), 2, false).unwrap();
        let seen = recording(&mut switch);

        assert_eq!(switch.select(2), None);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_select_while_disabled_is_noop() {
        let mut switch = SwitchControl::new(three_options(), 0, true).unwrap();
        let seen = recording(&mut switch);

        assert_eq!(switch.select(1), None);
        assert_eq!(switch.select_next(), None);
        assert_eq!(switch.selected_index(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let mut switch = SwitchControl::new(three_options(), 0, false).unwrap();
        let seen = recording(&mut switch);

        assert_eq!(switch.select(3), None);
        assert_eq!(switch.selected_index(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_single_option_never_changes() {
        let mut switch =
            SwitchControl::new(vec![SwitchOption::new("a", "a")], 0, false).unwrap();
        let seen = recording(&mut switch);

        assert_eq!(switch.select(0), None);
        assert_eq!(switch.select_next(), None);
        assert_eq!(switch.select_previous(), None);
        assert_eq!(switch.selected_index(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut switch = SwitchControl::new(three_options(), 2, false).unwrap();

        assert_eq!(switch.select_next(), Some("cell_wall"));
        assert_eq!(switch.select_previous(), Some("option_3"));
        assert_eq!(switch.select_previous(), Some("ribosomes"));
    }

    #[test]
    fn test_reset_restores_initial_and_notifies() {
        let mut switch = SwitchControl::new(three_options(), 1, false).unwrap();
        switch.select(2);
        let seen = recording(&mut switch);

        assert_eq!(switch.reset(), Some("ribosomes"));
        assert_eq!(switch.selected_index(), 1);
        assert_eq!(*seen.borrow(), vec!["ribosomes".to_string()]);

        assert_eq!(switch.reset(), None);
        assert_eq!(seen.borrow().len(), 1);

        switch.select(0);
        switch.set_disabled(true);
        assert_eq!(switch.reset(), None);
        assert_eq!(switch.selected_index(), 0);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_indicator_geometry() {
        let mut switch = SwitchControl::new(three_options(), 0, false).unwrap();
        assert_eq!(switch.indicator_offset(), 0.0);
        assert!((switch.indicator_width() - 1.0 / 3.0).abs() < f64::EPSILON);

        switch.select(2);
        assert!((switch.indicator_offset() - 2.0 / 3.0).abs() < f64::EPSILON);
    }
}
