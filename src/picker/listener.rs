//! Change notifications.
//!
//! The controller reports selection, search and open/close changes through a
//! [`PickerListener`]. Expansion is local UI state and is never reported.

use std::fmt;

use super::option::PickOption;

/// Receives side-effect notifications from a [`Picker`](super::Picker).
///
/// Every method defaults to a no-op so implementors pick what they need.
pub trait PickerListener {
    /// The selection changed; `selected` is the full list in selection order
    fn on_change(&mut self, _selected: &[PickOption]) {}

    fn on_search(&mut self, _query: &str) {}

    fn on_open(&mut self) {}

    fn on_close(&mut self) {}
}

/// Listener that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl PickerListener for NoopListener {}

type ChangeFn = Box<dyn FnMut(&[PickOption])>;
type SearchFn = Box<dyn FnMut(&str)>;
type SignalFn = Box<dyn FnMut()>;

/// Closure-based listener.
///
/// ```
/// use picklist::picker::Callbacks;
///
/// let callbacks = Callbacks::default()
///     .with_on_change(|selected| println!("{} selected", selected.len()))
///     .with_on_close(|| println!("closed"));
/// # let _ = callbacks;
/// ```
#[derive(Default)]
pub struct Callbacks {
    change: Option<ChangeFn>,
    search: Option<SearchFn>,
    open: Option<SignalFn>,
    close: Option<SignalFn>,
}

impl Callbacks {
    pub fn with_on_change(mut self, f: impl FnMut(&[PickOption]) + 'static) -> Self {
        self.change = Some(Box::new(f));
        self
    }

    pub fn with_on_search(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.search = Some(Box::new(f));
        self
    }

    pub fn with_on_open(mut self, f: impl FnMut() + 'static) -> Self {
        self.open = Some(Box::new(f));
        self
    }

    pub fn with_on_close(mut self, f: impl FnMut() + 'static) -> Self {
        self.close = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("change", &self.change.is_some())
            .field("search", &self.search.is_some())
            .field("open", &self.open.is_some())
            .field("close", &self.close.is_some())
            .finish()
    }
}

impl PickerListener for Callbacks {
    fn on_change(&mut self, selected: &[PickOption]) {
        if let Some(f) = self.change.as_mut() {
            f(selected);
        }
    }

    fn on_search(&mut self, query: &str) {
        if let Some(f) = self.search.as_mut() {
            f(query);
        }
    }

    fn on_open(&mut self) {
        if let Some(f) = self.open.as_mut() {
            f();
        }
    }

    fn on_close(&mut self) {
        if let Some(f) = self.close.as_mut() {
            f();
        }
    }
}
