//! Toast queue state: transient, self-expiring operation notifications.
//!
//! DESIGN
//! ======
//! The queue itself is pure (push/remove on a `Vec`); the expiry timers live
//! in `components::toast_stack`, which schedules a cancellable removal per
//! toast. Ids are derived from a time-plus-random seed and kept unique among
//! live toasts so removal-by-id can never hit the wrong entry.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// Default display duration in milliseconds.
pub const DEFAULT_DURATION_MS: u32 = 3000;

/// How a toast should be styled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// CSS modifier suffix for the toast element.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Locally generated id, unique while the toast is live.
    pub id: i64,
    pub message: String,
    pub severity: Severity,
    /// How long the toast stays visible before self-removal.
    pub duration_ms: u32,
}

/// Ordered toast queue; insertion order is display order.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Append a toast, bumping the id seed past any live collision, and
    /// return the id actually assigned.
    pub fn push(
        &mut self,
        id_seed: i64,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: u32,
    ) -> i64 {
        let mut id = id_seed;
        while self.items.iter().any(|t| t.id == id) {
            id += 1;
        }
        self.items.push(Toast {
            id,
            message: message.into(),
            severity,
            duration_ms,
        });
        id
    }

    /// Remove the toast with the given id. Removing an id that is no longer
    /// (or never was) present is a no-op.
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Time-plus-random id seed, matching the source's `Date.now() + random`.
///
/// Collisions are tolerated; [`ToastState::push`] bumps the seed until it is
/// unique among live toasts.
pub fn toast_id_seed() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() + js_sys::Math::random() * 1000.0) as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
