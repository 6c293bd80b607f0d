/// Watches a solver run, one event per produced record.
///
/// Each solver defines its own event type, borrowing the [`Record`] it just
/// built and the iteration state that produced it, and emits the event
/// before the record joins the [`Trace`]. Returning `Some(action)` steers
/// the run — every solver in this workspace accepts a shared stop-early
/// action and answers it with the trace accumulated so far — while `None`
/// lets the iteration continue.
///
/// Closures of the right shape are observers, so ad-hoc monitoring needs no
/// named type, and the unit type is the silent observer each solver's
/// `solve_unobserved` convenience passes on the caller's behalf.
///
/// [`Record`]: crate::Record
/// [`Trace`]: crate::Trace
pub trait Observer<E, A> {
    /// Inspects one solver event, optionally requesting a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Any `FnMut(&E) -> Option<A>` closure observes directly.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// `()` observes nothing and never intervenes.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
