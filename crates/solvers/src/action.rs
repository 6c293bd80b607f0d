/// Control actions shared by every solver in this crate.
pub enum Action {
    /// Stop the solver and return the trace accumulated so far.
    StopEarly,
}
