/// Watches a solver as it runs and optionally steers it.
///
/// A solver hands every evaluation it makes to its observer as an event of
/// type `E`. Returning `Some(action)` asks the solver to react (for bisection,
/// [`Action::StopEarly`]); returning `None` leaves the search untouched.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never intervenes.
///
/// [`Action::StopEarly`]: super::bisection::Action::StopEarly
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O: Observer<u32, &'static str>>(mut observer: O, events: &[u32]) -> Vec<&'static str> {
        events.iter().filter_map(|e| observer.observe(e)).collect()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), &[1, 2, 3]).is_empty());
    }

    #[test]
    fn closure_observer_keeps_state() {
        let mut seen = 0;
        let actions = drive(
            |event: &u32| {
                seen += event;
                (seen > 3).then_some("stop")
            },
            &[1, 2, 3],
        );
        assert_eq!(actions, vec!["stop"]);
    }
}
