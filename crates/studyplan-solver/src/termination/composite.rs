//! Composite OR termination over a tuple of conditions.

use std::fmt::Debug;

use studyplan_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates when ANY child terminates.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use studyplan_solver::{OrTermination, StepCountTermination, TimeTermination};
///
/// let termination = OrTermination::new((
///     TimeTermination::new(Duration::from_secs(30)),
///     StepCountTermination::new(1000),
/// ));
/// # let _ = termination;
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<D, $($T),+> Termination<D> for OrTermination<($($T,)+)>
        where
            D: ScoreDirector,
            $($T: Termination<D>,)+
        {
            fn is_terminated(&self, solver_scope: &SolverScope<D>) -> bool {
                $((self.0).$idx.is_terminated(solver_scope))||+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5);
