//! `These<A, B>`: a left value, a right value, or both.
//!
//! The provenance record produced by [`Semialign::align`](crate::Semialign::align)
//! for every position of the combined shape.

use self::These::{Both, That, This};

/// Inclusive-or of two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum These<A, B> {
    /// Only the left value is present.
    This(A),
    /// Only the right value is present.
    That(B),
    /// Both values are present.
    Both(A, B),
}

// =============================================================================
// Construction & Inspection
// =============================================================================

impl<A, B> These<A, B> {
    /// `None` only when both sides are absent.
    #[inline]
    pub fn from_options(a: Option<A>, b: Option<B>) -> Option<Self> {
        match (a, b) {
            (Some(a), Some(b)) => Some(Both(a, b)),
            (Some(a), None) => Some(This(a)),
            (None, Some(b)) => Some(That(b)),
            (None, None) => None,
        }
    }

    #[inline]
    pub fn into_options(self) -> (Option<A>, Option<B>) {
        match self {
            This(a) => (Some(a), None),
            That(b) => (None, Some(b)),
            Both(a, b) => (Some(a), Some(b)),
        }
    }

    #[inline]
    pub fn is_this(&self) -> bool {
        matches!(self, This(_))
    }

    #[inline]
    pub fn is_that(&self) -> bool {
        matches!(self, That(_))
    }

    #[inline]
    pub fn is_both(&self) -> bool {
        matches!(self, Both(..))
    }

    /// Left value is present (`This` or `Both`).
    #[inline]
    pub fn has_this(&self) -> bool {
        !self.is_that()
    }

    /// Right value is present (`That` or `Both`).
    #[inline]
    pub fn has_that(&self) -> bool {
        !self.is_this()
    }

    /// The left value, whether or not a right value accompanies it.
    #[inline]
    pub fn this(self) -> Option<A> {
        match self {
            This(a) | Both(a, _) => Some(a),
            That(_) => None,
        }
    }

    /// The right value, whether or not a left value accompanies it.
    #[inline]
    pub fn that(self) -> Option<B> {
        match self {
            That(b) | Both(_, b) => Some(b),
            This(_) => None,
        }
    }

    #[inline]
    pub fn only_this(self) -> Option<A> {
        match self {
            This(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    pub fn only_that(self) -> Option<B> {
        match self {
            That(b) => Some(b),
            _ => None,
        }
    }

    #[inline]
    pub fn only_both(self) -> Option<(A, B)> {
        match self {
            Both(a, b) => Some((a, b)),
            _ => None,
        }
    }

    #[inline]
    pub fn as_ref(&self) -> These<&A, &B> {
        match self {
            This(a) => This(a),
            That(b) => That(b),
            Both(a, b) => Both(a, b),
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> These<&mut A, &mut B> {
        match self {
            This(a) => This(a),
            That(b) => That(b),
            Both(a, b) => Both(a, b),
        }
    }

    /// Fill whichever side is missing with the given default.
    #[inline]
    pub fn into_pair_or(self, a: A, b: B) -> (A, B) {
        match self {
            This(x) => (x, b),
            That(y) => (a, y),
            Both(x, y) => (x, y),
        }
    }
}

// =============================================================================
// Transformation
// =============================================================================

impl<A, B> These<A, B> {
    /// Eliminate into a single value, one function per variant.
    #[inline]
    pub fn fold<C>(
        self,
        this: impl FnOnce(A) -> C,
        that: impl FnOnce(B) -> C,
        both: impl FnOnce(A, B) -> C,
    ) -> C {
        match self {
            This(a) => this(a),
            That(b) => that(b),
            Both(a, b) => both(a, b),
        }
    }

    /// Bifunctor action: `f` on the left value, `g` on the right value.
    /// The active variant never changes.
    #[inline]
    pub fn bimap<C, D>(self, f: impl FnOnce(A) -> C, g: impl FnOnce(B) -> D) -> These<C, D> {
        match self {
            This(a) => This(f(a)),
            That(b) => That(g(b)),
            Both(a, b) => Both(f(a), g(b)),
        }
    }

    #[inline]
    pub fn map_this<C>(self, f: impl FnOnce(A) -> C) -> These<C, B> {
        self.bimap(f, |b| b)
    }

    #[inline]
    pub fn map_that<D>(self, g: impl FnOnce(B) -> D) -> These<A, D> {
        self.bimap(|a| a, g)
    }

    #[inline]
    pub fn swap(self) -> These<B, A> {
        match self {
            This(a) => That(a),
            That(b) => This(b),
            Both(a, b) => Both(b, a),
        }
    }
}

impl<A> These<A, A> {
    /// Collapse a homogeneous `These`, combining with `f` when both are present.
    #[inline]
    pub fn merge(self, f: impl FnOnce(A, A) -> A) -> A {
        match self {
            This(a) | That(a) => a,
            Both(a, b) => f(a, b),
        }
    }
}

// =============================================================================
// Associativity
// =============================================================================

impl<A, B, C> These<A, These<B, C>> {
    /// Reassociate to the left. Every combination of present `A`/`B`/`C`
    /// maps to a distinct output, and [`These::unassoc`] inverts it.
    pub fn assoc(self) -> These<These<A, B>, C> {
        match self {
            This(a) => This(This(a)),
            That(This(b)) => This(That(b)),
            That(That(c)) => That(c),
            That(Both(b, c)) => Both(That(b), c),
            Both(a, This(b)) => This(Both(a, b)),
            Both(a, That(c)) => Both(This(a), c),
            Both(a, Both(b, c)) => Both(Both(a, b), c),
        }
    }
}

impl<A, B, C> These<These<A, B>, C> {
    /// Reassociate to the right.
    pub fn unassoc(self) -> These<A, These<B, C>> {
        match self {
            This(This(a)) => This(a),
            This(That(b)) => That(This(b)),
            That(c) => That(That(c)),
            Both(That(b), c) => That(Both(b, c)),
            This(Both(a, b)) => Both(a, This(b)),
            Both(This(a), c) => Both(a, That(c)),
            Both(Both(a, b), c) => Both(a, Both(b, c)),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
