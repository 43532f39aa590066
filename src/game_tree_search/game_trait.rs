use std::fmt::Debug;

use rand::{seq::SliceRandom, Rng};

use crate::{
    action::{ActionList, Place},
    board::{Board, PlaceError},
    types::color::Color,
};

/// A placement game as seen by the search algorithms.
///
/// The side to move is not part of the state: callers pass the mover
/// explicitly and alternate it after every move. A state is terminal for a
/// mover when none of the mover's candidates is legal.
pub trait Game: Debug + Clone {
    type Action: Copy + Debug + PartialEq + Eq;
    type Error: Debug;

    /// Every placement candidate for `who`, one per cell, not filtered for legality.
    fn action_space(&self, who: Color) -> ActionList<Self::Action>;

    /// Applies `action`. On error the state must be left unchanged.
    fn advance(&mut self, action: Self::Action) -> Result<(), Self::Error>;

    fn describe_action(&self, action: Self::Action) -> String {
        format!("{action:?}")
    }

    /// Copy of this state with `action` applied, or `None` if it is illegal.
    #[inline]
    fn advanced(&self, action: Self::Action) -> Option<Self> {
        let mut next = self.clone();
        next.advance(action).ok()?;
        Some(next)
    }

    #[inline]
    fn is_legal(&self, action: Self::Action) -> bool {
        self.advanced(action).is_some()
    }

    /// Legal subset of `space`, in the order of `space`.
    fn legal_actions(&self, space: &[Self::Action]) -> ActionList<Self::Action> {
        space.iter().copied().filter(|&action| self.is_legal(action)).collect()
    }

    fn has_legal_action(&self, space: &[Self::Action]) -> bool {
        space.iter().any(|&action| self.is_legal(action))
    }

    /// Uniformly random legal move of `who` and the state it leads to.
    /// The candidates are shuffled and the first legal one is taken.
    fn random_move<R: Rng + ?Sized>(
        &self,
        who: Color,
        rng: &mut R,
    ) -> Option<(Self::Action, Self)> {
        let mut space = self.action_space(who);
        space.shuffle(rng);
        space
            .iter()
            .find_map(|&action| self.advanced(action).map(|next| (action, next)))
    }
}

impl Game for Board {
    type Action = Place;
    type Error = PlaceError;

    #[inline]
    fn action_space(&self, who: Color) -> ActionList<Place> {
        Place::space(self, who)
    }

    #[inline]
    fn advance(&mut self, action: Place) -> Result<(), PlaceError> {
        action.apply(self)
    }

    fn describe_action(&self, action: Place) -> String {
        action.describe(self.size())
    }
}
