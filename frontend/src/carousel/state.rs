use std::rc::Rc;

use log::{debug, info, warn};
use yew::Reducible;

use super::slides::SLIDES;

/// Which edge the incoming slide enters from. Purely cosmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    /// The auto-advance timer fired.
    Tick,
    /// A dot control was clicked.
    Select(usize),
}

/// Which slide is shown and how it got there.
///
/// `current` is always below `len`; nothing outside this type can set it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    current: usize,
    previous: Option<usize>,
    direction: Direction,
    len: usize,
}

impl CarouselState {
    /// A carousel over `len` slides showing the first one. Zero is treated
    /// as one so there is always a valid index.
    pub fn new(len: usize) -> Self {
        CarouselState {
            current: 0,
            previous: None,
            direction: Direction::Forward,
            len: len.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// The slide shown before the last change, `None` until the first one.
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    pub fn tick(&mut self) -> bool {
        let next = (self.current + 1) % self.len;
        self.direction = Direction::Forward;
        self.move_to(next)
    }

    /// Jumps to `target`. Returns whether the shown slide changed; an out of
    /// range target is rejected and leaves the state untouched.
    pub fn select(&mut self, target: usize) -> bool {
        if target >= self.len {
            warn!(
                "Ignoring selection of slide {} (carousel has {})",
                target, self.len
            );
            return false;
        }
        if target == self.current {
            return false;
        }
        self.direction = if target > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.move_to(target)
    }

    pub fn apply(&mut self, action: CarouselAction) -> bool {
        match action {
            CarouselAction::Tick => self.tick(),
            CarouselAction::Select(target) => self.select(target),
        }
    }

    fn move_to(&mut self, target: usize) -> bool {
        if target == self.current {
            return false;
        }
        self.previous = Some(self.current);
        self.current = target;
        true
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        CarouselState::new(SLIDES.len())
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if !next.apply(action) {
            return self;
        }
        match action {
            CarouselAction::Tick => debug!("Carousel advanced to slide {}", next.current),
            CarouselAction::Select(_) => info!(
                "Slide {} selected ({})",
                next.current,
                next.direction.as_str()
            ),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(len: usize, index: usize) -> CarouselState {
        let mut state = CarouselState::new(len);
        state.select(index);
        state
    }

    #[test]
    fn starts_on_first_slide_moving_forward() {
        let state = CarouselState::default();
        assert_eq!(state.current(), 0);
        assert_eq!(state.direction(), Direction::Forward);
        assert_eq!(state.previous(), None);
        assert_eq!(state.slide_count(), SLIDES.len());
    }

    #[test]
    fn four_ticks_complete_a_cycle() {
        let mut state = CarouselState::new(4);
        for _ in 0..4 {
            assert!(state.tick());
        }
        assert_eq!(state.current(), 0);
        assert_eq!(state.previous(), Some(3));
        assert_eq!(state.direction(), Direction::Forward);
    }

    #[test]
    fn selecting_ahead_moves_forward() {
        let mut state = CarouselState::new(4);
        assert!(state.select(3));
        assert_eq!(state.current(), 3);
        assert_eq!(state.direction(), Direction::Forward);
    }

    #[test]
    fn selecting_behind_moves_backward() {
        let mut state = at(4, 3);
        assert!(state.select(1));
        assert_eq!(state.current(), 1);
        assert_eq!(state.previous(), Some(3));
        assert_eq!(state.direction(), Direction::Backward);
    }

    #[test]
    fn reselecting_current_slide_changes_nothing() {
        let state = at(4, 2);
        let mut again = state.clone();
        assert!(!again.select(2));
        assert_eq!(again, state);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let state = at(4, 1);
        let mut rejected = state.clone();
        assert!(!rejected.select(4));
        assert!(!rejected.select(usize::MAX));
        assert_eq!(rejected, state);
    }

    #[test]
    fn tick_after_backward_selection_resets_direction() {
        let mut state = at(4, 3);
        state.select(0);
        assert_eq!(state.direction(), Direction::Backward);
        state.tick();
        assert_eq!(state.direction(), Direction::Forward);
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn single_slide_never_moves() {
        let mut state = CarouselState::new(1);
        assert!(!state.tick());
        assert_eq!(state.current(), 0);
        assert_eq!(state.previous(), None);
    }

    #[test]
    fn empty_carousel_is_clamped_to_one_slide() {
        assert_eq!(CarouselState::new(0).slide_count(), 1);
    }

    #[test]
    fn reducer_keeps_the_same_rc_when_nothing_changes() {
        let state = Rc::new(CarouselState::new(4));
        let same = state.clone().reduce(CarouselAction::Select(0));
        assert!(Rc::ptr_eq(&state, &same));

        let moved = state.clone().reduce(CarouselAction::Select(2));
        assert!(!Rc::ptr_eq(&state, &moved));
        assert_eq!(moved.current(), 2);
    }

    proptest! {
        #[test]
        fn prop_ticks_wrap_modulo_len(len in 1usize..16, ticks in 0usize..200) {
            let mut state = CarouselState::new(len);
            for _ in 0..ticks {
                state.apply(CarouselAction::Tick);
            }
            prop_assert_eq!(state.current(), ticks % len);
        }

        #[test]
        fn prop_selection_lands_on_target(
            (len, start, target) in (1usize..16).prop_flat_map(|len| (Just(len), 0..len, 0..len)),
        ) {
            let mut state = at(len, start);
            let before = state.current();
            let before_direction = state.direction();

            state.apply(CarouselAction::Select(target));

            prop_assert_eq!(state.current(), target);
            if target > before {
                prop_assert_eq!(state.direction(), Direction::Forward);
            } else if target < before {
                prop_assert_eq!(state.direction(), Direction::Backward);
            } else {
                prop_assert_eq!(state.direction(), before_direction);
            }
        }

        #[test]
        fn prop_index_stays_in_bounds(
            len in 1usize..8,
            actions in proptest::collection::vec(
                prop_oneof![
                    Just(CarouselAction::Tick),
                    (0usize..10).prop_map(CarouselAction::Select),
                ],
                0..64,
            ),
        ) {
            let mut state = CarouselState::new(len);
            for action in actions {
                state.apply(action);
                prop_assert!(state.current() < state.slide_count());
            }
        }
    }
}
