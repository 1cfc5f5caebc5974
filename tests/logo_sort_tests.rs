//! Logo sort integration tests.

use minigame_engine::core::{LogoSortConfig, LogoSortError};
use minigame_engine::games::{Bin, GameKind, LogoInput, LogoSortEvent, LogoSortState};
use minigame_engine::rules::MiniGame;
use proptest::prelude::*;

fn logos(n: usize) -> Vec<LogoInput> {
    (0..n)
        .map(|i| LogoInput {
            id: Some(format!("brand-{i}")),
            title: format!("Brand {i}"),
            image: format!("logos/{i}.svg"),
        })
        .collect()
}

/// Test that runs are capped at 20 logos.
#[test]
fn test_logo_cap() {
    let state = LogoSortState::new(LogoSortConfig::default(), logos(35)).unwrap();

    assert_eq!(state.logos().len(), 20);
    assert_eq!(state.remaining(), 20);
    assert_eq!(state.kind(), GameKind::LogoSort);
}

/// Test a full run: counts, earnings and the finish event.
#[test]
fn test_full_run() {
    let mut state = LogoSortState::new(LogoSortConfig::default(), logos(4)).unwrap();
    let mut progress = 0;
    let mut finished = Vec::new();

    for bin in [Bin::Left, Bin::Right, Bin::Left, Bin::Left] {
        let step = state.play(&bin).unwrap();
        progress += step.progress_count();
        finished.extend(
            step.events
                .iter()
                .filter(|e| matches!(e, LogoSortEvent::Finished { .. }))
                .cloned(),
        );
        state = step.state;
    }

    assert_eq!(progress, 4);
    assert_eq!(state.bin_count(Bin::Left), 3);
    assert_eq!(state.bin_count(Bin::Right), 1);
    assert_eq!(state.earnings_cents(), 20);
    assert_eq!(finished, vec![LogoSortEvent::Finished { earnings_cents: 20 }]);
    assert!(state.is_finished());
    assert!(state.current_logo().is_none());
}

/// Test that flicking an exhausted run is a no-op through `apply`.
#[test]
fn test_exhausted_is_noop() {
    let state = LogoSortState::new(LogoSortConfig::default(), logos(1))
        .unwrap()
        .flick(Bin::Right)
        .unwrap()
        .state;

    assert_eq!(state.play(&Bin::Left).unwrap_err(), LogoSortError::Exhausted(1));

    let step = state.apply(&Bin::Left);
    assert_eq!(step.state, state);
    assert_eq!(step.progress_count(), 0);
}

/// Test custom earnings.
#[test]
fn test_custom_earnings() {
    let config = LogoSortConfig::new().with_earning_cents(12);
    let state = LogoSortState::new(config, logos(2)).unwrap();

    let state = state.flick(Bin::Left).unwrap().state;
    let state = state.flick(Bin::Left).unwrap().state;
    assert_eq!(state.earnings_cents(), 24);
}

proptest! {
    /// Bin counts always add up to the sorted count, and earnings follow.
    #[test]
    fn prop_counts_add_up(
        count in 0usize..30,
        flicks in prop::collection::vec(any::<bool>(), 0..40),
    ) {
        let mut state = LogoSortState::new(LogoSortConfig::default(), logos(count)).unwrap();

        for left in flicks {
            let bin = if left { Bin::Left } else { Bin::Right };
            state = state.apply(&bin).state;

            let total = state.bin_count(Bin::Left) + state.bin_count(Bin::Right);
            prop_assert_eq!(total as usize, state.sorted());
            prop_assert_eq!(state.earnings_cents(), 5 * state.sorted() as u64);
            prop_assert!(state.sorted() <= count.min(20));
        }
    }
}
