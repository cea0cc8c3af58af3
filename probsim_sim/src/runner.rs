//! Experiment runner - draws outcomes from a random source and tallies them.
//!
//! Every function here is a fixed-size random draw followed by a count.
//! None of them touch session state; the session stores what they return.

use crate::error::SimError;
use crate::results::{CardDrawResult, CoinTossResult, CompoundEventResult, DieRollResult};

use probsim_env::{EnvError, RandomSource};
use std::collections::BTreeMap;
use tracing::debug;

/// Coin outcome for tails.
pub const TAILS: u8 = 0;

/// Coin outcome for heads.
pub const HEADS: u8 = 1;

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

/// Highest card value counted as red (1..=26 red, 27..=52 black).
pub const LAST_RED_CARD: u8 = 26;

/// Returns true if the card value is red.
pub fn is_red(card: u8) -> bool {
    card <= LAST_RED_CARD
}

/// Flips one fair coin.
fn flip<R: RandomSource>(source: &mut R) -> Result<u8, EnvError> {
    Ok(source.uniform(TAILS as u32, HEADS as u32 + 1)? as u8)
}

/// Tosses a fair coin `num_tosses` times.
pub fn toss_coins<R: RandomSource>(
    source: &mut R,
    num_tosses: usize,
) -> Result<CoinTossResult, SimError> {
    let raw_data = (0..num_tosses)
        .map(|_| flip(source))
        .collect::<Result<Vec<u8>, _>>()?;

    let heads = raw_data.iter().filter(|&&toss| toss == HEADS).count();
    let tails = num_tosses - heads;

    debug!("coin_tosses: n={} heads={} tails={}", num_tosses, heads, tails);

    Ok(CoinTossResult { heads, tails, raw_data })
}

/// Rolls a six-sided die `num_rolls` times.
///
/// The tally is seeded with every face at zero before counting, so faces
/// that never came up are still present.
pub fn roll_die<R: RandomSource>(
    source: &mut R,
    num_rolls: usize,
) -> Result<DieRollResult, SimError> {
    let raw_data = (0..num_rolls)
        .map(|_| source.uniform(1, DIE_FACES as u32 + 1).map(|face| face as u8))
        .collect::<Result<Vec<u8>, _>>()?;

    let mut counts: BTreeMap<u8, usize> = (1..=DIE_FACES).map(|face| (face, 0)).collect();
    for face in &raw_data {
        *counts.entry(*face).or_insert(0) += 1;
    }

    debug!("die_rolls: n={} counts={:?}", num_rolls, counts);

    Ok(DieRollResult { counts, raw_data })
}

/// Draws `num_draws` cards without replacement from a shuffled deck.
///
/// Fails with `SimError::TooManyDraws` when `num_draws` exceeds the deck.
pub fn draw_cards<R: RandomSource>(
    source: &mut R,
    num_draws: usize,
) -> Result<CardDrawResult, SimError> {
    if num_draws > DECK_SIZE {
        return Err(SimError::too_many_draws(num_draws, DECK_SIZE));
    }

    let mut deck: Vec<u8> = (1..=DECK_SIZE as u8).collect();
    source.shuffle(&mut deck);
    deck.truncate(num_draws);

    let red = deck.iter().filter(|&&card| is_red(card)).count();
    let black = num_draws - red;

    debug!("card_draws: n={} red={} black={}", num_draws, red, black);

    Ok(CardDrawResult {
        red,
        black,
        raw_data: deck,
    })
}

/// Flips two fair coins per trial for `num_trials` trials.
///
/// A both-heads trial also counts toward `at_least_one_head`;
/// `neither_head` is derived once from the total.
pub fn flip_coin_pairs<R: RandomSource>(
    source: &mut R,
    num_trials: usize,
) -> Result<CompoundEventResult, SimError> {
    let mut both_heads = 0;
    let mut at_least_one_head = 0;
    let mut raw_data = Vec::with_capacity(num_trials);

    for _ in 0..num_trials {
        let flip1 = flip(source)?;
        let flip2 = flip(source)?;
        raw_data.push((flip1, flip2));

        if flip1 == HEADS && flip2 == HEADS {
            both_heads += 1;
        }
        if flip1 == HEADS || flip2 == HEADS {
            at_least_one_head += 1;
        }
    }

    let neither_head = num_trials - at_least_one_head;

    debug!(
        "compound_events: n={} both={} at_least_one={} neither={}",
        num_trials, both_heads, at_least_one_head, neither_head
    );

    Ok(CompoundEventResult {
        both_heads,
        at_least_one_head,
        neither_head,
        raw_data,
    })
}
