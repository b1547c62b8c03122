//! Game-style generators: card deals, coin flips, dice rolls, yes/no
//! decisions, and rock-paper-scissors.

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::index;
use serde::Serialize;
use utoipa::ToSchema;

use super::error::{GenerationError, GenerationResult};
use super::validate::{MAX_COUNT, checked_count};

const SUITS: [char; 4] = ['♠', '♦', '♣', '♥'];
const RANKS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// Size of an English deck without jokers.
pub const DECK_SIZE: usize = SUITS.len() * RANKS.len();

/// Build the 52-card deck in suit-major order.
fn build_deck() -> Vec<String> {
    SUITS
        .iter()
        .flat_map(|suit| RANKS.iter().map(move |rank| format!("{rank}{suit}")))
        .collect()
}

/// Normalized parameters for `/api/BarajaAleatoria`.
#[derive(Debug, Clone, Copy)]
pub struct CardDealParams {
    pub cards_per_hand: i64,
    pub hands: i64,
}

/// Validated card-deal request.
#[derive(Debug, Clone, Copy)]
pub struct CardDealRequest {
    cards_per_hand: usize,
    hands: usize,
    total: usize,
}

impl CardDealParams {
    /// Check order: non-positive quantities (1001), then deck overflow (1002).
    pub fn validate(self) -> GenerationResult<CardDealRequest> {
        if self.cards_per_hand <= 0 || self.hands <= 0 {
            return Err(GenerationError::new(
                1001,
                "Las cantidades de manos y cartas deben ser mayores a 0.",
            ));
        }
        let cards_per_hand = self.cards_per_hand as usize;
        let hands = self.hands as usize;
        let total = cards_per_hand
            .checked_mul(hands)
            .filter(|total| *total <= DECK_SIZE)
            .ok_or_else(|| {
                GenerationError::new(
                    1002,
                    "No hay suficientes cartas en la baraja para repartir sin repetir.",
                )
            })?;
        Ok(CardDealRequest {
            cards_per_hand,
            hands,
            total,
        })
    }
}

/// Hands dealt from a single shuffled deck.
#[derive(Debug, Serialize, ToSchema)]
pub struct CardDealPayload {
    pub manos: Vec<BTreeMap<String, Vec<String>>>,
    pub cartas_por_mano: usize,
    pub total_cartas: usize,
}

/// Deal `hands × cards_per_hand` cards without replacement across the whole
/// deal; cards are not returned to the deck between hands.
pub fn deal_cards<R: Rng + ?Sized>(req: &CardDealRequest, rng: &mut R) -> CardDealPayload {
    let deck = build_deck();
    let dealt: Vec<String> = index::sample(rng, deck.len(), req.total)
        .into_iter()
        .map(|i| deck[i].clone())
        .collect();

    let manos = dealt
        .chunks(req.cards_per_hand)
        .enumerate()
        .map(|(i, hand)| {
            BTreeMap::from([(format!("mano_{}", i + 1), hand.to_vec())])
        })
        .collect();

    CardDealPayload {
        manos,
        cartas_por_mano: req.cards_per_hand,
        total_cartas: req.total,
    }
}

/// Normalized parameters for `/api/LanzamientosMoneda`.
#[derive(Debug, Clone, Copy)]
pub struct CoinFlipParams {
    pub flips: i64,
}

/// Validated coin-flip request.
#[derive(Debug, Clone, Copy)]
pub struct CoinFlipRequest {
    flips: usize,
}

impl CoinFlipParams {
    pub fn validate(self) -> GenerationResult<CoinFlipRequest> {
        let flips = checked_count(
            self.flips,
            "La cantidad de lanzamientos debe ser mayor a 0.",
            "La cantidad de lanzamientos debe ser menor a 100.",
        )?;
        Ok(CoinFlipRequest { flips })
    }
}

/// Labeled coin-flip outcomes.
#[derive(Debug, Serialize, ToSchema)]
pub struct CoinFlipPayload {
    pub lanzamientos: Vec<BTreeMap<String, String>>,
    pub total_lanzamientos: usize,
}

/// Produce `flips` independent Cara/Cruz outcomes keyed `lanzamiento_N`.
pub fn flip_coins<R: Rng + ?Sized>(req: &CoinFlipRequest, rng: &mut R) -> CoinFlipPayload {
    let outcomes = (1..=req.flips)
        .map(|i| {
            let face = if rng.gen_bool(0.5) { "Cara" } else { "Cruz" };
            (format!("lanzamiento_{i}"), face.to_owned())
        })
        .collect();
    CoinFlipPayload {
        lanzamientos: vec![outcomes],
        total_lanzamientos: req.flips,
    }
}

/// Normalized parameters for `/api/LanzamientosDado`.
#[derive(Debug, Clone, Copy)]
pub struct DiceRollParams {
    pub rolls: i64,
    pub dice: i64,
}

/// Validated dice-roll request.
#[derive(Debug, Clone, Copy)]
pub struct DiceRollRequest {
    rolls: usize,
    dice: usize,
}

impl DiceRollParams {
    /// Check order: rolls (1001/1000), dice ≤ 0 (1002), dice > 100 (1003).
    pub fn validate(self) -> GenerationResult<DiceRollRequest> {
        let rolls = checked_count(
            self.rolls,
            "La cantidad de lanzamientos debe ser mayor a 0.",
            "La cantidad de lanzamientos debe ser menor a 100.",
        )?;
        if self.dice <= 0 {
            return Err(GenerationError::new(
                1002,
                "La cantidad de dados debe ser mayor a 0.",
            ));
        }
        if self.dice > MAX_COUNT {
            return Err(GenerationError::new(
                1003,
                "La cantidad de dados debe ser menor a 100.",
            ));
        }
        Ok(DiceRollRequest {
            rolls,
            dice: self.dice as usize,
        })
    }
}

/// Labeled dice-roll outcomes, one list of die faces per roll.
#[derive(Debug, Serialize, ToSchema)]
pub struct DiceRollPayload {
    pub lanzamientos: Vec<BTreeMap<String, Vec<u8>>>,
    pub total_lanzamientos: usize,
    pub dados_por_lanzamiento: usize,
}

/// Produce `rolls` rolls, each rolling `dice` independent six-sided dice.
pub fn roll_dice<R: Rng + ?Sized>(req: &DiceRollRequest, rng: &mut R) -> DiceRollPayload {
    let outcomes = (1..=req.rolls)
        .map(|i| {
            let faces = (0..req.dice).map(|_| rng.gen_range(1..=6u8)).collect();
            (format!("lanzamiento_{i}"), faces)
        })
        .collect();
    DiceRollPayload {
        lanzamientos: vec![outcomes],
        total_lanzamientos: req.rolls,
        dados_por_lanzamiento: req.dice,
    }
}

/// Normalized parameters for `/api/DecisionAleatoria`.
#[derive(Debug, Clone, Copy)]
pub struct DecisionParams {
    pub count: i64,
}

/// Validated decision request.
#[derive(Debug, Clone, Copy)]
pub struct DecisionRequest {
    count: usize,
}

impl DecisionParams {
    pub fn validate(self) -> GenerationResult<DecisionRequest> {
        let count = checked_count(
            self.count,
            "La cantidad de decisiones debe ser mayor a 0.",
            "La cantidad de decisiones debe ser menor a 100.",
        )?;
        Ok(DecisionRequest { count })
    }
}

/// Labeled Si/No decisions.
#[derive(Debug, Serialize, ToSchema)]
pub struct DecisionPayload {
    pub decisiones: Vec<BTreeMap<String, String>>,
    pub total_decisiones: usize,
}

/// Produce `count` independent Si/No choices keyed `decisión_N`.
pub fn decide<R: Rng + ?Sized>(req: &DecisionRequest, rng: &mut R) -> DecisionPayload {
    let outcomes = (1..=req.count)
        .map(|i| {
            let choice = if rng.gen_bool(0.5) { "Si" } else { "No" };
            (format!("decisión_{i}"), choice.to_owned())
        })
        .collect();
    DecisionPayload {
        decisiones: vec![outcomes],
        total_decisiones: req.count,
    }
}

const RPS_OPTIONS: [&str; 3] = ["Piedra", "Papel", "Tijera"];

/// A single rock-paper-scissors draw.
#[derive(Debug, Serialize, ToSchema)]
pub struct RockPaperScissorsPayload {
    pub decision: String,
}

/// Uniform draw from the three-element set; takes no parameters.
pub fn rock_paper_scissors<R: Rng + ?Sized>(rng: &mut R) -> RockPaperScissorsPayload {
    let pick = RPS_OPTIONS[rng.gen_range(0..RPS_OPTIONS.len())];
    RockPaperScissorsPayload {
        decision: pick.to_owned(),
    }
}
