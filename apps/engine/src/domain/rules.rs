/// Fixed table size for this variant: three seats, no partnerships.
pub const PLAYERS: usize = 3;

/// Cards held by each seat after the deal.
pub const HAND_SIZE: usize = 10;

/// Cards set aside face-down for the round.
pub const WIDOW_SIZE: usize = 3;

/// 7–Ace in four suits plus a single joker.
pub const DECK_SIZE: usize = PLAYERS * HAND_SIZE + WIDOW_SIZE;

/// Cards that enter trick play in one round (the widow never does).
pub const TOTAL_PLAYABLE: usize = PLAYERS * HAND_SIZE;

/// Deal pattern: each wave goes round-robin to every seat, and the widow
/// receives its three cards after the first wave.
pub const DEAL_WAVES: [usize; 3] = [3, 4, 3];
