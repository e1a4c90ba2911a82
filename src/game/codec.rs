use super::state::State;
use crate::Address;

/// Smallest `k` such that `2^k >= n`.
///
/// Only defined for `n >= 2`: a dimension with fewer than two values
/// is not a playable configuration.
pub fn bits_for(n: usize) -> anyhow::Result<u32> {
    match n {
        0 | 1 => Err(anyhow::anyhow!("cannot size a dimension of {} values", n)),
        n => Ok(usize::BITS - (n - 1).leading_zeros()),
    }
}

/// Bit-packed bijection between `State`s and dense table addresses.
///
/// Address 0 is the terminal sentinel. Every other address is
/// `1 + (out << (player_bits + 1)) + (player << 1) + !first`,
/// so the two `first` variants of a seat sit next to each other and
/// each `out` level is one contiguous block over all seats.
///
/// The space is padded to powers of two in each dimension. Padding
/// addresses decode to states that fail `is_state_valid` and are
/// never real positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    players: i32,
    spots: i32,
    player_bits: u32,
    spot_bits: u32,
}

impl Codec {
    pub fn new(players: usize, spots: usize) -> anyhow::Result<Self> {
        let player_bits = bits_for(players)
            .map_err(|e| anyhow::anyhow!("invalid player count {}: {}", players, e))?;
        let spot_bits = bits_for(spots)
            .map_err(|e| anyhow::anyhow!("invalid spot count {}: {}", spots, e))?;
        Ok(Self {
            players: i32::try_from(players)?,
            spots: i32::try_from(spots)?,
            player_bits,
            spot_bits,
        })
    }
    pub fn players(&self) -> i32 {
        self.players
    }
    pub fn spots(&self) -> i32 {
        self.spots
    }
    pub fn player_bits(&self) -> u32 {
        self.player_bits
    }
    pub fn spot_bits(&self) -> u32 {
        self.spot_bits
    }

    /// terminal plus every (out, player, first) combination
    pub fn num_states(&self) -> usize {
        1 + self.players as usize * self.spots as usize * 2
    }
    /// size of the padded address space, always >= num_states
    pub fn max_state_index(&self) -> usize {
        1 + (1 << self.player_bits) * (1 << self.spot_bits) * 2
    }
    pub fn addresses(&self) -> std::ops::Range<Address> {
        0..self.max_state_index()
    }
    /// (address, state) for every address that decodes to a real position,
    /// terminal included, in ascending address order
    pub fn states(&self) -> impl Iterator<Item = (Address, State)> + '_ {
        self.addresses()
            .map(|address| (address, self.decode(address)))
            .filter(|(_, state)| self.is_state_valid(state))
    }

    pub fn is_state_terminal(&self, state: &State) -> bool {
        state.is_terminal()
    }
    pub fn is_state_valid(&self, state: &State) -> bool {
        state.is_terminal()
            || ((0..self.spots).contains(&state.out())
                && (0..self.players).contains(&state.player()))
    }

    pub fn encode(&self, state: &State) -> Address {
        if state.is_terminal() {
            return 0;
        }
        assert!(
            state.out() >= 0 && state.player() >= 0,
            "cannot encode {:?}: negative fields outside the terminal sentinel",
            state
        );
        assert!(
            state.player() < 1 << self.player_bits,
            "cannot encode {:?}: player exceeds {} bits",
            state,
            self.player_bits
        );
        let out = (state.out() as usize) << (self.player_bits + 1);
        let player = (state.player() as usize) << 1;
        let later = !state.first() as usize;
        let address = 1 + out + player + later;
        assert!(
            address < self.max_state_index(),
            "cannot encode {:?}: address {} outside space of {}",
            state,
            address,
            self.max_state_index()
        );
        address
    }

    pub fn decode(&self, address: Address) -> State {
        assert!(
            address < self.max_state_index(),
            "cannot decode address {} outside space of {}",
            address,
            self.max_state_index()
        );
        match address {
            0 => State::terminal(),
            address => {
                let bits = address - 1;
                let first = bits & 1 == 0;
                let bits = bits >> 1;
                let player = bits & !(!0usize << self.player_bits);
                let out = bits >> self.player_bits;
                State::new(out as i32, player as i32, first)
            }
        }
    }
}

impl std::fmt::Display for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} players ({} bits) x {} spots ({} bits): {} states in {} addresses",
            self.players,
            self.player_bits,
            self.spots,
            self.spot_bits,
            self.num_states(),
            self.max_state_index()
        )
    }
}
