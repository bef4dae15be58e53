/// Multiplicative congruential generator with multiplier 16807 and modulus
/// `2^31 - 1`.
///
/// The default flavour multiplies in 32 bits and lets the product wrap
/// before reducing, which is the sequence the logic-function demo has
/// always been initialised from. `Lcg::park_miller` gives the exact
/// "minimal standard" recurrence `state * 16807 mod (2^31 - 1)`.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
    exact: bool,
}

impl Lcg {
    pub const MODULUS: u64 = 2_147_483_647;
    pub const MULTIPLIER: u64 = 16_807;

    /// Wrapping generator seeded with 1.
    pub fn new() -> Lcg {
        Lcg::with_seed(1)
    }

    /// Wrapping generator. Seed 0 (and any multiple of the modulus) is a
    /// fixed point of the recurrence, so it is mapped to 1.
    pub fn with_seed(seed: u64) -> Lcg {
        Lcg {
            state: reduce_seed(seed),
            exact: false,
        }
    }

    /// Exact Park–Miller generator, 64-bit product, no wrap.
    pub fn park_miller(seed: u64) -> Lcg {
        Lcg {
            state: reduce_seed(seed),
            exact: true,
        }
    }

    /// Advances the generator and returns the new state, below the modulus.
    pub fn next_u32(&mut self) -> u32 {
        self.state = if self.exact {
            self.state * Self::MULTIPLIER % Self::MODULUS
        } else {
            ((self.state as u32).wrapping_mul(Self::MULTIPLIER as u32) % Self::MODULUS as u32) as u64
        };
        self.state as u32
    }

    /// Next value as a float in `[0, 1)`.
    pub fn next_float(&mut self) -> f64 {
        self.next_u32() as f64 / Self::MODULUS as f64
    }
}

fn reduce_seed(seed: u64) -> u64 {
    match seed % Lcg::MODULUS {
        0 => 1,
        state => state,
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Lcg::new()
    }
}
