use crate::{
    clock::{Clock, SystemClock},
    error::GeneratorError,
    Generator,
};
use typed_builder::TypedBuilder;
use uuid::{Context, Timestamp, Uuid};
use uuidgen_core::Identifier;

/// Set on randomly chosen node identifiers so they can never collide with a
/// real IEEE 802 address (RFC 4122 section 4.5).
const MULTICAST_BIT: u8 = 0x01;

/// Configures a time-based generator.
#[derive(Debug, Clone, Copy, Default, TypedBuilder)]
pub struct TimeBasedSettings {
    /// The 48-bit node identifier written into every identifier.
    ///
    /// A random node with the multicast bit set is used when absent.
    #[builder(default, setter(strip_option))]
    pub node_id: Option<[u8; 6]>,
    /// Initial value of the 14-bit clock sequence. Random when absent.
    #[builder(default, setter(strip_option))]
    pub clock_sequence: Option<u16>,
}

/// Version 1 generator: 60-bit timestamp, clock sequence and node identifier.
///
/// The clock sequence advances on every call, so identifiers taken within the
/// same 100ns tick stay distinct.
pub struct TimeBased<C: Clock> {
    clock: C,
    context: Context,
    node_id: [u8; 6],
}

impl TimeBased<SystemClock> {
    /// Creates a generator backed by the real system clock.
    pub fn new(settings: TimeBasedSettings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> TimeBased<C> {
    /// Creates a generator that reads time from `clock`.
    pub fn with_clock(settings: TimeBasedSettings, clock: C) -> Self {
        let node_id = settings.node_id.unwrap_or_else(random_node_id);
        let context = Context::new(settings.clock_sequence.unwrap_or_else(rand::random));

        Self {
            clock,
            context,
            node_id,
        }
    }

    pub fn node_id(&self) -> [u8; 6] {
        self.node_id
    }

    /// Generates the next time-based identifier.
    pub fn next_id(&self) -> Result<Identifier, GeneratorError> {
        let now = self.clock.now();
        let before_epoch = || GeneratorError::ClockBeforeEpoch { now };

        let seconds = u64::try_from(now.as_second()).map_err(|_| before_epoch())?;
        let nanos = u32::try_from(now.subsec_nanosecond()).map_err(|_| before_epoch())?;

        let ts = Timestamp::from_unix(&self.context, seconds, nanos);
        Ok(Uuid::new_v1(ts, &self.node_id).into())
    }
}

impl<C: Clock> Generator for TimeBased<C> {
    fn generate(&self, _index: usize) -> Result<Identifier, GeneratorError> {
        self.next_id()
    }
}

fn random_node_id() -> [u8; 6] {
    let mut node: [u8; 6] = rand::random();
    node[0] |= MULTICAST_BIT;
    node
}
