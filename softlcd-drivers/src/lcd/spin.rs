//! Busy-wait policy
//!
//! On hardware the busy flag is the only synchronization with the
//! controller, so the default is to spin until it clears, however long that
//! takes. Simulated backends can opt into a bounded wait instead.

/// How long to spin on a busy flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpinPolicy {
    /// Spin until the flag clears; a stuck flag hangs the caller
    #[default]
    Forever,
    /// Give up after this many samples of the flag
    Bounded(u32),
}

impl SpinPolicy {
    /// Policy from a sample limit, where 0 means no limit
    pub fn from_max_reads(max_reads: u32) -> Self {
        match max_reads {
            0 => SpinPolicy::Forever,
            n => SpinPolicy::Bounded(n),
        }
    }

    /// Spin while `busy` returns `true`
    ///
    /// `busy` is sampled at least once unless the policy is
    /// `Bounded(0)`. Returns `Err(())` when the bound runs out.
    pub fn wait_while(self, mut busy: impl FnMut() -> bool) -> Result<(), ()> {
        match self {
            SpinPolicy::Forever => {
                while busy() {
                    core::hint::spin_loop();
                }
                Ok(())
            }
            SpinPolicy::Bounded(max) => {
                for _ in 0..max {
                    if !busy() {
                        return Ok(());
                    }
                    core::hint::spin_loop();
                }
                Err(())
            }
        }
    }
}
