//! Per-member XP gain cooldown gate.
//!
//! Rate limits XP-granting messages per `(user, guild)` key so rapid chat
//! bursts earn XP at most once per window. The state is process-local and
//! volatile: losing it on restart only hands a member one early grant, it
//! never violates the ledger's invariants. The gate is owned by the bot
//! event handler and injected into the progression service, not a global.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

/// Default admission window between XP grants for one member.
pub const DEFAULT_WINDOW_SECS: i64 = 60;

/// Expired entries are swept once per this many admission checks.
const SWEEP_INTERVAL: u64 = 1024;

struct GateState {
    last_admitted: HashMap<(u64, u64), DateTime<Utc>>,
    checks: u64,
}

/// Cooldown gate tracking the last admitted XP gain per `(user, guild)`.
pub struct CooldownGate {
    window: Duration,
    state: Mutex<GateState>,
}

impl CooldownGate {
    /// Creates a gate with the default 60 second window.
    ///
    /// # Returns
    /// - `CooldownGate` - New gate with no recorded admissions
    pub fn new() -> Self {
        Self::with_window(Duration::seconds(DEFAULT_WINDOW_SECS))
    }

    /// Creates a gate with a custom admission window.
    ///
    /// # Arguments
    /// - `window` - Minimum interval between admitted gains for one key
    ///
    /// # Returns
    /// - `CooldownGate` - New gate with no recorded admissions
    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            state: Mutex::new(GateState {
                last_admitted: HashMap::new(),
                checks: 0,
            }),
        }
    }

    /// Decides whether an XP gain for this member may proceed at `now`.
    ///
    /// Admits and records `now` when no prior admission exists for the key or
    /// the prior admission is older than the window. A rejected call does not
    /// mutate the entry: it neither resets nor extends the window.
    ///
    /// Expired entries are reclaimed lazily every `SWEEP_INTERVAL` checks to
    /// bound memory.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    /// - `guild_id` - Discord guild ID
    /// - `now` - Current time, supplied by the caller
    ///
    /// # Returns
    /// - `true` - Gain admitted and recorded
    /// - `false` - Member is still inside the cooldown window
    pub fn try_admit(&self, user_id: u64, guild_id: u64, now: DateTime<Utc>) -> bool {
        // A poisoned mutex only means another thread panicked mid-check; the
        // map itself is always consistent, so recover the guard.
        let mut state = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        state.checks += 1;
        if state.checks % SWEEP_INTERVAL == 0 {
            let window = self.window;
            state.last_admitted.retain(|_, last| now - *last < window);
        }

        match state.last_admitted.get(&(user_id, guild_id)) {
            Some(last) if now - *last < self.window => false,
            _ => {
                state.last_admitted.insert((user_id, guild_id), now);
                true
            }
        }
    }

    /// Number of keys currently tracked. Exposed for tests.
    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        match self.state.lock() {
            Ok(guard) => guard.last_admitted.len(),
            Err(poisoned) => poisoned.into_inner().last_admitted.len(),
        }
    }
}

impl Default for CooldownGate {
    fn default() -> Self {
        Self::new()
    }
}
