use crate::{
    data::progress::ProgressRepository,
    error::progression::ProgressionError,
    model::progress::{AdjustXpParam, GrantXpParam, SetXpParam},
};
use chrono::Utc;
use test_utils::builder::TestBuilder;

mod add_xp;
mod find_by_member;
mod grant_xp;
mod remove_xp;
mod reset_guild_xp;
mod reset_xp;
mod set_xp;
mod top_by_guild;

/// Builds a grant for tests that do not care about the exact timestamp.
fn grant(user_id: u64, guild_id: u64, amount: i64) -> GrantXpParam {
    GrantXpParam {
        user_id,
        guild_id,
        display_name: format!("Member {}", user_id),
        amount,
        now: Utc::now(),
    }
}
