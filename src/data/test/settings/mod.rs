use crate::{data::settings::GuildSettingsRepository, error::progression::ProgressionError};
use test_utils::builder::TestBuilder;

mod get_or_create;
mod set_base_xp_rate;
mod set_level_up_channel;
mod set_level_up_message;
mod set_xp_enabled;
