//! Discord bot integration for the XP progression system.
//!
//! This module provides the Discord-facing surface of the application: the
//! gateway client, event handlers, and slash commands. The bot listens to
//! guild messages to drive the passive XP path and exposes the progression,
//! leaderboard, and settings operations as slash commands.
//!
//! Event handling is split into one file per event under `handler/`, and the
//! slash commands live under `command/` with one module per command, each
//! providing its registration builder and its runner.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive events about guild creation, updates, and deletion
//! - `GUILD_MESSAGES` - Receive events about messages in guilds

pub mod command;
pub mod handler;
pub mod start;
