mod electricitymaps;
mod heartbeat;
mod nap;
mod peek;
mod policy;

use clap::{Parser, Subcommand};

pub use self::{nap::nap, peek::peek};
use self::{nap::NapArgs, peek::PeekArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: ask the optimizer for the greenest start and sleep until it arrives.
    #[clap(name = "nap")]
    Nap(Box<NapArgs>),

    /// Dry run: print the window and the recommendation without sleeping.
    #[clap(name = "peek")]
    Peek(Box<PeekArgs>),
}
