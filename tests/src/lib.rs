#![cfg(test)]

mod booking;
mod resync;
mod snapshot;
mod util;
