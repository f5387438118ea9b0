// Chess Game Library
// Board representation using Mailbox (8x8 array) approach

pub mod board;
pub mod coords;
pub mod game;
pub mod pieces;
pub mod selector;
