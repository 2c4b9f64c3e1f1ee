//! Menu selection parsing.

/// One of the piece manager's menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    /// Play the piece at the front of the queue.
    Play,
    /// Send the front piece to the reserve stack.
    Reserve,
    /// Use the piece on top of the reserve stack.
    UseReserved,
    /// Swap the front piece with the top of the reserve.
    SwapCurrent,
    /// Swap the first three queue pieces with the three reserved ones.
    SwapBlock,
    /// Leave the program.
    Quit,
}

impl MenuChoice {
    /// Parses one input line into a menu choice.
    ///
    /// Surrounding whitespace is ignored; anything that is not one of the
    /// menu numbers yields `None`.
    pub(crate) fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Play),
            "2" => Some(Self::Reserve),
            "3" => Some(Self::UseReserved),
            "4" => Some(Self::SwapCurrent),
            "5" => Some(Self::SwapBlock),
            "0" => Some(Self::Quit),
            _ => None,
        }
    }
}
