/// Events emitted by a simulation step, drained by the shell after each
/// `World::step`. The shell decides what to do with them (play a sound,
/// print the score, stop its loop).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// A coin was picked up; `score` is the total after the pickup.
    CoinCollected { score: u32 },
    /// The player touched a patrol enemy. The simulation is over; further
    /// steps are no-ops.
    GameOver,
}
