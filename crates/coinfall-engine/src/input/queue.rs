/// Logical input commands the simulation understands. The shell translates
/// whatever raw events it has (key presses, gamepad, script) into these; each
/// discrete input event maps to at most one command.
///
/// Releases are direction-tagged rather than a bare "stop": releasing the
/// left key must not halt a body that is currently moving right. The guard
/// lives in the driver, which knows the current velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    ReleaseLeft,
    ReleaseRight,
    Jump,
}

/// A queue of pending commands. The shell pushes during its event pump; the
/// simulation drains the whole queue at the top of each step, so every
/// command observed during a frame is applied before physics runs.
pub struct InputQueue {
    commands: Vec<Command>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(16),
        }
    }

    /// Push a command (called from the shell's event handling).
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Drain all pending commands in arrival order, clearing the queue.
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// Check if there are pending commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of pending commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(Command::MoveRight);
        q.push(Command::Jump);
        assert_eq!(q.len(), 2);
        let commands = q.drain();
        assert_eq!(commands, vec![Command::MoveRight, Command::Jump]);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_preserves_arrival_order() {
        let mut q = InputQueue::new();
        q.push(Command::MoveLeft);
        q.push(Command::ReleaseLeft);
        q.push(Command::MoveRight);
        assert_eq!(
            q.drain(),
            vec![Command::MoveLeft, Command::ReleaseLeft, Command::MoveRight]
        );
    }
}
